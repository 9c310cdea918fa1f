use thiserror::Error;

/// 형상/물성으로부터 동특성을 만들 수 없는 경우의 세부 원인.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryFault {
    /// 두께가 외경의 절반 이상이라 내경이 0 이하
    #[error("두께 {thickness_m} m 가 외경 {outer_diameter_m} m 의 절반 이상입니다")]
    WallTooThick {
        thickness_m: f64,
        outer_diameter_m: f64,
    },
    #[error("튜브 질량이 0 이하입니다 ({0} kg)")]
    NonPositiveMass(f64),
    #[error("굽힘 강성이 0 이하이거나 유한하지 않습니다 ({0} N/m)")]
    NonPositiveStiffness(f64),
}

/// 입력값 자체가 잘못된 경우의 세부 원인.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputFault {
    #[error("필수 입력 누락: {0}")]
    Missing(&'static str),
    #[error("{field} 값이 유한하지 않습니다 ({value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} 값 {value} 이(가) 허용 범위를 벗어났습니다 ({rule})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        rule: &'static str,
    },
}

impl InputFault {
    /// 유한한 입력이라도 결과가 넘치면 입력 범위를 벗어난 것으로 본다.
    pub fn finite_result(field: &'static str, value: f64) -> Result<f64, InputFault> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(InputFault::OutOfRange {
                field,
                value,
                rule: "result must be finite",
            })
        }
    }
}

/// FIV 계산 오류. 입력이 같으면 결과도 같으므로 재시도하지 않는다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FivError {
    #[error("형상 오류: {0}")]
    InvalidGeometry(#[from] GeometryFault),
    #[error("입력 오류: {0}")]
    InvalidInput(#[from] InputFault),
}

impl FivError {
    pub fn is_geometry(&self) -> bool {
        matches!(self, FivError::InvalidGeometry(_))
    }

    pub fn is_input(&self) -> bool {
        matches!(self, FivError::InvalidInput(_))
    }
}
