//! 입력 폼에서 쓰는 단위 정의. 계산 코어는 항상 SI 값만 받는다.

pub mod density;
pub mod length;
pub mod modulus;
pub mod temperature;
pub mod velocity;
pub mod viscosity;

pub use density::DensityUnit;
pub use length::LengthUnit;
pub use modulus::ModulusUnit;
pub use temperature::TemperatureUnit;
pub use velocity::VelocityUnit;
pub use viscosity::ViscosityUnit;

/// SI 기준 단위와 상호 변환 가능한 단위.
pub trait Unit: Copy + PartialEq + 'static {
    /// 선택 가능한 모든 단위
    const ALL: &'static [Self];

    fn to_si(self, value: f64) -> f64;
    fn from_si(self, value_si: f64) -> f64;
    /// 화면/CLI에 쓰는 기호 (ex: "mm")
    fn symbol(self) -> &'static str;

    /// 기호 문자열을 단위로 해석한다. 대소문자는 구분하지 않는다.
    fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.symbol().eq_ignore_ascii_case(code))
    }
}

/// 같은 물리량의 두 단위 사이를 변환한다.
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    to.from_si(from.to_si(value))
}
