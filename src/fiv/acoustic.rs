use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{FivError, InputFault};

/// 열교환기 형식. 계산에는 쓰이지 않고 보고서 기록용이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExchangerType {
    #[default]
    ShellAndTube,
    DoublePipe,
    PlateType,
}

impl ExchangerType {
    pub const ALL: [ExchangerType; 3] = [
        ExchangerType::ShellAndTube,
        ExchangerType::DoublePipe,
        ExchangerType::PlateType,
    ];
}

impl fmt::Display for ExchangerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExchangerType::ShellAndTube => "Shell and Tube",
            ExchangerType::DoublePipe => "Double Pipe",
            ExchangerType::PlateType => "Plate Type",
        })
    }
}

/// 튜브 배열 피치 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PitchType {
    #[default]
    Square,
    Triangular,
}

impl PitchType {
    /// 각방향 공명 보정계수 K
    pub fn factor(&self) -> f64 {
        match self {
            PitchType::Square => 1.0,
            PitchType::Triangular => 1.15,
        }
    }
}

impl fmt::Display for PitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PitchType::Square => "Square",
            PitchType::Triangular => "Triangular",
        })
    }
}

/// 음향 공명 계산 입력. 셸측 기체를 이상기체로 본다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcousticInput {
    /// 비열비 γ
    pub heat_capacity_ratio: f64,
    /// 기체상수 R [J/(kg·K)]
    pub gas_constant_j_kg_k: f64,
    /// 온도 [K]
    pub temperature_k: f64,
    pub exchanger_type: ExchangerType,
    /// 제작사
    pub make: String,
    /// 셸 길이 [m]
    pub shell_length_m: f64,
    pub pitch: PitchType,
    /// 튜브 피치 [m]
    pub tube_pitch_m: f64,
}

impl Default for AcousticInput {
    fn default() -> Self {
        Self {
            heat_capacity_ratio: 1.4,
            gas_constant_j_kg_k: 287.0,
            temperature_k: 300.0,
            exchanger_type: ExchangerType::ShellAndTube,
            make: String::new(),
            shell_length_m: 1.0,
            pitch: PitchType::Square,
            tube_pitch_m: 0.025,
        }
    }
}

/// 음향 공명 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcousticResonance {
    pub speed_of_sound_m_s: f64,
    pub axial_hz: f64,
    pub angular_hz: f64,
}

fn require(
    field: &'static str,
    value: f64,
    min: f64,
    inclusive: bool,
    rule: &'static str,
) -> Result<(), FivError> {
    if !value.is_finite() {
        return Err(InputFault::NonFinite { field, value }.into());
    }
    let ok = if inclusive { value >= min } else { value > min };
    if ok {
        Ok(())
    } else {
        Err(InputFault::OutOfRange { field, value, rule }.into())
    }
}

impl AcousticInput {
    pub fn validate(&self) -> Result<(), FivError> {
        require("heat_capacity_ratio", self.heat_capacity_ratio, 1.0, true, ">= 1.0")?;
        require("gas_constant_j_kg_k", self.gas_constant_j_kg_k, 0.0, false, "> 0")?;
        require("temperature_k", self.temperature_k, 0.0, false, "> 0")?;
        require("shell_length_m", self.shell_length_m, 0.1, true, ">= 0.1")?;
        require("tube_pitch_m", self.tube_pitch_m, 0.001, true, ">= 0.001")?;
        Ok(())
    }

    /// c = √(γ·R·T) [m/s]
    pub fn speed_of_sound_m_s(&self) -> f64 {
        (self.heat_capacity_ratio * self.gas_constant_j_kg_k * self.temperature_k).sqrt()
    }
}

impl AcousticResonance {
    /// 축방향 f = c/(2L), 각방향 f = c·K/(2π·p)
    pub fn compute(input: &AcousticInput) -> Result<AcousticResonance, FivError> {
        input.validate()?;
        let c = input.speed_of_sound_m_s();
        Ok(AcousticResonance {
            speed_of_sound_m_s: c,
            axial_hz: c / (2.0 * input.shell_length_m),
            angular_hz: c * input.pitch.factor() / (2.0 * PI * input.tube_pitch_m),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_at_300k() {
        let res = AcousticResonance::compute(&AcousticInput::default()).unwrap();
        assert!((res.speed_of_sound_m_s - 347.188_71).abs() < 1e-4);
        assert!((res.axial_hz - 173.594_35).abs() < 1e-4);
        assert!((res.angular_hz - 2_210.272).abs() < 1e-2);
    }

    #[test]
    fn triangular_pitch_raises_angular_mode() {
        let input = AcousticInput {
            pitch: PitchType::Triangular,
            ..AcousticInput::default()
        };
        let res = AcousticResonance::compute(&input).unwrap();
        assert!((res.angular_hz - 2_541.813).abs() < 1e-2);
    }

    #[test]
    fn gamma_below_one_rejected() {
        let input = AcousticInput {
            heat_capacity_ratio: 0.9,
            ..AcousticInput::default()
        };
        assert!(AcousticResonance::compute(&input).unwrap_err().is_input());
    }
}
