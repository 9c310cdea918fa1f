//! 단일 식으로 계산되는 FIV 선별 지표 (고유진동수, Re, 와류방출, 난류 버페팅, 유체탄성 불안정).

use std::f64::consts::PI;

use serde::Serialize;

use super::dynamics::{annulus_area, annulus_second_moment};
use super::error::{FivError, InputFault};
use super::inputs::TubeInput;

/// 원형 실린더 Strouhal 수
pub const STROUHAL_NUMBER: f64 = 0.2;
/// 난류 강도 가정값
pub const TURBULENCE_INTENSITY: f64 = 0.1;

/// 단위 길이당 질량 기반 고유진동수 [Hz].
///
/// f = (1/2π) · √(E·I / (m'·L²)), m' = ρ·A
pub fn natural_frequency_hz(input: &TubeInput) -> f64 {
    let g = &input.geometry;
    let p = &input.properties;
    let inner = g.inner_diameter_m();
    let i = annulus_second_moment(g.outer_diameter_m, inner);
    let mass_per_length = p.material_density_kg_m3 * annulus_area(g.outer_diameter_m, inner);
    (1.0 / (2.0 * PI)) * (p.elastic_modulus_pa * i / (mass_per_length * g.length_m.powi(2))).sqrt()
}

/// 레이놀즈수 Re = v·D·ρ/μ. 점도가 0이면 정의되지 않는다.
pub fn reynolds_number(input: &TubeInput) -> Result<f64, FivError> {
    let p = &input.properties;
    if p.fluid_viscosity_pa_s <= 0.0 {
        return Err(InputFault::OutOfRange {
            field: "fluid_viscosity_pa_s",
            value: p.fluid_viscosity_pa_s,
            rule: "> 0 (Reynolds number)",
        }
        .into());
    }
    Ok(p.fluid_velocity_m_s * input.geometry.outer_diameter_m * p.fluid_density_kg_m3
        / p.fluid_viscosity_pa_s)
}

/// 와류방출 주파수 f = St·v/D [Hz]
pub fn vortex_shedding_frequency_hz(input: &TubeInput) -> f64 {
    STROUHAL_NUMBER * input.properties.fluid_velocity_m_s / input.geometry.outer_diameter_m
}

/// 난류 버페팅 효과 v·D·Ti. 원래 도구와 같이 N 으로 표기한다.
pub fn turbulent_buffeting_effect(input: &TubeInput) -> f64 {
    input.properties.fluid_velocity_m_s * input.geometry.outer_diameter_m * TURBULENCE_INTENSITY
}

/// 유체탄성 불안정 계수 v·D
pub fn fluid_elastic_instability_factor(input: &TubeInput) -> f64 {
    input.properties.fluid_velocity_m_s * input.geometry.outer_diameter_m
}

/// 형상·유동 탭 지표 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowIndicators {
    pub natural_frequency_hz: f64,
    /// 점도가 0이면 `None`
    pub reynolds_number: Option<f64>,
    pub vortex_shedding_hz: f64,
    pub buffeting_effect_n: f64,
    pub instability_factor: f64,
}

impl FlowIndicators {
    pub fn compute(input: &TubeInput) -> Result<FlowIndicators, FivError> {
        input.validate()?;
        input.geometry.check_wall()?;
        let reynolds = match reynolds_number(input) {
            Ok(re) => Some(InputFault::finite_result("reynolds_number", re)?),
            Err(_) => None,
        };
        Ok(FlowIndicators {
            natural_frequency_hz: InputFault::finite_result(
                "natural_frequency_hz",
                natural_frequency_hz(input),
            )?,
            reynolds_number: reynolds,
            vortex_shedding_hz: InputFault::finite_result(
                "vortex_shedding_hz",
                vortex_shedding_frequency_hz(input),
            )?,
            buffeting_effect_n: InputFault::finite_result(
                "buffeting_effect_n",
                turbulent_buffeting_effect(input),
            )?,
            instability_factor: InputFault::finite_result(
                "instability_factor",
                fluid_elastic_instability_factor(input),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_indicators() {
        let ind = FlowIndicators::compute(&TubeInput::default()).unwrap();
        assert!((ind.natural_frequency_hz - 6.719_138).abs() < 1e-5);
        assert!((ind.reynolds_number.unwrap() - 50_000.0).abs() < 1e-6);
        assert!((ind.vortex_shedding_hz - 16.0).abs() < 1e-9);
        assert!((ind.buffeting_effect_n - 0.005).abs() < 1e-12);
        assert!((ind.instability_factor - 0.05).abs() < 1e-12);
    }

    #[test]
    fn zero_viscosity_leaves_reynolds_undefined() {
        let mut input = TubeInput::default();
        input.properties.fluid_viscosity_pa_s = 0.0;
        assert!(reynolds_number(&input).is_err());
        let ind = FlowIndicators::compute(&input).unwrap();
        assert!(ind.reynolds_number.is_none());
    }

    #[test]
    fn overflowing_reynolds_is_rejected() {
        let mut input = TubeInput::default();
        input.properties.fluid_density_kg_m3 = 1e305;
        input.properties.fluid_velocity_m_s = 1e10;
        let err = FlowIndicators::compute(&input).unwrap_err();
        assert!(err.is_input());
    }
}
