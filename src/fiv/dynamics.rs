use std::f64::consts::PI;

use serde::Serialize;

use super::error::{FivError, GeometryFault, InputFault};
use super::inputs::TubeInput;

/// 과도응답 모델을 구동하는 단일 자유도 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedDynamics {
    /// 내경 d = D - 2t [m]
    pub inner_diameter_m: f64,
    /// 단면적 A [m²]
    pub cross_section_area_m2: f64,
    /// 단면 2차 모멘트 I [m⁴]
    pub second_moment_m4: f64,
    /// 튜브 집중 질량 [kg]
    pub mass_kg: f64,
    /// 외팔보 근사 굽힘 강성 k = 3EI/L³ [N/m]
    pub stiffness_n_per_m: f64,
    /// 동압 기반 가진력 진폭 F = ½ρv²D [N]
    pub force_amplitude_n: f64,
    /// 고유 각진동수 ωn = √(k/m) [rad/s]
    pub natural_angular_frequency_rad_s: f64,
}

/// 중공 원형 단면의 단면적 [m²].
pub fn annulus_area(outer_d: f64, inner_d: f64) -> f64 {
    PI * (outer_d.powi(2) - inner_d.powi(2)) / 4.0
}

/// 중공 원형 단면의 단면 2차 모멘트 [m⁴].
pub fn annulus_second_moment(outer_d: f64, inner_d: f64) -> f64 {
    (PI / 64.0) * (outer_d.powi(4) - inner_d.powi(4))
}

impl DerivedDynamics {
    /// 입력으로부터 질량·강성·가진력·고유진동수를 계산한다.
    pub fn derive(input: &TubeInput) -> Result<DerivedDynamics, FivError> {
        input.validate().inspect_err(|e| tracing::warn!("입력 거부: {e}"))?;
        let g = &input.geometry;
        let p = &input.properties;
        g.check_wall()
            .inspect_err(|e| tracing::warn!("형상 거부: {e}"))?;

        let inner_d = g.inner_diameter_m();
        let area = annulus_area(g.outer_diameter_m, inner_d);
        let second_moment = annulus_second_moment(g.outer_diameter_m, inner_d);
        let mass = area * g.length_m * p.material_density_kg_m3;
        let stiffness = 3.0 * p.elastic_modulus_pa * second_moment / g.length_m.powi(3);

        if !(mass.is_finite() && mass > 0.0) {
            return Err(GeometryFault::NonPositiveMass(mass).into());
        }
        if !(stiffness.is_finite() && stiffness > 0.0) {
            return Err(GeometryFault::NonPositiveStiffness(stiffness).into());
        }

        let force = InputFault::finite_result(
            "force_amplitude_n",
            0.5 * p.fluid_density_kg_m3 * p.fluid_velocity_m_s.powi(2) * g.outer_diameter_m,
        )
        .inspect_err(|e| tracing::warn!("입력 거부: {e}"))?;
        let omega_n = InputFault::finite_result(
            "natural_angular_frequency_rad_s",
            (stiffness / mass).sqrt(),
        )?;

        let dynamics = DerivedDynamics {
            inner_diameter_m: inner_d,
            cross_section_area_m2: area,
            second_moment_m4: second_moment,
            mass_kg: mass,
            stiffness_n_per_m: stiffness,
            force_amplitude_n: force,
            natural_angular_frequency_rad_s: omega_n,
        };
        tracing::debug!(
            mass_kg = dynamics.mass_kg,
            stiffness = dynamics.stiffness_n_per_m,
            force_n = dynamics.force_amplitude_n,
            omega_n = dynamics.natural_angular_frequency_rad_s,
            "동특성 계산 완료"
        );
        Ok(dynamics)
    }

    /// 정적 처짐 F/k [m]. 응답 포락선의 초기 진폭이다.
    pub fn static_deflection_m(&self) -> f64 {
        self.force_amplitude_n / self.stiffness_n_per_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tube_dynamics() {
        let d = DerivedDynamics::derive(&TubeInput::default()).unwrap();
        assert!((d.inner_diameter_m - 0.021).abs() < 1e-12);
        assert!((d.cross_section_area_m2 - 1.445_132_6e-4).abs() < 1e-10);
        assert!((d.mass_kg - 1.134_429).abs() < 1e-5);
        assert!((d.stiffness_n_per_m - 6_065.763_5).abs() < 1e-3);
        assert!((d.force_amplitude_n - 50.0).abs() < 1e-12);
        assert!((d.natural_angular_frequency_rad_s - 73.123_01).abs() < 1e-4);
    }

    #[test]
    fn half_diameter_wall_is_geometry_error() {
        let mut input = TubeInput::default();
        input.geometry.wall_thickness_m = input.geometry.outer_diameter_m / 2.0;
        let err = DerivedDynamics::derive(&input).unwrap_err();
        assert!(matches!(
            err,
            FivError::InvalidGeometry(GeometryFault::WallTooThick { .. })
        ));
    }

    #[test]
    fn zero_thickness_has_no_mass() {
        let mut input = TubeInput::default();
        input.geometry.wall_thickness_m = 0.0;
        let err = DerivedDynamics::derive(&input).unwrap_err();
        assert!(matches!(
            err,
            FivError::InvalidGeometry(GeometryFault::NonPositiveMass(_))
        ));
    }

    #[test]
    fn overflowing_force_is_rejected() {
        let mut input = TubeInput::default();
        input.properties.fluid_velocity_m_s = 1e200;
        let err = DerivedDynamics::derive(&input).unwrap_err();
        assert!(matches!(
            err,
            FivError::InvalidInput(InputFault::OutOfRange {
                field: "force_amplitude_n",
                ..
            })
        ));
    }
}
