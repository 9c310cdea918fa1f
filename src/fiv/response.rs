use serde::Serialize;

use super::dynamics::DerivedDynamics;

/// 시뮬레이션 구간 길이 [s]
pub const DURATION_S: f64 = 5.0;
/// 샘플 수 (양 끝점 포함)
pub const SAMPLE_COUNT: usize = 1000;
/// 감쇠비 ζ
pub const DAMPING_RATIO: f64 = 0.02;

/// 시계열의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseSample {
    pub time_s: f64,
    pub displacement_m: f64,
    /// 진단용 유체력 F·sin(ωn·t) [N]. 변위 계산에는 쓰이지 않는다.
    pub fluid_force_n: f64,
}

/// 감쇠 정현 가진 변위 응답 시계열.
///
/// x(t) = (F/k) · e^(−ζ·ωn·t) · sin(ωn·t)
///
/// 수치적분이 아닌 닫힌 형태 근사이며, 가진 주파수를 고유진동수와 같다고 본다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSeries {
    samples: Vec<ResponseSample>,
}

/// [0, DURATION_S] 구간을 SAMPLE_COUNT 개로 등분한 시간축.
pub fn time_grid() -> impl Iterator<Item = f64> {
    let step = DURATION_S / (SAMPLE_COUNT - 1) as f64;
    (0..SAMPLE_COUNT).map(move |i| {
        if i == SAMPLE_COUNT - 1 {
            DURATION_S
        } else {
            i as f64 * step
        }
    })
}

impl ResponseSeries {
    pub fn simulate(dynamics: &DerivedDynamics) -> ResponseSeries {
        let omega = dynamics.natural_angular_frequency_rad_s;
        let amplitude = dynamics.static_deflection_m();
        let samples = time_grid()
            .map(|t| {
                let phase = (omega * t).sin();
                ResponseSample {
                    time_s: t,
                    displacement_m: amplitude * (-DAMPING_RATIO * omega * t).exp() * phase,
                    fluid_force_n: dynamics.force_amplitude_n * phase,
                }
            })
            .collect();
        ResponseSeries { samples }
    }

    pub fn samples(&self) -> &[ResponseSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time_s)
    }

    pub fn displacements(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.displacement_m)
    }

    /// 최대 절대 변위 [m]
    pub fn peak_abs_displacement(&self) -> f64 {
        self.displacements().map(f64::abs).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiv::TubeInput;

    #[test]
    fn grid_spans_closed_interval() {
        let t: Vec<f64> = time_grid().collect();
        assert_eq!(t.len(), SAMPLE_COUNT);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[SAMPLE_COUNT - 1], DURATION_S);
        assert!((t[1] - 5.0 / 999.0).abs() < 1e-15);
    }

    #[test]
    fn displacement_starts_at_zero() {
        let d = DerivedDynamics::derive(&TubeInput::default()).unwrap();
        let s = ResponseSeries::simulate(&d);
        assert_eq!(s.samples()[0].displacement_m, 0.0);
        assert_eq!(s.samples()[0].fluid_force_n, 0.0);
    }

    #[test]
    fn envelope_bounded_by_static_deflection() {
        let d = DerivedDynamics::derive(&TubeInput::default()).unwrap();
        let s = ResponseSeries::simulate(&d);
        let bound = d.static_deflection_m();
        assert!(s.displacements().all(|x| x.abs() <= bound));
        assert!(s.peak_abs_displacement() > 0.9 * bound);
    }
}
