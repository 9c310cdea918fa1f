use serde::Serialize;

use super::acoustic::{AcousticInput, AcousticResonance};
use super::dynamics::DerivedDynamics;
use super::error::FivError;
use super::indicators::FlowIndicators;
use super::inputs::TubeInput;
use super::response::ResponseSeries;
use super::risk::RiskAssessment;

/// FIV 손상 영향 평가 결과 (동특성 + 시계열 + 위험 지표).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FivEvaluation {
    pub dynamics: DerivedDynamics,
    #[serde(skip)]
    pub series: ResponseSeries,
    pub risk: RiskAssessment,
}

/// 형상 → 동특성 → 시계열 → 위험 지표 순으로 한 번에 계산한다.
pub fn evaluate(input: &TubeInput) -> Result<FivEvaluation, FivError> {
    let dynamics = DerivedDynamics::derive(input)?;
    let series = ResponseSeries::simulate(&dynamics);
    let risk = RiskAssessment::classify(&series);
    Ok(FivEvaluation {
        dynamics,
        series,
        risk,
    })
}

/// 모든 탭의 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screening {
    pub flow: FlowIndicators,
    pub acoustic: AcousticResonance,
    pub damage: FivEvaluation,
}

/// 유동 지표, 음향 공명, 손상 영향을 함께 계산한다.
pub fn screen(input: &TubeInput, acoustic: &AcousticInput) -> Result<Screening, FivError> {
    let damage = evaluate(input)?;
    let flow = FlowIndicators::compute(input)?;
    let acoustic = AcousticResonance::compute(acoustic)?;
    tracing::debug!(
        fn_hz = flow.natural_frequency_hz,
        axial_hz = acoustic.axial_hz,
        "선별 계산 완료"
    );
    Ok(Screening {
        flow,
        acoustic,
        damage,
    })
}
