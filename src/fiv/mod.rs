//! 튜브 유체유발진동(FIV) 계산 모듈 모음.
//! 입력 → 형상/동특성 → 과도응답 시계열 → 위험 지표 순으로 한 방향으로만 흐른다.

pub mod acoustic;
pub mod dynamics;
pub mod error;
pub mod evaluation;
pub mod indicators;
pub mod inputs;
pub mod response;
pub mod risk;

pub use acoustic::{AcousticInput, AcousticResonance, ExchangerType, PitchType};
pub use dynamics::DerivedDynamics;
pub use error::{FivError, GeometryFault, InputFault};
pub use evaluation::{evaluate, screen, FivEvaluation, Screening};
pub use indicators::FlowIndicators;
pub use inputs::{InputSheet, MaterialFluidProperties, TubeGeometry, TubeInput};
pub use response::{ResponseSample, ResponseSeries};
pub use risk::{CollisionRisk, RiskAssessment, SccRisk};
