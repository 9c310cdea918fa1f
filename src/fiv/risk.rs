use std::fmt;

use serde::Serialize;

use super::response::ResponseSeries;

/// 마모 접촉으로 보는 변위 [m]
pub const WEAR_THRESHOLD_M: f64 = 0.008;
/// 중간 지지부 충돌 판정 변위 [m]
pub const COLLISION_THRESHOLD_M: f64 = 0.01;
/// 소음 상승 판정 변위 [m]
pub const NOISE_THRESHOLD_M: f64 = 0.012;
/// 압력손실 상승 판정 마모 횟수
pub const PRESSURE_DROP_WEAR_LIMIT: usize = 100;
/// 응력부식균열 위험 판정 마모 횟수
pub const SCC_WEAR_LIMIT: usize = 150;

pub const NOISE_HIGH_DB: u32 = 90;
pub const NOISE_LOW_DB: u32 = 60;
pub const PRESSURE_DROP_HIGH_KPA: u32 = 15;
pub const PRESSURE_DROP_LOW_KPA: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollisionRisk {
    Yes,
    No,
}

impl fmt::Display for CollisionRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CollisionRisk::Yes => "YES",
            CollisionRisk::No => "NO",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SccRisk {
    High,
    Low,
}

impl fmt::Display for SccRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SccRisk::High => "High",
            SccRisk::Low => "Low",
        })
    }
}

/// 변위 시계열을 고정 임계값으로 축약한 손상 위험 지표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub max_displacement_m: f64,
    pub wear_events: usize,
    pub collision_risk: CollisionRisk,
    pub noise_level_db: u32,
    pub pressure_drop_kpa: u32,
    pub scc_risk: SccRisk,
}

impl RiskAssessment {
    pub fn classify(series: &ResponseSeries) -> RiskAssessment {
        let max_disp = series.peak_abs_displacement();
        let wear_events = series
            .displacements()
            .filter(|x| x.abs() > WEAR_THRESHOLD_M)
            .count();

        let risk = RiskAssessment {
            max_displacement_m: max_disp,
            wear_events,
            collision_risk: if max_disp > COLLISION_THRESHOLD_M {
                CollisionRisk::Yes
            } else {
                CollisionRisk::No
            },
            noise_level_db: if max_disp > NOISE_THRESHOLD_M {
                NOISE_HIGH_DB
            } else {
                NOISE_LOW_DB
            },
            pressure_drop_kpa: if wear_events > PRESSURE_DROP_WEAR_LIMIT {
                PRESSURE_DROP_HIGH_KPA
            } else {
                PRESSURE_DROP_LOW_KPA
            },
            scc_risk: if wear_events > SCC_WEAR_LIMIT {
                SccRisk::High
            } else {
                SccRisk::Low
            },
        };
        tracing::debug!(
            max_disp = risk.max_displacement_m,
            wear = risk.wear_events,
            collision = %risk.collision_risk,
            "위험도 분류"
        );
        risk
    }

    pub fn has_collision_risk(&self) -> bool {
        self.collision_risk == CollisionRisk::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_report_format() {
        assert_eq!(CollisionRisk::Yes.to_string(), "YES");
        assert_eq!(CollisionRisk::No.to_string(), "NO");
        assert_eq!(SccRisk::High.to_string(), "High");
        assert_eq!(SccRisk::Low.to_string(), "Low");
    }
}
