//! 충돌 위험 시 표시 계층이 선택적으로 호출하는 경고 기능.
//! 계산 코어는 이 모듈을 호출하지 않는다.

use std::io::Write;

use crate::fiv::RiskAssessment;

/// 중간 지지부 충돌 위험을 사용자에게 알리는 수단.
pub trait CollisionAlert {
    fn collision_detected(&self, max_displacement_m: f64);
}

/// 터미널 벨(BEL)과 경고 문구를 stderr로 출력한다.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl CollisionAlert for TerminalBell {
    fn collision_detected(&self, max_displacement_m: f64) {
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\x07");
        let _ = writeln!(
            err,
            "WARNING: mid-span collision risk (max displacement {max_displacement_m:.4} m)"
        );
        let _ = err.flush();
    }
}

/// 아무것도 하지 않는 경고. 설정에서 경고를 끈 경우에 쓴다.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlert;

impl CollisionAlert for SilentAlert {
    fn collision_detected(&self, _max_displacement_m: f64) {}
}

/// 위험 평가 결과가 충돌 위험이면 경고를 울린다. 울렸으면 true.
pub fn notify_if_collision(alert: &dyn CollisionAlert, risk: &RiskAssessment) -> bool {
    if risk.has_collision_risk() {
        tracing::warn!(max_disp = risk.max_displacement_m, "충돌 위험 경고");
        alert.collision_detected(risk.max_displacement_m);
        true
    } else {
        false
    }
}

/// 설정에 따라 CLI용 경고 구현을 고른다.
pub fn terminal_alert(enabled: bool) -> Box<dyn CollisionAlert> {
    if enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(SilentAlert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiv::{evaluate, TubeInput};
    use std::cell::Cell;

    struct Recorder(Cell<Option<f64>>);

    impl CollisionAlert for Recorder {
        fn collision_detected(&self, max_displacement_m: f64) {
            self.0.set(Some(max_displacement_m));
        }
    }

    #[test]
    fn fires_only_on_collision_risk() {
        let rec = Recorder(Cell::new(None));
        let calm = evaluate(&TubeInput::default()).unwrap();
        assert!(!notify_if_collision(&rec, &calm.risk));
        assert!(rec.0.get().is_none());

        let mut fast = TubeInput::default();
        fast.properties.fluid_velocity_m_s = 5.0;
        let violent = evaluate(&fast).unwrap();
        assert!(notify_if_collision(&rec, &violent.risk));
        assert_eq!(rec.0.get(), Some(violent.risk.max_displacement_m));
    }
}
