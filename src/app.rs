use thiserror::Error;

use crate::access::AccessGate;
use crate::alert;
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::fiv::{FivError, GeometryFault, InputFault};
use crate::i18n::{keys, Translator};
use crate::report::ReportError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    #[error("FIV 계산 오류: {0}")]
    Fiv(#[from] FivError),
    #[error("보고서 오류: {0}")]
    Report(#[from] ReportError),
    #[error("케이스 파일 파싱 오류: {0}")]
    CaseToml(#[from] toml::de::Error),
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("지원하지 않는 파일 형식: {0}")]
    UnsupportedFormat(String),
    #[error("접근 키가 올바르지 않습니다")]
    AccessDenied,
    /// 표준 입력이 닫혀 더 읽을 수 없음
    #[error("입력이 닫혔습니다")]
    InputClosed,
}

impl AppError {
    /// 잘못된 입력이나 저장 경로처럼 메뉴로 돌아가 다시 시도할 수 있는 오류.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Fiv(_)
                | AppError::Report(_)
                | AppError::Conversion(_)
                | AppError::UnsupportedFormat(_)
        )
    }
}

/// 오류를 현재 언어로 풀어 쓴다. 로그에는 `Display` 문구가 그대로 남는다.
pub fn describe_error(tr: &Translator, err: &AppError) -> String {
    match err {
        AppError::Io(e) => tr.tf(keys::ERROR_IO, &[("detail", e.to_string())]),
        AppError::Config(ConfigError::Io(e)) => tr.tf(keys::ERROR_IO, &[("detail", e.to_string())]),
        AppError::Config(ConfigError::Serde(e)) => {
            tr.tf(keys::ERROR_CONFIG, &[("detail", e.to_string())])
        }
        AppError::Config(ConfigError::Serialize(e)) => {
            tr.tf(keys::ERROR_CONFIG, &[("detail", e.to_string())])
        }
        AppError::Conversion(ConversionError::UnknownUnit(unit)) => {
            tr.tf(keys::ERROR_CONVERSION, &[("unit", unit.clone())])
        }
        AppError::Fiv(e) => describe_fiv_error(tr, e),
        AppError::Report(e) => describe_report_error(tr, e),
        AppError::CaseToml(e) => tr.tf(keys::ERROR_CASE_FILE, &[("detail", e.to_string())]),
        AppError::Json(e) => tr.tf(keys::ERROR_CASE_FILE, &[("detail", e.to_string())]),
        AppError::UnsupportedFormat(path) => {
            tr.tf(keys::ERROR_UNSUPPORTED_FORMAT, &[("path", path.clone())])
        }
        AppError::AccessDenied => tr.t(keys::ERROR_ACCESS_DENIED),
        AppError::InputClosed => tr.t(keys::ERROR_INPUT_CLOSED),
    }
}

pub fn describe_fiv_error(tr: &Translator, err: &FivError) -> String {
    match err {
        FivError::InvalidGeometry(fault) => {
            let detail = match fault {
                GeometryFault::WallTooThick {
                    thickness_m,
                    outer_diameter_m,
                } => tr.tf(
                    keys::ERROR_WALL_TOO_THICK,
                    &[
                        ("thickness", thickness_m.to_string()),
                        ("diameter", outer_diameter_m.to_string()),
                    ],
                ),
                GeometryFault::NonPositiveMass(v) => {
                    tr.tf(keys::ERROR_NON_POSITIVE_MASS, &[("value", v.to_string())])
                }
                GeometryFault::NonPositiveStiffness(v) => {
                    tr.tf(keys::ERROR_NON_POSITIVE_STIFFNESS, &[("value", v.to_string())])
                }
            };
            tr.tf(keys::ERROR_GEOMETRY, &[("detail", detail)])
        }
        FivError::InvalidInput(fault) => {
            let detail = match fault {
                InputFault::Missing(field) => {
                    tr.tf(keys::ERROR_MISSING, &[("field", field.to_string())])
                }
                InputFault::NonFinite { field, value } => tr.tf(
                    keys::ERROR_NON_FINITE,
                    &[("field", field.to_string()), ("value", value.to_string())],
                ),
                InputFault::OutOfRange { field, value, rule } => tr.tf(
                    keys::ERROR_OUT_OF_RANGE,
                    &[
                        ("field", field.to_string()),
                        ("value", value.to_string()),
                        ("rule", rule.to_string()),
                    ],
                ),
            };
            tr.tf(keys::ERROR_INPUT, &[("detail", detail)])
        }
    }
}

pub fn describe_report_error(tr: &Translator, err: &ReportError) -> String {
    match err {
        ReportError::Io(e) => tr.tf(keys::ERROR_IO, &[("detail", e.to_string())]),
        ReportError::Image(e) => tr.tf(keys::ERROR_REPORT, &[("detail", e.to_string())]),
        ReportError::CanvasTooSmall { width, height } => tr.tf(
            keys::ERROR_CANVAS_TOO_SMALL,
            &[("width", width.to_string()), ("height", height.to_string())],
        ),
        ReportError::UnsupportedExtension(ext) => {
            tr.tf(keys::ERROR_UNSUPPORTED_EXTENSION, &[("ext", ext.clone())])
        }
    }
}

fn save(config: &Config) -> Result<(), AppError> {
    Ok(config.save()?)
}

/// 대화형 CLI의 메인 루프를 실행한다.
///
/// 입력 오류는 안내만 하고 메뉴로 돌아간다. 입력이 닫히면 설정을 저장하고 끝낸다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let gate = AccessGate::from_config(&config.access);
    ui_cli::require_access(tr, &gate)?;
    let bell = alert::terminal_alert(config.alert.enabled);
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => break,
            Err(e) => return Err(e),
        };
        let outcome = match choice {
            MenuChoice::NaturalFrequency => ui_cli::handle_natural_frequency(tr, config),
            MenuChoice::Reynolds => ui_cli::handle_reynolds(tr, config),
            MenuChoice::VortexShedding => ui_cli::handle_vortex(tr, config),
            MenuChoice::TurbulentBuffeting => ui_cli::handle_buffeting(tr, config),
            MenuChoice::AcousticResonance => {
                ui_cli::handle_acoustic(tr, config).and_then(|()| save(config))
            }
            MenuChoice::FluidElasticInstability => ui_cli::handle_fei(tr, config),
            MenuChoice::DamageEffects => ui_cli::handle_damage(tr, config, bell.as_ref()),
            MenuChoice::Report => ui_cli::handle_report(tr, config),
            MenuChoice::GlobalInputs => {
                ui_cli::handle_inputs(tr, config).and_then(|()| save(config))
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config).and_then(|()| save(config))
            }
            MenuChoice::Exit => break,
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::InputClosed) => break,
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, "입력 거부, 메뉴로 복귀");
                eprintln!("{}: {}", tr.t(keys::ERROR_PREFIX), describe_error(tr, &e));
            }
            Err(e) => return Err(e),
        }
    }
    config.save()?;
    println!("{}", tr.t(keys::APP_EXIT));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_input_is_recoverable_but_io_is_not() {
        let fiv: AppError = FivError::from(GeometryFault::NonPositiveMass(0.0)).into();
        assert!(fiv.is_recoverable());
        let report: AppError = ReportError::UnsupportedExtension("xlsx".into()).into();
        assert!(report.is_recoverable());
        let io: AppError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(!io.is_recoverable());
        assert!(!AppError::InputClosed.is_recoverable());
    }

    #[test]
    fn errors_follow_selected_language() {
        let err: AppError = FivError::from(GeometryFault::WallTooThick {
            thickness_m: 0.0125,
            outer_diameter_m: 0.025,
        })
        .into();
        let en = describe_error(&Translator::new("en"), &err);
        assert_eq!(
            en,
            "invalid geometry: thickness 0.0125 m is at least half of the outside diameter 0.025 m"
        );
        let ko = describe_error(&Translator::new("ko"), &err);
        assert!(ko.starts_with("형상 오류: 두께 0.0125 m"));
    }

    #[test]
    fn out_of_range_names_field_and_rule() {
        let err = FivError::from(InputFault::OutOfRange {
            field: "gas_constant_j_kg_k",
            value: 0.0,
            rule: "> 0",
        });
        let msg = describe_fiv_error(&Translator::new("en"), &err);
        assert_eq!(msg, "invalid input: gas_constant_j_kg_k value 0 is out of range (> 0)");
    }
}
