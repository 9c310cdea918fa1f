use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::fiv::{AcousticInput, TubeInput};
use crate::units::*;

/// 기본 설정 파일 경로 (작업 디렉터리 기준)
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI (mm, GPa 표시)
    SI,
    /// 영국식/야드파운드법
    Imperial,
}

impl UnitSystem {
    /// 프리셋에 해당하는 입력 단위 세트
    pub fn default_units(&self) -> DefaultUnits {
        match self {
            UnitSystem::SI => DefaultUnits::default(),
            UnitSystem::Imperial => DefaultUnits {
                length: LengthUnit::Inch,
                modulus: ModulusUnit::Msi,
                density: DensityUnit::PoundPerCubicFoot,
                velocity: VelocityUnit::FootPerSecond,
                viscosity: ViscosityUnit::Centipoise,
                temperature: TemperatureUnit::Fahrenheit,
            },
        }
    }
}

/// 입력 항목별 표시 단위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub length: LengthUnit,
    pub modulus: ModulusUnit,
    pub density: DensityUnit,
    pub velocity: VelocityUnit,
    pub viscosity: ViscosityUnit,
    pub temperature: TemperatureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: LengthUnit::Millimeter,
            modulus: ModulusUnit::GigaPascal,
            density: DensityUnit::KgPerCubicMeter,
            velocity: VelocityUnit::MeterPerSecond,
            viscosity: ViscosityUnit::PascalSecond,
            temperature: TemperatureUnit::Kelvin,
        }
    }
}

/// 충돌 경고 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub enabled: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// 접근 키 설정. 키 값 자체는 저장하지 않고 환경변수 이름만 둔다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    pub key_env: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            key_env: "TUBE_FIV_ACCESS_KEY".into(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en-us ...)
    pub language: String,
    /// 외부 언어팩 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    pub unit_system: UnitSystem,
    pub window_alpha: f32,
    pub log_level: String,
    pub default_units: DefaultUnits,
    /// 마지막으로 사용한 튜브 입력 (SI)
    pub inputs: TubeInput,
    /// 마지막으로 사용한 음향 공명 입력
    pub acoustic: AcousticInput,
    pub alert: AlertConfig,
    pub access: AccessConfig,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            unit_system: UnitSystem::SI,
            window_alpha: 1.0,
            log_level: "info".into(),
            default_units: DefaultUnits::default(),
            inputs: TubeInput::default(),
            acoustic: AcousticInput::default(),
            alert: AlertConfig::default(),
            access: AccessConfig::default(),
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.path = path.to_path_buf();
        tracing::info!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config {
            path: path.to_path_buf(),
            ..Config::default()
        };
        cfg.save()?;
        tracing::info!(path = %path.display(), "기본 설정 생성");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 로드한 경로에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 단위 시스템을 바꾸고 입력 단위 세트를 프리셋으로 되돌린다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = system.default_units();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_uses_defaults() {
        let src = "language = \"ko\"\n[inputs.properties]\nfluid_velocity_m_s = 3.5\n";
        let cfg: Config = toml::from_str(src).unwrap();
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.inputs.properties.fluid_velocity_m_s, 3.5);
        assert_eq!(cfg.inputs.geometry.outer_diameter_m, 0.025);
        assert_eq!(cfg.access.key_env, "TUBE_FIV_ACCESS_KEY");
        assert!(cfg.alert.enabled);
    }

    #[test]
    fn imperial_preset_switches_units() {
        let mut cfg = Config::default();
        cfg.apply_unit_system(UnitSystem::Imperial);
        assert_eq!(cfg.default_units.length, LengthUnit::Inch);
        assert_eq!(cfg.default_units.velocity, VelocityUnit::FootPerSecond);
        cfg.apply_unit_system(UnitSystem::SI);
        assert_eq!(cfg.default_units, DefaultUnits::default());
    }
}
