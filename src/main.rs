use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use tube_fiv_toolbox::app::{self, AppError};
use tube_fiv_toolbox::config::{self, Config};
use tube_fiv_toolbox::fiv::{self, AcousticInput, InputSheet, PitchType, TubeInput};
use tube_fiv_toolbox::i18n::{self, Translator};
use tube_fiv_toolbox::logging;
use tube_fiv_toolbox::report::{self, ScreeningReport};

#[derive(Parser)]
#[command(name = "tube_fiv_toolbox_cli")]
#[command(version, about = "Tube flow-induced vibration screening toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Configuration file
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Language code (auto, ko, en)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Log filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Derive tube dynamics and classify damage risk
    Evaluate {
        #[command(flatten)]
        inputs: InputFlags,
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Print or write the full screening report
    Report {
        #[command(flatten)]
        inputs: InputFlags,
        #[command(flatten)]
        acoustic: AcousticFlags,
        /// Write the report to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Export the transient response series (.csv or .png)
    Series {
        #[command(flatten)]
        inputs: InputFlags,
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 튜브 입력 플래그. 값은 모두 SI 단위이고, 주지 않은 항목은 설정값을 쓴다.
#[derive(Args, Clone, Debug, Default)]
struct InputFlags {
    /// Case file (.toml or .json) with any of the eight inputs
    #[arg(long)]
    input: Option<PathBuf>,
    /// Tube outside diameter [m]
    #[arg(long)]
    diameter: Option<f64>,
    /// Tube wall thickness [m]
    #[arg(long)]
    thickness: Option<f64>,
    /// Tube length [m]
    #[arg(long)]
    length: Option<f64>,
    /// Tube material density [kg/m3]
    #[arg(long)]
    material_density: Option<f64>,
    /// Modulus of elasticity [Pa]
    #[arg(long)]
    modulus: Option<f64>,
    /// Fluid velocity [m/s]
    #[arg(long)]
    velocity: Option<f64>,
    /// Fluid density [kg/m3]
    #[arg(long)]
    fluid_density: Option<f64>,
    /// Fluid viscosity [Pa.s]
    #[arg(long)]
    viscosity: Option<f64>,
}

impl InputFlags {
    fn sheet(&self) -> InputSheet {
        InputSheet {
            outer_diameter_m: self.diameter,
            wall_thickness_m: self.thickness,
            length_m: self.length,
            material_density_kg_m3: self.material_density,
            elastic_modulus_pa: self.modulus,
            fluid_velocity_m_s: self.velocity,
            fluid_density_kg_m3: self.fluid_density,
            fluid_viscosity_pa_s: self.viscosity,
        }
    }

    /// 설정값 < 케이스 파일 < 플래그 순으로 덮어쓴다.
    fn resolve(&self, base: &TubeInput) -> Result<TubeInput, AppError> {
        let mut sheet = InputSheet::default();
        if let Some(path) = &self.input {
            sheet = read_case(path)?;
        }
        let sheet = sheet.overlay(self.sheet()).fill_from(base);
        Ok(TubeInput::try_from(sheet)?)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PitchArg {
    Square,
    Triangular,
}

/// 음향 공명 입력 플래그 (SI).
#[derive(Args, Clone, Debug, Default)]
struct AcousticFlags {
    /// Heat capacity ratio
    #[arg(long)]
    gamma: Option<f64>,
    /// Specific gas constant [J/(kg.K)]
    #[arg(long)]
    gas_constant: Option<f64>,
    /// Gas temperature [K]
    #[arg(long)]
    temperature: Option<f64>,
    /// Shell length [m]
    #[arg(long)]
    shell_length: Option<f64>,
    #[arg(long)]
    pitch_type: Option<PitchArg>,
    /// Tube pitch [m]
    #[arg(long)]
    tube_pitch: Option<f64>,
}

impl AcousticFlags {
    fn apply(&self, base: &AcousticInput) -> AcousticInput {
        let mut a = base.clone();
        if let Some(v) = self.gamma {
            a.heat_capacity_ratio = v;
        }
        if let Some(v) = self.gas_constant {
            a.gas_constant_j_kg_k = v;
        }
        if let Some(v) = self.temperature {
            a.temperature_k = v;
        }
        if let Some(v) = self.shell_length {
            a.shell_length_m = v;
        }
        if let Some(p) = self.pitch_type {
            a.pitch = match p {
                PitchArg::Square => PitchType::Square,
                PitchArg::Triangular => PitchType::Triangular,
            };
        }
        if let Some(v) = self.tube_pitch {
            a.tube_pitch_m = v;
        }
        a
    }
}

fn read_case(path: &Path) -> Result<InputSheet, AppError> {
    let content = fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "toml" => Ok(toml::from_str(&content)?),
        "json" => Ok(serde_json::from_str(&content)?),
        _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서브커맨드 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    let cfg = match config::load_or_default_at(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    logging::init_logging(cli.log_level.as_deref().unwrap_or(&cfg.log_level));
    let lang = i18n::resolve_language(cli.lang.as_deref().unwrap_or("auto"), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    if let Err(err) = try_run(cli.command, cfg, &tr) {
        tracing::error!(error = %err, "실행 실패");
        eprintln!("{}: {}", tr.t(i18n::keys::ERROR_PREFIX), app::describe_error(&tr, &err));
        std::process::exit(1);
    }
}

fn try_run(command: Option<Command>, mut cfg: Config, tr: &Translator) -> Result<(), AppError> {
    match command {
        None => app::run(&mut cfg, tr),
        Some(Command::Evaluate { inputs, format }) => {
            let input = inputs.resolve(&cfg.inputs)?;
            let eval = fiv::evaluate(&input)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&eval)?),
                OutputFormat::Text => print_evaluation(&eval),
            }
            Ok(())
        }
        Some(Command::Report {
            inputs,
            acoustic,
            output,
        }) => {
            let input = inputs.resolve(&cfg.inputs)?;
            let acoustic = acoustic.apply(&cfg.acoustic);
            let screening = fiv::screen(&input, &acoustic)?;
            let report = ScreeningReport::from_screening(&screening);
            match output {
                Some(path) => report.write_text(&path)?,
                None => println!("{}", report.to_text()),
            }
            Ok(())
        }
        Some(Command::Series { inputs, output }) => {
            let input = inputs.resolve(&cfg.inputs)?;
            let eval = fiv::evaluate(&input)?;
            report::write_series(&eval.series, &output)?;
            println!("{}", output.display());
            Ok(())
        }
    }
}

fn print_evaluation(eval: &fiv::FivEvaluation) {
    let d = &eval.dynamics;
    let r = &eval.risk;
    println!("Tube Mass: {:.3} kg", d.mass_kg);
    println!("Tube Stiffness: {:.1} N/m", d.stiffness_n_per_m);
    println!("Fluid Force Amplitude: {:.2} N", d.force_amplitude_n);
    println!("Natural Frequency (rad/s): {:.2}", d.natural_angular_frequency_rad_s);
    println!("Max Displacement: {:.4} m", r.max_displacement_m);
    println!("Mid-span Collision Risk: {}", r.collision_risk);
    println!("Wear Contact Events: {}", r.wear_events);
    println!("Noise Level: {} dB", r.noise_level_db);
    println!("Pressure Drop: {} kPa", r.pressure_drop_kpa);
    println!("Stress Corrosion Cracking Risk: {}", r.scc_risk);
}
