use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::access::AccessGate;
use crate::alert::{self, CollisionAlert};
use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::fiv::{
    self, AcousticResonance, ExchangerType, FlowIndicators, PitchType, Screening,
};
use crate::i18n::{keys, Translator};
use crate::report::{self, ScreeningReport};
use crate::units::Unit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NaturalFrequency,
    Reynolds,
    VortexShedding,
    TurbulentBuffeting,
    AcousticResonance,
    FluidElasticInstability,
    DamageEffects,
    Report,
    GlobalInputs,
    Settings,
    Exit,
}

/// 메뉴 번호를 선택지로 바꾼다.
pub fn parse_menu(sel: &str) -> Option<MenuChoice> {
    Some(match sel.trim() {
        "1" => MenuChoice::NaturalFrequency,
        "2" => MenuChoice::Reynolds,
        "3" => MenuChoice::VortexShedding,
        "4" => MenuChoice::TurbulentBuffeting,
        "5" => MenuChoice::AcousticResonance,
        "6" => MenuChoice::FluidElasticInstability,
        "7" => MenuChoice::DamageEffects,
        "8" => MenuChoice::Report,
        "9" => MenuChoice::GlobalInputs,
        "10" => MenuChoice::Settings,
        "0" => MenuChoice::Exit,
        _ => return None,
    })
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_OPTIONS));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 게이트가 잠겨 있으면 접근 키를 한 번 묻는다.
pub fn require_access(tr: &Translator, gate: &AccessGate) -> Result<(), AppError> {
    if !gate.is_required() {
        return Ok(());
    }
    let key = read_line(&tr.t(keys::ACCESS_PROMPT))?;
    if gate.verify(&key) {
        Ok(())
    } else {
        println!("{}", tr.t(keys::ACCESS_DENIED));
        Err(AppError::AccessDenied)
    }
}

fn flow_indicators(cfg: &Config) -> Result<FlowIndicators, AppError> {
    Ok(FlowIndicators::compute(&cfg.inputs)?)
}

pub fn handle_natural_frequency(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::NATURAL_FREQUENCY_HEADING));
    let ind = flow_indicators(cfg)?;
    let value = format!("{:.2}", ind.natural_frequency_hz);
    println!("{}", tr.tf(keys::NATURAL_FREQUENCY_RESULT, &[("value", value)]));
    Ok(())
}

pub fn handle_reynolds(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::REYNOLDS_HEADING));
    match flow_indicators(cfg)?.reynolds_number {
        Some(re) => println!(
            "{}",
            tr.tf(keys::REYNOLDS_RESULT, &[("value", format!("{re:.2}"))])
        ),
        None => println!("{}", tr.t(keys::REYNOLDS_UNDEFINED)),
    }
    Ok(())
}

pub fn handle_vortex(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::VORTEX_HEADING));
    let value = format!("{:.2}", flow_indicators(cfg)?.vortex_shedding_hz);
    println!("{}", tr.tf(keys::VORTEX_RESULT, &[("value", value)]));
    Ok(())
}

pub fn handle_buffeting(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BUFFETING_HEADING));
    let value = format!("{:.2}", flow_indicators(cfg)?.buffeting_effect_n);
    println!("{}", tr.tf(keys::BUFFETING_RESULT, &[("value", value)]));
    Ok(())
}

pub fn handle_fei(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FEI_HEADING));
    let value = format!("{:.2}", flow_indicators(cfg)?.instability_factor);
    println!("{}", tr.tf(keys::FEI_RESULT, &[("value", value)]));
    Ok(())
}

/// 음향 공명 입력을 받아 결과를 출력한다. 입력은 설정에 남긴다.
pub fn handle_acoustic(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ACOUSTIC_HEADING));
    let keep = tr.t(keys::PROMPT_KEEP_DEFAULT);
    let t_unit = cfg.default_units.temperature;
    let mut a = cfg.acoustic.clone();

    a.heat_capacity_ratio =
        read_f64_or(tr, &tr.t(keys::PROMPT_GAMMA), &keep, a.heat_capacity_ratio)?;
    a.gas_constant_j_kg_k =
        read_f64_or(tr, &tr.t(keys::PROMPT_GAS_CONSTANT), &keep, a.gas_constant_j_kg_k)?;
    let t_prompt = format!("{} [{}]", tr.t(keys::PROMPT_GAS_TEMPERATURE), t_unit.symbol());
    let t_shown = read_f64_or(tr, &t_prompt, &keep, t_unit.from_si(a.temperature_k))?;
    a.temperature_k = t_unit.to_si(t_shown);

    let sel = read_line(&format!("{} {keep}: ", tr.t(keys::PROMPT_EXCHANGER_TYPE)))?;
    if let Some(kind) = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| ExchangerType::ALL.get(i))
    {
        a.exchanger_type = *kind;
    }
    let make = read_line(&format!("{} [{}] {keep}: ", tr.t(keys::PROMPT_MAKE), a.make))?;
    if !make.trim().is_empty() {
        a.make = make.trim().to_string();
    }
    a.shell_length_m =
        read_f64_or(tr, &tr.t(keys::PROMPT_SHELL_LENGTH), &keep, a.shell_length_m)?;
    let sel = read_line(&format!("{} {keep}: ", tr.t(keys::PROMPT_PITCH_TYPE)))?;
    match sel.trim() {
        "1" => a.pitch = PitchType::Square,
        "2" => a.pitch = PitchType::Triangular,
        _ => {}
    }
    a.tube_pitch_m = read_f64_or(tr, &tr.t(keys::PROMPT_TUBE_PITCH), &keep, a.tube_pitch_m)?;

    let res = AcousticResonance::compute(&a)?;
    cfg.acoustic = a;
    println!(
        "{}",
        tr.tf(
            keys::ACOUSTIC_SPEED_OF_SOUND,
            &[("value", format!("{:.2}", res.speed_of_sound_m_s))]
        )
    );
    println!(
        "{}",
        tr.tf(keys::ACOUSTIC_AXIAL, &[("value", format!("{:.2}", res.axial_hz))])
    );
    println!(
        "{}",
        tr.tf(keys::ACOUSTIC_ANGULAR, &[("value", format!("{:.2}", res.angular_hz))])
    );
    println!("{}", tr.t(keys::ACOUSTIC_NOTE));
    Ok(())
}

/// 과도응답을 계산하고 위험 지표를 출력한다. 원하면 시계열을 파일로 저장한다.
pub fn handle_damage(
    tr: &Translator,
    cfg: &Config,
    bell: &dyn CollisionAlert,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DAMAGE_HEADING));
    let eval = fiv::evaluate(&cfg.inputs)?;
    let d = &eval.dynamics;
    let r = &eval.risk;
    println!(
        "{}",
        tr.tf(
            keys::DAMAGE_DYNAMICS,
            &[
                ("mass", format!("{:.3}", d.mass_kg)),
                ("stiffness", format!("{:.1}", d.stiffness_n_per_m)),
                ("force", format!("{:.2}", d.force_amplitude_n)),
                ("omega", format!("{:.2}", d.natural_angular_frequency_rad_s)),
            ]
        )
    );
    println!(
        "{}",
        tr.tf(
            keys::DAMAGE_RISK,
            &[
                ("max", format!("{:.4}", r.max_displacement_m)),
                ("collision", r.collision_risk.to_string()),
                ("wear", r.wear_events.to_string()),
                ("noise", r.noise_level_db.to_string()),
                ("dp", r.pressure_drop_kpa.to_string()),
                ("scc", r.scc_risk.to_string()),
            ]
        )
    );
    alert::notify_if_collision(bell, r);

    let path = read_line(&tr.t(keys::PROMPT_EXPORT_SERIES))?;
    let path = path.trim();
    if !path.is_empty() {
        report::write_series(&eval.series, Path::new(path))?;
        println!("{}", tr.tf(keys::EXPORT_DONE, &[("path", path.to_string())]));
    }
    Ok(())
}

/// 모든 탭 결과를 모아 출력하고, 원하면 텍스트 파일로 저장한다.
pub fn handle_report(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::REPORT_HEADING));
    let screening: Screening = fiv::screen(&cfg.inputs, &cfg.acoustic)?;
    let report = ScreeningReport::from_screening(&screening);
    println!("{}", report.to_text());
    let path = read_line(&tr.t(keys::PROMPT_SAVE_REPORT))?;
    let path = path.trim();
    if !path.is_empty() {
        report.write_text(Path::new(path))?;
        println!("{}", tr.tf(keys::EXPORT_DONE, &[("path", path.to_string())]));
    }
    Ok(())
}

/// 공통 입력을 설정된 표시 단위로 묻는다. 엔터는 기존 값을 유지한다.
pub fn handle_inputs(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INPUTS_HEADING));
    let keep = tr.t(keys::PROMPT_KEEP_DEFAULT);
    let u = cfg.default_units;
    let mut input = cfg.inputs;
    let g = &mut input.geometry;
    g.outer_diameter_m =
        read_unit_or(tr, keys::PROMPT_OUTER_DIAMETER, &keep, u.length, g.outer_diameter_m)?;
    g.wall_thickness_m =
        read_unit_or(tr, keys::PROMPT_WALL_THICKNESS, &keep, u.length, g.wall_thickness_m)?;
    g.length_m = read_unit_or(tr, keys::PROMPT_TUBE_LENGTH, &keep, u.length, g.length_m)?;

    let p = &mut input.properties;
    p.material_density_kg_m3 = read_unit_or(
        tr,
        keys::PROMPT_MATERIAL_DENSITY,
        &keep,
        u.density,
        p.material_density_kg_m3,
    )?;
    p.elastic_modulus_pa =
        read_unit_or(tr, keys::PROMPT_MODULUS, &keep, u.modulus, p.elastic_modulus_pa)?;
    p.fluid_velocity_m_s =
        read_unit_or(tr, keys::PROMPT_FLUID_VELOCITY, &keep, u.velocity, p.fluid_velocity_m_s)?;
    p.fluid_density_kg_m3 =
        read_unit_or(tr, keys::PROMPT_FLUID_DENSITY, &keep, u.density, p.fluid_density_kg_m3)?;
    p.fluid_viscosity_pa_s = read_unit_or(
        tr,
        keys::PROMPT_FLUID_VISCOSITY,
        &keep,
        u.viscosity,
        p.fluid_viscosity_pa_s,
    )?;

    input.validate()?;
    input.geometry.check_wall().map_err(fiv::FivError::from)?;
    cfg.inputs = input;
    println!("{}", tr.t(keys::INPUTS_SAVED));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.tf(
            keys::SETTINGS_CURRENT,
            &[
                ("units", format!("{:?}", cfg.unit_system)),
                ("lang", cfg.language.clone()),
                ("alert", if cfg.alert.enabled { "ON" } else { "OFF" }.to_string()),
            ]
        )
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_UNIT_OPTIONS));
            let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
            match sel.trim() {
                "1" => cfg.apply_unit_system(UnitSystem::SI),
                "2" => cfg.apply_unit_system(UnitSystem::Imperial),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => {
            let lang = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match lang.trim().to_lowercase().as_str() {
                code @ ("auto" | "ko" | "en" | "ko-kr" | "en-us") => cfg.language = code.to_string(),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "3" => cfg.alert.enabled = !cfg.alert.enabled,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 한 줄을 읽는다. 입력이 닫혀 0 바이트를 읽으면 `InputClosed`.
fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_line_from(&mut io::stdin().lock())
}

fn read_line_from(reader: &mut impl BufRead) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        println!();
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

/// 빈 입력이면 `current`를 그대로 돌려준다.
fn read_f64_or(tr: &Translator, label: &str, keep: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}] {keep}: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// SI 값을 표시 단위로 보여주고 입력을 다시 SI로 돌려준다.
fn read_unit_or<U: Unit>(
    tr: &Translator,
    key: &str,
    keep: &str,
    unit: U,
    current_si: f64,
) -> Result<f64, AppError> {
    let label = format!("{} [{}]", tr.t(key), unit.symbol());
    let shown = unit.from_si(current_si);
    let entered = read_f64_or(tr, &label, keep, shown)?;
    if entered == shown {
        Ok(current_si)
    } else {
        Ok(unit.to_si(entered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(parse_menu("1"), Some(MenuChoice::NaturalFrequency));
        assert_eq!(parse_menu(" 7 \n"), Some(MenuChoice::DamageEffects));
        assert_eq!(parse_menu("10"), Some(MenuChoice::Settings));
        assert_eq!(parse_menu("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu("11"), None);
        assert_eq!(parse_menu("x"), None);
    }

    #[test]
    fn open_gate_needs_no_prompt() {
        let tr = Translator::new("en");
        assert!(require_access(&tr, &AccessGate::with_key(None)).is_ok());
    }

    #[test]
    fn closed_input_differs_from_empty_line() {
        let mut empty_line = io::Cursor::new(b"\n".to_vec());
        assert_eq!(read_line_from(&mut empty_line).unwrap(), "\n");
        assert!(matches!(read_line_from(&mut empty_line), Err(AppError::InputClosed)));
    }
}
