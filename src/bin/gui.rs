#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::cell::Cell;
use std::{env, fs, path::Path, path::PathBuf};

use eframe::{egui, App, Frame};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints};
use image::GenericImageView;
use rfd::FileDialog;
use tube_fiv_toolbox::{
    access::AccessGate,
    alert::{self, CollisionAlert},
    app, config, conversion,
    fiv::{
        self, risk, AcousticInput, AcousticResonance, ExchangerType, FivError, FivEvaluation,
        FlowIndicators, PitchType, Screening, TubeInput,
    },
    i18n, logging,
    quantity::QuantityKind,
    report::{self, ScreeningReport},
    units::Unit,
};

fn main() -> Result<(), eframe::Error> {
    // --lang xx / --lang=xx, --config path / --config=path
    let mut cli_lang: Option<String> = None;
    let mut cli_config: Option<PathBuf> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if let Some(val) = a.strip_prefix("--config=") {
            cli_config = Some(PathBuf::from(val));
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        } else if a == "--config" && i + 1 < args.len() {
            cli_config = Some(PathBuf::from(&args[i + 1]));
            i += 1;
        }
        i += 1;
    }

    let config_path = cli_config.unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));
    let mut app_cfg = config::load_or_default_at(&config_path).unwrap_or_default();
    logging::init_logging(&app_cfg.log_level);
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1100.0, 760.0))
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Tube FIV Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["assets/icon.png", "icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다.
/// 1) assets/fonts 2) Windows 시스템 폰트 3) 리눅스 Noto CJK / 나눔고딕
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/malgun.ttf"),
        PathBuf::from("assets/fonts/NanumGothic.ttf"),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for f in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(f));
        }
    }
    for p in [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    ] {
        candidates.push(PathBuf::from(p));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; falling back to the default font.".into())
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// `라벨: 값` 한 줄. 보고서와 같은 문구를 쓴다.
fn result_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        ui.strong(value);
    });
}

fn unit_combo(ui: &mut egui::Ui, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(ui.next_auto_id())
        .width(80.0)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for code in options {
                ui.selectable_value(value, code.to_string(), *code);
            }
        });
}

/// SI 값을 선택 단위로 보여주고, 수정되면 다시 SI로 저장한다.
fn quantity_field(
    ui: &mut egui::Ui,
    value_si: &mut f64,
    kind: QuantityKind,
    unit: &str,
    speed: f64,
) -> bool {
    let si = kind.si_symbol();
    let mut shown = conversion::convert(kind, *value_si, si, unit).unwrap_or(*value_si);
    let changed = ui
        .add(egui::DragValue::new(&mut shown).speed(speed).max_decimals(6))
        .changed();
    if changed {
        if let Ok(v) = conversion::convert(kind, shown, unit, si) {
            *value_si = v;
        }
    }
    changed
}

/// 기체상수 입력 범위 [J/(kg·K)]
const GAS_CONSTANT_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10_000.0;
/// 기체 온도 입력 범위 [K]
const TEMPERATURE_RANGE_K: std::ops::RangeInclusive<f64> = 1.0..=3_000.0;

/// 계산 결과를 넘기고, 오류면 현재 언어로 빨간 글씨를 보여준다.
fn show_result<T>(
    ui: &mut egui::Ui,
    tr: &i18n::Translator,
    result: &Result<T, FivError>,
    body: impl FnOnce(&mut egui::Ui, &T),
) {
    match result {
        Ok(value) => body(ui, value),
        Err(e) => {
            ui.colored_label(egui::Color32::RED, app::describe_fiv_error(tr, e));
        }
    }
}

/// 충돌 위험 시 화면 상단 배너를 띄우는 경고.
#[derive(Debug, Default)]
struct BannerAlert {
    max_displacement_m: Cell<Option<f64>>,
}

impl BannerAlert {
    fn clear(&self) {
        self.max_displacement_m.set(None);
    }

    fn active(&self) -> Option<f64> {
        self.max_displacement_m.get()
    }
}

impl CollisionAlert for BannerAlert {
    fn collision_detected(&self, max_displacement_m: f64) {
        self.max_displacement_m.set(Some(max_displacement_m));
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tab {
    NaturalFrequency,
    Reynolds,
    VortexShedding,
    TurbulentBuffeting,
    AcousticResonance,
    FluidElasticInstability,
    DamageEffects,
    Report,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

/// 입력 항목별 화면 단위 (문자열 기호).
#[derive(Clone, Debug, PartialEq)]
struct UnitChoice {
    length: String,
    modulus: String,
    density: String,
    velocity: String,
    viscosity: String,
    temperature: String,
}

impl From<&config::DefaultUnits> for UnitChoice {
    fn from(u: &config::DefaultUnits) -> Self {
        Self {
            length: u.length.symbol().into(),
            modulus: u.modulus.symbol().into(),
            density: u.density.symbol().into(),
            velocity: u.velocity.symbol().into(),
            viscosity: u.viscosity.symbol().into(),
            temperature: u.temperature.symbol().into(),
        }
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    tab: Tab,
    theme: ThemeChoice,
    window_alpha: f32,
    units: UnitChoice,
    show_formula_modal: bool,
    show_settings_modal: bool,
    settings_status: Option<String>,
    // 접근 게이트
    gate: AccessGate,
    unlocked: bool,
    key_input: String,
    access_error: bool,
    // 계산 캐시 (입력이 바뀔 때만 다시 계산). 음향 입력 오류는 음향 탭과 보고서만 막는다.
    computed_for: Option<(TubeInput, AcousticInput)>,
    damage: Result<FivEvaluation, FivError>,
    flow: Result<FlowIndicators, FivError>,
    acoustic: Result<AcousticResonance, FivError>,
    banner: BannerAlert,
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let gate = AccessGate::from_config(&config.access);
        Self::with_gate(config, gate)
    }

    fn with_gate(config: config::Config, gate: AccessGate) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!(
            lang = %lang_code,
            pack = tr.lookup("gui.nav.app_title").is_some(),
            "GUI 언어 결정"
        );
        let mut s = Self {
            lang_input: config.language.clone(),
            tr,
            tab: Tab::NaturalFrequency,
            theme: ThemeChoice::System,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            units: UnitChoice::from(&config.default_units),
            show_formula_modal: false,
            show_settings_modal: false,
            settings_status: None,
            unlocked: !gate.is_required(),
            gate,
            key_input: String::new(),
            access_error: false,
            computed_for: None,
            damage: fiv::evaluate(&config.inputs),
            flow: FlowIndicators::compute(&config.inputs),
            acoustic: AcousticResonance::compute(&config.acoustic),
            banner: BannerAlert::default(),
            export_status: None,
            config,
        };
        s.refresh();
        s
    }

    /// 단위 시스템 프리셋을 입력 폼 단위에 적용한다.
    fn apply_unit_preset(&mut self, system: config::UnitSystem) {
        self.config.apply_unit_system(system);
        self.units = UnitChoice::from(&self.config.default_units);
    }

    fn try_unlock(&mut self) {
        if self.gate.verify(&self.key_input) {
            self.unlocked = true;
            self.access_error = false;
        } else {
            self.access_error = true;
        }
        self.key_input.clear();
    }

    /// 입력이 바뀌었으면 모든 지표를 다시 계산하고 충돌 경고를 갱신한다.
    fn refresh(&mut self) {
        let key = (self.config.inputs, self.config.acoustic.clone());
        if self.computed_for.as_ref() == Some(&key) {
            return;
        }
        self.damage = fiv::evaluate(&key.0);
        self.flow = FlowIndicators::compute(&key.0);
        self.acoustic = AcousticResonance::compute(&key.1);
        self.banner.clear();
        if let Ok(eval) = &self.damage {
            if self.config.alert.enabled {
                alert::notify_if_collision(&self.banner, &eval.risk);
            }
        }
        self.computed_for = Some(key);
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::NaturalFrequency, txt("gui.tab.natural_frequency", "Natural Frequency")),
            (Tab::Reynolds, txt("gui.tab.reynolds", "Reynolds Number")),
            (Tab::VortexShedding, txt("gui.tab.vortex", "Vortex Shedding")),
            (Tab::TurbulentBuffeting, txt("gui.tab.buffeting", "Turbulent Buffeting")),
            (Tab::AcousticResonance, txt("gui.tab.acoustic", "Acoustic Resonance")),
            (Tab::FluidElasticInstability, txt("gui.tab.fei", "Fluid Elastic Instability")),
            (Tab::DamageEffects, txt("gui.tab.damage", "FIV Damage Effects")),
            (Tab::Report, txt("gui.tab.report", "Report")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 30.0));
            if ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch tab"))
                .clicked()
            {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
        ui.separator();
        self.ui_global_inputs(ui);
    }

    /// 공통 입력 8개와 단위 선택.
    fn ui_global_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.inputs.heading", "Global Input Parameters"));
        let u = &mut self.units;
        let g = &mut self.config.inputs.geometry;
        let p = &mut self.config.inputs.properties;
        let length_opts = conversion::unit_symbols(QuantityKind::Length);
        egui::Grid::new("inputs_grid")
            .num_columns(3)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(txt("gui.inputs.length_unit", "Length unit"));
                unit_combo(ui, &mut u.length, &length_opts);
                ui.end_row();

                ui.label(txt("gui.inputs.outer_diameter", "Outside diameter"));
                quantity_field(ui, &mut g.outer_diameter_m, QuantityKind::Length, &u.length, 0.1);
                ui.label(&u.length);
                ui.end_row();

                ui.label(txt("gui.inputs.wall_thickness", "Thickness"));
                quantity_field(ui, &mut g.wall_thickness_m, QuantityKind::Length, &u.length, 0.01);
                ui.label(&u.length);
                ui.end_row();

                ui.label(txt("gui.inputs.tube_length", "Tube length"));
                quantity_field(ui, &mut g.length_m, QuantityKind::Length, &u.length, 1.0);
                ui.label(&u.length);
                ui.end_row();

                ui.label(txt("gui.inputs.material_density", "Material density"));
                quantity_field(
                    ui,
                    &mut p.material_density_kg_m3,
                    QuantityKind::Density,
                    &u.density,
                    10.0,
                );
                unit_combo(ui, &mut u.density, &conversion::unit_symbols(QuantityKind::Density));
                ui.end_row();

                ui.label(txt("gui.inputs.modulus", "Modulus of elasticity"));
                quantity_field(ui, &mut p.elastic_modulus_pa, QuantityKind::Modulus, &u.modulus, 1.0);
                unit_combo(ui, &mut u.modulus, &conversion::unit_symbols(QuantityKind::Modulus));
                ui.end_row();

                ui.label(txt("gui.inputs.fluid_velocity", "Fluid velocity"));
                quantity_field(ui, &mut p.fluid_velocity_m_s, QuantityKind::Velocity, &u.velocity, 0.05);
                unit_combo(ui, &mut u.velocity, &conversion::unit_symbols(QuantityKind::Velocity));
                ui.end_row();

                ui.label(txt("gui.inputs.fluid_density", "Fluid density"));
                quantity_field(ui, &mut p.fluid_density_kg_m3, QuantityKind::Density, &u.density, 1.0);
                ui.label(&u.density);
                ui.end_row();

                ui.label(txt("gui.inputs.fluid_viscosity", "Fluid viscosity"));
                quantity_field(
                    ui,
                    &mut p.fluid_viscosity_pa_s,
                    QuantityKind::Viscosity,
                    &u.viscosity,
                    0.0001,
                );
                unit_combo(ui, &mut u.viscosity, &conversion::unit_symbols(QuantityKind::Viscosity));
                ui.end_row();
            });
        if ui.button(txt("gui.inputs.reset", "Reset to defaults")).clicked() {
            self.config.inputs = TubeInput::default();
        }
    }

    /// 세 결과가 모두 정상일 때만 보고서용 묶음을 만든다.
    fn screening(&self) -> Result<Screening, &FivError> {
        let damage = self.damage.as_ref()?;
        let flow = self.flow.as_ref()?;
        let acoustic = self.acoustic.as_ref()?;
        Ok(Screening {
            flow: *flow,
            acoustic: *acoustic,
            damage: damage.clone(),
        })
    }

    fn ui_natural_frequency(&mut self, ui: &mut egui::Ui) {
        heading_with_tip(
            ui,
            &self.txt("gui.tab.natural_frequency", "Natural Frequency"),
            &self.txt("gui.natural_frequency.tip", "Cantilever beam, mass per unit length ρ·A."),
        );
        let label = self.txt("gui.result.natural_frequency", "Natural Frequency");
        show_result(ui, &self.tr, &self.flow, |ui, f| {
            result_row(ui, &label, format!("{:.2} Hz", f.natural_frequency_hz));
        });
    }

    fn ui_reynolds(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.tab.reynolds", "Reynolds Number"));
        let label = self.txt("gui.result.reynolds", "Reynolds Number");
        let undefined = self.txt("gui.reynolds.undefined", "Viscosity is zero; Re is undefined.");
        show_result(ui, &self.tr, &self.flow, |ui, f| match f.reynolds_number {
            Some(re) => result_row(ui, &label, format!("{re:.2}")),
            None => {
                ui.label(&undefined);
            }
        });
    }

    fn ui_vortex(&mut self, ui: &mut egui::Ui) {
        heading_with_tip(
            ui,
            &self.txt("gui.tab.vortex", "Vortex Shedding"),
            &self.txt("gui.vortex.tip", "Strouhal number 0.2"),
        );
        let label = self.txt("gui.result.vortex", "Vortex Shedding Frequency");
        show_result(ui, &self.tr, &self.flow, |ui, f| {
            result_row(ui, &label, format!("{:.2} Hz", f.vortex_shedding_hz));
        });
    }

    fn ui_buffeting(&mut self, ui: &mut egui::Ui) {
        heading_with_tip(
            ui,
            &self.txt("gui.tab.buffeting", "Turbulent Buffeting"),
            &self.txt("gui.buffeting.tip", "Turbulence intensity 0.1"),
        );
        let label = self.txt("gui.result.buffeting", "Turbulent Buffeting Effect");
        show_result(ui, &self.tr, &self.flow, |ui, f| {
            result_row(ui, &label, format!("{:.2} N", f.buffeting_effect_n));
        });
    }

    fn ui_fei(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.tab.fei", "Fluid Elastic Instability"));
        let label = self.txt("gui.result.fei", "Fluid Elastic Instability Factor");
        show_result(ui, &self.tr, &self.flow, |ui, f| {
            result_row(ui, &label, format!("{:.2}", f.instability_factor));
        });
    }

    fn ui_acoustic(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.acoustic.heading", "Acoustic Resonance in Shell and Tube Heat Exchanger"),
            &txt("gui.acoustic.tip", "Ideal-gas speed of sound c = √(γ·R·T)"),
        );
        let t_opts = conversion::unit_symbols(QuantityKind::Temperature);
        let a = &mut self.config.acoustic;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("acoustic_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.acoustic.gamma", "Heat capacity ratio γ"));
                    ui.add(
                        egui::DragValue::new(&mut a.heat_capacity_ratio)
                            .speed(0.01)
                            .clamp_range(1.0..=3.0),
                    );
                    ui.end_row();

                    ui.label(txt("gui.acoustic.gas_constant", "Specific gas constant R"));
                    ui.add(
                        egui::DragValue::new(&mut a.gas_constant_j_kg_k)
                            .speed(1.0)
                            .clamp_range(GAS_CONSTANT_RANGE),
                    );
                    ui.label("J/(kg·K)");
                    ui.end_row();

                    ui.label(txt("gui.acoustic.temperature", "Temperature"));
                    if quantity_field(
                        ui,
                        &mut a.temperature_k,
                        QuantityKind::Temperature,
                        &self.units.temperature,
                        1.0,
                    ) {
                        a.temperature_k = a
                            .temperature_k
                            .clamp(*TEMPERATURE_RANGE_K.start(), *TEMPERATURE_RANGE_K.end());
                    }
                    unit_combo(ui, &mut self.units.temperature, &t_opts);
                    ui.end_row();

                    ui.label(txt("gui.acoustic.exchanger_type", "Heat exchanger type"));
                    egui::ComboBox::from_id_source("exchanger_type")
                        .selected_text(a.exchanger_type.to_string())
                        .show_ui(ui, |ui| {
                            for kind in ExchangerType::ALL {
                                ui.selectable_value(&mut a.exchanger_type, kind, kind.to_string());
                            }
                        });
                    ui.end_row();

                    ui.label(txt("gui.acoustic.make", "Heat exchanger make"));
                    ui.text_edit_singleline(&mut a.make);
                    ui.end_row();

                    ui.label(txt("gui.acoustic.shell_length", "Shell length"));
                    ui.add(
                        egui::DragValue::new(&mut a.shell_length_m)
                            .speed(0.01)
                            .clamp_range(0.1..=100.0),
                    );
                    ui.label("m");
                    ui.end_row();

                    ui.label(txt("gui.acoustic.pitch_type", "Tube pitch type"));
                    ui.horizontal(|ui| {
                        for pitch in [PitchType::Square, PitchType::Triangular] {
                            ui.selectable_value(&mut a.pitch, pitch, pitch.to_string());
                        }
                    });
                    ui.end_row();

                    ui.label(txt("gui.acoustic.tube_pitch", "Tube pitch"));
                    ui.add(egui::Slider::new(&mut a.tube_pitch_m, 0.001..=0.1).suffix(" m"));
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        let labels = [
            txt("gui.acoustic.speed_of_sound", "Calculated speed of sound"),
            txt("gui.result.axial", "Axial Resonance"),
            txt("gui.result.angular", "Angular Resonance"),
        ];
        show_result(ui, &tr, &self.acoustic, |ui, res| {
            result_row(ui, &labels[0], format!("{:.2} m/s", res.speed_of_sound_m_s));
            result_row(ui, &labels[1], format!("{:.2} Hz", res.axial_hz));
            result_row(ui, &labels[2], format!("{:.2} Hz", res.angular_hz));
        });
        ui.label(
            egui::RichText::new(txt(
                "gui.acoustic.note",
                "Axial resonance depends on shell length; angular resonance on pitch type and layout.",
            ))
            .small(),
        );
    }

    fn ui_damage(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.tab.damage", "FIV Damage Effects"),
            &txt(
                "gui.damage.tip",
                "Damped response x(t) = (F/k)·e^(-0.02·ωn·t)·sin(ωn·t) over 5 s",
            ),
        );
        let eval = match &self.damage {
            Ok(eval) => eval,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, app::describe_fiv_error(&tr, e));
                return;
            }
        };
        let d = &eval.dynamics;
        let r = &eval.risk;

        egui::Grid::new("damage_grid")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in [
                    (txt("gui.result.mass", "Tube Mass"), format!("{:.3} kg", d.mass_kg)),
                    (
                        txt("gui.result.stiffness", "Tube Stiffness"),
                        format!("{:.1} N/m", d.stiffness_n_per_m),
                    ),
                    (
                        txt("gui.result.force", "Fluid Force Amplitude"),
                        format!("{:.2} N", d.force_amplitude_n),
                    ),
                    (
                        txt("gui.result.omega", "Natural Frequency (rad/s)"),
                        format!("{:.2}", d.natural_angular_frequency_rad_s),
                    ),
                ] {
                    ui.label(label);
                    ui.strong(value);
                    ui.end_row();
                }
            });

        let wear = risk::WEAR_THRESHOLD_M;
        let collision = risk::COLLISION_THRESHOLD_M;
        Plot::new("fiv_response")
            .height(300.0)
            .legend(Legend::default())
            .x_axis_label("Time [s]")
            .y_axis_label("Displacement [m]")
            .show(ui, |plot_ui| {
                let points: PlotPoints = eval
                    .series
                    .samples()
                    .iter()
                    .map(|s| [s.time_s, s.displacement_m])
                    .collect();
                plot_ui.line(Line::new(points).name("x(t)"));
                for y in [wear, -wear] {
                    plot_ui.hline(
                        HLine::new(y)
                            .name("wear")
                            .color(egui::Color32::from_rgb(230, 160, 40))
                            .style(LineStyle::Dashed { length: 5.0 }),
                    );
                }
                for y in [collision, -collision] {
                    plot_ui.hline(
                        HLine::new(y)
                            .name("collision")
                            .color(egui::Color32::from_rgb(210, 50, 50))
                            .style(LineStyle::Dashed { length: 5.0 }),
                    );
                }
            });

        egui::Grid::new("risk_grid")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in [
                    (
                        txt("gui.result.max_displacement", "Max Displacement"),
                        format!("{:.4} m", r.max_displacement_m),
                    ),
                    (
                        txt("gui.result.collision", "Mid-span Collision Risk"),
                        r.collision_risk.to_string(),
                    ),
                    (txt("gui.result.wear", "Wear Contact Events"), r.wear_events.to_string()),
                    (txt("gui.result.noise", "Noise Level"), format!("{} dB", r.noise_level_db)),
                    (
                        txt("gui.result.pressure_drop", "Pressure Drop"),
                        format!("{} kPa", r.pressure_drop_kpa),
                    ),
                    (txt("gui.result.scc", "Stress Corrosion Cracking Risk"), r.scc_risk.to_string()),
                ] {
                    ui.label(label);
                    ui.strong(value);
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        let mut status = None;
        ui.horizontal(|ui| {
            if ui.button(txt("gui.damage.export_png", "Export graph (PNG)")).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("PNG", &["png"])
                    .set_file_name("fiv_response.png")
                    .save_file()
                {
                    status = Some(export_result(
                        &tr,
                        report::write_series_png(&eval.series, &path, report::PNG_WIDTH, report::PNG_HEIGHT),
                        &path,
                    ));
                }
            }
            if ui.button(txt("gui.damage.export_csv", "Export series (CSV)")).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .set_file_name("fiv_response.csv")
                    .save_file()
                {
                    status = Some(export_result(
                        &tr,
                        report::write_series_csv(&eval.series, &path),
                        &path,
                    ));
                }
            }
        });
        if status.is_some() {
            self.export_status = status;
        }
        if let Some(msg) = &self.export_status {
            ui.label(msg);
        }
    }

    fn ui_report(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.report.heading", "Final Report"));
        let report = match self.screening() {
            Ok(s) => ScreeningReport::from_screening(&s),
            Err(e) => {
                ui.colored_label(egui::Color32::RED, app::describe_fiv_error(&tr, e));
                return;
            }
        };
        let text = report.to_text();
        ui.add(
            egui::TextEdit::multiline(&mut text.as_str())
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
        if ui.button(txt("gui.report.save", "Save report (TXT)")).clicked() {
            if let Some(path) = FileDialog::new()
                .add_filter("Text", &["txt"])
                .set_file_name("fiv_report.txt")
                .save_file()
            {
                self.export_status = Some(export_result(&tr, report.write_text(&path), &path));
            }
        }
        if let Some(msg) = &self.export_status {
            ui.label(msg);
        }
    }

    fn ui_access_gate(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading(self.txt("gui.nav.app_title", "Tube FIV Toolbox"));
                ui.add_space(12.0);
                ui.label(self.txt("gui.access.prompt", "Enter access key"));
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.key_input)
                        .password(true)
                        .desired_width(240.0),
                );
                let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button(self.txt("gui.access.submit", "Unlock")).clicked() || submitted {
                    self.try_unlock();
                }
                if self.access_error {
                    ui.colored_label(
                        egui::Color32::RED,
                        self.txt(
                            "gui.access.denied",
                            "Unauthorized access. Please enter a valid access key.",
                        ),
                    );
                }
            });
        });
    }

    fn apply_theme(&self, ctx: &egui::Context, frame: &Frame) {
        let visuals = match self.theme {
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
            ThemeChoice::System => frame
                .info()
                .system_theme
                .map(|t| t.egui_visuals())
                .unwrap_or_else(egui::Visuals::dark),
        };
        ctx.set_visuals(visuals);
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);
    }

    fn set_language(&mut self, code: &str) {
        self.config.language = code.to_string();
        let resolved = i18n::resolve_language(code, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
    }
}

fn export_result(
    tr: &i18n::Translator,
    res: Result<(), report::ReportError>,
    path: &Path,
) -> String {
    match res {
        Ok(()) => tr.tf(i18n::keys::EXPORT_DONE, &[("path", path.display().to_string())]),
        Err(e) => {
            tracing::error!(error = %e, "내보내기 실패");
            format!(
                "{}: {}",
                tr.t(i18n::keys::ERROR_PREFIX),
                app::describe_report_error(tr, &e)
            )
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        self.apply_theme(ctx, frame);
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Tube FIV Toolbox"));
                ui.separator();
                let before = self.lang_input.clone();
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            txt("gui.settings.lang.auto", "System"),
                        );
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                    });
                if before != self.lang_input {
                    let code = self.lang_input.clone();
                    self.set_language(&code);
                }
                egui::ComboBox::from_id_source("theme_choice")
                    .selected_text(format!("{:?}", self.theme))
                    .show_ui(ui, |ui| {
                        for t in [ThemeChoice::System, ThemeChoice::Light, ThemeChoice::Dark] {
                            ui.selectable_value(&mut self.theme, t, format!("{t:?}"));
                        }
                    });
                if ui.button(txt("gui.formula.button", "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        if !self.unlocked {
            self.ui_access_gate(ctx);
            return;
        }

        if self.show_settings_modal {
            let mut new_unit_system = self.config.unit_system;
            let mut save = false;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.unit_preset", "Unit system preset"));
                    ui.horizontal(|ui| {
                        for (label, us) in [
                            ("SI", config::UnitSystem::SI),
                            ("Imperial", config::UnitSystem::Imperial),
                        ] {
                            ui.selectable_value(&mut new_unit_system, us, label);
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.checkbox(
                        &mut self.config.alert.enabled,
                        txt("gui.settings.alert", "Collision alert"),
                    );
                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        save = true;
                    }
                    if let Some(msg) = &self.settings_status {
                        ui.label(msg);
                    }
                });
            if new_unit_system != self.config.unit_system {
                self.apply_unit_preset(new_unit_system);
            }
            if save {
                self.config.window_alpha = self.window_alpha;
                self.settings_status = Some(match self.config.save() {
                    Ok(()) => txt("gui.settings.saved", "Saved."),
                    Err(e) => format!("Save error: {e}"),
                });
                // 경고 켜기/끄기를 즉시 반영
                self.computed_for = None;
            }
        }

        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt("gui.formula.dynamics", "Dynamics"));
                    ui.label("d = D − 2t,  A = π(D² − d²)/4,  I = π(D⁴ − d⁴)/64");
                    ui.label("m = A·L·ρ,  k = 3·E·I/L³,  F = ½·ρf·v²·D,  ωn = √(k/m)");
                    ui.label("x(t) = (F/k)·e^(−0.02·ωn·t)·sin(ωn·t),  1000 samples, 0…5 s");
                    ui.separator();
                    ui.heading(txt("gui.formula.indicators", "Indicators"));
                    ui.label("fn = (1/2π)·√(E·I/(ρA·L²)),  Re = v·D·ρf/μ");
                    ui.label("fs = 0.2·v/D,  buffeting = v·D·0.1,  FEI = v·D");
                    ui.separator();
                    ui.heading(txt("gui.formula.acoustic", "Acoustic resonance"));
                    ui.label("c = √(γ·R·T),  f_axial = c/(2·Ls),  f_angular = c·K/(2π·p),  K = 1.0 / 1.15");
                    ui.separator();
                    ui.heading(txt("gui.formula.risk", "Risk thresholds"));
                    ui.label("wear |x| > 0.008 m,  collision max > 0.01 m,  noise 90 dB if max > 0.012 m");
                    ui.label("ΔP 15 kPa if wear > 100,  SCC High if wear > 150");
                });
        }

        self.refresh();

        if let Some(max) = self.banner.active() {
            egui::TopBottomPanel::top("collision_banner").show(ctx, |ui| {
                ui.colored_label(
                    egui::Color32::from_rgb(210, 50, 50),
                    egui::RichText::new(i18n::fill_template(
                        &txt(
                            "gui.alert.collision",
                            "Mid-span collision risk: max displacement {max} m",
                        ),
                        &[("max", format!("{max:.4}"))],
                    ))
                    .strong(),
                );
            });
        }

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(220.0)
            .default_width(300.0)
            .max_width(460.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.ui_nav(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::NaturalFrequency => self.ui_natural_frequency(ui),
                    Tab::Reynolds => self.ui_reynolds(ui),
                    Tab::VortexShedding => self.ui_vortex(ui),
                    Tab::TurbulentBuffeting => self.ui_buffeting(ui),
                    Tab::AcousticResonance => self.ui_acoustic(ui),
                    Tab::FluidElasticInstability => self.ui_fei(ui),
                    Tab::DamageEffects => self.ui_damage(ui),
                    Tab::Report => self.ui_report(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_imperial_switches_form_units() {
        let mut app = GuiApp::with_gate(config::Config::default(), AccessGate::with_key(None));
        assert_eq!(app.units.length, "mm");
        app.apply_unit_preset(config::UnitSystem::Imperial);
        assert_eq!(app.units.length, "in");
        assert_eq!(app.units.velocity, "ft/s");
        assert_eq!(app.units.temperature, "F");
        app.apply_unit_preset(config::UnitSystem::SI);
        assert_eq!(app.units.modulus, "GPa");
    }

    #[test]
    fn banner_follows_collision_risk() {
        let mut app = GuiApp::with_gate(config::Config::default(), AccessGate::with_key(None));
        assert!(app.banner.active().is_none());
        app.config.inputs.properties.fluid_velocity_m_s = 5.0;
        app.refresh();
        assert!(app.banner.active().is_some());
        app.config.inputs.properties.fluid_velocity_m_s = 2.0;
        app.refresh();
        assert!(app.banner.active().is_none());
    }

    #[test]
    fn invalid_geometry_is_reported_not_simulated() {
        let mut app = GuiApp::with_gate(config::Config::default(), AccessGate::with_key(None));
        app.config.inputs.geometry.wall_thickness_m = 0.0125;
        app.refresh();
        assert!(matches!(app.damage, Err(ref e) if e.is_geometry()));
        assert!(app.flow.is_err());
        assert!(app.acoustic.is_ok());
    }

    #[test]
    fn bad_acoustic_input_only_blocks_acoustic_and_report() {
        let mut app = GuiApp::with_gate(config::Config::default(), AccessGate::with_key(None));
        app.config.acoustic.gas_constant_j_kg_k = 0.0;
        app.refresh();
        assert!(app.acoustic.is_err());
        assert!(app.damage.is_ok());
        assert!(app.flow.is_ok());
        assert!(app.screening().is_err());

        app.config.acoustic.gas_constant_j_kg_k = 287.0;
        app.refresh();
        assert!(app.screening().is_ok());
    }

    #[test]
    fn gate_unlocks_only_with_matching_key() {
        let mut app =
            GuiApp::with_gate(config::Config::default(), AccessGate::with_key(Some("s3cret")));
        assert!(!app.unlocked);
        app.key_input = "wrong".into();
        app.try_unlock();
        assert!(!app.unlocked && app.access_error);
        app.key_input = "s3cret".into();
        app.try_unlock();
        assert!(app.unlocked);
        assert!(app.key_input.is_empty());
    }

    #[test]
    fn quantity_field_round_trip_through_display_unit() {
        let si = conversion::convert(QuantityKind::Length, 25.0, "mm", "m").unwrap();
        assert!((si - 0.025).abs() < 1e-12);
    }
}
