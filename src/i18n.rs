use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_OPTIONS: &str = "main_menu.options";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const PROMPT_KEEP_DEFAULT: &str = "prompt.keep_default";

    pub const ACCESS_PROMPT: &str = "access.prompt";
    pub const ACCESS_DENIED: &str = "access.denied";

    pub const NATURAL_FREQUENCY_HEADING: &str = "natural_frequency.heading";
    pub const NATURAL_FREQUENCY_RESULT: &str = "natural_frequency.result";
    pub const REYNOLDS_HEADING: &str = "reynolds.heading";
    pub const REYNOLDS_RESULT: &str = "reynolds.result";
    pub const REYNOLDS_UNDEFINED: &str = "reynolds.undefined";
    pub const VORTEX_HEADING: &str = "vortex.heading";
    pub const VORTEX_RESULT: &str = "vortex.result";
    pub const BUFFETING_HEADING: &str = "buffeting.heading";
    pub const BUFFETING_RESULT: &str = "buffeting.result";
    pub const FEI_HEADING: &str = "fei.heading";
    pub const FEI_RESULT: &str = "fei.result";

    pub const ACOUSTIC_HEADING: &str = "acoustic.heading";
    pub const PROMPT_GAMMA: &str = "prompt.gamma";
    pub const PROMPT_GAS_CONSTANT: &str = "prompt.gas_constant";
    pub const PROMPT_GAS_TEMPERATURE: &str = "prompt.gas_temperature";
    pub const PROMPT_EXCHANGER_TYPE: &str = "prompt.exchanger_type";
    pub const PROMPT_MAKE: &str = "prompt.make";
    pub const PROMPT_SHELL_LENGTH: &str = "prompt.shell_length";
    pub const PROMPT_PITCH_TYPE: &str = "prompt.pitch_type";
    pub const PROMPT_TUBE_PITCH: &str = "prompt.tube_pitch";
    pub const ACOUSTIC_SPEED_OF_SOUND: &str = "acoustic.speed_of_sound";
    pub const ACOUSTIC_AXIAL: &str = "acoustic.axial";
    pub const ACOUSTIC_ANGULAR: &str = "acoustic.angular";
    pub const ACOUSTIC_NOTE: &str = "acoustic.note";

    pub const DAMAGE_HEADING: &str = "damage.heading";
    pub const DAMAGE_DYNAMICS: &str = "damage.dynamics";
    pub const DAMAGE_RISK: &str = "damage.risk";
    pub const PROMPT_EXPORT_SERIES: &str = "prompt.export_series";
    pub const EXPORT_DONE: &str = "export.done";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const PROMPT_SAVE_REPORT: &str = "prompt.save_report";

    pub const INPUTS_HEADING: &str = "inputs.heading";
    pub const PROMPT_OUTER_DIAMETER: &str = "prompt.outer_diameter";
    pub const PROMPT_WALL_THICKNESS: &str = "prompt.wall_thickness";
    pub const PROMPT_TUBE_LENGTH: &str = "prompt.tube_length";
    pub const PROMPT_MATERIAL_DENSITY: &str = "prompt.material_density";
    pub const PROMPT_MODULUS: &str = "prompt.modulus";
    pub const PROMPT_FLUID_VELOCITY: &str = "prompt.fluid_velocity";
    pub const PROMPT_FLUID_DENSITY: &str = "prompt.fluid_density";
    pub const PROMPT_FLUID_VISCOSITY: &str = "prompt.fluid_viscosity";
    pub const INPUTS_SAVED: &str = "inputs.saved";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    // 오류 메시지
    pub const ERROR_INPUT_CLOSED: &str = "error.input_closed";
    pub const ERROR_IO: &str = "error.io";
    pub const ERROR_CONFIG: &str = "error.config";
    pub const ERROR_CONVERSION: &str = "error.conversion";
    pub const ERROR_REPORT: &str = "error.report";
    pub const ERROR_CASE_FILE: &str = "error.case_file";
    pub const ERROR_UNSUPPORTED_FORMAT: &str = "error.unsupported_format";
    pub const ERROR_UNSUPPORTED_EXTENSION: &str = "error.unsupported_extension";
    pub const ERROR_CANVAS_TOO_SMALL: &str = "error.canvas_too_small";
    pub const ERROR_ACCESS_DENIED: &str = "error.access_denied";
    pub const ERROR_GEOMETRY: &str = "error.geometry";
    pub const ERROR_INPUT: &str = "error.input";
    pub const ERROR_WALL_TOO_THICK: &str = "error.wall_too_thick";
    pub const ERROR_NON_POSITIVE_MASS: &str = "error.non_positive_mass";
    pub const ERROR_NON_POSITIVE_STIFFNESS: &str = "error.non_positive_stiffness";
    pub const ERROR_MISSING: &str = "error.missing";
    pub const ERROR_NON_FINITE: &str = "error.non_finite";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리에 파일이 없으면 내장 언어팩을 쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 언어팩에서 키를 조회한다. 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 언어팩 → 내장 문자열 순으로 번역을 찾는다. 영어 문자열이 없으면 한국어로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let s = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        s.unwrap_or("[missing translation]").to_string()
    }

    /// 번역 문자열의 `{name}` 자리를 채운다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// `{name}` 형식의 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "en-uk" | "en-gb" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .or_else(|| std::env::var("LC_ALL").ok())
        .or_else(|| std::env::var("LANG").ok())
        .and_then(|loc| {
            let lang = loc.split(['.', '_', '-']).next().unwrap_or_default().to_string();
            normalize_lang(&lang)
        })
}

/// TOML 언어팩을 로드한다. 형식: 테이블 중첩을 `a.b.c` 키로 펼친 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };
    try_load(lang).or_else(|| {
        lang.split_once(['-', '_'])
            .and_then(|(base, _)| try_load(base))
    })
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }
    (!map.is_empty()).then_some(map)
}

/// 빌드 시 포함되는 내장 언어팩.
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Tube FIV Toolbox ===",
        MAIN_MENU_OPTIONS => {
            "1) 고유진동수  2) 레이놀즈수  3) 와류방출  4) 난류 버페팅  5) 음향 공명\n\
             6) 유체탄성 불안정  7) FIV 손상 영향  8) 결과 보고서  9) 공통 입력  10) 설정  0) 종료"
        }
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_KEEP_DEFAULT => "(엔터 = 유지)",
        ACCESS_PROMPT => "접근 키 입력: ",
        ACCESS_DENIED => "접근 키가 올바르지 않습니다.",
        NATURAL_FREQUENCY_HEADING => "\n-- 고유진동수 --",
        NATURAL_FREQUENCY_RESULT => "고유진동수: {value} Hz",
        REYNOLDS_HEADING => "\n-- 레이놀즈수 --",
        REYNOLDS_RESULT => "레이놀즈수: {value}",
        REYNOLDS_UNDEFINED => "점도가 0이라 레이놀즈수를 정의할 수 없습니다.",
        VORTEX_HEADING => "\n-- 와류방출 --",
        VORTEX_RESULT => "와류방출 주파수: {value} Hz",
        BUFFETING_HEADING => "\n-- 난류 버페팅 --",
        BUFFETING_RESULT => "난류 버페팅 효과: {value} N",
        FEI_HEADING => "\n-- 유체탄성 불안정 --",
        FEI_RESULT => "유체탄성 불안정 계수: {value}",
        ACOUSTIC_HEADING => "\n-- 셸앤튜브 열교환기 음향 공명 --",
        PROMPT_GAMMA => "비열비 γ",
        PROMPT_GAS_CONSTANT => "기체상수 R [J/kg·K]",
        PROMPT_GAS_TEMPERATURE => "온도",
        PROMPT_EXCHANGER_TYPE => "열교환기 형식 1=Shell and Tube 2=Double Pipe 3=Plate Type",
        PROMPT_MAKE => "제작사",
        PROMPT_SHELL_LENGTH => "셸 길이 [m]",
        PROMPT_PITCH_TYPE => "튜브 피치 형식 1=Square 2=Triangular",
        PROMPT_TUBE_PITCH => "튜브 피치 [m]",
        ACOUSTIC_SPEED_OF_SOUND => "음속: {value} m/s",
        ACOUSTIC_AXIAL => "축방향 공명 주파수: {value} Hz",
        ACOUSTIC_ANGULAR => "각방향 공명 주파수: {value} Hz",
        ACOUSTIC_NOTE => "참고: 축방향 공명은 셸 길이, 각방향 공명은 피치 형식과 배열에 좌우됩니다.",
        DAMAGE_HEADING => "\n-- FIV 손상 영향 --",
        DAMAGE_DYNAMICS => "질량 {mass} kg, 강성 {stiffness} N/m, 가진력 {force} N, ωn {omega} rad/s",
        DAMAGE_RISK => {
            "최대 변위 {max} m, 충돌 위험 {collision}, 마모 접촉 {wear}회\n\
             소음 {noise} dB, 압력손실 {dp} kPa, 응력부식균열 위험 {scc}"
        }
        PROMPT_EXPORT_SERIES => "시계열 저장 경로 (.csv/.png, 엔터 = 건너뜀): ",
        EXPORT_DONE => "저장 완료: {path}",
        REPORT_HEADING => "\n-- 결과 보고서 --",
        PROMPT_SAVE_REPORT => "보고서 저장 경로 (엔터 = 건너뜀): ",
        INPUTS_HEADING => "\n-- 공통 입력 --",
        PROMPT_OUTER_DIAMETER => "튜브 외경",
        PROMPT_WALL_THICKNESS => "튜브 두께",
        PROMPT_TUBE_LENGTH => "튜브 길이",
        PROMPT_MATERIAL_DENSITY => "튜브 재질 밀도",
        PROMPT_MODULUS => "탄성계수",
        PROMPT_FLUID_VELOCITY => "유속",
        PROMPT_FLUID_DENSITY => "유체 밀도",
        PROMPT_FLUID_VISCOSITY => "유체 점도",
        INPUTS_SAVED => "입력이 저장되었습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "단위 시스템: {units}, 언어: {lang}, 충돌 경고: {alert}",
        SETTINGS_OPTIONS => "1) 단위 시스템  2) 언어  3) 충돌 경고 켜기/끄기  (엔터 = 취소)",
        SETTINGS_UNIT_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        ERROR_INPUT_CLOSED => "입력이 닫혔습니다",
        ERROR_IO => "입출력 오류: {detail}",
        ERROR_CONFIG => "설정 오류: {detail}",
        ERROR_CONVERSION => "알 수 없는 단위: {unit}",
        ERROR_REPORT => "보고서 오류: {detail}",
        ERROR_CASE_FILE => "케이스 파일 파싱 오류: {detail}",
        ERROR_UNSUPPORTED_FORMAT => "지원하지 않는 파일 형식: {path}",
        ERROR_UNSUPPORTED_EXTENSION => "지원하지 않는 시계열 파일 확장자: {ext} (csv 또는 png)",
        ERROR_CANVAS_TOO_SMALL => "그래프 크기가 너무 작습니다 ({width}x{height})",
        ERROR_ACCESS_DENIED => "접근 키가 올바르지 않습니다",
        ERROR_GEOMETRY => "형상 오류: {detail}",
        ERROR_INPUT => "입력 오류: {detail}",
        ERROR_WALL_TOO_THICK => "두께 {thickness} m 가 외경 {diameter} m 의 절반 이상입니다",
        ERROR_NON_POSITIVE_MASS => "튜브 질량이 0 이하입니다 ({value} kg)",
        ERROR_NON_POSITIVE_STIFFNESS => "굽힘 강성이 0 이하이거나 유한하지 않습니다 ({value} N/m)",
        ERROR_MISSING => "필수 입력 누락: {field}",
        ERROR_NON_FINITE => "{field} 값이 유한하지 않습니다 ({value})",
        ERROR_OUT_OF_RANGE => "{field} 값 {value} 이(가) 허용 범위를 벗어났습니다 ({rule})",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Tube FIV Toolbox ===",
        MAIN_MENU_OPTIONS => {
            "1) Natural Frequency  2) Reynolds Number  3) Vortex Shedding  4) Turbulent Buffeting\n\
             5) Acoustic Resonance  6) Fluid Elastic Instability  7) FIV Damage Effects\n\
             8) Report  9) Global Inputs  10) Settings  0) Exit"
        }
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_KEEP_DEFAULT => "(enter = keep)",
        ACCESS_PROMPT => "Enter access key: ",
        ACCESS_DENIED => "Unauthorized access. Please enter a valid access key.",
        NATURAL_FREQUENCY_HEADING => "\n-- Natural Frequency --",
        NATURAL_FREQUENCY_RESULT => "Natural Frequency: {value} Hz",
        REYNOLDS_HEADING => "\n-- Reynolds Number --",
        REYNOLDS_RESULT => "Reynolds Number: {value}",
        REYNOLDS_UNDEFINED => "Viscosity is zero; Reynolds number is undefined.",
        VORTEX_HEADING => "\n-- Vortex Shedding --",
        VORTEX_RESULT => "Vortex Shedding Frequency: {value} Hz",
        BUFFETING_HEADING => "\n-- Turbulent Buffeting --",
        BUFFETING_RESULT => "Turbulent Buffeting Effect: {value} N",
        FEI_HEADING => "\n-- Fluid Elastic Instability --",
        FEI_RESULT => "Fluid Elastic Instability Factor: {value}",
        ACOUSTIC_HEADING => "\n-- Acoustic Resonance in Shell and Tube Heat Exchanger --",
        PROMPT_GAMMA => "Heat capacity ratio γ",
        PROMPT_GAS_CONSTANT => "Specific gas constant R [J/kg·K]",
        PROMPT_GAS_TEMPERATURE => "Temperature",
        PROMPT_EXCHANGER_TYPE => "Heat exchanger type 1=Shell and Tube 2=Double Pipe 3=Plate Type",
        PROMPT_MAKE => "Heat exchanger make",
        PROMPT_SHELL_LENGTH => "Shell length [m]",
        PROMPT_PITCH_TYPE => "Tube pitch type 1=Square 2=Triangular",
        PROMPT_TUBE_PITCH => "Tube pitch [m]",
        ACOUSTIC_SPEED_OF_SOUND => "Calculated speed of sound: {value} m/s",
        ACOUSTIC_AXIAL => "Axial Resonance Frequency: {value} Hz",
        ACOUSTIC_ANGULAR => "Angular Resonance Frequency: {value} Hz",
        ACOUSTIC_NOTE => "Note: axial resonance is based on shell length; angular resonance depends on pitch type and layout.",
        DAMAGE_HEADING => "\n-- FIV Damage Effects --",
        DAMAGE_DYNAMICS => "Mass {mass} kg, stiffness {stiffness} N/m, force {force} N, ωn {omega} rad/s",
        DAMAGE_RISK => {
            "Max displacement {max} m, collision risk {collision}, wear contacts {wear}\n\
             Noise {noise} dB, pressure drop {dp} kPa, SCC risk {scc}"
        }
        PROMPT_EXPORT_SERIES => "Series export path (.csv/.png, enter = skip): ",
        EXPORT_DONE => "Saved: {path}",
        REPORT_HEADING => "\n-- Final Report --",
        PROMPT_SAVE_REPORT => "Report path (enter = skip): ",
        INPUTS_HEADING => "\n-- Global Input Parameters --",
        PROMPT_OUTER_DIAMETER => "Tube outside diameter",
        PROMPT_WALL_THICKNESS => "Tube thickness",
        PROMPT_TUBE_LENGTH => "Tube length",
        PROMPT_MATERIAL_DENSITY => "Tube material density",
        PROMPT_MODULUS => "Modulus of elasticity",
        PROMPT_FLUID_VELOCITY => "Fluid velocity",
        PROMPT_FLUID_DENSITY => "Fluid density",
        PROMPT_FLUID_VISCOSITY => "Fluid viscosity",
        INPUTS_SAVED => "Inputs saved.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Unit system: {units}, language: {lang}, collision alert: {alert}",
        SETTINGS_OPTIONS => "1) Unit system  2) Language  3) Toggle collision alert  (enter = cancel)",
        SETTINGS_UNIT_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings updated.",
        ERROR_INPUT_CLOSED => "input closed",
        ERROR_IO => "I/O error: {detail}",
        ERROR_CONFIG => "configuration error: {detail}",
        ERROR_CONVERSION => "unknown unit: {unit}",
        ERROR_REPORT => "report error: {detail}",
        ERROR_CASE_FILE => "case file parse error: {detail}",
        ERROR_UNSUPPORTED_FORMAT => "unsupported file format: {path}",
        ERROR_UNSUPPORTED_EXTENSION => "unsupported series file extension: {ext} (csv or png)",
        ERROR_CANVAS_TOO_SMALL => "chart size too small ({width}x{height})",
        ERROR_ACCESS_DENIED => "access key does not match",
        ERROR_GEOMETRY => "invalid geometry: {detail}",
        ERROR_INPUT => "invalid input: {detail}",
        ERROR_WALL_TOO_THICK => "thickness {thickness} m is at least half of the outside diameter {diameter} m",
        ERROR_NON_POSITIVE_MASS => "tube mass is not positive ({value} kg)",
        ERROR_NON_POSITIVE_STIFFNESS => "bending stiffness is not positive or not finite ({value} N/m)",
        ERROR_MISSING => "missing required input: {field}",
        ERROR_NON_FINITE => "{field} is not finite ({value})",
        ERROR_OUT_OF_RANGE => "{field} value {value} is out of range ({rule})",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en")), "en-us");
        assert_eq!(resolve_language("en-uk", None), "en-us");
    }

    #[test]
    fn built_in_strings_exist_in_both_languages() {
        use keys::*;
        for key in [
            MAIN_MENU_TITLE,
            DAMAGE_RISK,
            ACCESS_DENIED,
            SETTINGS_SAVED,
            ERROR_INPUT_CLOSED,
            ERROR_WALL_TOO_THICK,
            ERROR_OUT_OF_RANGE,
        ] {
            assert!(ko(key).is_some(), "ko missing {key}");
            assert!(en(key).is_some(), "en missing {key}");
        }
    }

    #[test]
    fn template_fill() {
        let tr = Translator::new("en");
        let s = tr.tf(keys::NATURAL_FREQUENCY_RESULT, &[("value", "6.72".into())]);
        assert_eq!(s, "Natural Frequency: 6.72 Hz");
    }

    #[test]
    fn embedded_packs_parse() {
        let ko = Translator::new_with_pack("ko-kr", None);
        assert!(ko.lookup("gui.nav.app_title").is_some());
        let en = Translator::new_with_pack("en-us", None);
        assert_eq!(en.lookup("gui.tab.damage").as_deref(), Some("FIV Damage Effects"));
    }
}
