use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPLIANCE: &str = "main_menu.compliance";
    pub const MAIN_MENU_THICKNESS: &str = "main_menu.thickness";
    pub const MAIN_MENU_DEMO_COMPLIANCE: &str = "main_menu.demo_compliance";
    pub const MAIN_MENU_DEMO_THICKNESS: &str = "main_menu.demo_thickness";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_CITY: &str = "prompt.city";
    pub const PROMPT_TEMP_INSIDE: &str = "prompt.temperature_inside";
    pub const PROMPT_TEMP_OPTIMUM_INSIDE: &str = "prompt.temperature_optimum_inside";
    pub const PROMPT_TEMP_OUTSIDE: &str = "prompt.temperature_outside";
    pub const PROMPT_TEMP_AVERAGE: &str = "prompt.temperature_average";
    pub const PROMPT_DURATION: &str = "prompt.duration";
    pub const PROMPT_COEFF_A: &str = "prompt.coeff_a";
    pub const PROMPT_COEFF_B: &str = "prompt.coeff_b";
    pub const PROMPT_ALPHA_INSIDE: &str = "prompt.alpha_inside";
    pub const PROMPT_ALPHA_OUTSIDE: &str = "prompt.alpha_outside";
    pub const PROMPT_HOMOGENEITY: &str = "prompt.homogeneity";
    pub const PROMPT_DELTA_T: &str = "prompt.delta_t";
    pub const PROMPT_COEFF_N: &str = "prompt.coeff_n";
    pub const PROMPT_LAYER_COUNT: &str = "prompt.layer_count";
    pub const PROMPT_LAYER_NAME: &str = "prompt.layer_name";
    pub const PROMPT_LAYER_THICKNESS: &str = "prompt.layer_thickness";
    pub const PROMPT_LAYER_CONDUCTIVITY: &str = "prompt.layer_conductivity";

    pub const REPORT_COMPLIANCE_HEADING: &str = "report.compliance_heading";
    pub const REPORT_THICKNESS_HEADING: &str = "report.thickness_heading";
    pub const REPORT_CITY: &str = "report.city";
    pub const REPORT_LAYERS: &str = "report.layers";
    pub const REPORT_UNKNOWN_THICKNESS: &str = "report.unknown_thickness";
    pub const REPORT_DEGREE_DAY: &str = "report.degree_day";
    pub const REPORT_BASE_REQUIRED: &str = "report.base_required";
    pub const REPORT_LAYERS_RESISTANCE: &str = "report.layers_resistance";
    pub const REPORT_CONDITIONAL: &str = "report.conditional";
    pub const REPORT_REDUCED: &str = "report.reduced";
    pub const REPORT_MEETS: &str = "report.meets";
    pub const REPORT_NOT_MEETS: &str = "report.not_meets";
    pub const REPORT_AT_LIMIT: &str = "report.at_limit";
    pub const REPORT_ENERGY_SAVING: &str = "report.energy_saving";
    pub const REPORT_SANITATION: &str = "report.sanitation";
    pub const REPORT_GOVERNING: &str = "report.governing";
    pub const REPORT_KNOWN_LAYERS: &str = "report.known_layers";
    pub const REPORT_OWED: &str = "report.owed";
    pub const REPORT_UNKNOWN_LAYER: &str = "report.unknown_layer";
    pub const REPORT_THICKNESS: &str = "report.thickness";

    pub const WARN_NON_FINITE: &str = "warning.non_finite";
    pub const WARN_NEGATIVE_THICKNESS: &str = "warning.negative_thickness";
    pub const WARN_SANITATION_EXCEEDS: &str = "warning.sanitation_exceeds";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ru
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
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
    /// 언어 코드(ru/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ru로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 러시아어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ru(key)),
            Language::Ru => ru(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ru".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ru") => Some("ru".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ru" => Some("ru".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ru(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Ошибка",
        APP_EXIT => "Завершение работы.",
        MAIN_MENU_TITLE => "\n=== Теплотехнический расчёт стены ===",
        MAIN_MENU_COMPLIANCE => "1) Проверка соответствия нормам",
        MAIN_MENU_THICKNESS => "2) Расчёт толщины утеплителя",
        MAIN_MENU_DEMO_COMPLIANCE => "3) Демо: проверка (Санкт-Петербург)",
        MAIN_MENU_DEMO_THICKNESS => "4) Демо: толщина (Нижний Новгород)",
        MAIN_MENU_SETTINGS => "5) Настройки",
        MAIN_MENU_EXIT => "0) Выход",
        PROMPT_MENU_SELECT => "Выберите пункт: ",
        INVALID_SELECTION_RETRY => "Неверный ввод. Повторите.",
        ERROR_INVALID_NUMBER => "Введите число.",
        PROMPT_CITY => "Город: ",
        PROMPT_TEMP_INSIDE => "Температура внутреннего воздуха tв [°C]: ",
        PROMPT_TEMP_OPTIMUM_INSIDE => "Оптимальная температура внутреннего воздуха tв [°C]: ",
        PROMPT_TEMP_OUTSIDE => "Расчётная температура наружного воздуха tн [°C]: ",
        PROMPT_TEMP_AVERAGE => "Средняя температура отопительного периода tот [°C]: ",
        PROMPT_DURATION => "Продолжительность отопительного периода zот [сут]: ",
        PROMPT_COEFF_A => "Коэффициент a: ",
        PROMPT_COEFF_B => "Коэффициент b: ",
        PROMPT_ALPHA_INSIDE => "αв [Вт/(м²·°С)]: ",
        PROMPT_ALPHA_OUTSIDE => "αн [Вт/(м²·°С)]: ",
        PROMPT_HOMOGENEITY => "Коэффициент теплотехнической однородности r: ",
        PROMPT_DELTA_T => "Нормируемый перепад Δtн [°C]: ",
        PROMPT_COEFF_N => "Коэффициент n: ",
        PROMPT_LAYER_COUNT => "Количество слоёв: ",
        PROMPT_LAYER_NAME => "Материал слоя: ",
        PROMPT_LAYER_THICKNESS => "Толщина [мм] (пусто — неизвестна): ",
        PROMPT_LAYER_CONDUCTIVITY => "Теплопроводность λ [Вт/(м·°С)]: ",
        REPORT_COMPLIANCE_HEADING => "\n-- Проверка соответствия нормам --",
        REPORT_THICKNESS_HEADING => "\n-- Расчёт толщины слоя --",
        REPORT_CITY => "Город:",
        REPORT_LAYERS => "Слои (снаружи внутрь):",
        REPORT_UNKNOWN_THICKNESS => "неизвестна",
        REPORT_DEGREE_DAY => "ГСОП [°С·сут]:",
        REPORT_BASE_REQUIRED => "Требуемое сопротивление Roтр:",
        REPORT_LAYERS_RESISTANCE => "Сумма сопротивлений слоёв:",
        REPORT_CONDITIONAL => "Условное сопротивление R0усл:",
        REPORT_REDUCED => "Приведённое сопротивление R0пр:",
        REPORT_MEETS => "Конструкция соответствует требованиям.",
        REPORT_NOT_MEETS => "Конструкция НЕ соответствует требованиям.",
        REPORT_AT_LIMIT => "Сопротивление теплопередаче равно требуемому (предельное значение).",
        REPORT_ENERGY_SAVING => "Требование энергосбережения:",
        REPORT_SANITATION => "Санитарно-гигиеническое требование:",
        REPORT_GOVERNING => "Принято требование:",
        REPORT_KNOWN_LAYERS => "Сопротивление известных слоёв:",
        REPORT_OWED => "Требуется от искомого слоя:",
        REPORT_UNKNOWN_LAYER => "Искомый слой:",
        REPORT_THICKNESS => "Толщина слоя:",
        WARN_NON_FINITE => "Внимание: результат не число — проверьте исходные данные.",
        WARN_NEGATIVE_THICKNESS => "Внимание: известные слои уже превышают требование.",
        WARN_SANITATION_EXCEEDS => {
            "Внимание: санитарное требование выше принятого требования энергосбережения."
        }
        SETTINGS_HEADING => "\n-- Настройки --",
        SETTINGS_CURRENT => "Единица толщины:",
        SETTINGS_OPTIONS => "1) мм  2) см  3) м  4) дюйм",
        SETTINGS_PROMPT_CHANGE => "Номер для изменения (Enter — отмена): ",
        SETTINGS_INVALID => "Неверный ввод, настройка не изменена.",
        SETTINGS_SAVED => "Единица толщины изменена на:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Wall Thermal Protection ===",
        MAIN_MENU_COMPLIANCE => "1) Check compliance",
        MAIN_MENU_THICKNESS => "2) Insulation thickness",
        MAIN_MENU_DEMO_COMPLIANCE => "3) Demo: compliance (Saint Petersburg)",
        MAIN_MENU_DEMO_THICKNESS => "4) Demo: thickness (Nizhny Novgorod)",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_CITY => "City: ",
        PROMPT_TEMP_INSIDE => "Indoor air temperature [°C]: ",
        PROMPT_TEMP_OPTIMUM_INSIDE => "Optimum indoor air temperature [°C]: ",
        PROMPT_TEMP_OUTSIDE => "Outdoor design temperature [°C]: ",
        PROMPT_TEMP_AVERAGE => "Average outdoor temperature of heating period [°C]: ",
        PROMPT_DURATION => "Heating period duration [days]: ",
        PROMPT_COEFF_A => "Coefficient a: ",
        PROMPT_COEFF_B => "Coefficient b: ",
        PROMPT_ALPHA_INSIDE => "Inside surface coefficient αint [W/(m²·K)]: ",
        PROMPT_ALPHA_OUTSIDE => "Outside surface coefficient αext [W/(m²·K)]: ",
        PROMPT_HOMOGENEITY => "Homogeneity coefficient r: ",
        PROMPT_DELTA_T => "Normalized temperature difference Δtn [°C]: ",
        PROMPT_COEFF_N => "Coefficient n: ",
        PROMPT_LAYER_COUNT => "Number of layers: ",
        PROMPT_LAYER_NAME => "Layer material: ",
        PROMPT_LAYER_THICKNESS => "Thickness [mm] (empty = unknown): ",
        PROMPT_LAYER_CONDUCTIVITY => "Thermal conductivity λ [W/(m·K)]: ",
        REPORT_COMPLIANCE_HEADING => "\n-- Compliance check --",
        REPORT_THICKNESS_HEADING => "\n-- Layer thickness --",
        REPORT_CITY => "City:",
        REPORT_LAYERS => "Layers (outside to inside):",
        REPORT_UNKNOWN_THICKNESS => "unknown",
        REPORT_DEGREE_DAY => "Degree-days [°C·day]:",
        REPORT_BASE_REQUIRED => "Required resistance:",
        REPORT_LAYERS_RESISTANCE => "Sum of layer resistances:",
        REPORT_CONDITIONAL => "Conditional resistance:",
        REPORT_REDUCED => "Reduced resistance:",
        REPORT_MEETS => "The wall meets the standards.",
        REPORT_NOT_MEETS => "The wall does NOT meet the standards.",
        REPORT_AT_LIMIT => "The wall resistance equals the required value (at the limit).",
        REPORT_ENERGY_SAVING => "Energy-saving requirement:",
        REPORT_SANITATION => "Sanitation requirement:",
        REPORT_GOVERNING => "Governing requirement:",
        REPORT_KNOWN_LAYERS => "Known layers resistance:",
        REPORT_OWED => "Owed by the unknown layer:",
        REPORT_UNKNOWN_LAYER => "Unknown layer:",
        REPORT_THICKNESS => "Layer thickness:",
        WARN_NON_FINITE => "Warning: result is not a number, check the input data.",
        WARN_NEGATIVE_THICKNESS => "Warning: known layers already exceed the requirement.",
        WARN_SANITATION_EXCEEDS => {
            "Warning: sanitation requirement is above the governing energy-saving requirement."
        }
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Thickness unit:",
        SETTINGS_OPTIONS => "1) mm  2) cm  3) m  4) inch",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Thickness unit changed to:",
        _ => return None,
    })
}
