//! 계산 결과를 사람이 읽는 텍스트로 만든다.

use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::thermal::{ComplianceResult, RequiredResistanceBasis, ThicknessResult, WallAssembly};
use crate::units::{convert_length, convert_resistance, LengthUnit, ResistanceUnit};

/// 결과에 붙는 주의 사항.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// 결과가 NaN 또는 무한대 (입력 누락, 0 나눗셈)
    NonFinite,
    /// 알려진 층만으로 요구치를 넘어 두께가 음수
    NegativeThickness,
    /// 위생 기준 요구치가 적용한 에너지 절약 기준보다 큼
    SanitationExceedsGoverning,
}

impl Warning {
    fn key(&self) -> &'static str {
        match self {
            Warning::NonFinite => keys::WARN_NON_FINITE,
            Warning::NegativeThickness => keys::WARN_NEGATIVE_THICKNESS,
            Warning::SanitationExceedsGoverning => keys::WARN_SANITATION_EXCEEDS,
        }
    }
}

pub fn compliance_warnings(res: &ComplianceResult) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if !res.reduced_resistance.is_finite() || !res.base_required_resistance.is_finite() {
        warnings.push(Warning::NonFinite);
    }
    warnings
}

pub fn thickness_warnings(res: &ThicknessResult) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if !res.thickness_m.is_finite() {
        warnings.push(Warning::NonFinite);
    } else if res.thickness_m < 0.0 {
        warnings.push(Warning::NegativeThickness);
    }
    if res.governing == RequiredResistanceBasis::EnergySaving
        && res.sanitation_required_resistance > res.energy_saving_required_resistance
    {
        warnings.push(Warning::SanitationExceedsGoverning);
    }
    warnings
}

/// 두께를 설정 단위로 환산해 한 자리 소수로 표시한다. 기본 단위 mm에서 "225.3 mm" 형태.
pub fn format_thickness(thickness_m: f64, unit: LengthUnit) -> String {
    let value = convert_length(thickness_m, LengthUnit::Meter, unit);
    format!("{value:.1} {}", unit.symbol())
}

fn format_resistance(value: f64, cfg: &Config) -> String {
    let v = convert_resistance(value, ResistanceUnit::SquareMeterKPerW, cfg.resistance_unit);
    format!("{v:.prec$} {}", cfg.resistance_unit.symbol(), prec = cfg.precision)
}

fn layer_lines(wall: &WallAssembly, tr: &Translator, cfg: &Config) -> Vec<String> {
    let mut out = vec![tr.t(keys::REPORT_LAYERS).to_string()];
    for (i, layer) in wall.layers.iter().enumerate() {
        let thickness = match layer.thickness {
            Some(t) => format_thickness(t, cfg.thickness_unit),
            None => tr.t(keys::REPORT_UNKNOWN_THICKNESS).to_string(),
        };
        out.push(format!(
            "  {}. {layer}: {thickness}, λ={} W/(m·K)",
            i + 1,
            layer.thermal_conductivity
        ));
    }
    out
}

fn push_warnings(out: &mut Vec<String>, warnings: &[Warning], tr: &Translator) {
    out.extend(warnings.iter().map(|w| tr.t(w.key()).to_string()));
}

/// 적합성 검토 결과 보고서.
pub fn render_compliance(
    wall: &WallAssembly,
    res: &ComplianceResult,
    tr: &Translator,
    cfg: &Config,
) -> String {
    let verdict = if res.meets_standards {
        keys::REPORT_MEETS
    } else {
        keys::REPORT_NOT_MEETS
    };
    compliance_text(wall, res, verdict, tr, cfg)
}

/// 계산한 두께를 넣은 벽의 보고서. 요구치와 같은 한계 상태이므로 판정 대신 한계값임을 적는다.
pub fn render_applied(
    wall: &WallAssembly,
    res: &ComplianceResult,
    tr: &Translator,
    cfg: &Config,
) -> String {
    compliance_text(wall, res, keys::REPORT_AT_LIMIT, tr, cfg)
}

fn compliance_text(
    wall: &WallAssembly,
    res: &ComplianceResult,
    verdict: &str,
    tr: &Translator,
    cfg: &Config,
) -> String {
    let mut out = vec![tr.t(keys::REPORT_COMPLIANCE_HEADING).to_string()];
    if !wall.name_city.is_empty() {
        out.push(format!("{} {}", tr.t(keys::REPORT_CITY), wall.name_city));
    }
    out.extend(layer_lines(wall, tr, cfg));
    out.push(format!("{} {:.1}", tr.t(keys::REPORT_DEGREE_DAY), res.degree_day));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_BASE_REQUIRED),
        format_resistance(res.base_required_resistance, cfg)
    ));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_LAYERS_RESISTANCE),
        format_resistance(res.layers_resistance, cfg)
    ));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_CONDITIONAL),
        format_resistance(res.conditional_resistance, cfg)
    ));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_REDUCED),
        format_resistance(res.reduced_resistance, cfg)
    ));
    out.push(tr.t(verdict).to_string());
    push_warnings(&mut out, &compliance_warnings(res), tr);
    out.join("\n")
}

/// 두께 계산 결과 보고서.
pub fn render_thickness(
    wall: &WallAssembly,
    res: &ThicknessResult,
    tr: &Translator,
    cfg: &Config,
) -> String {
    let mut out = vec![tr.t(keys::REPORT_THICKNESS_HEADING).to_string()];
    if !wall.name_city.is_empty() {
        out.push(format!("{} {}", tr.t(keys::REPORT_CITY), wall.name_city));
    }
    out.extend(layer_lines(wall, tr, cfg));
    out.push(format!("{} {:.1}", tr.t(keys::REPORT_DEGREE_DAY), res.degree_day));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_ENERGY_SAVING),
        format_resistance(res.energy_saving_required_resistance, cfg)
    ));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_SANITATION),
        format_resistance(res.sanitation_required_resistance, cfg)
    ));
    let governing = match res.governing {
        RequiredResistanceBasis::EnergySaving => keys::REPORT_ENERGY_SAVING,
        RequiredResistanceBasis::Sanitation => keys::REPORT_SANITATION,
    };
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_GOVERNING),
        tr.t(governing).trim_end_matches(':')
    ));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_KNOWN_LAYERS),
        format_resistance(res.known_layers_resistance, cfg)
    ));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_OWED),
        format_resistance(res.owed_resistance, cfg)
    ));
    if let Some(layer) = wall.layers.get(res.unknown_layer_index) {
        out.push(format!(
            "{} {}. {layer}",
            tr.t(keys::REPORT_UNKNOWN_LAYER),
            res.unknown_layer_index + 1
        ));
    }
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_THICKNESS),
        format_thickness(res.thickness_m, cfg.thickness_unit)
    ));
    push_warnings(&mut out, &thickness_warnings(res), tr);
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::{demo, solve_thickness};

    #[test]
    fn thickness_is_shown_in_millimeters_with_one_decimal() {
        assert_eq!(format_thickness(0.22533, LengthUnit::Millimeter), "225.3 mm");
        assert_eq!(format_thickness(0.1, LengthUnit::Centimeter), "10.0 cm");
    }

    #[test]
    fn sanitation_above_energy_saving_is_flagged() {
        let mut wall = demo::thickness_demo();
        wall.coeff_n = 50.0;
        let res = solve_thickness(&mut wall).expect("solve");
        assert!(thickness_warnings(&res).contains(&Warning::SanitationExceedsGoverning));
    }

    #[test]
    fn nan_thickness_is_flagged() {
        let mut wall = demo::thickness_demo();
        wall.coeff_alpha_outside = f64::NAN;
        let res = solve_thickness(&mut wall).expect("solve");
        assert_eq!(thickness_warnings(&res), vec![Warning::NonFinite]);
    }

    #[test]
    fn report_mentions_verdict() {
        let mut wall = demo::compliance_demo();
        let res = crate::thermal::check_compliance(&mut wall);
        let text = render_compliance(&wall, &res, &Translator::new("en"), &Config::default());
        assert!(text.contains("The wall meets the standards."));
        assert!(text.contains("Saint") || text.contains("Санкт-Петербург"));
    }
}
