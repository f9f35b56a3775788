use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::thermal::{LayerMaterial, WallAssembly};
use crate::units::LengthUnit;

/// 대화형 입력에서 받는 최대 층 수
const MAX_LAYERS: usize = 50;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compliance,
    Thickness,
    DemoCompliance,
    DemoThickness,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(input: &mut impl BufRead, tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_COMPLIANCE,
        keys::MAIN_MENU_THICKNESS,
        keys::MAIN_MENU_DEMO_COMPLIANCE,
        keys::MAIN_MENU_DEMO_THICKNESS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(input, tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Compliance),
            "2" => return Ok(MenuChoice::Thickness),
            "3" => return Ok(MenuChoice::DemoCompliance),
            "4" => return Ok(MenuChoice::DemoThickness),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 적합성 검토에 필요한 값을 입력받는다.
pub fn read_compliance_wall(input: &mut impl BufRead, tr: &Translator) -> Result<WallAssembly, AppError> {
    let mut wall = read_site(input, tr)?;
    wall.temperature_air_inside = read_f64(input, tr, keys::PROMPT_TEMP_INSIDE)?;
    read_climate(input, tr, &mut wall)?;
    wall.coefficient_homogeneity = read_f64(input, tr, keys::PROMPT_HOMOGENEITY)?;
    wall.layers = read_layers(input, tr)?;
    Ok(wall)
}

/// 두께 계산에 필요한 값을 입력받는다. 두께를 비워 둔 층이 계산 대상이다.
pub fn read_thickness_wall(input: &mut impl BufRead, tr: &Translator) -> Result<WallAssembly, AppError> {
    let mut wall = read_site(input, tr)?;
    wall.temperature_air_optimum_inside = read_f64(input, tr, keys::PROMPT_TEMP_OPTIMUM_INSIDE)?;
    wall.temperature_air_outside = read_f64(input, tr, keys::PROMPT_TEMP_OUTSIDE)?;
    read_climate(input, tr, &mut wall)?;
    wall.delta_temperature_normalized = read_f64(input, tr, keys::PROMPT_DELTA_T)?;
    wall.coeff_n = read_f64(input, tr, keys::PROMPT_COEFF_N)?;
    wall.layers = read_layers(input, tr)?;
    Ok(wall)
}

fn read_site(input: &mut impl BufRead, tr: &Translator) -> Result<WallAssembly, AppError> {
    let mut wall = WallAssembly::new();
    wall.name_city = read_line(input, tr.t(keys::PROMPT_CITY))?.trim().to_string();
    Ok(wall)
}

fn read_climate(input: &mut impl BufRead, tr: &Translator, wall: &mut WallAssembly) -> Result<(), AppError> {
    wall.temperature_average_heating_period_outside = read_f64(input, tr, keys::PROMPT_TEMP_AVERAGE)?;
    wall.duration_heating_period = read_f64(input, tr, keys::PROMPT_DURATION)?;
    wall.coeff_a_heat_transfer = read_f64(input, tr, keys::PROMPT_COEFF_A)?;
    wall.coeff_b_heat_transfer = read_f64(input, tr, keys::PROMPT_COEFF_B)?;
    wall.coeff_alpha_inside = read_f64(input, tr, keys::PROMPT_ALPHA_INSIDE)?;
    wall.coeff_alpha_outside = read_f64(input, tr, keys::PROMPT_ALPHA_OUTSIDE)?;
    Ok(())
}

fn read_layers(input: &mut impl BufRead, tr: &Translator) -> Result<Vec<LayerMaterial>, AppError> {
    let count = loop {
        let s = read_line(input, tr.t(keys::PROMPT_LAYER_COUNT))?;
        match s.trim().parse::<usize>() {
            Ok(n) if n <= MAX_LAYERS => break n,
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    };
    let mut layers = Vec::new();
    for i in 0..count {
        println!("-- {} --", i + 1);
        let name = read_line(input, tr.t(keys::PROMPT_LAYER_NAME))?.trim().to_string();
        let thickness_mm = read_optional_f64(input, tr, keys::PROMPT_LAYER_THICKNESS)?;
        let conductivity = read_f64(input, tr, keys::PROMPT_LAYER_CONDUCTIVITY)?;
        let mut layer = LayerMaterial::default();
        layer.type_material = Some(name);
        layer.thickness = thickness_mm.map(|mm| mm / 1000.0);
        layer.thermal_conductivity = conductivity;
        layers.push(layer);
    }
    Ok(layers)
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(input: &mut impl BufRead, tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT), cfg.thickness_unit.symbol());
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(input, tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.thickness_unit = match sel.trim() {
        "1" => LengthUnit::Millimeter,
        "2" => LengthUnit::Centimeter,
        "3" => LengthUnit::Meter,
        "4" => LengthUnit::Inch,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.thickness_unit
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.thickness_unit.symbol());
    Ok(())
}

/// 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof` 오류를 돌려준다.
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    if input.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }
    Ok(buf)
}

fn read_f64(input: &mut impl BufRead, tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        if let Some(v) = read_optional_f64(input, tr, prompt_key)? {
            return Ok(v);
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}

/// 빈 입력이면 None. 쉼표 소수점도 받는다.
fn read_optional_f64(
    input: &mut impl BufRead,
    tr: &Translator,
    prompt_key: &str,
) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(input, tr.t(prompt_key))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.replace(',', ".").parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn is_eof(err: &AppError) -> bool {
        matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }

    #[test]
    fn closed_input_ends_menu() {
        let tr = Translator::new("en");
        let err = main_menu(&mut Cursor::new(""), &tr).unwrap_err();
        assert!(is_eof(&err));
    }

    #[test]
    fn closed_input_ends_number_prompt() {
        let tr = Translator::new("en");
        let err = read_f64(&mut Cursor::new("abc\n"), &tr, keys::PROMPT_COEFF_A).unwrap_err();
        assert!(is_eof(&err));
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let tr = Translator::new("en");
        let mut input = Cursor::new("\n0,5\n");
        assert_eq!(read_optional_f64(&mut input, &tr, keys::PROMPT_COEFF_A).unwrap(), None);
        assert_eq!(read_f64(&mut input, &tr, keys::PROMPT_COEFF_A).unwrap(), 0.5);
    }

    #[test]
    fn huge_layer_count_is_rejected() {
        let tr = Translator::new("en");
        let mut input = Cursor::new("99999999999999999\n1\nBrick\n120\n0,58\n");
        let layers = read_layers(&mut input, &tr).expect("layers");
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].thickness, Some(0.12));
        assert_eq!(layers[0].thermal_conductivity, 0.58);
    }

    #[test]
    fn menu_selection_is_read() {
        let tr = Translator::new("en");
        let mut input = Cursor::new("9\n2\n");
        assert_eq!(main_menu(&mut input, &tr).unwrap(), MenuChoice::Thickness);
    }
}
