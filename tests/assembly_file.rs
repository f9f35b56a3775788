use std::path::Path;

use thermal_protection_building::assembly_file::{load_assembly, parse_assembly};
use thermal_protection_building::thermal::{check_compliance, demo, solve_thickness};

const SAINT_PETERSBURG: &str = r#"
name_city = "Санкт-Петербург"
type_building = "Жилое"
type_wall = "Наружные стены"
humidity_air_inside = 55.0
temperature_air_inside = 20.0
temperature_air_outside = -24.0
temperature_average_heating_period_outside = -1.3
duration_heating_period = 213.0
coeff_a_heat_transfer = 0.00035
coeff_b_heat_transfer = 1.4
delta_temperature_normalized = 4.0
coeff_alpha_inside = 8.7
coeff_alpha_outside = 23.0
coefficient_homogeneity = 0.92

[[layers]]
type_material = "Кладка из керамического пустотного кирпича"
thickness = 120.0
thickness_unit = "mm"
thermal_conductivity = 0.58

[[layers]]
type_material = "Маты минераловатные"
thickness = 25.0
thickness_unit = "cm"
thermal_conductivity = 0.07

[[layers]]
type_material = "Железобетон"
thickness = 0.2
thermal_conductivity = 2.04

[[layers]]
type_material = "Фанера клееная"
thickness = 10.0
thickness_unit = "mm"
thermal_conductivity = 0.18
"#;

#[test]
fn file_matches_demo_result() {
    let mut from_file = parse_assembly(SAINT_PETERSBURG).expect("parse");
    let mut preset = demo::compliance_demo();
    let a = check_compliance(&mut from_file);
    let b = check_compliance(&mut preset);
    assert!((a.reduced_resistance - b.reduced_resistance).abs() < 1e-9);
    assert_eq!(a.meets_standards, b.meets_standards);
}

#[test]
fn omitted_thickness_marks_unknown_layer() {
    let src = r#"
temperature_air_optimum_inside = 20.0
temperature_average_heating_period_outside = -4.1
duration_heating_period = 215.0
coeff_a_heat_transfer = 0.00035
coeff_b_heat_transfer = 1.4
coeff_alpha_inside = 8.7
coeff_alpha_outside = 23.0

[[layers]]
thickness = 90.0
thickness_unit = "mm"
thermal_conductivity = 0.96

[[layers]]
type_material = "Плиты минераловатные"
thermal_conductivity = 0.085

[[layers]]
thickness = 0.25
thermal_conductivity = 0.87

[[layers]]
thickness = 0.02
thermal_conductivity = 0.87
"#;
    let mut wall = parse_assembly(src).expect("parse");
    assert_eq!(wall.unknown_layer_indices(), vec![1]);
    let res = solve_thickness(&mut wall).expect("solve");
    assert!((res.thickness_m - 0.22533).abs() < 1e-4);
    assert!(res.sanitation_required_resistance.is_nan());
}

#[test]
fn bundled_wall_file_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("walls/nizhny_novgorod.toml");
    let mut wall = load_assembly(&path).expect("load");
    assert_eq!(wall.name_city, "Нижний Новгород");
    let from_file = solve_thickness(&mut wall).expect("solve");
    let preset = solve_thickness(&mut demo::thickness_demo()).expect("solve");
    assert!((from_file.thickness_m - preset.thickness_m).abs() < 1e-9);
}
