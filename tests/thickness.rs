//! 니즈니노브고로드 예제 벽체의 단열층 두께 계산 테스트.
use thermal_protection_building::thermal::{
    check_compliance, demo, solve_thickness, ConfigurationError, LayerMaterial,
    RequiredResistanceBasis,
};

#[test]
fn nizhny_novgorod_insulation_thickness() {
    let mut wall = demo::thickness_demo();
    let res = solve_thickness(&mut wall).expect("solve");
    assert_eq!(res.unknown_layer_index, 1);
    assert!((res.degree_day - 5181.5).abs() < 1e-9);
    assert!((res.energy_saving_required_resistance - 3.213525).abs() < 1e-6);
    assert!((res.sanitation_required_resistance - 51.0 / 34.8).abs() < 1e-9);
    assert_eq!(res.governing, RequiredResistanceBasis::EnergySaving);
    assert!(res.thickness_m > 0.0);
    assert!((res.thickness_m - 0.22533).abs() < 1e-4, "δ={}", res.thickness_m);
}

#[test]
fn solved_thickness_closes_the_requirement() {
    let mut wall = demo::thickness_demo();
    let res = solve_thickness(&mut wall).expect("solve");
    let required = res.required_resistance();

    assert!(wall.apply_thickness(res.unknown_layer_index, res.thickness_m));
    wall.temperature_air_inside = wall.temperature_air_optimum_inside;
    let check = check_compliance(&mut wall);
    assert!(
        ((check.reduced_resistance - required) / required).abs() < 1e-9,
        "reduced={} required={required}",
        check.reduced_resistance
    );
    assert!((check.base_required_resistance - required).abs() < 1e-12);
}

#[test]
fn solver_does_not_write_back() {
    let mut wall = demo::thickness_demo();
    solve_thickness(&mut wall).expect("solve");
    assert!(wall.layers[1].thickness.is_none());
}

#[test]
fn fully_known_wall_is_ambiguous() {
    let mut wall = demo::compliance_demo();
    let err = solve_thickness(&mut wall).unwrap_err();
    assert_eq!(err, ConfigurationError::AmbiguousUnknownLayer { unknown_layers: 0 });
}

#[test]
fn two_unknown_layers_are_ambiguous() {
    let mut wall = demo::thickness_demo();
    wall.layers.push(LayerMaterial::unknown_thickness("Пенополистирол", 0.04));
    let err = solve_thickness(&mut wall).unwrap_err();
    assert_eq!(err, ConfigurationError::AmbiguousUnknownLayer { unknown_layers: 2 });
}

#[test]
fn interior_temperatures_are_independent() {
    let mut wall = demo::thickness_demo();
    let base = solve_thickness(&mut wall).expect("solve");
    wall.temperature_air_inside = 30.0;
    let again = solve_thickness(&mut wall).expect("solve");
    assert_eq!(base, again);
}
