//! 상트페테르부르크 예제 벽체의 적합성 검토 회귀 테스트.
use thermal_protection_building::thermal::{check_compliance, demo, LayerMaterial};

#[test]
fn saint_petersburg_wall_meets_standards() {
    let mut wall = demo::compliance_demo();
    let res = check_compliance(&mut wall);
    assert!((res.degree_day - 4536.9).abs() < 1e-9);
    assert!((res.base_required_resistance - 2.987915).abs() < 1e-6);
    assert!((res.layers_resistance - 3.931920).abs() < 1e-5, "sum={}", res.layers_resistance);
    assert!((res.conditional_resistance - 4.090341).abs() < 1e-5);
    assert!((res.reduced_resistance - 3.763114).abs() < 1e-5);
    assert!(res.meets_standards);
}

#[test]
fn repeated_check_is_identical() {
    let mut wall = demo::compliance_demo();
    let first = check_compliance(&mut wall);
    let second = check_compliance(&mut wall);
    assert_eq!(first, second);
}

#[test]
fn thicker_layer_only_raises_resistance() {
    let mut wall = demo::compliance_demo();
    wall.layers[1].thickness = Some(0.05);
    let thin = check_compliance(&mut wall);
    assert!(!thin.meets_standards, "reduced={}", thin.reduced_resistance);

    let mut previous = thin;
    for mm in [100.0, 150.0, 200.0, 250.0, 300.0] {
        wall.layers[1].thickness = Some(mm / 1000.0);
        let res = check_compliance(&mut wall);
        assert!(res.reduced_resistance > previous.reduced_resistance);
        assert!(res.meets_standards || !previous.meets_standards);
        previous = res;
    }
    assert!(previous.meets_standards);
}

#[test]
fn missing_data_never_fails() {
    let mut wall = demo::compliance_demo();
    wall.layers.push(LayerMaterial::unknown_thickness("Пенополистирол", 0.04));
    let res = check_compliance(&mut wall);
    assert!(res.reduced_resistance.is_nan());
    assert!(!res.meets_standards);

    let mut wall = demo::compliance_demo();
    wall.coefficient_homogeneity = f64::NAN;
    let res = check_compliance(&mut wall);
    assert!(res.base_required_resistance.is_finite());
    assert!(res.reduced_resistance.is_nan());
    assert!(!res.meets_standards);
}

#[test]
fn zero_conductivity_is_not_validated() {
    let mut wall = demo::compliance_demo();
    wall.layers[0].thermal_conductivity = 0.0;
    let res = check_compliance(&mut wall);
    assert!(res.reduced_resistance.is_infinite());
    assert!(res.meets_standards);
}
