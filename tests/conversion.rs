use thermal_protection_building::conversion::{convert, ConversionError};
use thermal_protection_building::quantity::QuantityKind;

#[test]
fn millimeters_to_meters() {
    let m = convert(QuantityKind::Length, 225.3, "mm", "m").expect("convert");
    assert!((m - 0.2253).abs() < 1e-12);
}

#[test]
fn rsi_to_imperial_r_value() {
    let r = convert(QuantityKind::ThermalResistance, 1.0, "m2K/W", "R").expect("convert");
    assert!((r - 5.678263).abs() < 1e-9);
    let back = convert(QuantityKind::ThermalResistance, r, "R", "RSI").expect("convert");
    assert!((back - 1.0).abs() < 1e-12);
}

#[test]
fn unknown_unit_is_an_error() {
    let err = convert(QuantityKind::ThermalConductivity, 1.0, "W/mK", "cal").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("cal".into()));
}

#[test]
fn quantity_names() {
    assert_eq!(QuantityKind::parse("Lambda"), Some(QuantityKind::ThermalConductivity));
    assert_eq!(QuantityKind::parse("pressure"), None);
}
