use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnsupportedQuantity(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unknown unit: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "unsupported quantity: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `mm`, `m`, `W/mK`, `W/m2K`, `m2K/W`, `R` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::ThermalConductivity => {
            let from = parse_conductivity_unit(from_unit_str)?;
            let to = parse_conductivity_unit(to_unit_str)?;
            Ok(convert_conductivity(value, from, to))
        }
        QuantityKind::HeatTransferCoeff => {
            let from = parse_heat_transfer_unit(from_unit_str)?;
            let to = parse_heat_transfer_unit(to_unit_str)?;
            Ok(convert_heat_transfer(value, from, to))
        }
        QuantityKind::ThermalResistance => {
            let from = parse_resistance_unit(from_unit_str)?;
            let to = parse_resistance_unit(to_unit_str)?;
            Ok(convert_resistance(value, from, to))
        }
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" | "м" => Ok(LengthUnit::Meter),
        "mm" | "мм" => Ok(LengthUnit::Millimeter),
        "cm" | "см" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_conductivity_unit(s: &str) -> Result<ConductivityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "w/mk" | "w/(m·k)" | "w/(m*k)" => Ok(ConductivityUnit::WPerMeterK),
        "btu/h-ft-f" | "btu/(h·ft·f)" => Ok(ConductivityUnit::BtuPerHourFootF),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_heat_transfer_unit(s: &str) -> Result<HeatTransferUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "w/m2k" | "w/m^2k" | "w/(m2·k)" => Ok(HeatTransferUnit::WPerSquareMeterK),
        "btu/h-ft2-f" | "btu/(h·ft2·f)" => Ok(HeatTransferUnit::BtuPerHourSquareFootF),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_resistance_unit(s: &str) -> Result<ResistanceUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2k/w" | "m^2k/w" | "m2·k/w" | "rsi" => Ok(ResistanceUnit::SquareMeterKPerW),
        "h-ft2-f/btu" | "h·ft2·f/btu" | "r" => Ok(ResistanceUnit::HourSquareFootFPerBtu),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
