//! TOML로 기술한 벽체 파일을 `WallAssembly`로 읽어 들인다.
//!
//! 생략한 수치 항목은 미입력(NaN)으로 남고, `thickness`를 생략한 층이 두께 계산의 대상이 된다.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::conversion::{self, ConversionError};
use crate::thermal::{LayerMaterial, WallAssembly};
use crate::units::{convert_conductivity, convert_length, ConductivityUnit, LengthUnit};

/// 벽체 파일 로드 중 발생 가능한 오류.
#[derive(Debug)]
pub enum AssemblyFileError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Unit(ConversionError),
}

impl std::fmt::Display for AssemblyFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssemblyFileError::Io(e) => write!(f, "assembly file I/O: {e}"),
            AssemblyFileError::Parse(e) => write!(f, "assembly file parse: {e}"),
            AssemblyFileError::Unit(e) => write!(f, "assembly file unit: {e}"),
        }
    }
}

impl std::error::Error for AssemblyFileError {}

impl From<std::io::Error> for AssemblyFileError {
    fn from(value: std::io::Error) -> Self {
        AssemblyFileError::Io(value)
    }
}

impl From<toml::de::Error> for AssemblyFileError {
    fn from(value: toml::de::Error) -> Self {
        AssemblyFileError::Parse(value)
    }
}

impl From<ConversionError> for AssemblyFileError {
    fn from(value: ConversionError) -> Self {
        AssemblyFileError::Unit(value)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AssemblyDoc {
    #[serde(default)]
    name_city: String,
    #[serde(default)]
    type_building: String,
    #[serde(default)]
    type_wall: String,
    humidity_air_inside: Option<f64>,
    temperature_air_inside: Option<f64>,
    temperature_air_optimum_inside: Option<f64>,
    temperature_air_outside: Option<f64>,
    temperature_average_heating_period_outside: Option<f64>,
    duration_heating_period: Option<f64>,
    coeff_a_heat_transfer: Option<f64>,
    coeff_b_heat_transfer: Option<f64>,
    delta_temperature_normalized: Option<f64>,
    coeff_alpha_inside: Option<f64>,
    coeff_alpha_outside: Option<f64>,
    coefficient_homogeneity: Option<f64>,
    coeff_n: Option<f64>,
    #[serde(default)]
    layers: Vec<LayerDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayerDoc {
    type_material: Option<String>,
    thickness: Option<f64>,
    /// 기본값 m
    thickness_unit: Option<String>,
    density: Option<f64>,
    thermal_conductivity: Option<f64>,
    /// 기본값 W/mK
    conductivity_unit: Option<String>,
    vapor_permeability: Option<f64>,
}

impl LayerDoc {
    fn into_layer(self) -> Result<LayerMaterial, ConversionError> {
        let length_unit = match self.thickness_unit.as_deref() {
            Some(s) => conversion::parse_length_unit(s)?,
            None => LengthUnit::Meter,
        };
        let conductivity_unit = match self.conductivity_unit.as_deref() {
            Some(s) => conversion::parse_conductivity_unit(s)?,
            None => ConductivityUnit::WPerMeterK,
        };
        let mut layer = LayerMaterial::default();
        layer.type_material = self.type_material;
        layer.thickness = self
            .thickness
            .map(|t| convert_length(t, length_unit, LengthUnit::Meter));
        layer.density = self.density;
        if let Some(k) = self.thermal_conductivity {
            layer.thermal_conductivity =
                convert_conductivity(k, conductivity_unit, ConductivityUnit::WPerMeterK);
        }
        layer.vapor_permeability = self.vapor_permeability;
        Ok(layer)
    }
}

/// TOML 문자열을 벽체로 변환한다.
pub fn parse_assembly(src: &str) -> Result<WallAssembly, AssemblyFileError> {
    let doc: AssemblyDoc = toml::from_str(src)?;
    let layers = doc
        .layers
        .into_iter()
        .map(LayerDoc::into_layer)
        .collect::<Result<Vec<_>, _>>()?;
    let unset = |v: Option<f64>| v.unwrap_or(f64::NAN);
    Ok(WallAssembly {
        layers,
        name_city: doc.name_city,
        type_building: doc.type_building,
        type_wall: doc.type_wall,
        humidity_air_inside: unset(doc.humidity_air_inside),
        temperature_air_inside: unset(doc.temperature_air_inside),
        temperature_air_optimum_inside: unset(doc.temperature_air_optimum_inside),
        temperature_air_outside: unset(doc.temperature_air_outside),
        temperature_average_heating_period_outside: unset(
            doc.temperature_average_heating_period_outside,
        ),
        duration_heating_period: unset(doc.duration_heating_period),
        coeff_a_heat_transfer: unset(doc.coeff_a_heat_transfer),
        coeff_b_heat_transfer: unset(doc.coeff_b_heat_transfer),
        delta_temperature_normalized: unset(doc.delta_temperature_normalized),
        coeff_alpha_inside: unset(doc.coeff_alpha_inside),
        coeff_alpha_outside: unset(doc.coeff_alpha_outside),
        coefficient_homogeneity: unset(doc.coefficient_homogeneity),
        coeff_n: unset(doc.coeff_n),
    })
}

/// 벽체 파일을 읽는다.
pub fn load_assembly(path: &Path) -> Result<WallAssembly, AssemblyFileError> {
    let content = fs::read_to_string(path)?;
    parse_assembly(&content)
}
