use std::fmt;

/// 벽체를 구성하는 단일 재료층.
///
/// 두께가 `None`이면 "아직 모르는 두께"를 뜻한다. 두께 계산은 이 상태의 층을
/// 정확히 하나 찾아서 풀이한다.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerMaterial {
    /// 재료명 (예: "Железобетон (ГОСТ 26633)"). 표시용.
    pub type_material: Option<String>,
    /// 층 두께 [m]
    pub thickness: Option<f64>,
    /// 밀도 [kg/m³] (참고값)
    pub density: Option<f64>,
    /// 열전도율 [W/(m·K)]
    pub thermal_conductivity: f64,
    /// 투습계수 [mg/(m·h·Pa)] (참고값)
    pub vapor_permeability: Option<f64>,
    thermal_resistance: f64,
}

impl Default for LayerMaterial {
    fn default() -> Self {
        Self {
            type_material: None,
            thickness: None,
            density: None,
            thermal_conductivity: f64::NAN,
            vapor_permeability: None,
            thermal_resistance: f64::NAN,
        }
    }
}

impl LayerMaterial {
    /// 재료명, 두께[m], 열전도율로 층을 만든다.
    pub fn new(type_material: &str, thickness_m: f64, thermal_conductivity: f64) -> Self {
        Self {
            type_material: Some(type_material.to_string()),
            thickness: Some(thickness_m),
            thermal_conductivity,
            ..Self::default()
        }
    }

    /// 두께를 모르는 층을 만든다.
    pub fn unknown_thickness(type_material: &str, thermal_conductivity: f64) -> Self {
        Self {
            type_material: Some(type_material.to_string()),
            thermal_conductivity,
            ..Self::default()
        }
    }

    pub fn is_thickness_known(&self) -> bool {
        self.thickness.is_some()
    }

    /// 열저항 R = δ/λ 를 다시 계산한다.
    ///
    /// 검증은 하지 않는다. 두께를 모르면 NaN, 열전도율이 0이면 무한대가 그대로 남는다.
    pub fn update(&mut self) {
        let thickness = self.thickness.unwrap_or(f64::NAN);
        self.thermal_resistance = thickness / self.thermal_conductivity;
    }

    /// 마지막 `update()` 결과 [m²·K/W]. 한 번도 갱신하지 않았으면 NaN.
    pub fn thermal_resistance(&self) -> f64 {
        self.thermal_resistance
    }
}

impl fmt::Display for LayerMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_material.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_layer_starts_unset() {
        let layer = LayerMaterial::default();
        assert!(layer.thickness.is_none());
        assert!(layer.thermal_conductivity.is_nan());
        assert!(layer.thermal_resistance().is_nan());
    }

    #[test]
    fn update_divides_thickness_by_conductivity() {
        let mut layer = LayerMaterial::new("Маты минераловатные", 0.25, 0.07);
        layer.update();
        assert!((layer.thermal_resistance() - 0.25 / 0.07).abs() < 1e-12);
    }

    #[test]
    fn resistance_follows_inputs_after_update() {
        let mut layer = LayerMaterial::new("Фанера", 0.01, 0.18);
        layer.update();
        layer.thickness = Some(0.02);
        layer.update();
        assert!((layer.thermal_resistance() - 0.02 / 0.18).abs() < 1e-12);
    }

    #[test]
    fn zero_conductivity_gives_infinite_resistance() {
        let mut layer = LayerMaterial::new("air", 0.05, 0.0);
        layer.update();
        assert!(layer.thermal_resistance().is_infinite());
    }

    #[test]
    fn unknown_thickness_gives_nan_resistance() {
        let mut layer = LayerMaterial::unknown_thickness("insulation", 0.04);
        layer.update();
        assert!(layer.thermal_resistance().is_nan());
    }

    #[test]
    fn display_shows_material_name() {
        let layer = LayerMaterial::new("Железобетон (ГОСТ 26633)", 0.2, 2.04);
        assert_eq!(layer.to_string(), "Железобетон (ГОСТ 26633)");
        assert_eq!(LayerMaterial::default().to_string(), "");
    }
}
