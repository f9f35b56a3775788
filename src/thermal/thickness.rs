use super::normative;
use super::wall::WallAssembly;

/// 두께 계산 전제조건이 깨졌을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// 두께를 모르는 층이 정확히 하나가 아님
    AmbiguousUnknownLayer { unknown_layers: usize },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::AmbiguousUnknownLayer { unknown_layers } => write!(
                f,
                "ambiguous unknown layer: expected exactly one layer without thickness, found {unknown_layers}"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// 요구 열저항을 어느 기준에서 가져왔는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredResistanceBasis {
    /// 에너지 절약 기준 (a·ГСОП + b)
    EnergySaving,
    /// 위생 기준 n·(tint − text)/(Δtn·αint)
    Sanitation,
}

/// 미지 층 두께 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessResult {
    /// 풀이한 층 두께 [m]. 알려진 층만으로 이미 요구치를 넘으면 음수가 될 수 있다.
    pub thickness_m: f64,
    /// 두께를 모르던 층의 인덱스
    pub unknown_layer_index: usize,
    pub degree_day: f64,
    pub energy_saving_required_resistance: f64,
    pub sanitation_required_resistance: f64,
    /// 실제로 적용한 요구 기준
    pub governing: RequiredResistanceBasis,
    /// 두께가 주어진 층들의 열저항 합 [m²·K/W]
    pub known_layers_resistance: f64,
    /// 미지 층이 담당해야 하는 열저항 [m²·K/W]
    pub owed_resistance: f64,
}

impl ThicknessResult {
    /// 적용한 요구 열저항 값.
    pub fn required_resistance(&self) -> f64 {
        match self.governing {
            RequiredResistanceBasis::EnergySaving => self.energy_saving_required_resistance,
            RequiredResistanceBasis::Sanitation => self.sanitation_required_resistance,
        }
    }
}

/// 두께를 모르는 층 하나의 필요 두께를 구한다.
///
/// 벽 전체 조건부 열저항이 요구 열저항과 정확히 같아지는 두께를 돌려준다. 균질계수는
/// 적용하지 않는다. 요구 열저항은 항상 에너지 절약 기준 값이며, 위생 기준 값은 계산만
/// 해서 결과에 담는다.
///
/// 미지 층의 `thickness`는 바꾸지 않는다. 반영하려면 `WallAssembly::apply_thickness`를 쓴다.
pub fn solve_thickness(wall: &mut WallAssembly) -> Result<ThicknessResult, ConfigurationError> {
    let unknown = wall.unknown_layer_indices();
    let unknown_layer_index = match unknown.as_slice() {
        [index] => *index,
        _ => {
            return Err(ConfigurationError::AmbiguousUnknownLayer {
                unknown_layers: unknown.len(),
            })
        }
    };

    let degree_day = normative::degree_day(
        wall.temperature_air_optimum_inside,
        wall.temperature_average_heating_period_outside,
        wall.duration_heating_period,
    );
    let energy_saving_required_resistance = normative::base_required_resistance(
        degree_day,
        wall.coeff_a_heat_transfer,
        wall.coeff_b_heat_transfer,
    );
    let sanitation_required_resistance = normative::sanitation_required_resistance(
        wall.coeff_n,
        wall.temperature_air_optimum_inside,
        wall.temperature_air_outside,
        wall.delta_temperature_normalized,
        wall.coeff_alpha_inside,
    );
    let governing = RequiredResistanceBasis::EnergySaving;

    let known_layers_resistance: f64 = wall
        .layers
        .iter_mut()
        .filter(|layer| layer.is_thickness_known())
        .map(|layer| {
            layer.update();
            layer.thermal_resistance()
        })
        .sum();

    let surfaces = normative::surface_resistance(wall.coeff_alpha_inside)
        + normative::surface_resistance(wall.coeff_alpha_outside);

    let mut result = ThicknessResult {
        thickness_m: f64::NAN,
        unknown_layer_index,
        degree_day,
        energy_saving_required_resistance,
        sanitation_required_resistance,
        governing,
        known_layers_resistance,
        owed_resistance: f64::NAN,
    };
    result.owed_resistance = result.required_resistance() - (surfaces + known_layers_resistance);
    result.thickness_m =
        wall.layers[unknown_layer_index].thermal_conductivity * result.owed_resistance;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::layer::LayerMaterial;

    fn wall_with(layers: Vec<LayerMaterial>) -> WallAssembly {
        let mut wall = WallAssembly::new();
        wall.temperature_air_optimum_inside = 20.0;
        wall.temperature_air_outside = -30.0;
        wall.temperature_average_heating_period_outside = 0.0;
        wall.duration_heating_period = 100.0;
        wall.coeff_a_heat_transfer = 0.0;
        wall.coeff_b_heat_transfer = 3.0;
        wall.coeff_alpha_inside = 4.0;
        wall.coeff_alpha_outside = 4.0;
        wall.delta_temperature_normalized = 4.0;
        wall.coeff_n = 1.0;
        wall.layers = layers;
        wall
    }

    #[test]
    fn no_unknown_layer_is_rejected() {
        let mut wall = wall_with(vec![LayerMaterial::new("brick", 0.12, 0.58)]);
        assert_eq!(
            solve_thickness(&mut wall),
            Err(ConfigurationError::AmbiguousUnknownLayer { unknown_layers: 0 })
        );
    }

    #[test]
    fn two_unknown_layers_are_rejected() {
        let mut wall = wall_with(vec![
            LayerMaterial::unknown_thickness("wool", 0.04),
            LayerMaterial::unknown_thickness("foam", 0.03),
        ]);
        let err = solve_thickness(&mut wall).unwrap_err();
        assert_eq!(err, ConfigurationError::AmbiguousUnknownLayer { unknown_layers: 2 });
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn owed_resistance_becomes_thickness() {
        // Rreq = 3.0, Rsi + Rse = 0.5, 알려진 층 1.0 → 미지 층 1.5 → δ = 0.04 * 1.5
        let mut wall = wall_with(vec![
            LayerMaterial::new("slab", 0.5, 0.5),
            LayerMaterial::unknown_thickness("wool", 0.04),
        ]);
        let res = solve_thickness(&mut wall).expect("solve");
        assert_eq!(res.unknown_layer_index, 1);
        assert!((res.owed_resistance - 1.5).abs() < 1e-12);
        assert!((res.thickness_m - 0.06).abs() < 1e-12);
        assert!(wall.layers[1].thickness.is_none());
    }

    #[test]
    fn sanitation_requirement_is_reported_but_not_governing() {
        let mut wall = wall_with(vec![LayerMaterial::unknown_thickness("wool", 0.04)]);
        wall.coeff_n = 100.0;
        let res = solve_thickness(&mut wall).expect("solve");
        assert!(res.sanitation_required_resistance > res.energy_saving_required_resistance);
        assert_eq!(res.governing, RequiredResistanceBasis::EnergySaving);
        assert_eq!(res.required_resistance(), 3.0);
    }

    #[test]
    fn thick_known_layers_give_negative_thickness() {
        let mut wall = wall_with(vec![
            LayerMaterial::new("slab", 5.0, 0.5),
            LayerMaterial::unknown_thickness("wool", 0.04),
        ]);
        let res = solve_thickness(&mut wall).expect("solve");
        assert!(res.thickness_m < 0.0);
    }
}
