//! 화면 없이도 바로 계산해 볼 수 있는 예제 벽체.
//! 값은 СП 50.13330.2012 계산 예제(rascheta.net)를 따른다.

use super::layer::LayerMaterial;
use super::wall::WallAssembly;

/// 상트페테르부르크 주거용 외벽. 모든 층 두께가 주어진 적합성 검토 예제.
pub fn compliance_demo() -> WallAssembly {
    WallAssembly {
        layers: vec![
            LayerMaterial::new(
                "Кладка из керамического пустотного кирпича ГОСТ 530(p=1300кг/м.куб)",
                0.12,
                0.58,
            ),
            LayerMaterial::new("Маты минераловатные ГОСТ 21880 (p=125 кг/м.куб)", 0.25, 0.07),
            LayerMaterial::new("Железобетон (ГОСТ 26633)", 0.2, 2.04),
            LayerMaterial::new("Фанера клееная (ГОСТ 8673)", 0.01, 0.18),
        ],
        name_city: "Санкт-Петербург".into(),
        type_building: "Жилое".into(),
        type_wall: "Наружные стены".into(),
        humidity_air_inside: 55.0,
        temperature_air_inside: 20.0,
        temperature_air_outside: -24.0,
        temperature_average_heating_period_outside: -1.3,
        duration_heating_period: 213.0,
        coeff_a_heat_transfer: 0.00035,
        coeff_b_heat_transfer: 1.4,
        delta_temperature_normalized: 4.0,
        coeff_alpha_inside: 8.7,
        coeff_alpha_outside: 23.0,
        coefficient_homogeneity: 0.92,
        ..WallAssembly::default()
    }
}

/// 니즈니노브고로드 주거용 외벽. 단열층 두께를 구하는 예제.
pub fn thickness_demo() -> WallAssembly {
    WallAssembly {
        layers: vec![
            LayerMaterial::new("Облицовочный кирпич", 0.09, 0.96),
            LayerMaterial::unknown_thickness("Плиты минераловатные", 0.085),
            LayerMaterial::new("Кладка из силикатного кирпича", 0.25, 0.87),
            LayerMaterial::new("Штукатурка цементно-песчаная", 0.02, 0.87),
        ],
        name_city: "Нижний Новгород".into(),
        type_building: "Жилое".into(),
        type_wall: "Наружные стены".into(),
        humidity_air_inside: 55.0,
        temperature_air_optimum_inside: 20.0,
        temperature_air_outside: -31.0,
        temperature_average_heating_period_outside: -4.1,
        duration_heating_period: 215.0,
        coeff_a_heat_transfer: 0.00035,
        coeff_b_heat_transfer: 1.4,
        delta_temperature_normalized: 4.0,
        coeff_alpha_inside: 8.7,
        coeff_alpha_outside: 23.0,
        coefficient_homogeneity: 1.0,
        coeff_n: 1.0,
        ..WallAssembly::default()
    }
}
