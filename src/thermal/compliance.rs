use super::normative;
use super::wall::WallAssembly;

/// 외벽 열저항 적합성 검토 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplianceResult {
    /// 난방기간 도일 [°C·day]
    pub degree_day: f64,
    /// 요구 열저항 기본값 [m²·K/W]
    pub base_required_resistance: f64,
    /// 재료층 열저항 합 [m²·K/W]
    pub layers_resistance: f64,
    /// 표면저항을 포함한 조건부 열저항 R0усл [m²·K/W]
    pub conditional_resistance: f64,
    /// 균질계수를 곱한 환산 열저항 R0пр [m²·K/W]
    pub reduced_resistance: f64,
    /// true면 기준을 만족한다
    pub meets_standards: bool,
}

/// 모든 층 두께가 주어진 벽이 요구 열저항을 만족하는지 검토한다.
///
/// 각 층의 열저항은 여기서 다시 계산되어 층에 기록된다. 입력 검증은 하지 않으며
/// 미입력(NaN) 값은 결과로 전파되고, 그때 판정은 false가 된다.
/// 판정은 엄격한 부등호(R0пр > Rreq)를 쓴다. 같으면 불만족이다.
pub fn check_compliance(wall: &mut WallAssembly) -> ComplianceResult {
    let degree_day = normative::degree_day(
        wall.temperature_air_inside,
        wall.temperature_average_heating_period_outside,
        wall.duration_heating_period,
    );
    let base_required_resistance = normative::base_required_resistance(
        degree_day,
        wall.coeff_a_heat_transfer,
        wall.coeff_b_heat_transfer,
    );

    let layers_resistance: f64 = wall
        .layers
        .iter_mut()
        .map(|layer| {
            layer.update();
            layer.thermal_resistance()
        })
        .sum();

    let conditional_resistance = normative::surface_resistance(wall.coeff_alpha_inside)
        + normative::surface_resistance(wall.coeff_alpha_outside)
        + layers_resistance;
    let reduced_resistance = conditional_resistance * wall.coefficient_homogeneity;

    ComplianceResult {
        degree_day,
        base_required_resistance,
        layers_resistance,
        conditional_resistance,
        reduced_resistance,
        meets_standards: reduced_resistance > base_required_resistance,
    }
}
