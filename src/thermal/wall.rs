use super::layer::LayerMaterial;

/// 다층 외벽과 그 벽이 놓인 지역/건물 조건.
///
/// 수치 필드는 모두 `f64::NAN`으로 시작한다(미입력). 계산은 미입력 값을 검사하지 않으므로
/// NaN이 결과까지 그대로 전파된다.
///
/// 실내 온도는 두 계산이 따로 쓴다. 적합성 검토는 `temperature_air_inside`, 두께 계산은
/// `temperature_air_optimum_inside`를 사용한다.
#[derive(Debug, Clone, PartialEq)]
pub struct WallAssembly {
    /// 외부 표면에서 실내 표면 방향 순서의 층 목록
    pub layers: Vec<LayerMaterial>,
    /// 도시명 (예: "Нижний Новгород")
    pub name_city: String,
    /// 건물 용도 (예: "Жилое")
    pub type_building: String,
    /// 외피 종류 (예: "Наружные стены")
    pub type_wall: String,
    /// 실내 상대습도 [%] (СНиП 23-02-2003 표 1)
    pub humidity_air_inside: f64,
    /// 적합성 검토용 실내 온도 [°C] (ГОСТ 30494-96 표 1)
    pub temperature_air_inside: f64,
    /// 두께 계산용 최적 실내 온도 [°C]
    pub temperature_air_optimum_inside: f64,
    /// 최한 5일 평균 기준 외기 설계온도 [°C] (СНиП 23-01-99 표 1 열 5)
    pub temperature_air_outside: f64,
    /// 난방기간 평균 외기온도 [°C] (СНиП 23-01-99 표 1 열 12)
    pub temperature_average_heating_period_outside: f64,
    /// 난방기간 일수 [day] (СНиП 23-01-99 표 1 열 11)
    pub duration_heating_period: f64,
    /// 요구 열저항 회귀계수 a (СП 50.13330.2012 표 3)
    pub coeff_a_heat_transfer: f64,
    /// 요구 열저항 회귀계수 b (СП 50.13330.2012 표 3)
    pub coeff_b_heat_transfer: f64,
    /// 실내공기-내표면 허용 온도차 Δtn [°C] (СП 50.13330.2012 표 5)
    pub delta_temperature_normalized: f64,
    /// 내표면 열전달계수 αint [W/(m²·K)] (СП 50.13330.2012 표 4)
    pub coeff_alpha_inside: f64,
    /// 외표면 열전달계수 αext [W/(m²·K)] (СП 50.13330.2012 표 6)
    pub coeff_alpha_outside: f64,
    /// 열교 영향을 반영하는 열적 균질계수 r
    pub coefficient_homogeneity: f64,
    /// 외기에 대한 위치 보정계수 n (위생 기준)
    pub coeff_n: f64,
}

impl Default for WallAssembly {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            name_city: String::new(),
            type_building: String::new(),
            type_wall: String::new(),
            humidity_air_inside: f64::NAN,
            temperature_air_inside: f64::NAN,
            temperature_air_optimum_inside: f64::NAN,
            temperature_air_outside: f64::NAN,
            temperature_average_heating_period_outside: f64::NAN,
            duration_heating_period: f64::NAN,
            coeff_a_heat_transfer: f64::NAN,
            coeff_b_heat_transfer: f64::NAN,
            delta_temperature_normalized: f64::NAN,
            coeff_alpha_inside: f64::NAN,
            coeff_alpha_outside: f64::NAN,
            coefficient_homogeneity: f64::NAN,
            coeff_n: f64::NAN,
        }
    }
}

impl WallAssembly {
    pub fn new() -> Self {
        Self::default()
    }

    /// 두께를 모르는 층의 인덱스 목록.
    pub fn unknown_layer_indices(&self) -> Vec<usize> {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.is_thickness_known())
            .map(|(i, _)| i)
            .collect()
    }

    /// 계산된 두께를 지정한 층에 반영한다. 인덱스가 범위를 벗어나면 false.
    pub fn apply_thickness(&mut self, index: usize, thickness_m: f64) -> bool {
        match self.layers.get_mut(index) {
            Some(layer) => {
                layer.thickness = Some(thickness_m);
                true
            }
            None => false,
        }
    }
}
