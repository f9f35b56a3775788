/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 층 두께
    Length,
    /// 열전도율 λ
    ThermalConductivity,
    /// 표면 열전달계수 α
    HeatTransferCoeff,
    /// 열저항 R
    ThermalResistance,
}

impl QuantityKind {
    /// CLI 인자 문자열을 물리량으로 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" | "thickness" => Some(QuantityKind::Length),
            "conductivity" | "lambda" => Some(QuantityKind::ThermalConductivity),
            "alpha" | "heat-transfer" => Some(QuantityKind::HeatTransferCoeff),
            "resistance" | "r" => Some(QuantityKind::ThermalResistance),
            _ => None,
        }
    }
}
