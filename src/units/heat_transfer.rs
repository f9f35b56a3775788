use serde::{Deserialize, Serialize};

/// 표면 열전달계수(α) 단위. 내부 기준은 W/(m²·K)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTransferUnit {
    WPerSquareMeterK,
    BtuPerHourSquareFootF,
}

impl HeatTransferUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            HeatTransferUnit::WPerSquareMeterK => "W/(m²·K)",
            HeatTransferUnit::BtuPerHourSquareFootF => "Btu/(h·ft²·°F)",
        }
    }
}

fn to_base(value: f64, unit: HeatTransferUnit) -> f64 {
    match unit {
        HeatTransferUnit::WPerSquareMeterK => value,
        HeatTransferUnit::BtuPerHourSquareFootF => value * 5.678263,
    }
}

fn from_base(value: f64, unit: HeatTransferUnit) -> f64 {
    match unit {
        HeatTransferUnit::WPerSquareMeterK => value,
        HeatTransferUnit::BtuPerHourSquareFootF => value / 5.678263,
    }
}

/// 열전달계수를 변환한다.
pub fn convert_heat_transfer(value: f64, from: HeatTransferUnit, to: HeatTransferUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
