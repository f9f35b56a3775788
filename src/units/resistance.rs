use serde::{Deserialize, Serialize};

/// 열저항(R) 단위. 내부 기준은 m²·K/W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResistanceUnit {
    SquareMeterKPerW,
    /// 북미식 R-value
    HourSquareFootFPerBtu,
}

impl ResistanceUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            ResistanceUnit::SquareMeterKPerW => "m²·K/W",
            ResistanceUnit::HourSquareFootFPerBtu => "h·ft²·°F/Btu",
        }
    }
}

// 1 m²·K/W = 5.678263 h·ft²·°F/Btu
fn to_base(value: f64, unit: ResistanceUnit) -> f64 {
    match unit {
        ResistanceUnit::SquareMeterKPerW => value,
        ResistanceUnit::HourSquareFootFPerBtu => value / 5.678263,
    }
}

fn from_base(value: f64, unit: ResistanceUnit) -> f64 {
    match unit {
        ResistanceUnit::SquareMeterKPerW => value,
        ResistanceUnit::HourSquareFootFPerBtu => value * 5.678263,
    }
}

/// 열저항을 변환한다.
pub fn convert_resistance(value: f64, from: ResistanceUnit, to: ResistanceUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
