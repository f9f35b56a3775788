//! СП 50.13330.2012의 닫힌 형식 공식 모음.

/// 난방기간 도일(ГСОП) [°C·day]. 식 (5.2).
pub fn degree_day(temp_inside_c: f64, temp_average_outside_c: f64, duration_days: f64) -> f64 {
    (temp_inside_c - temp_average_outside_c) * duration_days
}

/// 요구 열저항 기본값 Rreq = a·ГСОП + b [m²·K/W]. 표 3.
pub fn base_required_resistance(degree_day: f64, coeff_a: f64, coeff_b: f64) -> f64 {
    degree_day * coeff_a + coeff_b
}

/// 표면 열전달저항 1/α [m²·K/W].
pub fn surface_resistance(alpha: f64) -> f64 {
    1.0 / alpha
}

/// 위생 기준 요구 열저항 n·(tint − text)/(Δtn·αint) [m²·K/W]. 식 (5.4).
pub fn sanitation_required_resistance(
    coeff_n: f64,
    temp_inside_c: f64,
    temp_outside_c: f64,
    delta_temperature_normalized: f64,
    alpha_inside: f64,
) -> f64 {
    coeff_n * (temp_inside_c - temp_outside_c) / (delta_temperature_normalized * alpha_inside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saint_petersburg_degree_day() {
        let gsop = degree_day(20.0, -1.3, 213.0);
        assert!((gsop - 4536.9).abs() < 1e-9);
        let r = base_required_resistance(gsop, 0.00035, 1.4);
        assert!((r - 2.987915).abs() < 1e-6);
    }

    #[test]
    fn sanitation_requirement_for_living_room() {
        // n=1, 20 °C / -31 °C, Δtn=4, αint=8.7
        let r = sanitation_required_resistance(1.0, 20.0, -31.0, 4.0, 8.7);
        assert!((r - 51.0 / 34.8).abs() < 1e-12);
    }

    #[test]
    fn zero_alpha_is_not_guarded() {
        assert!(surface_resistance(0.0).is_infinite());
    }
}
