use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

const ZERO_C_IN_K: f64 = 273.15;
const ZERO_K_IN_F: f64 = 459.67;

/// 켈빈을 화씨로 변환한다. `T_F = (T_K - 273.15) * 1.8 + 32`.
pub fn kelvin_to_fahrenheit(t_k: f64) -> f64 {
    (t_k - ZERO_C_IN_K) * 1.8 + 32.0
}

/// 화씨를 켈빈으로 변환한다. `T_K = (T_F + 459.67) * 5/9`.
pub fn fahrenheit_to_kelvin(t_f: f64) -> f64 {
    (t_f + ZERO_K_IN_F) * 5.0 / 9.0
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + ZERO_C_IN_K,
        TemperatureUnit::Fahrenheit => fahrenheit_to_kelvin(value),
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - ZERO_C_IN_K,
        TemperatureUnit::Fahrenheit => kelvin_to_fahrenheit(value_k),
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let k = to_kelvin(value, from);
    from_kelvin(k, to)
}
