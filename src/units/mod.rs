//! 온도·압력 단위 정의 및 변환 모듈 모음.

pub mod pressure;
pub mod temperature;

pub use pressure::{convert_pressure, pascal_to_psig, psig_to_pascal, PressureUnit};
pub use temperature::{
    convert_temperature, fahrenheit_to_kelvin, kelvin_to_fahrenheit, TemperatureUnit,
};
