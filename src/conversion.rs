use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnsupportedQuantity(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `K`, `F`, `Pa`, `MPa`, `psig` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "bar" | "bara" => Ok(PressureUnit::Bar),
        "psi" | "psia" => Ok(PressureUnit::Psia),
        "psig" => Ok(PressureUnit::Psig),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
