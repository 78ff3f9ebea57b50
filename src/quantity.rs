/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    Pressure,
}

impl std::str::FromStr for QuantityKind {
    type Err = crate::conversion::ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t" | "temp" | "temperature" => Ok(QuantityKind::Temperature),
            "p" | "pressure" => Ok(QuantityKind::Pressure),
            _ => Err(crate::conversion::ConversionError::UnsupportedQuantity(
                s.to_string(),
            )),
        }
    }
}
