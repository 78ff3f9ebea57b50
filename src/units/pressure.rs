use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 Pa(절대압)이다.
/// `Psig`만 게이지 기준이며 표준 대기압(14.696 psi)을 보정해 절대압으로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psia,
    Psig,
}

/// 표준 대기압(psi)
pub const ATM_PSI: f64 = 14.696;
/// 1 bar 당 psi
pub const PSI_PER_BAR: f64 = 14.503_773_800_722;
const PA_PER_BAR: f64 = 100_000.0;

/// 게이지 psi를 절대압 Pa로 변환한다.
/// psig -> psia(+14.696) -> bar(/14.5037738) -> Pa(*1e5) 순서로 계산한다.
pub fn psig_to_pascal(p_psig: f64) -> f64 {
    let psia = p_psig + ATM_PSI;
    let bar = psia / PSI_PER_BAR;
    bar * PA_PER_BAR
}

/// 절대압 Pa를 게이지 psi로 변환한다. `psig_to_pascal`의 역변환.
pub fn pascal_to_psig(p_pa: f64) -> f64 {
    p_pa / PA_PER_BAR * PSI_PER_BAR - ATM_PSI
}

/// 주어진 압력을 Pa(abs)로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1_000.0,
        PressureUnit::MegaPascal => value * 1_000_000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psia => value / PSI_PER_BAR * PA_PER_BAR,
        PressureUnit::Psig => psig_to_pascal(value),
    }
}

/// Pa(abs) 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1_000.0,
        PressureUnit::MegaPascal => value_pa / 1_000_000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Psia => value_pa / PA_PER_BAR * PSI_PER_BAR,
        PressureUnit::Psig => pascal_to_psig(value_pa),
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
