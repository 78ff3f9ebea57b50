//! CO2 물성 상수와 기액 경계(증발/응축 압력) 근사식 모듈 모음.

pub mod phase_boundary;
pub mod planes;

pub use phase_boundary::*;
pub use planes::{critical_pressure_plane, critical_temperature_plane, PlaneGrid};

/// CO2 분자량(g/mol)
pub const MOLECULAR_WEIGHT_G_PER_MOL: f64 = 44.01;
/// 이상기체 식에 쓰는 몰 질량(kg/mol)
pub const MOLAR_MASS_KG_PER_MOL: f64 = MOLECULAR_WEIGHT_G_PER_MOL / 1000.0;

/// kg 당 몰 수.
pub fn moles_per_kg() -> f64 {
    1.0 / MOLAR_MASS_KG_PER_MOL
}
