//! 온도/압력 변환 회귀 테스트.
use phase_plot_toolbox::conversion::convert;
use phase_plot_toolbox::quantity::QuantityKind;
use phase_plot_toolbox::units::{
    fahrenheit_to_kelvin, kelvin_to_fahrenheit, pascal_to_psig, psig_to_pascal,
};
use proptest::prelude::*;

#[test]
fn freezing_point_in_fahrenheit() {
    assert_eq!(kelvin_to_fahrenheit(273.15), 32.0);
}

#[test]
fn zero_psig_is_standard_atmosphere() {
    // 14.696 psi / 14.5037738 psi/bar = 1.0132535 bar
    let pa = psig_to_pascal(0.0);
    assert!((pa - 101_325.0).abs() < 1.0, "got {pa}");
}

#[test]
fn string_units_match_direct_functions() {
    let v = convert(QuantityKind::Pressure, 100.0, "psig", "Pa").unwrap();
    assert_eq!(v, psig_to_pascal(100.0));
    let t = convert(QuantityKind::Temperature, 0.0, "C", "F").unwrap();
    assert!((t - 32.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn kelvin_round_trip(t_k in 1.0f64..2000.0) {
        let back = fahrenheit_to_kelvin(kelvin_to_fahrenheit(t_k));
        prop_assert!((back - t_k).abs() <= 1e-9 * t_k);
    }

    #[test]
    fn psig_round_trip(p in -14.0f64..5000.0) {
        let back = pascal_to_psig(psig_to_pascal(p));
        prop_assert!((back - p).abs() <= 1e-9 * p.abs().max(1.0));
    }
}
