//! CO2 증발/응축 압력 5차 다항식 근사.
//! 다항식은 화씨/psig 기준으로 피팅되어 있으므로 SI 입출력은 단위 변환을 거친다.
//! 입력: 온도(K), 출력: 압력(Pa abs)

use serde::{Deserialize, Serialize};

use crate::units::{kelvin_to_fahrenheit, psig_to_pascal, pressure::ATM_PSI};

/// 물리 기준점 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    TriplePoint,
    CriticalPoint,
}

/// 온도(K)·압력(Pa) 기준점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalPoint {
    pub kind: PointKind,
    pub temperature_k: f64,
    pub pressure_pa: f64,
}

/// CO2 삼중점
pub const TRIPLE_POINT: PhysicalPoint = PhysicalPoint {
    kind: PointKind::TriplePoint,
    temperature_k: 216.55,
    pressure_pa: 520_000.0,
};

/// CO2 임계점
pub const CRITICAL_POINT: PhysicalPoint = PhysicalPoint {
    kind: PointKind::CriticalPoint,
    temperature_k: 304.25,
    pressure_pa: 7_390_000.0,
};

// 경험식 계수, 낮은 차수부터 c0..c5. 보정 데이터로만 취급한다.
const FIT_COEFFS: [f64; 6] = [
    3.056_823_616_4e+02,
    5.169_266_284_8,
    2.883_391_935_7e-02,
    1.901_307_182_5e-04,
    -1.699_213_972_1e-06,
    1.163_563_772_8e-08,
];

/// 경계 곡선 샘플. 온도(K) 오름차순으로 정렬되어 있다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundaryCurveSample {
    pub temperatures_k: Vec<f64>,
    pub pressures_pa: Vec<f64>,
}

impl BoundaryCurveSample {
    pub fn len(&self) -> usize {
        self.temperatures_k.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures_k.is_empty()
    }

    /// (온도, 압력) 쌍을 순서대로 돌려준다.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temperatures_k
            .iter()
            .copied()
            .zip(self.pressures_pa.iter().copied())
    }
}

/// 증발/응축 압력(psig) - 입력 온도는 °F.
/// 유효 범위 검사는 하지 않는다. 삼중점~임계점 사이에서만 의미가 있다.
pub fn vaporization_pressure_psig(t_f: f64) -> f64 {
    // Horner 전개
    let poly = FIT_COEFFS
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * t_f + c);
    poly - ATM_PSI
}

/// 증발/응축 압력(Pa abs) - 입력 온도는 K.
pub fn vaporization_pressure_pascal(t_k: f64) -> f64 {
    psig_to_pascal(vaporization_pressure_psig(kelvin_to_fahrenheit(t_k)))
}

/// 임의 온도 목록(K)에 대한 경계 압력(Pa)을 계산한다.
pub fn pressures_for(temperatures_k: &[f64]) -> Vec<f64> {
    temperatures_k
        .iter()
        .map(|&t| vaporization_pressure_pascal(t))
        .collect()
}

/// `[start, end]` 구간을 양 끝 포함 `n`개로 등분한다.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // 마지막 점은 누적 오차 없이 끝점과 일치시킨다
            out[n - 1] = end;
            out
        }
    }
}

/// 삼중점~임계점 사이를 `n_points`개로 샘플링한 경계 곡선을 만든다.
/// 호출할 때마다 새로 계산하며 상태를 보관하지 않는다.
pub fn sample_boundary_curve(n_points: usize) -> BoundaryCurveSample {
    let temperatures_k = linspace(
        TRIPLE_POINT.temperature_k,
        CRITICAL_POINT.temperature_k,
        n_points,
    );
    let pressures_pa = pressures_for(&temperatures_k);
    BoundaryCurveSample {
        temperatures_k,
        pressures_pa,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_expanded_polynomial() {
        let t: f64 = 44.33;
        let expanded = 1.163_563_772_8e-08 * t.powi(5) - 1.699_213_972_1e-06 * t.powi(4)
            + 1.901_307_182_5e-04 * t.powi(3)
            + 2.883_391_935_7e-02 * t.powi(2)
            + 5.169_266_284_8 * t
            + 3.056_823_616_4e+02
            - 14.696;
        assert!((vaporization_pressure_psig(t) - expanded).abs() < 1e-9);
    }

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(216.55, 304.25, 25);
        assert_eq!(v.len(), 25);
        assert_eq!(v[0], 216.55);
        assert_eq!(v[24], 304.25);
    }

    #[test]
    fn degenerate_sample_counts() {
        assert!(sample_boundary_curve(0).is_empty());
        let one = sample_boundary_curve(1);
        assert_eq!(one.temperatures_k, vec![TRIPLE_POINT.temperature_k]);
    }
}
