//! 3D 산점도 주석용 임계 평면 격자. 실제 그리기는 표시 계층이 담당한다.

use super::phase_boundary::{linspace, CRITICAL_POINT};

/// `n x n` 격자. `x[i][j]`, `y[i][j]`, `z[i][j]`가 한 점을 이룬다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaneGrid {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// 가로축 값 `a`, 세로축 값 `b`로 meshgrid를 만든다. 행은 `b`, 열은 `a`를 따른다.
fn mesh(a: &[f64], b: &[f64]) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let rows_a = b.iter().map(|_| a.to_vec()).collect();
    let rows_b = b.iter().map(|&bv| vec![bv; a.len()]).collect();
    (rows_a, rows_b)
}

/// 임계 온도(x = T_c) 평면. 압력(y)과 z 데이터 범위를 덮는다.
/// 입력이 비어 있으면 `None`.
pub fn critical_temperature_plane(y: &[f64], z: &[f64], n: usize) -> Option<PlaneGrid> {
    let (y_lo, y_hi) = min_max(y)?;
    let (z_lo, z_hi) = min_max(z)?;
    let (ys, zs) = mesh(&linspace(y_lo, y_hi, n), &linspace(z_lo, z_hi, n));
    let xs = ys
        .iter()
        .map(|row| vec![CRITICAL_POINT.temperature_k; row.len()])
        .collect();
    Some(PlaneGrid { x: xs, y: ys, z: zs })
}

/// 임계 압력(y = P_c) 평면. 온도(x)와 z 데이터 범위를 덮는다.
pub fn critical_pressure_plane(x: &[f64], z: &[f64], n: usize) -> Option<PlaneGrid> {
    let (x_lo, x_hi) = min_max(x)?;
    let (z_lo, z_hi) = min_max(z)?;
    let (xs, zs) = mesh(&linspace(x_lo, x_hi, n), &linspace(z_lo, z_hi, n));
    let ys = xs
        .iter()
        .map(|row| vec![CRITICAL_POINT.pressure_pa; row.len()])
        .collect();
    Some(PlaneGrid { x: xs, y: ys, z: zs })
}
