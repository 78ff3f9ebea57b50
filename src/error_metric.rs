//! 계산값과 기준값 비교용 로그 백분율 오차.
//!
//! `e = log10(|a - b| / |a|)`. 이름과 달리 백분율이 아니라 상대오차의 상용로그다.
//! -3은 약 0.1%, 0은 약 100% 오차를 뜻한다.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::series::{ensure_same_len, ScaleRange, SeriesError};

/// 0을 대신하는 기본 epsilon.
pub const DEFAULT_EPSILON: f64 = 1e-16;

/// 오차 히스토그램 기본 구간 수.
pub const HISTOGRAM_BINS: usize = 100;

/// 오차 히스토그램에 긋는 기준선 (로그 오차, 라벨).
pub const ERROR_MARKERS: [(f64, &str); 5] = [
    (-3.0, "0.1%"),
    (-2.0, "1%"),
    (-1.0, "10%"),
    (0.0, "100%"),
    (1.0, "1000%"),
];

/// 기준값 `a`의 0을 어떻게 다룰지 정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPolicy {
    /// 모든 0을 epsilon으로 바꾼다.
    #[default]
    ReplaceAll,
    /// 0이 두 개 이상일 때만 바꾼다. 0이 정확히 하나면 그 원소는 +inf가 된다.
    LegacyMultipleOnly,
}

/// 오차 계산 옵션.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMetricOptions {
    pub epsilon: f64,
    pub zero_policy: ZeroPolicy,
}

impl Default for ErrorMetricOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            zero_policy: ZeroPolicy::ReplaceAll,
        }
    }
}

/// 기본 옵션으로 로그 백분율 오차를 계산한다. `a`가 기준값, `b`가 계산값.
pub fn log_percentage_error(a: &[f64], b: &[f64]) -> Result<Vec<f64>, SeriesError> {
    log_percentage_error_with(a, b, ErrorMetricOptions::default())
}

/// 옵션을 지정해 로그 백분율 오차를 계산한다.
/// 출력 길이는 입력과 같고, NaN/inf 입력은 부동소수 규칙대로 전파된다.
pub fn log_percentage_error_with(
    a: &[f64],
    b: &[f64],
    opts: ErrorMetricOptions,
) -> Result<Vec<f64>, SeriesError> {
    ensure_same_len(a, b)?;

    let zero_count = a.iter().filter(|&&v| v == 0.0).count();
    let replace_zeros = match opts.zero_policy {
        ZeroPolicy::ReplaceAll => true,
        ZeroPolicy::LegacyMultipleOnly => zero_count > 1,
    };
    if zero_count > 0 {
        debug!(
            "기준값 0 {}개 (epsilon 대체: {})",
            zero_count, replace_zeros
        );
    }

    let out = a
        .iter()
        .zip(b)
        .map(|(&ai, &bi)| {
            let mut abs_err = (ai - bi).abs();
            if abs_err == 0.0 {
                abs_err = opts.epsilon;
            }
            let denom = if ai == 0.0 && replace_zeros {
                opts.epsilon
            } else {
                ai
            };
            (abs_err / denom).abs().log10()
        })
        .collect();
    Ok(out)
}

/// 누적 히스토그램. `fractions[i]`는 `edges[i + 1]` 이하인 표본 비율이다.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeHistogram {
    pub edges: Vec<f64>,
    pub fractions: Vec<f64>,
}

/// 유한한 값만으로 `bins`개 등간격 누적 히스토그램을 만든다.
/// 유한한 값이 없거나 `bins == 0`이면 `None`.
pub fn cumulative_histogram(values: &[f64], bins: usize) -> Option<CumulativeHistogram> {
    cumulative_histogram_with_total(values, bins, None)
}

/// 정규화 표본 수 `total`을 지정하는 누적 히스토그램.
///
/// 여러 히스토그램을 같은 기준으로 비교할 때 쓴다. `total`이 `None`이거나 0이면
/// 자기 유한 표본 수로 나누고, 그보다 크면 마지막 비율이 1보다 작다.
pub fn cumulative_histogram_with_total(
    values: &[f64],
    bins: usize,
    total: Option<usize>,
) -> Option<CumulativeHistogram> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if bins == 0 {
        return None;
    }
    let mut range = ScaleRange::of(&finite)?;
    if range.min == range.max {
        range.min -= 0.5;
        range.max += 0.5;
    }
    let width = (range.max - range.min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in &finite {
        let idx = (((v - range.min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let n = match total {
        Some(t) if t > 0 => t as f64,
        _ => finite.len() as f64,
    };
    let mut running = 0usize;
    let fractions = counts
        .iter()
        .map(|c| {
            running += c;
            running as f64 / n
        })
        .collect();
    let edges = (0..=bins)
        .map(|i| range.min + width * i as f64)
        .collect();
    Some(CumulativeHistogram { edges, fractions })
}

/// 오차 히스토그램의 x축 범위.
/// 폭이 0.5 이하이면 위쪽을 1 늘리고, 위쪽이 0 이하이면 0.2로 올린다.
pub fn error_axis_limits(values: &[f64]) -> Option<ScaleRange> {
    let mut range = ScaleRange::of(values)?;
    if (range.min - range.max).abs() <= 0.5 {
        range.max += 1.0;
    }
    if range.max <= 0.0 {
        range.max = 0.2;
    }
    Some(range)
}
