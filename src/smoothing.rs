//! 1차 지수 필터로 신호를 평활하고 수렴 특성을 요약한다.

use serde::{Deserialize, Serialize};

/// 평활 보고서 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingOptions {
    /// 필터 계수. 클수록 느리게 따라간다.
    pub factor: f64,
    /// 표본 간격(s)
    pub sample_period_s: f64,
    /// 평균 오차를 구할 마지막 구간 길이(표본 수)
    pub stable_window: usize,
    /// 수렴 시간 판정용 이동평균 창 크기
    pub moving_average_window: usize,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            factor: 20.0,
            sample_period_s: 0.035,
            stable_window: 1000,
            // 15 * 0.035 s ~ 0.5 s
            moving_average_window: 15,
        }
    }
}

/// 평활 결과 요약.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingReport {
    pub time_s: Vec<f64>,
    pub smoothed: Vec<f64>,
    pub error: Vec<f64>,
    pub error_percentage: Vec<f64>,
    /// 안정 구간 평균 절대오차
    pub average_error: f64,
    /// 안정 구간 평균 절대 백분율 오차
    pub average_error_percentage: f64,
    /// |백분율 오차| 이동평균이 처음 평균 아래로 내려간 시각. 없으면 `None`.
    pub time_to_average_error_s: Option<f64>,
    /// 백분율 오차 표준편차(모집단)
    pub error_percentage_std_dev: f64,
}

/// `s += (v - s) / factor`, 초기값 0.
pub fn exponential_smoothing(data: &[f64], factor: f64) -> Vec<f64> {
    let mut s = 0.0;
    data.iter()
        .map(|&v| {
            s += (v - s) / factor;
            s
        })
        .collect()
}

/// 균등 가중 이동평균. 창이 완전히 겹치는 구간만 돌려준다.
pub fn moving_average(data: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || data.len() < window {
        return Vec::new();
    }
    data.windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// 신호를 평활하고 오차 통계를 계산한다. 빈 입력이면 `None`.
pub fn smoothing_report(data: &[f64], opts: &SmoothingOptions) -> Option<SmoothingReport> {
    if data.is_empty() {
        return None;
    }
    let n = data.len();
    let smoothed = exponential_smoothing(data, opts.factor);
    let error: Vec<f64> = data.iter().zip(&smoothed).map(|(d, s)| d - s).collect();
    let error_percentage: Vec<f64> = error
        .iter()
        .zip(data)
        .map(|(e, d)| e / d * 100.0)
        .collect();

    let start = n.saturating_sub(opts.stable_window.max(1));
    let abs_error: Vec<f64> = error[start..].iter().map(|e| e.abs()).collect();
    let abs_pct: Vec<f64> = error_percentage[start..].iter().map(|e| e.abs()).collect();
    let average_error = mean(&abs_error);
    let average_error_percentage = mean(&abs_pct);

    let time_s: Vec<f64> = (0..n).map(|i| opts.sample_period_s * i as f64).collect();

    let all_abs_pct: Vec<f64> = error_percentage.iter().map(|e| e.abs()).collect();
    let time_to_average_error_s = moving_average(&all_abs_pct, opts.moving_average_window)
        .iter()
        .position(|&m| m < average_error_percentage)
        .map(|i| time_s[i]);

    let pct_mean = mean(&error_percentage);
    let variance = error_percentage
        .iter()
        .map(|e| (e - pct_mean).powi(2))
        .sum::<f64>()
        / n as f64;

    Some(SmoothingReport {
        time_s,
        smoothed,
        error,
        error_percentage,
        average_error,
        average_error_percentage,
        time_to_average_error_s,
        error_percentage_std_dev: variance.sqrt(),
    })
}
