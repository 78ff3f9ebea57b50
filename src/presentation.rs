//! 표시 계층과의 경계.
//!
//! 실제 그림 생성은 외부 구현([`PresentationLayer`])이 맡는다. 이 모듈은 패널 데이터를
//! 준비해 넘기고, 전역 상태 대신 [`FigureParameters`]를 명시적으로 전달한다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::co2::{sample_boundary_curve, BoundaryCurveSample};
use crate::config::Config;
use crate::error_metric::{
    cumulative_histogram, error_axis_limits, CumulativeHistogram, ERROR_MARKERS, HISTOGRAM_BINS,
};
use crate::series::{visible_limits, AxisLimits, ScaleRange, Series};
use crate::sync::{synchronize, SyncError, Synchronized};

/// 단위 표기 괄호 모양.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brackets {
    Round,
    Square,
}

/// 그림 크기·글꼴·여백 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureParameters {
    pub font_size: f64,
    /// 그림 폭(inch)
    pub width: f64,
    pub ratio: f64,
    /// 그림 높이(inch)
    pub height: f64,
    /// 작은 그림용 높이 비율 (0 <= x < 1)
    pub height_small_percentage: f64,
    pub adjust_bottom: f64,
    pub adjust_left: f64,
    pub adjust_subplot_label: f64,
    pub adjust_subplot_wspace: f64,
    pub adjust_subplot_hspace: f64,
    pub schematic_adjust_bottom_no_ticks: f64,
    pub adjust_subplot_label_right_x: f64,
    pub adjust_subplot_label_right_y: f64,
    pub brackets: Brackets,
}

impl Default for FigureParameters {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            width: 6.0,
            ratio: 0.75,
            height: 4.5,
            height_small_percentage: 0.6,
            adjust_bottom: 0.15,
            adjust_left: 0.15,
            adjust_subplot_label: -0.25,
            adjust_subplot_wspace: 0.3,
            adjust_subplot_hspace: 0.2,
            schematic_adjust_bottom_no_ticks: 0.05,
            adjust_subplot_label_right_x: 0.56,
            adjust_subplot_label_right_y: 0.0,
            brackets: Brackets::Square,
        }
    }
}

/// siunitx 단위 문자열을 괄호로 감싼다. 단위가 없으면 빈 문자열.
pub fn latex_unit(unit: Option<&str>, brackets: Brackets) -> String {
    match (unit, brackets) {
        (None, _) => String::new(),
        (Some(u), Brackets::Round) => format!("$\\left( \\si{{{u}}} \\right)$"),
        (Some(u), Brackets::Square) => format!("$\\left[ \\si{{{u}}} \\right]$"),
    }
}

/// `"라벨 [단위]"` 형태의 축 제목.
pub fn axis_label(label: &str, unit: Option<&str>, brackets: Brackets) -> String {
    format!("{label} {}", latex_unit(unit, brackets))
}

/// 패널 색상 맵.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    /// 일반 데이터
    Spectral,
    /// 오차 데이터
    Reds,
}

/// 패널 하나를 그리는 데 필요한 값.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub index: usize,
    pub series: Series,
    pub color_map: ColorMap,
    /// 색상 스케일 범위. 렌더러가 지원하면 센티널 대신 이 값을 쓴다.
    pub range: ScaleRange,
    /// 실제 데이터 기준 축 범위
    pub limits: AxisLimits,
    pub title: Option<String>,
}

/// 누적 오차 히스토그램 패널.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    pub index: usize,
    pub histogram: CumulativeHistogram,
    /// x축(로그 오차) 범위
    pub x_limits: ScaleRange,
    /// 세로 기준선 (로그 오차, 라벨)
    pub markers: &'static [(f64, &'static str)],
}

/// 적합 분석 그림의 패널 제목. 기준, 적합 구간, 계산 결과, 오차 순서.
pub const FIT_ANALYSIS_TITLES: [&str; 4] = [
    "NIST",
    "Section To Fit",
    "Calculated Surface",
    "Log Percentage Error",
];

/// 색상 막대 종횡비.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorbarLayout {
    pub normal_aspect: u32,
    pub error_aspect: u32,
}

impl ColorbarLayout {
    /// 패널 세 개를 1+2 또는 2+1로 나눌 때만 한쪽 막대를 짧게 한다.
    pub fn for_panels(normal: usize, error: usize) -> Self {
        match (normal, error) {
            (1, 2) => Self {
                normal_aspect: 15,
                error_aspect: 30,
            },
            (2, 1) => Self {
                normal_aspect: 30,
                error_aspect: 15,
            },
            _ => Self {
                normal_aspect: 30,
                error_aspect: 30,
            },
        }
    }
}

/// 표시 계층 오류.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error(transparent)]
    Sync(#[from] SyncError),
    /// 외부 렌더러가 돌려준 오류
    #[error("렌더링 오류: {0}")]
    Backend(String),
}

/// 외부 렌더러가 구현하는 인터페이스.
pub trait PresentationLayer {
    fn draw_panel(&mut self, panel: &PanelSpec) -> Result<(), PresentationError>;

    fn draw_overlay(
        &mut self,
        panel_index: usize,
        curve: &BoundaryCurveSample,
    ) -> Result<(), PresentationError>;

    fn draw_histogram(&mut self, histogram: &HistogramSpec) -> Result<(), PresentationError>;

    fn finish(
        &mut self,
        figure: &FigureParameters,
        colorbars: &ColorbarLayout,
    ) -> Result<(), PresentationError>;
}

fn sync_if_any(group: &[Series], sentinel: f64) -> Result<Option<Synchronized>, SyncError> {
    if group.is_empty() {
        return Ok(None);
    }
    synchronize(group, sentinel).map(Some)
}

/// 일반 패널과 오차 패널을 세로로 쌓아 렌더러에 넘긴다.
///
/// 두 그룹은 각각 따로 색상 범위를 맞추고, 축 범위는 첫 그룹의 첫 시리즈(실제 데이터)에서
/// 구한다. 모든 패널에 CO2 경계 곡선을 겹쳐 그린다.
pub fn compose_normals_errors<L: PresentationLayer>(
    normals: &[Series],
    errors: &[Series],
    cfg: &Config,
    layer: &mut L,
) -> Result<ColorbarLayout, PresentationError> {
    if normals.is_empty() && errors.is_empty() {
        return Err(SyncError::InvalidGroupSize(0).into());
    }
    let normal_sync = sync_if_any(normals, cfg.sentinel)?;
    let error_sync = sync_if_any(errors, cfg.sentinel)?;

    let reference = normals.first().or_else(|| errors.first());
    let limits = reference
        .and_then(|s| visible_limits(s, cfg.x_floor))
        .ok_or(SyncError::EmptySeries(0))?;

    let curve = sample_boundary_curve(cfg.boundary_samples);
    let groups = [
        (normal_sync, ColorMap::Spectral),
        (error_sync, ColorMap::Reds),
    ];

    let mut index = 0;
    for (synced, color_map) in groups {
        let Some(synced) = synced else { continue };
        for series in synced.series {
            layer.draw_panel(&PanelSpec {
                index,
                series,
                color_map,
                range: synced.range,
                limits,
                title: None,
            })?;
            layer.draw_overlay(index, &curve)?;
            index += 1;
        }
    }

    let colorbars = ColorbarLayout::for_panels(normals.len(), errors.len());
    layer.finish(&cfg.figure, &colorbars)?;
    Ok(colorbars)
}

/// 적합 분석 그림: 기준·적합 구간·계산 결과 세 패널, 오차 패널, 오차 히스토그램.
///
/// 앞의 세 패널은 한 그룹으로 색상 범위를 맞추고 색상 막대 하나를 공유한다.
/// 오차 패널은 따로 두며 동기화하지 않는다. 축 범위는 `reference`에서 구하고,
/// 경계 곡선은 산점도 네 개에만 겹친다.
pub fn compose_fit_analysis<L: PresentationLayer>(
    reference: &Series,
    section: &Series,
    fitted: &Series,
    error: &Series,
    cfg: &Config,
    layer: &mut L,
) -> Result<ColorbarLayout, PresentationError> {
    let normals = synchronize(
        &[reference.clone(), section.clone(), fitted.clone()],
        cfg.sentinel,
    )?;
    let error_range = error.z_range().ok_or(SyncError::EmptySeries(3))?;
    let limits = visible_limits(reference, cfg.x_floor).ok_or(SyncError::EmptySeries(0))?;
    let curve = sample_boundary_curve(cfg.boundary_samples);

    let normal_range = normals.range;
    let panels = normals
        .series
        .into_iter()
        .map(|series| (series, ColorMap::Spectral, normal_range))
        .chain(std::iter::once((error.clone(), ColorMap::Reds, error_range)));
    for (index, (series, color_map, range)) in panels.enumerate() {
        layer.draw_panel(&PanelSpec {
            index,
            series,
            color_map,
            range,
            limits,
            title: FIT_ANALYSIS_TITLES.get(index).map(|t| t.to_string()),
        })?;
        layer.draw_overlay(index, &curve)?;
    }

    let histogram = cumulative_histogram(error.z(), HISTOGRAM_BINS)
        .ok_or(SyncError::EmptySeries(3))?;
    let x_limits = error_axis_limits(error.z()).ok_or(SyncError::EmptySeries(3))?;
    layer.draw_histogram(&HistogramSpec {
        index: FIT_ANALYSIS_TITLES.len(),
        histogram,
        x_limits,
        markers: &ERROR_MARKERS,
    })?;

    let colorbars = ColorbarLayout::for_panels(3, 1);
    layer.finish(&cfg.figure, &colorbars)?;
    Ok(colorbars)
}
