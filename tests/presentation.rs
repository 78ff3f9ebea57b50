//! 표시 계층 연동 테스트. 기록용 렌더러로 호출 순서와 전달값을 확인한다.
use phase_plot_toolbox::co2::BoundaryCurveSample;
use phase_plot_toolbox::config::Config;
use phase_plot_toolbox::error_metric::ERROR_MARKERS;
use phase_plot_toolbox::presentation::{
    compose_fit_analysis, compose_normals_errors, ColorMap, ColorbarLayout, FigureParameters,
    HistogramSpec, PanelSpec, PresentationError, PresentationLayer,
};
use phase_plot_toolbox::series::{ScaleRange, Series};
use phase_plot_toolbox::sync::SyncError;

#[derive(Default)]
struct Recorder {
    panels: Vec<PanelSpec>,
    overlays: Vec<(usize, usize)>,
    histograms: Vec<HistogramSpec>,
    finished: Option<ColorbarLayout>,
}

impl PresentationLayer for Recorder {
    fn draw_panel(&mut self, panel: &PanelSpec) -> Result<(), PresentationError> {
        self.panels.push(panel.clone());
        Ok(())
    }

    fn draw_overlay(
        &mut self,
        panel_index: usize,
        curve: &BoundaryCurveSample,
    ) -> Result<(), PresentationError> {
        self.overlays.push((panel_index, curve.len()));
        Ok(())
    }

    fn draw_histogram(&mut self, histogram: &HistogramSpec) -> Result<(), PresentationError> {
        self.histograms.push(histogram.clone());
        Ok(())
    }

    fn finish(
        &mut self,
        _figure: &FigureParameters,
        colorbars: &ColorbarLayout,
    ) -> Result<(), PresentationError> {
        self.finished = Some(*colorbars);
        Ok(())
    }
}

struct Failing;

impl PresentationLayer for Failing {
    fn draw_panel(&mut self, _panel: &PanelSpec) -> Result<(), PresentationError> {
        Err(PresentationError::Backend("canvas closed".into()))
    }

    fn draw_overlay(&mut self, _: usize, _: &BoundaryCurveSample) -> Result<(), PresentationError> {
        Ok(())
    }

    fn draw_histogram(&mut self, _: &HistogramSpec) -> Result<(), PresentationError> {
        Ok(())
    }

    fn finish(&mut self, _: &FigureParameters, _: &ColorbarLayout) -> Result<(), PresentationError> {
        Ok(())
    }
}

fn series(x_max: f64, y_max: f64, z: Vec<f64>) -> Series {
    let n = z.len();
    Series::new(vec![x_max; n], vec![y_max; n], z).expect("equal lengths")
}

#[test]
fn normals_and_errors_are_synced_separately() {
    let normals = vec![series(300.0, 6.0e6, vec![0.0, 10.0]), series(290.0, 5.0e6, vec![5.0, 20.0])];
    let errors = vec![series(300.0, 6.0e6, vec![-4.0, -1.0])];
    let cfg = Config::default();
    let mut rec = Recorder::default();

    let layout = compose_normals_errors(&normals, &errors, &cfg, &mut rec).expect("compose");

    assert_eq!(layout, ColorbarLayout::for_panels(2, 1));
    assert_eq!(rec.finished, Some(layout));
    assert_eq!(rec.panels.len(), 3);
    assert_eq!(rec.panels[0].color_map, ColorMap::Spectral);
    assert_eq!(rec.panels[1].range, ScaleRange { min: 0.0, max: 20.0 });
    assert_eq!(rec.panels[2].color_map, ColorMap::Reds);
    assert_eq!(rec.panels[2].range, ScaleRange { min: -4.0, max: -1.0 });
    // 오차 그룹은 하나뿐이라 센티널이 붙지 않는다
    assert_eq!(rec.panels[2].series.len(), 2);

    for p in &rec.panels {
        assert_eq!(p.limits.x, ScaleRange { min: cfg.x_floor, max: 300.0 });
        assert_eq!(p.limits.y, ScaleRange { min: 0.0, max: 6.0e6 });
        assert!(p.series.x().iter().all(|&x| x == cfg.sentinel || x >= p.limits.x.min));
    }
    assert_eq!(rec.overlays, vec![(0, 25), (1, 25), (2, 25)]);
}

#[test]
fn errors_only_take_limits_from_errors() {
    let errors = vec![series(280.0, 3.0e6, vec![-2.0])];
    let mut rec = Recorder::default();
    compose_normals_errors(&[], &errors, &Config::default(), &mut rec).expect("compose");
    assert_eq!(rec.panels.len(), 1);
    assert_eq!(rec.panels[0].limits.x.max, 280.0);
}

#[test]
fn nothing_to_draw_is_an_error() {
    let mut rec = Recorder::default();
    let err = compose_normals_errors(&[], &[], &Config::default(), &mut rec).unwrap_err();
    assert!(matches!(err, PresentationError::Sync(SyncError::InvalidGroupSize(0))));
    assert!(rec.panels.is_empty());
}

#[test]
fn backend_errors_propagate() {
    let normals = vec![series(300.0, 6.0e6, vec![1.0])];
    let err = compose_normals_errors(&normals, &[], &Config::default(), &mut Failing).unwrap_err();
    assert!(matches!(err, PresentationError::Backend(msg) if msg == "canvas closed"));
}

#[test]
fn fit_analysis_syncs_three_panels_and_adds_histogram() {
    let reference = series(304.0, 7.0e6, vec![100.0, 900.0]);
    let section = series(290.0, 5.0e6, vec![200.0, 600.0]);
    let fitted = series(295.0, 6.0e6, vec![150.0, 1000.0]);
    let error = series(300.0, 6.5e6, vec![-4.0, -3.5, -2.0, -1.0]);
    let cfg = Config::default();
    let mut rec = Recorder::default();

    let layout =
        compose_fit_analysis(&reference, &section, &fitted, &error, &cfg, &mut rec).expect("compose");

    assert_eq!(layout, ColorbarLayout::for_panels(3, 1));
    assert_eq!(rec.finished, Some(layout));

    let titles: Vec<_> = rec.panels.iter().map(|p| p.title.as_deref()).collect();
    assert_eq!(
        titles,
        vec![
            Some("NIST"),
            Some("Section To Fit"),
            Some("Calculated Surface"),
            Some("Log Percentage Error")
        ]
    );
    for p in &rec.panels[..3] {
        assert_eq!(p.color_map, ColorMap::Spectral);
        assert_eq!(p.range, ScaleRange { min: 100.0, max: 1000.0 });
        // 2 + 3개 그룹 x (최소, 최대)
        assert_eq!(p.series.len(), 2 + 6);
    }
    let err_panel = &rec.panels[3];
    assert_eq!(err_panel.color_map, ColorMap::Reds);
    assert_eq!(err_panel.range, ScaleRange { min: -4.0, max: -1.0 });
    assert_eq!(err_panel.series, error);

    for p in &rec.panels {
        assert_eq!(p.limits.x, ScaleRange { min: cfg.x_floor, max: 304.0 });
        assert_eq!(p.limits.y, ScaleRange { min: 0.0, max: 7.0e6 });
    }
    assert_eq!(rec.overlays, vec![(0, 25), (1, 25), (2, 25), (3, 25)]);

    assert_eq!(rec.histograms.len(), 1);
    let hist = &rec.histograms[0];
    assert_eq!(hist.index, 4);
    assert_eq!(hist.histogram.fractions.len(), 100);
    assert_eq!(hist.histogram.fractions.last().copied(), Some(1.0));
    assert_eq!(hist.x_limits, ScaleRange { min: -4.0, max: 0.2 });
    assert_eq!(hist.markers, &ERROR_MARKERS[..]);
}

#[test]
fn fit_analysis_needs_error_data() {
    let s = series(300.0, 6.0e6, vec![1.0]);
    let empty = Series::default();
    let mut rec = Recorder::default();
    let err = compose_fit_analysis(&s, &s, &s, &empty, &Config::default(), &mut rec).unwrap_err();
    assert!(matches!(err, PresentationError::Sync(SyncError::EmptySeries(3))));
    assert!(rec.panels.is_empty());
}
