use std::fmt::Write as _;
use std::path::Path;

use clap::Subcommand;
use log::debug;
use thiserror::Error;

use crate::co2::{self, CRITICAL_POINT, TRIPLE_POINT};
use crate::config::Config;
use crate::conversion;
use crate::error_metric;
use crate::quantity::QuantityKind;
use crate::series::SeriesError;
use crate::smoothing;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] conversion::ConversionError),
    /// 데이터 형상 오류
    #[error("데이터 오류: {0}")]
    Series(#[from] SeriesError),
    /// 입력이 비어 계산할 수 없음
    #[error("입력 데이터가 비어 있습니다")]
    EmptyInput,
    /// 대화식 입력 도중 표준입력이 닫힘
    #[error("입력이 끝났습니다")]
    UnexpectedEof,
}

/// 비대화식 하위 명령.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 온도/압력 단위 변환
    Convert {
        /// temperature | pressure
        kind: String,
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 주어진 온도(K)의 CO2 경계 압력(Pa)
    Boundary {
        #[arg(allow_hyphen_values = true)]
        temperature_k: f64,
    },
    /// 삼중점~임계점 경계 곡선 샘플
    Curve {
        /// 샘플 수. 없으면 설정값을 쓴다.
        #[arg(long)]
        points: Option<usize>,
    },
    /// 로그 백분율 오차 (쉼표 구분 목록)
    Error {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        reference: Vec<f64>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        computed: Vec<f64>,
    },
    /// 지수 평활 보고서 (쉼표 구분 목록)
    Smooth {
        #[arg(value_delimiter = ',', allow_hyphen_values = true, required = true)]
        values: Vec<f64>,
    },
}

/// 하위 명령을 실행하고 출력할 문자열을 돌려준다.
pub fn execute(command: &Command, cfg: &Config) -> Result<String, AppError> {
    debug!("명령 실행: {command:?}");
    match command {
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let kind: QuantityKind = kind.parse()?;
            let result = conversion::convert(kind, *value, from, to)?;
            Ok(format!("{result} {}", to.trim()))
        }
        Command::Boundary { temperature_k } => Ok(format_boundary(*temperature_k)),
        Command::Curve { points } => Ok(format_curve(points.unwrap_or(cfg.boundary_samples))),
        Command::Error {
            reference,
            computed,
        } => {
            let e = error_metric::log_percentage_error_with(
                reference,
                computed,
                cfg.error_options(),
            )?;
            Ok(format_values(&e))
        }
        Command::Smooth { values } => format_smoothing(values, cfg),
    }
}

pub(crate) fn format_boundary(t_k: f64) -> String {
    let mut out = String::new();
    if t_k < TRIPLE_POINT.temperature_k || t_k > CRITICAL_POINT.temperature_k {
        let _ = writeln!(
            out,
            "주의: {t_k} K는 삼중점~임계점({} ~ {} K) 범위 밖입니다.",
            TRIPLE_POINT.temperature_k, CRITICAL_POINT.temperature_k
        );
    }
    let _ = write!(
        out,
        "경계 압력: {:.1} Pa",
        co2::vaporization_pressure_pascal(t_k)
    );
    out
}

pub(crate) fn format_curve(points: usize) -> String {
    let curve = co2::sample_boundary_curve(points);
    let mut out = String::from("T[K]\tP[Pa]");
    for (t, p) in curve.points() {
        let _ = write!(out, "\n{t:.3}\t{p:.1}");
    }
    out
}

pub(crate) fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.4}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn format_smoothing(values: &[f64], cfg: &Config) -> Result<String, AppError> {
    let report = smoothing::smoothing_report(values, &cfg.smoothing).ok_or(AppError::EmptyInput)?;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "평균 백분율 오차: {:.2}%",
        report.average_error_percentage
    );
    match report.time_to_average_error_s {
        Some(t) => {
            let _ = writeln!(out, "평균 오차 도달 시간: {t:.2} s");
        }
        None => {
            let _ = writeln!(out, "평균 오차 도달 시간: 없음");
        }
    }
    let _ = write!(
        out,
        "백분율 오차 표준편차: {:.5}",
        report.error_percentage_std_dev
    );
    Ok(out)
}

/// 대화식 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(config)?,
            MenuChoice::BoundaryPressure => ui_cli::handle_boundary_pressure(config)?,
            MenuChoice::BoundaryCurve => ui_cli::handle_boundary_curve(config)?,
            MenuChoice::LogError => ui_cli::handle_log_error(config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
