use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::error_metric::{ErrorMetricOptions, ZeroPolicy, DEFAULT_EPSILON};
use crate::presentation::FigureParameters;
use crate::smoothing::SmoothingOptions;
use crate::sync::DEFAULT_SENTINEL;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 빠진 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 센티널 점의 x, y 좌표. 축 범위 밖이어야 한다.
    pub sentinel: f64,
    /// 오차 계산에서 0 대신 쓰는 값
    pub epsilon: f64,
    pub zero_policy: ZeroPolicy,
    /// 경계 곡선 오버레이 샘플 수
    pub boundary_samples: usize,
    /// x축 하한(K)
    pub x_floor: f64,
    pub smoothing: SmoothingOptions,
    pub figure: FigureParameters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            epsilon: DEFAULT_EPSILON,
            zero_policy: ZeroPolicy::ReplaceAll,
            boundary_samples: 25,
            x_floor: 240.0,
            smoothing: SmoothingOptions::default(),
            figure: FigureParameters::default(),
        }
    }
}

impl Config {
    /// 오차 계산 옵션으로 변환한다.
    pub fn error_options(&self) -> ErrorMetricOptions {
        ErrorMetricOptions {
            epsilon: self.epsilon,
            zero_policy: self.zero_policy,
        }
    }

    /// 설정을 지정 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!("설정 로드: {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!("기본 설정 생성: {}", path.display());
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Brackets;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            sentinel = -5000.0
            zero_policy = "legacy_multiple_only"

            [figure]
            brackets = "round"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.sentinel, -5000.0);
        assert_eq!(cfg.zero_policy, ZeroPolicy::LegacyMultipleOnly);
        assert_eq!(cfg.boundary_samples, 25);
        assert_eq!(cfg.figure.brackets, Brackets::Round);
        assert_eq!(cfg.figure.font_size, FigureParameters::default().font_size);
    }

    #[test]
    fn missing_file_is_created_then_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let created = load_or_default(&path).unwrap();
        assert_eq!(created, Config::default());
        assert!(path.exists());

        let mut edited = created.clone();
        edited.zero_policy = ZeroPolicy::LegacyMultipleOnly;
        edited.boundary_samples = 40;
        edited.save(&path).unwrap();

        let reloaded = load_or_default(&path).unwrap();
        assert_eq!(reloaded, edited);
    }

    #[test]
    fn broken_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sentinel = \"low\"").unwrap();
        assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn default_round_trips_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }
}
