//! CO2 상경계 모델과 다중 패널 비교용 데이터 정렬 로직을 라이브러리로 분리하여
//! CLI 뿐 아니라 외부 렌더러에서도 쓸 수 있게 한다.

pub mod app;
pub mod co2;
pub mod config;
pub mod conversion;
pub mod error_metric;
pub mod presentation;
pub mod quantity;
pub mod series;
pub mod smoothing;
pub mod sync;
pub mod ui_cli;
pub mod units;

pub use series::{Series, SeriesError};
pub use sync::{shared_z_range, synchronize, SyncError, Synchronized};
