//! Config - 설정 관리
//!
//! - `charts.rs` - ChartsConfig 데모/렌더 설정

mod charts;

pub use charts::{ChartsConfig, ChartsConfigLayer, CHARTS_CONFIG_FILE, DEFAULT_PALETTE};
