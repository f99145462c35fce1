//! charts-core: Chart model for charts
//!
//! Layer2 - 차트 모델 레이어
//!
//! # 주요 모듈
//!
//! - `chart`: 차트 핸들, 데이터 리스트, 색상/설정 값 객체, 클릭 디스패치
//! - `render`: 차트 라이브러리 경계 (`Renderer`, `RenderCommand`)
//!
//! # 사용 예시
//!
//! ```ignore
//! use charts_core::{Chart, Color, RecordingRenderer, ValueSet, Values};
//! use charts_foundation::{ListenerHandle, Modifiers};
//!
//! let chart = Chart::bar(vec![ValueSet::new(
//!     "My First dataset",
//!     Color::rgba(220, 220, 220, 0.2)?,
//!     Color::rgba(220, 220, 220, 1.0)?,
//! )]);
//! chart.data().push(Values::new("January", [65.0]))?;
//!
//! let renderer = RecordingRenderer::new();
//! let log = renderer.log();
//! chart.apply_to("barChart", renderer)?;
//!
//! chart.add_chart_listener(&ListenerHandle::from_fn("print", |event| {
//!     println!("{:?} {:?}", event.label(), event.values());
//! }));
//! chart.click("January", Modifiers::default());
//! ```

pub mod chart;
pub mod render;

// Re-exports: Chart
pub use chart::{
    Chart, ChartConfig, ChartKind, Color, DataList, DataPoint, Segment, ValueSet, Values,
    WeakChart,
};

// Re-exports: Render
pub use render::{CommandLog, DataSetSpec, RecordingRenderer, RenderCommand, Renderer};
