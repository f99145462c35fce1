//! Render - 차트 라이브러리 경계
//!
//! 차트 라이브러리에 대한 호출을 `RenderCommand` 값으로 표현합니다.
//! 실제 그리기는 이 crate 밖의 `Renderer` 구현이 담당합니다.
//!
//! ```text
//! Chart ── apply(RenderCommand) ──▶ Renderer
//!                                    ├── RecordingRenderer (CommandLog)
//!                                    └── (native binding)
//! ```

use crate::chart::{ChartConfig, ChartKind, Color, Segment};
use charts_foundation::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// RenderCommand
// ============================================================================

/// 시리즈 차트 초기화 시 데이터셋 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetSpec {
    pub label: String,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub highlight_fill: Option<Color>,
    pub highlight_stroke: Option<Color>,
    pub data: Vec<f64>,
}

/// 차트 라이브러리 호출 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderCommand {
    /// Line / Bar / Radar 차트 생성
    InitSeries {
        element_id: String,
        kind: ChartKind,
        config: ChartConfig,
        datasets: Vec<DataSetSpec>,
        labels: Vec<String>,
    },

    /// Pie / Doughnut / PolarArea 차트 생성
    InitSegments {
        element_id: String,
        kind: ChartKind,
        config: ChartConfig,
        segments: Vec<Segment>,
    },

    /// 클릭 핸들러 연결
    AttachClickHandler { element_id: String, locator: String },

    /// 시리즈 끝에 열 추가
    AddValues { label: String, values: Vec<f64> },

    /// `index` 위치에 조각 추가
    AddSegment { index: usize, segment: Segment },

    RemoveData { index: usize },

    /// 각 데이터셋의 `collection[index]` 갱신
    UpdateValues {
        collection: String,
        datasets: usize,
        index: usize,
        label: String,
        values: Vec<f64>,
    },

    UpdateSegment {
        index: usize,
        label: String,
        value: f64,
    },

    /// 클릭 핸들러 해제 후 차트 제거
    Destroy,
}

// ============================================================================
// Renderer Trait
// ============================================================================

/// 렌더 명령을 받는 차트 라이브러리 바인딩
pub trait Renderer {
    /// 이름 (디버깅용)
    fn name(&self) -> &str {
        "renderer"
    }

    fn apply(&mut self, command: RenderCommand) -> Result<()>;
}

// ============================================================================
// RecordingRenderer
// ============================================================================

/// 공유 명령 로그
///
/// clone은 같은 로그를 가리킵니다.
#[derive(Debug, Clone, Default)]
pub struct CommandLog(Rc<RefCell<Vec<RenderCommand>>>);

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, command: RenderCommand) {
        self.0.borrow_mut().push(command);
    }

    pub fn commands(&self) -> Vec<RenderCommand> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<RenderCommand> {
        self.0.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.0.borrow())?)
    }
}

/// 명령을 기록만 하는 렌더러
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    log: CommandLog,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기존 로그에 이어서 기록
    pub fn with_log(log: CommandLog) -> Self {
        Self { log }
    }

    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }
}

impl Renderer for RecordingRenderer {
    fn name(&self) -> &str {
        "recording"
    }

    fn apply(&mut self, command: RenderCommand) -> Result<()> {
        self.log.push(command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_shared() {
        let mut renderer = RecordingRenderer::new();
        let log = renderer.log();

        renderer.apply(RenderCommand::RemoveData { index: 0 }).unwrap();
        renderer.apply(RenderCommand::Destroy).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some(RenderCommand::Destroy));
    }

    #[test]
    fn test_command_json() {
        let log = CommandLog::new();
        log.push(RenderCommand::AttachClickHandler {
            element_id: "chart".to_string(),
            locator: "getBarsAtEvent".to_string(),
        });

        let json: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["op"], "attach_click_handler");
        assert_eq!(json[0]["locator"], "getBarsAtEvent");
    }
}
