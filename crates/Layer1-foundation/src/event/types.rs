//! Event Types - 차트 상호작용 이벤트 정의
//!
//! 차트 클릭 시 리스너에게 전달되는 페이로드입니다.

use serde::{Deserialize, Serialize};

// ============================================================================
// Chart ID
// ============================================================================

/// 차트 고유 ID (이벤트의 발생 차트 참조)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartId(pub uuid::Uuid);

impl ChartId {
    /// 새 차트 ID 생성
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ChartId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chart-{}", self.0)
    }
}

// ============================================================================
// Modifiers
// ============================================================================

/// 클릭 시점의 modifier 키 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }

    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

// ============================================================================
// Hit
// ============================================================================

/// 포인터 아래에 있던 요소 하나 (label, value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub label: String,
    pub value: f64,
}

impl Hit {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// ============================================================================
// ChartEvent
// ============================================================================

/// 차트에서 발생한 클릭/활성화 이벤트
///
/// 여러 데이터셋에 걸친 hit 목록을 평탄화해서 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEvent {
    /// 이벤트가 발생한 차트
    pub source: ChartId,

    /// modifier 키 상태
    pub modifiers: Modifiers,

    /// 클릭된 요소들 (데이터셋 순서)
    pub hits: Vec<Hit>,
}

impl ChartEvent {
    pub fn new(source: ChartId, modifiers: Modifiers, hits: Vec<Hit>) -> Self {
        Self {
            source,
            modifiers,
            hits,
        }
    }

    /// 액션이 발생한 요소의 이름 (첫 번째 hit)
    pub fn label(&self) -> Option<&str> {
        self.hits.first().map(|h| h.label.as_str())
    }

    /// 액션이 발생한 위치의 값들
    pub fn values(&self) -> Vec<f64> {
        self.hits.iter().map(|h| h.value).collect()
    }

    pub fn is_shift_key(&self) -> bool {
        self.modifiers.shift
    }

    pub fn is_ctrl_key(&self) -> bool {
        self.modifiers.ctrl
    }

    pub fn is_alt_key(&self) -> bool {
        self.modifiers.alt
    }

    pub fn is_meta_key(&self) -> bool {
        self.modifiers.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_values() {
        let event = ChartEvent::new(
            ChartId::new(),
            Modifiers::new().with_ctrl(true),
            vec![Hit::new("March", 80.0), Hit::new("March", 40.0)],
        );

        assert_eq!(event.label(), Some("March"));
        assert_eq!(event.values(), vec![80.0, 40.0]);
        assert!(event.is_ctrl_key());
        assert!(!event.is_shift_key());
    }

    #[test]
    fn test_empty_hits() {
        let event = ChartEvent::new(ChartId::new(), Modifiers::default(), vec![]);
        assert_eq!(event.label(), None);
        assert!(event.values().is_empty());
    }

    #[test]
    fn test_serialize() {
        let event = ChartEvent::new(
            ChartId::new(),
            Modifiers::new().with_shift(true),
            vec![Hit::new("May", 56.0)],
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["modifiers"]["shift"], true);
        assert_eq!(json["hits"][0]["label"], "May");
    }
}
