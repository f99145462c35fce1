//! Generic chart configuration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 범용 차트 설정
///
/// 임의의 속성을 이름으로 지정하고 라이브러리에 그대로 전달합니다.
/// (예: `animation`, `scaleShowGridLines`, `responsive`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartConfig {
    properties: Map<String, Value>,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 속성 지정 (문자열, 정수, 실수, bool 등)
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_chain() {
        let mut config = ChartConfig::new();
        config
            .set("animation", false)
            .set("scaleSteps", 10)
            .set("tooltipTitleFontFamily", "Helvetica");

        assert_eq!(config.len(), 3);
        assert_eq!(config.get("animation"), Some(&Value::Bool(false)));
        assert_eq!(
            serde_json::to_value(&config).unwrap()["scaleSteps"],
            Value::from(10)
        );
    }

    #[test]
    fn test_overwrite() {
        let mut config = ChartConfig::new();
        config.set("responsive", false).set("responsive", true);
        assert_eq!(config.len(), 1);
        assert_eq!(config.get("responsive"), Some(&Value::Bool(true)));
    }
}
