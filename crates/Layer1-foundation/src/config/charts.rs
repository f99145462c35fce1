//! Charts Config - 통합 설정
//!
//! 글로벌 + 프로젝트 JSON 파일을 병합해서 사용합니다.
//! 파일은 `ChartsConfigLayer`로 읽어서, 파일에 실제로 적힌 필드만 앞의 값을 덮어씁니다.

use crate::storage::JsonStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 설정 파일명
pub const CHARTS_CONFIG_FILE: &str = "charts.json";

/// 기본 팔레트
pub const DEFAULT_PALETTE: [&str; 9] = [
    "#4D4D4D", "#5DA5DA", "#FAA43A", "#60BD68", "#F17CB0", "#B2912F", "#B276B2", "#DECF3F",
    "#F15854",
];

// ============================================================================
// Charts Config
// ============================================================================

/// charts 설정 (병합이 끝난 값)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartsConfig {
    /// 차트를 붙일 요소 ID
    pub element_id: String,

    /// 색상 팔레트 (CSS 색상 문자열)
    pub palette: Vec<String>,

    /// 데모 값 생성용 시드 (없으면 랜덤)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// 처음 보여줄 차트 종류
    pub default_kind: String,

    /// 렌더 명령을 JSON으로 출력할지
    pub record_commands: bool,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            element_id: "chart".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            seed: None,
            default_kind: "bar".to_string(),
            record_commands: false,
        }
    }
}

/// 설정 파일 하나의 내용. 적히지 않은 필드는 `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartsConfigLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_commands: Option<bool>,
}

impl From<&ChartsConfig> for ChartsConfigLayer {
    fn from(config: &ChartsConfig) -> Self {
        Self {
            element_id: Some(config.element_id.clone()),
            palette: Some(config.palette.clone()),
            seed: config.seed,
            default_kind: Some(config.default_kind.clone()),
            record_commands: Some(config.record_commands),
        }
    }
}

impl ChartsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드
    pub fn load() -> Result<Self> {
        let mut config = Self::new();

        // 1. 글로벌 설정
        if let Ok(global) = JsonStore::global() {
            if let Some(layer) = global.load_optional::<ChartsConfigLayer>(CHARTS_CONFIG_FILE)? {
                debug!(path = %global.file_path(CHARTS_CONFIG_FILE).display(), "Loaded global config");
                config.merge(layer);
            }
        }

        // 2. 프로젝트 설정
        if let Ok(project) = JsonStore::current_project() {
            if let Some(layer) = project.load_optional::<ChartsConfigLayer>(CHARTS_CONFIG_FILE)? {
                debug!(path = %project.file_path(CHARTS_CONFIG_FILE).display(), "Loaded project config");
                config.merge(layer);
            }
        }

        Ok(config)
    }

    /// 특정 파일에서 로드 (기본값 위에 병합)
    pub fn load_from(path: &Path) -> Result<Self> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::Config(format!("Invalid config path: {}", path.display())))?;

        let mut config = Self::new();
        config.merge(JsonStore::new(dir).load::<ChartsConfigLayer>(filename)?);
        Ok(config)
    }

    /// `root/.charts/charts.json`에 저장하고 경로 반환
    pub fn save_project(&self, root: impl AsRef<Path>) -> Result<PathBuf> {
        let store = JsonStore::project(root);
        store.save(CHARTS_CONFIG_FILE, self)?;
        Ok(store.file_path(CHARTS_CONFIG_FILE))
    }

    // ========================================================================
    // Merge / Validate
    // ========================================================================

    /// 파일에 적힌 필드만 덮어씀 (layer가 우선)
    pub fn merge(&mut self, layer: ChartsConfigLayer) {
        if let Some(element_id) = layer.element_id {
            self.element_id = element_id;
        }
        if let Some(palette) = layer.palette {
            self.palette = palette;
        }
        if layer.seed.is_some() {
            self.seed = layer.seed;
        }
        if let Some(kind) = layer.default_kind {
            self.default_kind = kind;
        }
        if let Some(record) = layer.record_commands {
            self.record_commands = record;
        }
    }

    /// 데모를 시작할 수 있는 설정인지 검사
    pub fn validate(&self) -> Result<()> {
        if self.element_id.trim().is_empty() {
            return Err(Error::Validation("elementId must not be empty".to_string()));
        }
        if self.palette.is_empty() {
            return Err(Error::Validation("palette must not be empty".to_string()));
        }
        Ok(())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = id.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn default_kind(mut self, kind: impl Into<String>) -> Self {
        self.default_kind = kind.into();
        self
    }

    pub fn record_commands(mut self, record: bool) -> Self {
        self.record_commands = record;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(json: &str) -> ChartsConfigLayer {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_charts_config_default() {
        let config = ChartsConfig::new();
        assert_eq!(config.element_id, "chart");
        assert_eq!(config.palette.len(), 9);
        assert_eq!(config.default_kind, "bar");
        assert!(config.seed.is_none());
        assert!(!config.record_commands);
    }

    #[test]
    fn test_config_merge() {
        let mut base = ChartsConfig::new().seed(7);
        base.palette = vec!["red".to_string()];

        base.merge(layer(r#"{ "elementId": "canvas", "defaultKind": "pie" }"#));

        assert_eq!(base.element_id, "canvas");
        assert_eq!(base.default_kind, "pie");
        // 파일에 없는 필드는 그대로
        assert_eq!(base.seed, Some(7));
        assert_eq!(base.palette, vec!["red".to_string()]);
    }

    #[test]
    fn test_later_file_wins_only_for_present_fields() {
        let mut config = ChartsConfig::new();
        config.merge(layer(r#"{ "recordCommands": true, "elementId": "canvas" }"#));
        config.merge(layer(r#"{ "seed": 1 }"#));
        assert!(config.record_commands);
        assert_eq!(config.element_id, "canvas");
        assert_eq!(config.seed, Some(1));

        // 기본값과 같은 값을 명시해도 덮어씀
        config.merge(layer(r#"{ "elementId": "chart", "recordCommands": false }"#));
        assert_eq!(config.element_id, "chart");
        assert!(!config.record_commands);
    }

    #[test]
    fn test_global_then_project_files() {
        let global = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        JsonStore::new(global.path())
            .save(
                CHARTS_CONFIG_FILE,
                &layer(r#"{ "elementId": "canvas", "recordCommands": true }"#),
            )
            .unwrap();
        JsonStore::project(project.path())
            .save(CHARTS_CONFIG_FILE, &layer(r#"{ "defaultKind": "radar" }"#))
            .unwrap();

        let mut config = ChartsConfig::new();
        for store in [JsonStore::new(global.path()), JsonStore::project(project.path())] {
            if let Some(layer) = store.load_optional::<ChartsConfigLayer>(CHARTS_CONFIG_FILE).unwrap() {
                config.merge(layer);
            }
        }

        assert_eq!(config.element_id, "canvas");
        assert!(config.record_commands);
        assert_eq!(config.default_kind, "radar");
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.json");
        std::fs::write(&path, r#"{ "seed": 42, "recordCommands": true }"#).unwrap();

        let config = ChartsConfig::load_from(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(config.record_commands);
        assert_eq!(config.element_id, "chart");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ChartsConfig::load_from(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_save_project_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = ChartsConfig::new()
            .element_id("canvas")
            .seed(9)
            .default_kind("doughnut")
            .record_commands(true);

        let path = config.save_project(dir.path()).unwrap();
        assert!(path.ends_with(".charts/charts.json"));

        let loaded = ChartsConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validate() {
        assert!(ChartsConfig::new().validate().is_ok());

        let mut config = ChartsConfig::new();
        config.palette.clear();
        assert!(matches!(config.validate(), Err(Error::Validation(_))));

        let config = ChartsConfig::new().element_id("  ");
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }
}
