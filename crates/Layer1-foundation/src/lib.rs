//! # charts-foundation
//!
//! Foundation layer for charts:
//! - Event: 차트 이벤트, 리스너 trait, 불변 리스너 레지스트리
//! - Config: 데모/렌더 설정 (ChartsConfig)
//! - Storage: JsonStore (설정 파일)
//! - Error: 공통 에러 타입
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Chart (charts-core)                                    │
//! │     │ add_chart_listener / remove_chart_listener        │
//! │     ▼                                                   │
//! │  Listeners  Empty | One(handle) | Many(chain)           │
//! │     │ snapshot() (등록 순서)                             │
//! │     ▼                                                   │
//! │  ChartListener::chart_click(&ChartEvent)                │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{ChartsConfig, ChartsConfigLayer, CHARTS_CONFIG_FILE, DEFAULT_PALETTE};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::JsonStore;

// ============================================================================
// Event (이벤트 시스템)
// ============================================================================
pub use event::{
    // Dispatch
    dispatch_all,
    // Types
    ChartEvent,
    ChartId,
    // Listener
    ChartListener,
    Hit,
    ListenerHandle,
    Listeners,
    Modifiers,
};
