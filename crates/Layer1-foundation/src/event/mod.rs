//! Event System - 차트 이벤트 및 리스너 레지스트리
//!
//! 차트 클릭을 등록된 리스너들에게 등록 순서대로 전달합니다.
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Chart                               │
//! │  ┌─────────────────────────────────────────────────────┐    │
//! │  │  on_click(modifiers, hits) ── snapshot() ─────────┐ │    │
//! │  └─────────────────────────────────────────────────────┘    │
//! │         │                                                   │
//! │         ▼                                                   │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
//! │  │  Listener 1  │  │  Listener 2  │  │  Listener N  │      │
//! │  │  (oldest)    │  │              │  │  (newest)    │      │
//! │  └──────────────┘  └──────────────┘  └──────────────┘      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 사용법
//!
//! ```ignore
//! use charts_foundation::event::{ChartEvent, ListenerHandle, Listeners};
//!
//! // 1. 리스너 생성
//! let handle = ListenerHandle::from_fn("log", |event: &ChartEvent| {
//!     println!("clicked: {:?}", event.label());
//! });
//!
//! // 2. 등록 (불변 값이므로 새 레지스트리를 돌려받음)
//! let listeners = Listeners::new().add(&handle);
//!
//! // 3. 디스패치
//! listeners.dispatch(&event);
//!
//! // 4. 해제
//! let listeners = listeners.remove(&handle);
//! ```

pub mod listener;
pub mod listeners;
pub mod types;

// Re-exports
pub use listener::{ChartListener, ListenerHandle};
pub use listeners::{dispatch_all, Listeners};
pub use types::{ChartEvent, ChartId, Hit, Modifiers};
