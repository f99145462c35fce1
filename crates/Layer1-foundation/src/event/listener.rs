//! Chart Listener - 리스너 trait 및 식별 가능한 핸들

use super::types::ChartEvent;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// ChartListener Trait
// ============================================================================

/// 차트 이벤트 리스너 trait
///
/// 차트 클릭을 수신하는 컴포넌트가 구현합니다.
/// 디스패치는 UI 이벤트 루프에서 동기적으로 수행됩니다.
pub trait ChartListener {
    /// 리스너 이름 (디버깅용)
    fn name(&self) -> &str {
        "listener"
    }

    /// 클릭 이벤트 처리
    fn chart_click(&self, event: &ChartEvent);
}

/// 클로저 리스너
struct FnListener<F> {
    name: String,
    callback: F,
}

impl<F> ChartListener for FnListener<F>
where
    F: Fn(&ChartEvent),
{
    fn name(&self) -> &str {
        &self.name
    }

    fn chart_click(&self, event: &ChartEvent) {
        (self.callback)(event)
    }
}

// ============================================================================
// ListenerHandle
// ============================================================================

/// 리스너 핸들
///
/// 비교는 오직 identity(같은 할당인지)로만 합니다.
/// 같은 핸들의 clone은 서로 같고, 따로 만든 핸들은 절대 같지 않습니다.
#[derive(Clone)]
pub struct ListenerHandle(Rc<dyn ChartListener>);

impl ListenerHandle {
    pub fn new<L: ChartListener + 'static>(listener: L) -> Self {
        Self(Rc::new(listener))
    }

    /// 클로저로 핸들 생성
    pub fn from_fn<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&ChartEvent) + 'static,
    {
        Self::new(FnListener {
            name: name.into(),
            callback,
        })
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn chart_click(&self, event: &ChartEvent) {
        self.0.chart_click(event)
    }

    /// vtable은 비교하지 않고 데이터 주소만 비교
    pub fn same(&self, other: &ListenerHandle) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const (),
            Rc::as_ptr(&other.0) as *const (),
        )
    }
}

impl From<Rc<dyn ChartListener>> for ListenerHandle {
    fn from(listener: Rc<dyn ChartListener>) -> Self {
        Self(listener)
    }
}

impl PartialEq for ListenerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for ListenerHandle {}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:p}", self.name(), Rc::as_ptr(&self.0) as *const ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::types::{ChartId, Modifiers};
    use std::cell::Cell;

    struct Unit;

    impl ChartListener for Unit {
        fn chart_click(&self, _event: &ChartEvent) {}
    }

    #[test]
    fn test_identity() {
        let a = ListenerHandle::new(Unit);
        let b = ListenerHandle::new(Unit);

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.name(), "listener");
    }

    #[test]
    fn test_from_fn() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let handle = ListenerHandle::from_fn("counter", move |_| seen.set(seen.get() + 1));

        let event = ChartEvent::new(ChartId::new(), Modifiers::default(), vec![]);
        handle.chart_click(&event);
        handle.chart_click(&event);

        assert_eq!(count.get(), 2);
        assert_eq!(handle.name(), "counter");
    }
}
