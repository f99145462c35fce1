//! Chart - 차트 인스턴스
//!
//! 팩토리(`line`, `bar`, `pie` ...)로 만들고 데이터를 채운 뒤
//! `apply_to`로 요소에 붙입니다.
//!
//! ```ignore
//! let chart = Chart::bar(vec![ValueSet::new("Months", fill, stroke)]);
//! chart.data().push(Values::new("January", [65.0]))?;
//! chart.apply_to("chart", RecordingRenderer::new())?;
//!
//! chart.add_chart_listener(&handle);
//! chart.click("January", Modifiers::default());
//! ```
//!
//! `Chart`는 단일 스레드 핸들입니다. 리스너가 차트를 참조할 때는
//! 순환 참조를 피하기 위해 `WeakChart`를 사용합니다.

mod color;
mod config;
mod data;
mod kind;
mod list;

pub use color::Color;
pub use config::ChartConfig;
pub use data::{DataPoint, Segment, ValueSet, Values};
pub use kind::ChartKind;
pub use list::DataList;

use crate::render::{RenderCommand, Renderer};
use charts_foundation::{
    dispatch_all, ChartEvent, ChartId, Error, Hit, ListenerHandle, Listeners, Modifiers, Result,
};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

// ============================================================================
// ChartInner
// ============================================================================

pub(crate) struct ChartInner<D: DataPoint> {
    id: ChartId,
    kind: ChartKind,
    config: RefCell<ChartConfig>,
    data_sets: Vec<ValueSet>,
    data: RefCell<Vec<D>>,
    /// Some이면 실현된 상태
    renderer: RefCell<Option<Box<dyn Renderer>>>,
    listeners: RefCell<Listeners>,
}

impl<D: DataPoint> ChartInner<D> {
    fn is_realized(&self) -> bool {
        self.renderer.borrow().is_some()
    }

    fn render(&self, command: RenderCommand) -> Result<()> {
        match self.renderer.borrow_mut().as_mut() {
            Some(renderer) => renderer.apply(command),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Chart
// ============================================================================

/// 차트 하나에 대한 핸들
pub struct Chart<D: DataPoint> {
    inner: Rc<ChartInner<D>>,
}

/// 리스너가 보관하는 약한 참조
pub struct WeakChart<D: DataPoint> {
    inner: Weak<ChartInner<D>>,
}

impl<D: DataPoint> Clone for Chart<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D: DataPoint> Clone for WeakChart<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<D: DataPoint> WeakChart<D> {
    pub fn upgrade(&self) -> Option<Chart<D>> {
        self.inner.upgrade().map(|inner| Chart { inner })
    }
}

impl Chart<Values> {
    /// 라인 차트
    pub fn line(sets: impl IntoIterator<Item = ValueSet>) -> Self {
        Self::with_kind(ChartKind::Line, sets.into_iter().collect())
    }

    /// 레이더 차트
    pub fn radar(sets: impl IntoIterator<Item = ValueSet>) -> Self {
        Self::with_kind(ChartKind::Radar, sets.into_iter().collect())
    }

    /// 바 차트
    pub fn bar(sets: impl IntoIterator<Item = ValueSet>) -> Self {
        Self::with_kind(ChartKind::Bar, sets.into_iter().collect())
    }
}

impl Chart<Segment> {
    pub fn pie() -> Self {
        Self::with_kind(ChartKind::Pie, Vec::new())
    }

    /// 가운데가 빈 pie
    pub fn doughnut() -> Self {
        Self::with_kind(ChartKind::Doughnut, Vec::new())
    }

    pub fn polar() -> Self {
        Self::with_kind(ChartKind::PolarArea, Vec::new())
    }
}

impl<D: DataPoint> Chart<D> {
    fn with_kind(kind: ChartKind, data_sets: Vec<ValueSet>) -> Self {
        Self {
            inner: Rc::new(ChartInner {
                id: ChartId::new(),
                kind,
                config: RefCell::new(ChartConfig::new()),
                data_sets,
                data: RefCell::new(Vec::new()),
                renderer: RefCell::new(None),
                listeners: RefCell::new(Listeners::new()),
            }),
        }
    }

    pub fn id(&self) -> ChartId {
        self.inner.id
    }

    pub fn kind(&self) -> ChartKind {
        self.inner.kind
    }

    pub fn data_sets(&self) -> &[ValueSet] {
        &self.inner.data_sets
    }

    pub fn downgrade(&self) -> WeakChart<D> {
        WeakChart {
            inner: Rc::downgrade(&self.inner),
        }
    }

    // ========================================================================
    // Config / Data
    // ========================================================================

    pub fn config(&self) -> Ref<'_, ChartConfig> {
        self.inner.config.borrow()
    }

    /// 설정 변경 (실현 전에만 라이브러리에 반영됨)
    pub fn configure(&self, f: impl FnOnce(&mut ChartConfig)) {
        f(&mut self.inner.config.borrow_mut());
    }

    /// 차트가 표시하는 데이터. 실현 후의 변경은 차트에 반영됩니다.
    pub fn data(&self) -> DataList<'_, D> {
        DataList::new(&self.inner)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    pub fn is_realized(&self) -> bool {
        self.inner.is_realized()
    }

    /// 요소에 차트를 붙임. 한 번만 호출할 수 있습니다.
    pub fn apply_to<R: Renderer + 'static>(&self, element_id: &str, renderer: R) -> Result<()> {
        if self.is_realized() {
            return Err(Error::AlreadyInitialized(format!(
                "{} is already applied to an element",
                self.inner.id
            )));
        }

        let init = D::realize(
            element_id,
            self.inner.kind,
            &self.inner.config.borrow(),
            &self.inner.data_sets,
            &self.inner.data.borrow(),
        )?;

        let mut renderer: Box<dyn Renderer> = Box::new(renderer);
        renderer.apply(init)?;
        renderer.apply(RenderCommand::AttachClickHandler {
            element_id: element_id.to_string(),
            locator: self.inner.kind.click_locator().to_string(),
        })?;

        debug!(
            chart_id = %self.inner.id,
            kind = %self.inner.kind,
            element_id,
            renderer = renderer.name(),
            "Chart applied to element"
        );

        *self.inner.renderer.borrow_mut() = Some(renderer);
        Ok(())
    }

    /// 차트 제거 및 자원 정리. 실현되지 않은 차트에서는 no-op.
    pub fn destroy(&self) -> Result<()> {
        let renderer = self.inner.renderer.borrow_mut().take();
        if let Some(mut renderer) = renderer {
            debug!(chart_id = %self.inner.id, "Destroying chart");
            renderer.apply(RenderCommand::Destroy)?;
        }
        Ok(())
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// 리스너 등록 (같은 핸들은 한 번만)
    pub fn add_chart_listener(&self, listener: &ListenerHandle) {
        let mut listeners = self.inner.listeners.borrow_mut();
        let next = listeners.add(listener);
        *listeners = next;

        debug!(
            chart_id = %self.inner.id,
            listener_name = listener.name(),
            count = listeners.len(),
            "Registered chart listener"
        );
    }

    /// 리스너 해제 (등록되지 않은 핸들이면 no-op)
    pub fn remove_chart_listener(&self, listener: &ListenerHandle) {
        let mut listeners = self.inner.listeners.borrow_mut();
        let next = listeners.remove(listener);
        *listeners = next;

        debug!(
            chart_id = %self.inner.id,
            listener_name = listener.name(),
            count = listeners.len(),
            "Unregistered chart listener"
        );
    }

    /// 현재 레지스트리 값
    pub fn listeners(&self) -> Listeners {
        self.inner.listeners.borrow().clone()
    }

    // ========================================================================
    // Click dispatch
    // ========================================================================

    /// 라벨이 같은 요소를 클릭했을 때 라이브러리가 돌려주는 hit 목록
    pub fn hits_for(&self, label: &str) -> Vec<Hit> {
        self.inner
            .data
            .borrow()
            .iter()
            .filter(|item| item.label() == label)
            .flat_map(|item| item.hits(&self.inner.data_sets))
            .collect()
    }

    /// 클릭 이벤트를 등록된 리스너에게 등록 순서대로 전달
    ///
    /// 호출된 리스너 수를 반환합니다. 실현되지 않은 차트에서는 전달하지 않습니다.
    pub fn on_click(&self, modifiers: Modifiers, hits: Vec<Hit>) -> usize {
        if !self.is_realized() {
            debug!(chart_id = %self.inner.id, "Ignoring click on unrealized chart");
            return 0;
        }

        let event = ChartEvent::new(self.inner.id, modifiers, hits);
        // 디스패치 중 리스너가 차트를 변경할 수 있도록 borrow를 먼저 놓는다
        let listeners = self.listeners();

        debug!(
            chart_id = %self.inner.id,
            label = event.label().unwrap_or_default(),
            listeners = listeners.len(),
            "Dispatching chart click"
        );

        dispatch_all(&listeners, &event)
    }

    /// `hits_for(label)`로 클릭을 흉내냄
    pub fn click(&self, label: &str, modifiers: Modifiers) -> usize {
        let hits = self.hits_for(label);
        self.on_click(modifiers, hits)
    }
}

impl<D: DataPoint> fmt::Debug for Chart<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chart")
            .field("id", &self.inner.id)
            .field("kind", &self.inner.kind)
            .field("realized", &self.is_realized())
            .field("data", &self.inner.data.borrow().len())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}
