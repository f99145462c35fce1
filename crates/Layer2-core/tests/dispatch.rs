//! 클릭 디스패치 통합 테스트
//!
//! 차트에 등록된 리스너들이 등록 순서대로 같은 이벤트를 받는지 검증

use charts_core::{Chart, Color, DataPoint, RecordingRenderer, ValueSet, Values, WeakChart};
use charts_foundation::{ChartEvent, ChartListener, Hit, ListenerHandle, Modifiers};
use std::cell::RefCell;
use std::rc::Rc;

type Seen = Rc<RefCell<Vec<(String, ChartEvent)>>>;

fn recorder(name: &'static str, seen: &Seen) -> ListenerHandle {
    let seen = seen.clone();
    ListenerHandle::from_fn(name, move |event| {
        seen.borrow_mut().push((name.to_string(), event.clone()));
    })
}

fn realized_bar() -> Chart<Values> {
    let chart = Chart::bar(vec![ValueSet::new(
        "Months",
        Color::from("#5DA5DA"),
        Color::from("#FAA43A"),
    )]);
    chart
        .data()
        .extend(vec![
            Values::new("January", [65.0]),
            Values::new("February", [59.0]),
            Values::new("March", [80.0]),
        ])
        .unwrap();
    chart.apply_to("chart", RecordingRenderer::new()).unwrap();
    chart
}

#[test]
fn test_two_listeners_observe_same_event_in_order() {
    let chart = realized_bar();
    let seen = Seen::default();
    let l1 = recorder("L1", &seen);
    let l2 = recorder("L2", &seen);

    chart.add_chart_listener(&l1);
    chart.add_chart_listener(&l2);

    let invoked = chart.on_click(Modifiers::default(), vec![Hit::new("March", 80.0)]);
    assert_eq!(invoked, 2);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, "L1");
    assert_eq!(seen[1].0, "L2");
    assert_eq!(seen[0].1, seen[1].1);

    let event = &seen[0].1;
    assert_eq!(event.source, chart.id());
    assert_eq!(event.label(), Some("March"));
    assert_eq!(event.values(), vec![80.0]);
}

#[test]
fn test_unregister_middle_listener() {
    let chart = realized_bar();
    let seen = Seen::default();
    let a = recorder("A", &seen);
    let b = recorder("B", &seen);
    let c = recorder("C", &seen);

    chart.add_chart_listener(&a);
    chart.add_chart_listener(&b);
    chart.add_chart_listener(&c);
    chart.remove_chart_listener(&b);

    chart.click("January", Modifiers::new().with_shift(true));

    let names: Vec<String> = seen.borrow().iter().map(|(n, _)| n.clone()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert!(seen.borrow()[0].1.is_shift_key());
}

#[test]
fn test_click_without_hits_still_dispatches() {
    let chart = realized_bar();
    let seen = Seen::default();
    chart.add_chart_listener(&recorder("A", &seen));

    assert_eq!(chart.click("December", Modifiers::default()), 1);
    assert_eq!(seen.borrow()[0].1.label(), None);
}

/// 클릭된 열의 값을 1 올리는 리스너
struct Increment {
    chart: WeakChart<Values>,
}

impl ChartListener for Increment {
    fn name(&self) -> &str {
        "increment"
    }

    fn chart_click(&self, event: &ChartEvent) {
        let (Some(chart), Some(label)) = (self.chart.upgrade(), event.label()) else {
            return;
        };
        if let Some(index) = chart.data().position(label) {
            let value = event.values()[0] + 1.0;
            chart
                .data()
                .set(index, Values::new(label, [value]))
                .unwrap();
        }
    }
}

#[test]
fn test_listener_mutates_chart_during_dispatch() {
    let chart = realized_bar();
    let handle = ListenerHandle::new(Increment {
        chart: chart.downgrade(),
    });
    chart.add_chart_listener(&handle);

    chart.click("February", Modifiers::default());
    chart.click("February", Modifiers::default());

    let february = chart.data().get(1).unwrap();
    assert_eq!(february.label(), "February");
    assert_eq!(february.values(), &[61.0]);
}

#[test]
fn test_listener_unregisters_itself() {
    let chart = realized_bar();
    let calls = Rc::new(RefCell::new(0));
    let slot: Rc<RefCell<Option<ListenerHandle>>> = Rc::default();

    let handle = {
        let weak = chart.downgrade();
        let calls = calls.clone();
        let slot = slot.clone();
        ListenerHandle::from_fn("one-shot", move |_| {
            *calls.borrow_mut() += 1;
            if let (Some(chart), Some(me)) = (weak.upgrade(), slot.borrow().as_ref()) {
                chart.remove_chart_listener(me);
            }
        })
    };
    *slot.borrow_mut() = Some(handle.clone());

    chart.add_chart_listener(&handle);
    chart.click("March", Modifiers::default());
    chart.click("March", Modifiers::default());

    assert_eq!(*calls.borrow(), 1);
    assert!(chart.listeners().is_empty());
}

#[test]
fn test_panicking_listener_leaves_registry_usable() {
    let chart = realized_bar();
    let seen = Seen::default();
    let boom = ListenerHandle::from_fn("boom", |_| panic!("listener failed"));
    let after = recorder("after", &seen);

    chart.add_chart_listener(&boom);
    chart.add_chart_listener(&after);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        chart.click("March", Modifiers::default())
    }));
    assert!(result.is_err());
    assert!(seen.borrow().is_empty());
    assert_eq!(chart.listeners().len(), 2);

    chart.remove_chart_listener(&boom);
    assert_eq!(chart.click("March", Modifiers::default()), 1);
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].0, "after");
}
