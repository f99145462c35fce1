//! Demo App - 차트 종류를 바꿔가며 보여주는 데모 모델
//!
//! 열두 달의 값을 하나의 모델로 공유하고, 현재 표시 중인 차트를 명시적으로 소유합니다.
//! 차트를 클릭하면 클릭한 달의 값이 바뀝니다 (shift: 감소, ctrl: 10배).

use crate::snippet;
use charts_core::{
    Chart, ChartKind, Color, CommandLog, DataPoint, RecordingRenderer, Segment, ValueSet, Values,
    WeakChart,
};
use charts_foundation::{
    ChartEvent, ChartListener, ChartsConfig, Error, ListenerHandle, Modifiers, Result,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

type ModelValues = Rc<RefCell<Vec<f64>>>;

/// 클릭 한 번의 변화량
fn delta(event: &ChartEvent) -> f64 {
    let delta = if event.is_ctrl_key() { 10.0 } else { 1.0 };
    if event.is_shift_key() {
        -delta
    } else {
        delta
    }
}

// ============================================================================
// Click listeners
// ============================================================================

/// 시리즈 차트에서 클릭한 열의 값을 바꾸는 리스너
struct AdjustValues {
    chart: WeakChart<Values>,
    model: ModelValues,
}

impl ChartListener for AdjustValues {
    fn name(&self) -> &str {
        "adjust-values"
    }

    fn chart_click(&self, event: &ChartEvent) {
        let (Some(chart), Some(label)) = (self.chart.upgrade(), event.label()) else {
            return;
        };
        let Some(first) = event.values().first().copied() else {
            return;
        };
        let d = delta(event);

        for (index, row) in chart.data().to_vec().iter().enumerate() {
            if row.label() != label {
                continue;
            }
            if let Err(e) = chart.data().set(index, Values::new(label, [first + d])) {
                warn!(label, error = %e, "Failed to update clicked values");
                continue;
            }
            if let Some(value) = self.model.borrow_mut().get_mut(index) {
                *value += d;
            }
        }
    }
}

/// segment 차트에서 클릭한 조각의 값을 바꾸는 리스너
struct AdjustSegment {
    chart: WeakChart<Segment>,
    model: ModelValues,
}

impl ChartListener for AdjustSegment {
    fn name(&self) -> &str {
        "adjust-segment"
    }

    fn chart_click(&self, event: &ChartEvent) {
        let (Some(chart), Some(label)) = (self.chart.upgrade(), event.label()) else {
            return;
        };
        let Some(first) = event.values().first().copied() else {
            return;
        };
        let d = delta(event);

        for (index, row) in chart.data().to_vec().iter().enumerate() {
            if row.label() != label {
                continue;
            }
            let updated = Segment::new(
                label,
                first + d,
                row.color().clone(),
                row.highlight().clone(),
            );
            if let Err(e) = chart.data().set(index, updated) {
                warn!(label, error = %e, "Failed to update clicked segment");
                continue;
            }
            if let Some(value) = self.model.borrow_mut().get_mut(index) {
                *value += d;
            }
        }
    }
}

// ============================================================================
// DemoChart
// ============================================================================

/// 현재 표시 중인 차트
pub enum DemoChart {
    Series(Chart<Values>),
    Segments(Chart<Segment>),
}

impl DemoChart {
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Series(chart) => chart.kind(),
            Self::Segments(chart) => chart.kind(),
        }
    }

    pub fn click(&self, label: &str, modifiers: Modifiers) -> usize {
        match self {
            Self::Series(chart) => chart.click(label, modifiers),
            Self::Segments(chart) => chart.click(label, modifiers),
        }
    }

    pub fn destroy(&self) -> Result<()> {
        match self {
            Self::Series(chart) => chart.destroy(),
            Self::Segments(chart) => chart.destroy(),
        }
    }

    /// (라벨, 첫 번째 값) 목록
    pub fn rows(&self) -> Vec<(String, f64)> {
        match self {
            Self::Series(chart) => chart
                .data()
                .to_vec()
                .iter()
                .map(|row| {
                    let value = row.values().first().copied().unwrap_or_default();
                    (row.label().to_string(), value)
                })
                .collect(),
            Self::Segments(chart) => chart
                .data()
                .to_vec()
                .iter()
                .map(|row| (row.label().to_string(), row.value()))
                .collect(),
        }
    }
}

// ============================================================================
// DemoApp
// ============================================================================

/// 데모 상태
pub struct DemoApp {
    element_id: String,
    palette: Vec<Color>,
    palette_index: usize,
    model: ModelValues,
    current: Option<DemoChart>,
    code: String,
    commands: CommandLog,
}

impl DemoApp {
    pub fn new(config: &ChartsConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let model: Vec<f64> = MONTHS
            .iter()
            .map(|_| (rng.gen::<f64>() * 100.0).floor())
            .collect();

        Ok(Self {
            element_id: config.element_id.clone(),
            palette: config.palette.iter().map(|c| Color::from(c.as_str())).collect(),
            palette_index: 0,
            model: Rc::new(RefCell::new(model)),
            current: None,
            code: String::new(),
            commands: CommandLog::new(),
        })
    }

    fn next_color(&mut self) -> Color {
        let color = self.palette[self.palette_index % self.palette.len()].clone();
        self.palette_index += 1;
        color
    }

    /// 모델 값 (월 순서)
    pub fn values(&self) -> Vec<f64> {
        self.model.borrow().clone()
    }

    pub fn current(&self) -> Option<&DemoChart> {
        self.current.as_ref()
    }

    /// 현재 차트를 만드는 코드
    pub fn code(&self) -> &str {
        &self.code
    }

    /// 현재 차트가 받은 렌더 명령
    pub fn commands(&self) -> &CommandLog {
        &self.commands
    }

    /// `kind` 차트를 새로 만들어 표시하고 이전 차트는 제거
    pub fn show(&mut self, kind: ChartKind) -> Result<()> {
        let log = CommandLog::new();
        let (chart, code) = if kind.is_series() {
            self.build_series(kind, &log)?
        } else {
            self.build_segments(kind, &log)?
        };

        if let Some(previous) = self.current.take() {
            debug!(kind = %previous.kind(), "Destroying previous chart");
            previous.destroy()?;
        }

        self.current = Some(chart);
        self.code = code;
        self.commands = log;
        Ok(())
    }

    fn build_series(&mut self, kind: ChartKind, log: &CommandLog) -> Result<(DemoChart, String)> {
        let set = ValueSet::new("Months", self.next_color(), self.next_color());
        let chart = match kind {
            ChartKind::Line => Chart::line(vec![set.clone()]),
            ChartKind::Radar => Chart::radar(vec![set.clone()]),
            _ => Chart::bar(vec![set.clone()]),
        };

        let rows: Vec<Values> = MONTHS
            .iter()
            .zip(self.model.borrow().iter())
            .map(|(month, value)| Values::new(*month, [*value]))
            .collect();
        chart.data().extend(rows.clone())?;

        chart.add_chart_listener(&ListenerHandle::new(AdjustValues {
            chart: chart.downgrade(),
            model: self.model.clone(),
        }));
        chart.apply_to(&self.element_id, RecordingRenderer::with_log(log.clone()))?;

        let code = snippet::series(kind, &set, &rows, &self.element_id);
        Ok((DemoChart::Series(chart), code))
    }

    fn build_segments(
        &mut self,
        kind: ChartKind,
        log: &CommandLog,
    ) -> Result<(DemoChart, String)> {
        let chart = match kind {
            ChartKind::Doughnut => Chart::doughnut(),
            ChartKind::PolarArea => Chart::polar(),
            _ => Chart::pie(),
        };

        let rows: Vec<Segment> = MONTHS
            .iter()
            .zip(self.model.borrow().iter())
            .enumerate()
            .map(|(i, (month, value))| {
                let color = self.palette[i % self.palette.len()].clone();
                Segment::new(*month, *value, color.clone(), color)
            })
            .collect();
        chart.data().extend(rows.clone())?;

        chart.add_chart_listener(&ListenerHandle::new(AdjustSegment {
            chart: chart.downgrade(),
            model: self.model.clone(),
        }));
        chart.apply_to(&self.element_id, RecordingRenderer::with_log(log.clone()))?;

        let code = snippet::segments(kind, &rows, &self.element_id);
        Ok((DemoChart::Segments(chart), code))
    }

    /// 현재 차트에서 `label` 요소를 클릭
    pub fn click(&self, label: &str, modifiers: Modifiers) -> Result<usize> {
        let chart = self
            .current
            .as_ref()
            .ok_or_else(|| Error::NotFound("No chart is displayed".to_string()))?;
        Ok(chart.click(label, modifiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts_core::RenderCommand;

    fn app() -> DemoApp {
        DemoApp::new(&ChartsConfig::new().seed(3)).unwrap()
    }

    #[test]
    fn test_seeded_values() {
        let a = app();
        let b = app();
        assert_eq!(a.values(), b.values());
        assert_eq!(a.values().len(), 12);
        assert!(a.values().iter().all(|v| (0.0..100.0).contains(v) && v.fract() == 0.0));
    }

    #[test]
    fn test_click_adjusts_series() {
        let mut app = app();
        app.show(ChartKind::Bar).unwrap();
        let before = app.values()[2];

        assert_eq!(app.click("March", Modifiers::default()).unwrap(), 1);
        assert_eq!(app.values()[2], before + 1.0);

        app.click("March", Modifiers::new().with_ctrl(true)).unwrap();
        assert_eq!(app.values()[2], before + 11.0);

        app.click("March", Modifiers::new().with_shift(true).with_ctrl(true))
            .unwrap();
        assert_eq!(app.values()[2], before + 1.0);

        let rows = app.current().unwrap().rows();
        assert_eq!(rows[2], ("March".to_string(), before + 1.0));
        assert!(matches!(
            app.commands().last(),
            Some(RenderCommand::UpdateValues { index: 2, .. })
        ));
    }

    #[test]
    fn test_click_adjusts_segment() {
        let mut app = app();
        app.show(ChartKind::Pie).unwrap();
        let before = app.values()[0];

        app.click("January", Modifiers::new().with_shift(true)).unwrap();
        assert_eq!(app.values()[0], before - 1.0);
        assert_eq!(app.current().unwrap().rows()[0].1, before - 1.0);
    }

    #[test]
    fn test_click_missing_label() {
        let mut app = app();
        app.show(ChartKind::Line).unwrap();
        let before = app.values();

        assert_eq!(app.click("Smarch", Modifiers::default()).unwrap(), 1);
        assert_eq!(app.values(), before);
    }

    #[test]
    fn test_show_destroys_previous() {
        let mut app = app();
        app.show(ChartKind::Line).unwrap();
        let first_log = app.commands().clone();

        app.show(ChartKind::Doughnut).unwrap();
        assert_eq!(first_log.last(), Some(RenderCommand::Destroy));
        assert_eq!(app.current().unwrap().kind(), ChartKind::Doughnut);
        assert!(app.code().contains("Chart::doughnut()"));
        assert_eq!(app.commands().len(), 2);
    }

    #[test]
    fn test_values_survive_chart_switch() {
        let mut app = app();
        app.show(ChartKind::Bar).unwrap();
        app.click("May", Modifiers::default()).unwrap();
        let values = app.values();

        app.show(ChartKind::Pie).unwrap();
        assert_eq!(app.current().unwrap().rows()[4].1, values[4]);
    }

    #[test]
    fn test_click_without_chart() {
        let app = app();
        assert!(matches!(
            app.click("March", Modifiers::default()),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_empty_palette() {
        let mut config = ChartsConfig::new();
        config.palette.clear();
        assert!(matches!(DemoApp::new(&config), Err(Error::Validation(_))));
    }
}
