//! Chart data points
//!
//! - `ValueSet`: 시리즈 차트의 데이터셋 하나 (이름 + 색상)
//! - `Values`: 시리즈 차트의 열 하나 (이름 + 데이터셋별 값)
//! - `Segment`: pie / doughnut / polar 차트의 조각 하나

use super::color::Color;
use super::kind::ChartKind;
use super::config::ChartConfig;
use crate::render::{DataSetSpec, RenderCommand};
use charts_foundation::{Error, Hit, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// DataPoint Trait
// ============================================================================

/// 차트 데이터 리스트에 들어가는 요소
///
/// 실현(realized)된 차트에서 리스트 변경이 어떤 렌더 명령이 되는지 정의합니다.
pub trait DataPoint: Clone + fmt::Debug + 'static {
    /// 실현 후에도 임의 위치 삽입/삭제가 가능한지
    const POSITIONAL: bool;

    fn label(&self) -> &str;

    /// `index` 위치에 추가될 때의 명령
    fn added(&self, index: usize) -> RenderCommand;

    /// `index` 위치가 이 값으로 교체될 때의 명령
    fn updated(&self, index: usize, kind: ChartKind, dataset_count: usize)
        -> Result<RenderCommand>;

    /// 이 요소를 클릭했을 때 라이브러리가 돌려주는 hit 목록
    fn hits(&self, sets: &[ValueSet]) -> Vec<Hit>;

    /// 차트 초기화 명령
    fn realize(
        element_id: &str,
        kind: ChartKind,
        config: &ChartConfig,
        sets: &[ValueSet],
        items: &[Self],
    ) -> Result<RenderCommand>;
}

// ============================================================================
// ValueSet
// ============================================================================

/// 시리즈 차트의 데이터셋 (이름과 그리기 색상)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSet {
    label: String,
    fill_color: Color,
    stroke_color: Color,
}

impl ValueSet {
    pub fn new(label: impl Into<String>, fill_color: Color, stroke_color: Color) -> Self {
        Self {
            label: label.into(),
            fill_color,
            stroke_color,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fill_color(&self) -> &Color {
        &self.fill_color
    }

    pub fn stroke_color(&self) -> &Color {
        &self.stroke_color
    }

    pub(crate) fn to_spec(&self, data: Vec<f64>) -> DataSetSpec {
        DataSetSpec {
            label: self.label.clone(),
            fill_color: self.fill_color.clone(),
            stroke_color: self.stroke_color.clone(),
            highlight_fill: None,
            highlight_stroke: None,
            data,
        }
    }
}

// ============================================================================
// Values
// ============================================================================

/// 시리즈 차트의 열 하나. 데이터셋마다 값이 하나씩 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Values {
    label: String,
    values: Vec<f64>,
}

impl Values {
    pub fn new(label: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            values: values.into(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl DataPoint for Values {
    const POSITIONAL: bool = false;

    fn label(&self) -> &str {
        &self.label
    }

    fn added(&self, _index: usize) -> RenderCommand {
        // 시리즈 차트는 끝에만 추가된다
        RenderCommand::AddValues {
            label: self.label.clone(),
            values: self.values.clone(),
        }
    }

    fn updated(
        &self,
        index: usize,
        kind: ChartKind,
        dataset_count: usize,
    ) -> Result<RenderCommand> {
        if self.values.len() != dataset_count {
            return Err(Error::InvalidInput(format!(
                "'{}' has {} values but the chart has {} data sets",
                self.label,
                self.values.len(),
                dataset_count
            )));
        }
        let collection = kind.element_collection().ok_or_else(|| {
            Error::Internal(format!("{} chart does not hold values", kind))
        })?;

        Ok(RenderCommand::UpdateValues {
            collection: collection.to_string(),
            datasets: dataset_count,
            index,
            label: self.label.clone(),
            values: self.values.clone(),
        })
    }

    fn hits(&self, sets: &[ValueSet]) -> Vec<Hit> {
        self.values
            .iter()
            .take(sets.len())
            .map(|value| Hit::new(self.label.clone(), *value))
            .collect()
    }

    fn realize(
        element_id: &str,
        kind: ChartKind,
        config: &ChartConfig,
        sets: &[ValueSet],
        items: &[Self],
    ) -> Result<RenderCommand> {
        if !kind.is_series() {
            return Err(Error::Internal(format!("{} chart does not hold values", kind)));
        }

        let mut datasets = Vec::with_capacity(sets.len());
        for (i, set) in sets.iter().enumerate() {
            let data = items
                .iter()
                .map(|item| {
                    item.values.get(i).copied().ok_or_else(|| {
                        Error::InvalidInput(format!(
                            "'{}' has no value for data set '{}'",
                            item.label, set.label
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            datasets.push(set.to_spec(data));
        }

        Ok(RenderCommand::InitSeries {
            element_id: element_id.to_string(),
            kind,
            config: config.clone(),
            datasets,
            labels: items.iter().map(|item| item.label.clone()).collect(),
        })
    }
}

// ============================================================================
// Segment
// ============================================================================

/// pie / polar / doughnut 차트의 조각 (값 + 색상)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    label: String,
    value: f64,
    color: Color,
    highlight: Color,
}

impl Segment {
    pub fn new(label: impl Into<String>, value: f64, color: Color, highlight: Color) -> Self {
        Self {
            label: label.into(),
            value,
            color,
            highlight,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn highlight(&self) -> &Color {
        &self.highlight
    }
}

impl DataPoint for Segment {
    const POSITIONAL: bool = true;

    fn label(&self) -> &str {
        &self.label
    }

    fn added(&self, index: usize) -> RenderCommand {
        RenderCommand::AddSegment {
            index,
            segment: self.clone(),
        }
    }

    fn updated(
        &self,
        index: usize,
        _kind: ChartKind,
        _dataset_count: usize,
    ) -> Result<RenderCommand> {
        Ok(RenderCommand::UpdateSegment {
            index,
            label: self.label.clone(),
            value: self.value,
        })
    }

    fn hits(&self, _sets: &[ValueSet]) -> Vec<Hit> {
        vec![Hit::new(self.label.clone(), self.value)]
    }

    fn realize(
        element_id: &str,
        kind: ChartKind,
        config: &ChartConfig,
        _sets: &[ValueSet],
        items: &[Self],
    ) -> Result<RenderCommand> {
        if kind.is_series() {
            return Err(Error::Internal(format!("{} chart does not hold segments", kind)));
        }

        Ok(RenderCommand::InitSegments {
            element_id: element_id.to_string(),
            kind,
            config: config.clone(),
            segments: items.to_vec(),
        })
    }
}
