//! DataList - 차트 데이터 리스트
//!
//! 실현 전에는 평범한 리스트입니다. 실현 후에는 각 변경이 렌더 명령으로
//! 전달되고, 라이브러리가 표현할 수 없는 변경은 `Unsupported`로 거절됩니다.
//!
//! | 연산 | Values | Segment |
//! |------|--------|---------|
//! | push | 끝에 추가 | 끝에 추가 |
//! | insert | 거절 | 허용 |
//! | remove | index 0만 | 허용 |
//! | set | 값 개수 검사 후 갱신 | 갱신 |
//! | clear / retain / remove_label | 거절 | 거절 |

use super::data::DataPoint;
use super::ChartInner;
use charts_foundation::{Error, Result};

/// 차트 데이터 뷰
pub struct DataList<'a, D: DataPoint> {
    chart: &'a ChartInner<D>,
}

impl<'a, D: DataPoint> DataList<'a, D> {
    pub(super) fn new(chart: &'a ChartInner<D>) -> Self {
        Self { chart }
    }

    fn guard(&self, operation: &str) -> Result<()> {
        if self.chart.is_realized() {
            return Err(Error::unsupported(operation));
        }
        Ok(())
    }

    fn check_index(&self, index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(Error::InvalidInput(format!(
                "Index {} out of bounds (len {})",
                index, len
            )));
        }
        Ok(())
    }

    // ========================================================================
    // 조회
    // ========================================================================

    pub fn len(&self) -> usize {
        self.chart.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chart.data.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<D> {
        self.chart.data.borrow().get(index).cloned()
    }

    pub fn to_vec(&self) -> Vec<D> {
        self.chart.data.borrow().clone()
    }

    /// 라벨이 같은 첫 번째 요소 위치
    pub fn position(&self, label: &str) -> Option<usize> {
        self.chart
            .data
            .borrow()
            .iter()
            .position(|item| item.label() == label)
    }

    // ========================================================================
    // 변경
    // ========================================================================

    /// 끝에 추가
    pub fn push(&self, item: D) -> Result<()> {
        if self.chart.is_realized() {
            let index = self.len();
            self.chart.render(item.added(index))?;
        }
        self.chart.data.borrow_mut().push(item);
        Ok(())
    }

    /// 순서대로 하나씩 `push`
    pub fn extend(&self, items: impl IntoIterator<Item = D>) -> Result<()> {
        for item in items {
            self.push(item)?;
        }
        Ok(())
    }

    pub fn insert(&self, index: usize, item: D) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::InvalidInput(format!(
                "Insert index {} out of bounds (len {})",
                index, len
            )));
        }
        if self.chart.is_realized() {
            if !D::POSITIONAL {
                return Err(Error::unsupported("insert"));
            }
            self.chart.render(item.added(index))?;
        }
        self.chart.data.borrow_mut().insert(index, item);
        Ok(())
    }

    pub fn remove(&self, index: usize) -> Result<D> {
        self.check_index(index, self.len())?;
        if self.chart.is_realized() {
            if index != 0 && !D::POSITIONAL {
                return Err(Error::unsupported("remove"));
            }
            self.chart
                .render(crate::render::RenderCommand::RemoveData { index })?;
        }
        Ok(self.chart.data.borrow_mut().remove(index))
    }

    /// `index` 위치 교체, 이전 값 반환
    pub fn set(&self, index: usize, item: D) -> Result<D> {
        self.check_index(index, self.len())?;
        if self.chart.is_realized() {
            let command = item.updated(index, self.chart.kind, self.chart.data_sets.len())?;
            self.chart.render(command)?;
        }
        Ok(std::mem::replace(
            &mut self.chart.data.borrow_mut()[index],
            item,
        ))
    }

    pub fn clear(&self) -> Result<()> {
        self.guard("clear")?;
        self.chart.data.borrow_mut().clear();
        Ok(())
    }

    pub fn retain(&self, f: impl FnMut(&D) -> bool) -> Result<()> {
        self.guard("retain")?;
        self.chart.data.borrow_mut().retain(f);
        Ok(())
    }

    /// 라벨이 같은 첫 번째 요소 제거
    pub fn remove_label(&self, label: &str) -> Result<Option<D>> {
        self.guard("remove_label")?;
        let position = self.position(label);
        Ok(position.map(|index| self.chart.data.borrow_mut().remove(index)))
    }
}
