//! Chart kinds

use charts_foundation::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 차트 종류
///
/// `Line`, `Bar`, `Radar`는 [`Values`](super::Values) 기반 시리즈 차트,
/// 나머지는 [`Segment`](super::Segment) 기반 차트입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
    Radar,
    Pie,
    Doughnut,
    PolarArea,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Radar,
        ChartKind::Pie,
        ChartKind::Doughnut,
        ChartKind::PolarArea,
    ];

    /// 차트 라이브러리 생성자 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Bar => "Bar",
            Self::Radar => "Radar",
            Self::Pie => "Pie",
            Self::Doughnut => "Doughnut",
            Self::PolarArea => "PolarArea",
        }
    }

    pub fn is_series(&self) -> bool {
        matches!(self, Self::Line | Self::Bar | Self::Radar)
    }

    /// 클릭 위치의 요소를 찾는 라이브러리 함수
    pub fn click_locator(&self) -> &'static str {
        match self {
            Self::Line | Self::Radar => "getPointsAtEvent",
            Self::Bar => "getBarsAtEvent",
            Self::Pie | Self::Doughnut | Self::PolarArea => "getSegmentsAtEvent",
        }
    }

    /// 값 갱신 시 수정하는 요소 컬렉션 (시리즈 차트만)
    pub fn element_collection(&self) -> Option<&'static str> {
        match self {
            Self::Line | Self::Radar => Some("points"),
            Self::Bar => Some("bars"),
            Self::Pie | Self::Doughnut | Self::PolarArea => None,
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            "radar" => Ok(Self::Radar),
            "pie" => Ok(Self::Pie),
            "doughnut" => Ok(Self::Doughnut),
            "polar" | "polararea" | "polar_area" => Ok(Self::PolarArea),
            other => Err(Error::InvalidInput(format!("Unknown chart kind: {}", other))),
        }
    }
}
