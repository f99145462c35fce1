//! Color value object

use charts_foundation::{Error, Result};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// CSS 색상
///
/// `rgba()`로 만들거나 HTML5 색상 문자열을 그대로 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// 성분으로 색상 생성 (alpha는 0.0 ~ 1.0)
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(Error::InvalidInput(format!("Alpha out of range: {}", alpha)));
        }
        Ok(Self(format!("rgba({},{},{},{})", red, green, blue, alpha)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(color: &str) -> Self {
        Self(color.to_string())
    }
}

impl From<String> for Color {
    fn from(color: String) -> Self {
        Self(color)
    }
}

impl FromStr for Color {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
