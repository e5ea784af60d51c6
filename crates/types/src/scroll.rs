use serde::{Deserialize, Serialize};

/// The current vertical scroll offset of the page.
///
/// Always non-negative: host readings below zero (overscroll bounce) or NaN
/// are clamped to `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct ScrollState {
    offset: f64,
}

impl ScrollState {
    pub fn new(offset: f64) -> Self {
        let offset = if offset.is_nan() || offset < 0.0 {
            0.0
        } else {
            offset
        };
        Self { offset }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The scroll offset shifted down by a lookahead bias.
    pub fn threshold(&self, bias: f64) -> f64 {
        self.offset + bias
    }
}

impl From<f64> for ScrollState {
    fn from(offset: f64) -> Self {
        Self::new(offset)
    }
}

impl From<ScrollState> for f64 {
    fn from(state: ScrollState) -> Self {
        state.offset
    }
}
