use serde::{Deserialize, Serialize};

const LOWER_BOUND: i64 = 0;

/// Rectangular region rovers may occupy.
///
/// Both upper bounds are inclusive, so a `5 5` plateau spans 6×6 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    width: i64,
    height: i64,
}

impl Plateau {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn is_within_bounds(&self, x: i64, y: i64) -> bool {
        x >= LOWER_BOUND && y >= LOWER_BOUND && x <= self.width && y <= self.height
    }
}
