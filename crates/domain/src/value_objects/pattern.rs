//! Banner pattern layer

use serde::{Deserialize, Serialize};

use crate::types::{DyeColor, PatternType};

/// A single colored layer drawn on a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    color: DyeColor,
    pattern: PatternType,
}

impl Pattern {
    pub fn new(color: DyeColor, pattern: PatternType) -> Self {
        Self { color, pattern }
    }

    #[inline]
    pub fn color(&self) -> DyeColor {
        self.color
    }

    #[inline]
    pub fn pattern(&self) -> PatternType {
        self.pattern
    }
}
