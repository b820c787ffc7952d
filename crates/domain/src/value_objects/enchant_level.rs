//! Enchantment entry value object

use serde::{Deserialize, Serialize};

/// Level of one enchantment on an item.
///
/// `forced` records that the caller asked to bypass the platform's normal
/// level caps when the entry was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnchantLevel {
    level: u32,
    forced: bool,
}

impl EnchantLevel {
    pub fn new(level: u32, forced: bool) -> Self {
        Self { level, forced }
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn is_forced(&self) -> bool {
        self.forced
    }
}
