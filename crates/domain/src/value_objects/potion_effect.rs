//! Potion effect value object

use serde::{Deserialize, Serialize};

use crate::types::PotionType;

/// The effect carried by a potion item.
///
/// `level` is expected to be positive. It is stored as given; level limits are
/// enforced by the item platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PotionEffect {
    kind: PotionType,
    level: u32,
    splash: bool,
    extended: bool,
}

impl PotionEffect {
    pub fn new(kind: PotionType, level: u32) -> Self {
        Self {
            kind,
            level,
            splash: false,
            extended: false,
        }
    }

    /// Make the potion throwable.
    pub fn with_splash(mut self, splash: bool) -> Self {
        self.splash = splash;
        self
    }

    /// Give the potion an extended duration.
    pub fn with_extended_duration(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    #[inline]
    pub fn kind(&self) -> PotionType {
        self.kind
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn is_splash(&self) -> bool {
        self.splash
    }

    #[inline]
    pub fn has_extended_duration(&self) -> bool {
        self.extended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_drinkable_normal_duration() {
        let effect = PotionEffect::new(PotionType::Speed, 2);
        assert_eq!(effect.kind(), PotionType::Speed);
        assert_eq!(effect.level(), 2);
        assert!(!effect.is_splash());
        assert!(!effect.has_extended_duration());
    }

    #[test]
    fn modifiers_apply() {
        let effect = PotionEffect::new(PotionType::Poison, 1)
            .with_splash(true)
            .with_extended_duration(true);
        assert!(effect.is_splash());
        assert!(effect.has_extended_duration());
    }
}
