//! Firework effect value object

use serde::{Deserialize, Serialize};

use crate::types::FireworkEffectType;
use crate::value_objects::Color;

/// One burst of a firework rocket.
///
/// Effects are compared by value: two effects with the same shape, colors and
/// modifiers are interchangeable, which is what
/// [`FireworkData::remove_effects`](crate::entities::FireworkData::remove_effects)
/// relies on.
///
/// # Example
///
/// ```
/// use itemforge_domain::{Color, FireworkEffect, FireworkEffectType};
///
/// let effect = FireworkEffect::new(FireworkEffectType::Star)
///     .with_color(Color::RED)
///     .with_fade(Color::WHITE)
///     .with_trail(true);
///
/// assert_eq!(effect.colors(), &[Color::RED]);
/// assert!(effect.has_trail());
/// assert!(!effect.has_flicker());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FireworkEffect {
    effect_type: FireworkEffectType,
    colors: Vec<Color>,
    fade_colors: Vec<Color>,
    flicker: bool,
    trail: bool,
}

impl FireworkEffect {
    pub fn new(effect_type: FireworkEffectType) -> Self {
        Self {
            effect_type,
            colors: Vec::new(),
            fade_colors: Vec::new(),
            flicker: false,
            trail: false,
        }
    }

    /// Add a primary color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.colors.push(color);
        self
    }

    /// Add several primary colors.
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors.extend(colors);
        self
    }

    /// Add a fade color.
    pub fn with_fade(mut self, color: Color) -> Self {
        self.fade_colors.push(color);
        self
    }

    pub fn with_flicker(mut self, flicker: bool) -> Self {
        self.flicker = flicker;
        self
    }

    pub fn with_trail(mut self, trail: bool) -> Self {
        self.trail = trail;
        self
    }

    #[inline]
    pub fn effect_type(&self) -> FireworkEffectType {
        self.effect_type
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn fade_colors(&self) -> &[Color] {
        &self.fade_colors
    }

    #[inline]
    pub fn has_flicker(&self) -> bool {
        self.flicker
    }

    #[inline]
    pub fn has_trail(&self) -> bool {
        self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_equality_covers_every_field() {
        let base = FireworkEffect::new(FireworkEffectType::Ball).with_color(Color::BLUE);

        assert_eq!(base, base.clone());
        assert_ne!(base, base.clone().with_flicker(true));
        assert_ne!(base, base.clone().with_fade(Color::WHITE));
        assert_ne!(
            base,
            FireworkEffect::new(FireworkEffectType::Burst).with_color(Color::BLUE)
        );
    }

    #[test]
    fn with_colors_appends_in_order() {
        let effect = FireworkEffect::new(FireworkEffectType::Creeper)
            .with_color(Color::GREEN)
            .with_colors([Color::YELLOW, Color::BLACK]);
        assert_eq!(effect.colors(), &[Color::GREEN, Color::YELLOW, Color::BLACK]);
    }
}
