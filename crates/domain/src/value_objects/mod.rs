//! Value objects - Immutable objects defined by their attributes

mod color;
mod enchant_level;
mod firework_effect;
mod item_rules;
mod pattern;
mod potion_effect;

pub use color::Color;
pub use enchant_level::EnchantLevel;
pub use firework_effect::FireworkEffect;
pub use item_rules::ItemRules;
pub use pattern::Pattern;
pub use potion_effect::PotionEffect;
