//! Platform vocabulary types
//!
//! These are opaque to the builder: it stores and forwards them, and only
//! `Material` influences which mutations apply.

mod vocabulary;

pub mod extension;
pub mod material;
pub mod meta;

pub use extension::{DyeColor, FireworkEffectType, PatternType, PotionType};
pub use material::Material;
pub use meta::{Enchantment, ItemFlag};
