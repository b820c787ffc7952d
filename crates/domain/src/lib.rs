//! Item construction for a block-game server platform.
//!
//! [`ItemBuilder`] assembles an [`ItemStack`] through chained calls: the base
//! descriptor (material, quantity, durability), the metadata every item
//! shares (name, lore, flags, enchantments) and the category extensions that
//! only some materials carry (skull owner, potion effect, armor color,
//! firework effects, banner patterns, book contents).
//!
//! ```
//! use itemforge_domain::{
//!     Color, DomainError, FireworkEffect, FireworkEffectType, ItemBuilder, Material,
//! };
//!
//! # fn main() -> Result<(), DomainError> {
//! let rocket = ItemBuilder::of(Material::Firework, 3)
//!     .name("Celebration")
//!     .firework_power(2)
//!     .add_effects([FireworkEffect::new(FireworkEffectType::Star).with_color(Color::YELLOW)])
//!     .glow(true)?
//!     .build();
//!
//! assert_eq!(rocket.firework().map(|f| f.power()), Some(2));
//!
//! // Extension calls for another category are ignored.
//! let stone = ItemBuilder::new(Material::Stone).title("Not a book").build();
//! assert!(stone.extension().is_none());
//! # Ok(())
//! # }
//! ```

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod types;
pub mod value_objects;

pub use aggregates::ItemBuilder;

pub use entities::{
    ArmorColorData, BannerData, BookData, ExtensionKind, ExtensionPayload, FireworkData,
    ItemDescriptor, ItemMeta, ItemStack, PotionData, SkullData,
};

pub use error::DomainError;

pub use types::{
    DyeColor, Enchantment, FireworkEffectType, ItemFlag, Material, PatternType, PotionType,
};

pub use value_objects::{
    Color, EnchantLevel, FireworkEffect, ItemRules, Pattern, PotionEffect,
};
