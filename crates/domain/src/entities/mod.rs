//! Entities - the data an item is made of

mod extension;
mod item_descriptor;
mod item_meta;
mod item_stack;

pub use extension::{
    ArmorColorData, BannerData, BookData, ExtensionKind, ExtensionPayload, FireworkData,
    PotionData, SkullData,
};
pub use item_descriptor::ItemDescriptor;
pub use item_meta::ItemMeta;
pub use item_stack::ItemStack;
