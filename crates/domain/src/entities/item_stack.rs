//! Item stack - the immutable item representation handed to the platform

use crate::entities::{
    ArmorColorData, BannerData, BookData, ExtensionPayload, FireworkData, ItemDescriptor,
    ItemMeta, PotionData, SkullData,
};
use crate::types::Material;

/// A finished item: descriptor, metadata and the optional extension payload.
///
/// Produced by [`ItemBuilder::build`](crate::aggregates::ItemBuilder::build)
/// and consumed by the item platform. It has no mutators; to change an item,
/// feed it back into [`ItemBuilder::from_stack`](crate::aggregates::ItemBuilder::from_stack).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    descriptor: ItemDescriptor,
    meta: ItemMeta,
    extension: Option<ExtensionPayload>,
}

impl ItemStack {
    /// A plain stack with empty metadata.
    pub fn new(descriptor: ItemDescriptor) -> Self {
        Self::from_parts(descriptor, ItemMeta::default(), None)
    }

    /// Assemble a stack from parts supplied by the platform.
    ///
    /// The payload is taken as given; the builder re-derives it against the
    /// descriptor when the stack is loaded with `ItemBuilder::from_stack`.
    pub fn from_parts(
        descriptor: ItemDescriptor,
        meta: ItemMeta,
        extension: Option<ExtensionPayload>,
    ) -> Self {
        Self {
            descriptor,
            meta,
            extension,
        }
    }

    /// Split the stack back into its parts.
    pub fn into_parts(self) -> (ItemDescriptor, ItemMeta, Option<ExtensionPayload>) {
        (self.descriptor, self.meta, self.extension)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn descriptor(&self) -> &ItemDescriptor {
        &self.descriptor
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.descriptor.material
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.descriptor.quantity
    }

    #[inline]
    pub fn durability(&self) -> u16 {
        self.descriptor.durability
    }

    #[inline]
    pub fn meta(&self) -> &ItemMeta {
        &self.meta
    }

    #[inline]
    pub fn extension(&self) -> Option<&ExtensionPayload> {
        self.extension.as_ref()
    }

    pub fn skull(&self) -> Option<&SkullData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_skull)
    }

    pub fn potion(&self) -> Option<&PotionData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_potion)
    }

    pub fn armor(&self) -> Option<&ArmorColorData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_armor)
    }

    pub fn firework(&self) -> Option<&FireworkData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_firework)
    }

    pub fn banner(&self) -> Option<&BannerData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_banner)
    }

    pub fn book(&self) -> Option<&BookData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_book)
    }
}

impl From<ItemDescriptor> for ItemStack {
    fn from(descriptor: ItemDescriptor) -> Self {
        Self::new(descriptor)
    }
}
