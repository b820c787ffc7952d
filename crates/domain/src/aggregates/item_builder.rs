//! ItemBuilder aggregate - fluent construction and mutation of items
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: descriptor, metadata and payload are only reachable
//!   through the builder's methods
//! - **Payload follows category**: the extension payload is re-derived
//!   whenever the material or durability changes, so a builder never holds a
//!   payload its category does not own
//! - **Typed handles**: `potion_mut()`, `book_mut()` and friends return a
//!   handle only when the category matches
//! - **Permissive fluent API**: the top-level extension mutators are silent
//!   no-ops on a mismatched category, so any mutator is safe to chain
//! - **Errors as values**: rejected operations return `Err(DomainError)` and
//!   leave state untouched

use tracing::{debug, trace, warn};

use crate::common::sequence;
use crate::entities::{
    ArmorColorData, BannerData, BookData, ExtensionKind, ExtensionPayload, FireworkData,
    ItemDescriptor, ItemMeta, ItemStack, PotionData, SkullData,
};
use crate::error::DomainError;
use crate::types::{DyeColor, Enchantment, ItemFlag, Material, PotionType};
use crate::value_objects::{Color, FireworkEffect, ItemRules, Pattern, PotionEffect};

/// Level of the sentinel glow enchantment
const GLOW_LEVEL: u32 = 1;

/// Fluent builder for [`ItemStack`]s.
///
/// Every mutator returns the builder, so calls chain. Mutators that can be
/// rejected return `Result<&mut Self, DomainError>` and chain with `?`.
///
/// # Example
///
/// ```
/// use itemforge_domain::{DomainError, ItemBuilder, Material};
///
/// # fn main() -> Result<(), DomainError> {
/// let arrow = ItemBuilder::of(Material::Arrow, 32)
///     .name("Custom Arrow")
///     .add_lore(["Pierces", "straight", "through", "armor"])
///     .remove_lore(&[1, 2])?
///     .build();
///
/// assert_eq!(arrow.quantity(), 32);
/// assert_eq!(arrow.meta().display_name(), Some("Custom Arrow"));
/// assert_eq!(arrow.meta().lore(), ["Pierces", "armor"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    descriptor: ItemDescriptor,
    meta: ItemMeta,
    extension: Option<ExtensionPayload>,
    rules: ItemRules,
}

impl ItemBuilder {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// A builder for a single undamaged item.
    pub fn new(material: Material) -> Self {
        Self::from_descriptor(ItemDescriptor::new(material))
    }

    pub fn of(material: Material, quantity: u32) -> Self {
        Self::from_descriptor(ItemDescriptor::new(material).with_quantity(quantity))
    }

    pub fn of_variant(material: Material, quantity: u32, durability: u16) -> Self {
        Self::from_descriptor(
            ItemDescriptor::new(material)
                .with_quantity(quantity)
                .with_durability(durability),
        )
    }

    pub fn from_descriptor(descriptor: ItemDescriptor) -> Self {
        Self::from_stack(ItemStack::new(descriptor))
    }

    /// Continue building from an existing item under the default rules.
    ///
    /// A payload that does not match the stack's category is replaced with an
    /// empty payload of the right kind. Items built under custom rules should
    /// be loaded with [`from_stack_with_rules`](Self::from_stack_with_rules).
    pub fn from_stack(stack: ItemStack) -> Self {
        Self::from_stack_with_rules(stack, ItemRules::default())
    }

    /// Continue building from an existing item, deriving its category under
    /// `rules`.
    pub fn from_stack_with_rules(stack: ItemStack, rules: ItemRules) -> Self {
        let (descriptor, meta, extension) = stack.into_parts();
        let mut builder = Self {
            descriptor,
            meta,
            extension,
            rules,
        };
        builder.sync_extension();
        builder
    }

    /// Use `rules` instead of the defaults.
    ///
    /// The category is re-derived under the new rules. A payload whose kind
    /// changes is replaced, so its data is lost.
    pub fn with_rules(mut self, rules: ItemRules) -> Self {
        self.rules = rules;
        self.sync_extension();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn descriptor(&self) -> &ItemDescriptor {
        &self.descriptor
    }

    #[inline]
    pub fn meta(&self) -> &ItemMeta {
        &self.meta
    }

    #[inline]
    pub fn extension(&self) -> Option<&ExtensionPayload> {
        self.extension.as_ref()
    }

    #[inline]
    pub fn rules(&self) -> &ItemRules {
        &self.rules
    }

    /// Returns true if the item is in the exact glow state produced by
    /// [`glow(true)`](Self::glow).
    pub fn is_glowing(&self) -> bool {
        self.meta
            .is_glowing(self.rules.glow_enchantment, self.rules.glow_flag)
    }

    // =========================================================================
    // Typed Extension Handles
    // =========================================================================

    pub fn skull(&self) -> Option<&SkullData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_skull)
    }

    /// Skull data, present only for player heads.
    pub fn skull_mut(&mut self) -> Option<&mut SkullData> {
        self.extension.as_mut().and_then(ExtensionPayload::as_skull_mut)
    }

    pub fn potion(&self) -> Option<&PotionData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_potion)
    }

    pub fn potion_mut(&mut self) -> Option<&mut PotionData> {
        self.extension.as_mut().and_then(ExtensionPayload::as_potion_mut)
    }

    pub fn armor(&self) -> Option<&ArmorColorData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_armor)
    }

    /// Armor color data, present only for leather armor.
    pub fn armor_mut(&mut self) -> Option<&mut ArmorColorData> {
        self.extension.as_mut().and_then(ExtensionPayload::as_armor_mut)
    }

    pub fn firework(&self) -> Option<&FireworkData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_firework)
    }

    pub fn firework_mut(&mut self) -> Option<&mut FireworkData> {
        self.extension.as_mut().and_then(ExtensionPayload::as_firework_mut)
    }

    pub fn banner(&self) -> Option<&BannerData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_banner)
    }

    pub fn banner_mut(&mut self) -> Option<&mut BannerData> {
        self.extension.as_mut().and_then(ExtensionPayload::as_banner_mut)
    }

    pub fn book(&self) -> Option<&BookData> {
        self.extension.as_ref().and_then(ExtensionPayload::as_book)
    }

    /// Book data, present only for written books.
    pub fn book_mut(&mut self) -> Option<&mut BookData> {
        self.extension.as_mut().and_then(ExtensionPayload::as_book_mut)
    }

    // =========================================================================
    // Base Descriptor
    // =========================================================================

    /// Change the item type. The extension payload follows the new category.
    pub fn material(&mut self, material: Material) -> &mut Self {
        self.descriptor.material = material;
        self.sync_extension();
        self
    }

    pub fn quantity(&mut self, quantity: u32) -> &mut Self {
        self.descriptor.quantity = quantity;
        self
    }

    /// Change the damage value. For skulls this selects the variant, so the
    /// extension payload is re-derived.
    pub fn durability(&mut self, durability: u16) -> &mut Self {
        self.descriptor.durability = durability;
        self.sync_extension();
        self
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.meta.set_display_name(Some(name.into()));
        self
    }

    /// Fall back to the platform's default name.
    pub fn clear_name(&mut self) -> &mut Self {
        self.meta.set_display_name(None);
        self
    }

    pub fn unbreakable(&mut self, unbreakable: bool) -> &mut Self {
        self.meta.set_unbreakable(unbreakable);
        self
    }

    /// Append lines to the lore.
    pub fn add_lore<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta.add_lore(lines.into_iter().map(Into::into));
        self
    }

    /// Replace the lore. An empty sequence clears it.
    pub fn set_lore<I, S>(&mut self, lore: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta.set_lore(lore.into_iter().map(Into::into).collect());
        self
    }

    pub fn clear_lore(&mut self) -> &mut Self {
        self.meta.set_lore(Vec::new());
        self
    }

    /// Remove the lore lines at `indices` (zero-based, any order).
    ///
    /// # Errors
    ///
    /// [`DomainError::Validation`] if `indices` repeats a value or points past
    /// the last line. The lore is unchanged.
    pub fn remove_lore(&mut self, indices: &[usize]) -> Result<&mut Self, DomainError> {
        if let Err(err) = self.meta.remove_lore(indices) {
            return Err(self.reject("remove_lore", err));
        }
        Ok(self)
    }

    pub fn add_flags(&mut self, flags: impl IntoIterator<Item = ItemFlag>) -> &mut Self {
        self.meta.add_flags(flags);
        self
    }

    pub fn remove_flags(&mut self, flags: impl IntoIterator<Item = ItemFlag>) -> &mut Self {
        self.meta.remove_flags(flags);
        self
    }

    pub fn clear_flags(&mut self) -> &mut Self {
        self.meta.clear_flags();
        self
    }

    /// Add or overwrite an enchantment.
    ///
    /// `force_override` records that the level may exceed the platform's
    /// normal cap; no cap is enforced here.
    pub fn enchant(&mut self, kind: Enchantment, level: u32, force_override: bool) -> &mut Self {
        self.meta.add_enchant(kind, level, force_override);
        self
    }

    pub fn remove_enchants(&mut self, kinds: impl IntoIterator<Item = Enchantment>) -> &mut Self {
        self.meta.remove_enchants(kinds);
        self
    }

    pub fn clear_enchants(&mut self) -> &mut Self {
        self.meta.clear_enchants();
        self
    }

    /// Toggle the enchantment glint without visible enchantments.
    ///
    /// Glow is encoded as the sentinel enchantment from [`ItemRules`] at level
    /// 1 plus the flag hiding it.
    ///
    /// - `glow(true)` on a glowing item does nothing.
    /// - `glow(true)` on an item with any other enchantment fails.
    /// - `glow(false)` on a glowing item clears **every** flag and
    ///   enchantment, not only the glow pair. On any other item it does
    ///   nothing.
    ///
    /// # Errors
    ///
    /// [`DomainError::Conflict`] when enabling glow on an enchanted item. Flags
    /// and enchantments are unchanged.
    pub fn glow(&mut self, glow: bool) -> Result<&mut Self, DomainError> {
        let glowing = self.is_glowing();

        if glow && !glowing {
            if self.meta.has_enchants() {
                return Err(self.reject(
                    "glow",
                    DomainError::conflict("Cannot apply glow to an already enchanted item"),
                ));
            }
            self.meta.add_flags([self.rules.glow_flag]);
            self.meta
                .add_enchant(self.rules.glow_enchantment, GLOW_LEVEL, true);
        } else if !glow && glowing {
            self.meta.clear_flags();
            self.meta.clear_enchants();
        }

        Ok(self)
    }

    // =========================================================================
    // Skulls
    // =========================================================================

    /// Set the owner of a player head.
    pub fn skull_owner(&mut self, owner: impl Into<String>) -> &mut Self {
        self.set_skull_owner(Some(owner.into()))
    }

    pub fn remove_skull_owner(&mut self) -> &mut Self {
        self.set_skull_owner(None)
    }

    fn set_skull_owner(&mut self, owner: Option<String>) -> &mut Self {
        match self.skull_mut() {
            Some(skull) => skull.set_owner(owner),
            None => self.skip_mismatched("skull_owner", ExtensionKind::Skull),
        }
        self
    }

    // =========================================================================
    // Potions
    // =========================================================================

    /// Replace the potion's effect.
    pub fn potion_effect(
        &mut self,
        effect: PotionType,
        level: u32,
        splash: bool,
        extended: bool,
    ) -> &mut Self {
        match self.potion_mut() {
            Some(potion) => potion.apply(
                PotionEffect::new(effect, level)
                    .with_splash(splash)
                    .with_extended_duration(extended),
            ),
            None => self.skip_mismatched("potion_effect", ExtensionKind::Potion),
        }
        self
    }

    // =========================================================================
    // Leather Armor
    // =========================================================================

    /// Dye a leather armor piece. `None` restores the default color.
    pub fn armor_color(&mut self, color: impl Into<Option<Color>>) -> &mut Self {
        let color = color.into();
        match self.armor_mut() {
            Some(armor) => armor.set_color(color),
            None => self.skip_mismatched("armor_color", ExtensionKind::ArmorColor),
        }
        self
    }

    pub fn remove_armor_color(&mut self) -> &mut Self {
        self.armor_color(None)
    }

    // =========================================================================
    // Fireworks
    // =========================================================================

    /// Set the flight power. Each unit is half a second of flight.
    pub fn firework_power(&mut self, power: u32) -> &mut Self {
        match self.firework_mut() {
            Some(firework) => firework.set_power(power),
            None => self.skip_mismatched("firework_power", ExtensionKind::Firework),
        }
        self
    }

    pub fn add_effects(&mut self, effects: impl IntoIterator<Item = FireworkEffect>) -> &mut Self {
        match self.firework_mut() {
            Some(firework) => firework.add_effects(effects),
            None => self.skip_mismatched("add_effects", ExtensionKind::Firework),
        }
        self
    }

    pub fn clear_effects(&mut self) -> &mut Self {
        match self.firework_mut() {
            Some(firework) => firework.clear_effects(),
            None => self.skip_mismatched("clear_effects", ExtensionKind::Firework),
        }
        self
    }

    /// Remove every effect equal to one of `effects`.
    pub fn remove_effects(&mut self, effects: &[FireworkEffect]) -> &mut Self {
        match self.firework_mut() {
            Some(firework) => {
                let removed = firework.remove_effects(effects);
                debug!(removed, "Removed firework effects");
            }
            None => self.skip_mismatched("remove_effects", ExtensionKind::Firework),
        }
        self
    }

    // =========================================================================
    // Banners
    // =========================================================================

    pub fn banner_color(&mut self, color: DyeColor) -> &mut Self {
        match self.banner_mut() {
            Some(banner) => banner.set_base_color(color),
            None => self.skip_mismatched("banner_color", ExtensionKind::Banner),
        }
        self
    }

    pub fn add_pattern(&mut self, pattern: Pattern) -> &mut Self {
        match self.banner_mut() {
            Some(banner) => banner.add_pattern(pattern),
            None => self.skip_mismatched("add_pattern", ExtensionKind::Banner),
        }
        self
    }

    /// Replace the pattern layer at `index`.
    ///
    /// # Errors
    ///
    /// [`DomainError::Validation`] if the banner has no layer at `index`.
    pub fn set_pattern(&mut self, index: usize, pattern: Pattern) -> Result<&mut Self, DomainError> {
        let result = match self.banner_mut() {
            Some(banner) => banner.set_pattern(index, pattern),
            None => {
                self.skip_mismatched("set_pattern", ExtensionKind::Banner);
                Ok(())
            }
        };
        if let Err(err) = result {
            return Err(self.reject("set_pattern", err));
        }
        Ok(self)
    }

    /// Replace every pattern layer.
    pub fn set_patterns(&mut self, patterns: impl IntoIterator<Item = Pattern>) -> &mut Self {
        match self.banner_mut() {
            Some(banner) => banner.set_patterns(patterns.into_iter().collect()),
            None => self.skip_mismatched("set_patterns", ExtensionKind::Banner),
        }
        self
    }

    pub fn clear_patterns(&mut self) -> &mut Self {
        self.set_patterns(std::iter::empty())
    }

    /// Remove every layer equal to one of `patterns`.
    pub fn remove_patterns(&mut self, patterns: &[Pattern]) -> &mut Self {
        match self.banner_mut() {
            Some(banner) => {
                let removed = banner.remove_patterns(patterns);
                debug!(removed, "Removed banner patterns");
            }
            None => self.skip_mismatched("remove_patterns", ExtensionKind::Banner),
        }
        self
    }

    // =========================================================================
    // Books
    // =========================================================================

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.set_book_title(Some(title.into()))
    }

    pub fn clear_title(&mut self) -> &mut Self {
        self.set_book_title(None)
    }

    fn set_book_title(&mut self, title: Option<String>) -> &mut Self {
        match self.book_mut() {
            Some(book) => book.set_title(title),
            None => self.skip_mismatched("title", ExtensionKind::Book),
        }
        self
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.set_book_author(Some(author.into()))
    }

    pub fn clear_author(&mut self) -> &mut Self {
        self.set_book_author(None)
    }

    fn set_book_author(&mut self, author: Option<String>) -> &mut Self {
        match self.book_mut() {
            Some(book) => book.set_author(author),
            None => self.skip_mismatched("author", ExtensionKind::Book),
        }
        self
    }

    /// Append pages after the last one.
    pub fn add_pages<I, S>(&mut self, pages: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.book_mut() {
            Some(book) => book.add_pages(pages.into_iter().map(Into::into)),
            None => self.skip_mismatched("add_pages", ExtensionKind::Book),
        }
        self
    }

    /// Replace the page at zero-based `index`.
    ///
    /// # Errors
    ///
    /// [`DomainError::Validation`] if the book has no page at `index`.
    pub fn set_page(
        &mut self,
        index: usize,
        content: impl Into<String>,
    ) -> Result<&mut Self, DomainError> {
        let result = match self.book_mut() {
            Some(book) => book.set_page(index, content.into()),
            None => {
                self.skip_mismatched("set_page", ExtensionKind::Book);
                Ok(())
            }
        };
        if let Err(err) = result {
            return Err(self.reject("set_page", err));
        }
        Ok(self)
    }

    /// Replace every page with `pages`. An empty sequence clears the book.
    pub fn set_pages<I, S>(&mut self, pages: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.book_mut() {
            Some(book) => book.set_pages(pages.into_iter().map(Into::into).collect()),
            None => self.skip_mismatched("set_pages", ExtensionKind::Book),
        }
        self
    }

    pub fn clear_pages(&mut self) -> &mut Self {
        self.set_pages(std::iter::empty::<String>())
    }

    /// Remove the pages at `indices` (zero-based, any order).
    ///
    /// Duplicate indices are rejected even when the item is not a book.
    ///
    /// # Errors
    ///
    /// [`DomainError::Validation`] if `indices` repeats a value or points past
    /// the last page. The pages are unchanged.
    pub fn remove_pages(&mut self, indices: &[usize]) -> Result<&mut Self, DomainError> {
        if sequence::contains_duplicates(indices) {
            return Err(self.reject(
                "remove_pages",
                DomainError::validation("Index list cannot contain duplicate values"),
            ));
        }

        let result = match self.book_mut() {
            Some(book) => book.remove_pages(indices),
            None => {
                self.skip_mismatched("remove_pages", ExtensionKind::Book);
                Ok(())
            }
        };
        if let Err(err) = result {
            return Err(self.reject("remove_pages", err));
        }
        Ok(self)
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Snapshot the current state as an [`ItemStack`].
    ///
    /// The builder keeps its state and can be mutated and built again.
    pub fn build(&self) -> ItemStack {
        trace!(
            material = %self.descriptor.material,
            quantity = self.descriptor.quantity,
            extension = ?self.extension.as_ref().map(ExtensionPayload::kind),
            "Building item stack"
        );
        ItemStack::from_parts(self.descriptor, self.meta.clone(), self.extension.clone())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Make the payload match the descriptor's category.
    fn sync_extension(&mut self) {
        let kind = ExtensionKind::for_descriptor(&self.descriptor, &self.rules);
        let current = self.extension.as_ref().map(ExtensionPayload::kind);
        if current != kind {
            debug!(
                material = %self.descriptor.material,
                durability = self.descriptor.durability,
                from = ?current,
                to = ?kind,
                "Replacing extension payload for new item category"
            );
            self.extension = kind.map(ExtensionPayload::empty);
        }
    }

    fn skip_mismatched(&self, operation: &'static str, expected: ExtensionKind) {
        debug!(
            material = %self.descriptor.material,
            durability = self.descriptor.durability,
            operation,
            expected = %expected,
            "Ignoring mutation for non-matching item category"
        );
    }

    fn reject(&self, operation: &'static str, err: DomainError) -> DomainError {
        warn!(
            material = %self.descriptor.material,
            operation,
            error = %err,
            "Rejected item mutation"
        );
        err
    }
}

impl From<ItemStack> for ItemBuilder {
    fn from(stack: ItemStack) -> Self {
        Self::from_stack(stack)
    }
}

// ============================================================================
// Tests
// ============================================================================
