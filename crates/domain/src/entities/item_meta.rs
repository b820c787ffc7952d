//! Item metadata - display attributes common to every item category
//!
//! # Invariants
//!
//! - Flags are a set: adding a flag twice has no effect
//! - There is at most one enchantment entry per kind
//! - Lore removal is all-or-nothing (see [`crate::common::remove_indices`])

use std::collections::{BTreeMap, BTreeSet};

use crate::common::sequence;
use crate::error::DomainError;
use crate::types::{Enchantment, ItemFlag};
use crate::value_objects::EnchantLevel;

/// Display name, lore, flags, enchantments and the unbreakable toggle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMeta {
    display_name: Option<String>,
    lore: Vec<String>,
    flags: BTreeSet<ItemFlag>,
    enchants: BTreeMap<Enchantment, EnchantLevel>,
    unbreakable: bool,
}

impl ItemMeta {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the display name, if one overrides the platform default.
    #[inline]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Returns the lore lines in display order.
    #[inline]
    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    #[inline]
    pub fn has_lore(&self) -> bool {
        !self.lore.is_empty()
    }

    #[inline]
    pub fn flags(&self) -> &BTreeSet<ItemFlag> {
        &self.flags
    }

    #[inline]
    pub fn has_flag(&self, flag: ItemFlag) -> bool {
        self.flags.contains(&flag)
    }

    #[inline]
    pub fn enchants(&self) -> &BTreeMap<Enchantment, EnchantLevel> {
        &self.enchants
    }

    #[inline]
    pub fn has_enchants(&self) -> bool {
        !self.enchants.is_empty()
    }

    /// Returns the entry for `kind`, if the item carries it.
    #[inline]
    pub fn enchant(&self, kind: Enchantment) -> Option<EnchantLevel> {
        self.enchants.get(&kind).copied()
    }

    #[inline]
    pub fn is_unbreakable(&self) -> bool {
        self.unbreakable
    }

    /// Returns true if the item is in the exact glow state: one enchantment,
    /// `sentinel` at level 1, and one flag, `hide_flag`.
    pub fn is_glowing(&self, sentinel: Enchantment, hide_flag: ItemFlag) -> bool {
        self.enchants.len() == 1
            && self.enchant(sentinel).map(|entry| entry.level()) == Some(1)
            && self.flags.len() == 1
            && self.has_flag(hide_flag)
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name;
    }

    /// Replace the whole lore. An empty sequence clears it.
    pub fn set_lore(&mut self, lore: Vec<String>) {
        self.lore = lore;
    }

    /// Append lines after the existing lore.
    pub fn add_lore(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lore.extend(lines);
    }

    /// Remove the lore lines at `indices` (zero-based, any order).
    ///
    /// # Errors
    ///
    /// [`DomainError::Validation`] for duplicate or out-of-range indices; the
    /// lore is left unchanged.
    pub fn remove_lore(&mut self, indices: &[usize]) -> Result<(), DomainError> {
        self.lore = sequence::remove_indices(&self.lore, indices)?;
        Ok(())
    }

    pub fn add_flags(&mut self, flags: impl IntoIterator<Item = ItemFlag>) {
        self.flags.extend(flags);
    }

    pub fn remove_flags(&mut self, flags: impl IntoIterator<Item = ItemFlag>) {
        for flag in flags {
            self.flags.remove(&flag);
        }
    }

    pub fn clear_flags(&mut self) {
        self.flags.clear();
    }

    /// Insert or overwrite the entry for `kind`.
    pub fn add_enchant(&mut self, kind: Enchantment, level: u32, forced: bool) {
        self.enchants.insert(kind, EnchantLevel::new(level, forced));
    }

    pub fn remove_enchants(&mut self, kinds: impl IntoIterator<Item = Enchantment>) {
        for kind in kinds {
            self.enchants.remove(&kind);
        }
    }

    pub fn clear_enchants(&mut self) {
        self.enchants.clear();
    }

    pub fn set_unbreakable(&mut self, unbreakable: bool) {
        self.unbreakable = unbreakable;
    }
}
