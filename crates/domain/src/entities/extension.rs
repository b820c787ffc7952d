//! Category-specific extension payloads
//!
//! An item carries at most one payload, and only the one matching its
//! descriptor's category. [`ExtensionKind::for_descriptor`] decides which.
//! Holding a `&mut SkullData` (or any other variant) is proof the item is of
//! that category, so the data types expose their mutations directly.

use std::fmt;

use crate::common::sequence;
use crate::entities::ItemDescriptor;
use crate::error::DomainError;
use crate::types::{DyeColor, Material};
use crate::value_objects::{Color, FireworkEffect, ItemRules, Pattern, PotionEffect};

/// Which payload an item category carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    Skull,
    Potion,
    ArmorColor,
    Firework,
    Banner,
    Book,
}

impl ExtensionKind {
    /// The payload kind for `descriptor`, or `None` for plain items.
    ///
    /// Skulls only carry owner data in their player-head variant.
    pub fn for_descriptor(descriptor: &ItemDescriptor, rules: &ItemRules) -> Option<Self> {
        match descriptor.material {
            Material::SkullItem if descriptor.durability == rules.player_head_variant => {
                Some(Self::Skull)
            }
            Material::Potion => Some(Self::Potion),
            material if material.is_leather_armor() => Some(Self::ArmorColor),
            Material::Firework => Some(Self::Firework),
            Material::Banner => Some(Self::Banner),
            Material::WrittenBook => Some(Self::Book),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Skull => "skull",
            Self::Potion => "potion",
            Self::ArmorColor => "armor color",
            Self::Firework => "firework",
            Self::Banner => "banner",
            Self::Book => "book",
        }
    }
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Category-specific data attached to an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionPayload {
    Skull(SkullData),
    Potion(PotionData),
    ArmorColor(ArmorColorData),
    Firework(FireworkData),
    Banner(BannerData),
    Book(BookData),
}

impl ExtensionPayload {
    /// An empty payload of the given kind
    pub fn empty(kind: ExtensionKind) -> Self {
        match kind {
            ExtensionKind::Skull => Self::Skull(SkullData::default()),
            ExtensionKind::Potion => Self::Potion(PotionData::default()),
            ExtensionKind::ArmorColor => Self::ArmorColor(ArmorColorData::default()),
            ExtensionKind::Firework => Self::Firework(FireworkData::default()),
            ExtensionKind::Banner => Self::Banner(BannerData::default()),
            ExtensionKind::Book => Self::Book(BookData::default()),
        }
    }

    pub fn kind(&self) -> ExtensionKind {
        match self {
            Self::Skull(_) => ExtensionKind::Skull,
            Self::Potion(_) => ExtensionKind::Potion,
            Self::ArmorColor(_) => ExtensionKind::ArmorColor,
            Self::Firework(_) => ExtensionKind::Firework,
            Self::Banner(_) => ExtensionKind::Banner,
            Self::Book(_) => ExtensionKind::Book,
        }
    }

    pub fn as_skull(&self) -> Option<&SkullData> {
        match self {
            Self::Skull(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_skull_mut(&mut self) -> Option<&mut SkullData> {
        match self {
            Self::Skull(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_potion(&self) -> Option<&PotionData> {
        match self {
            Self::Potion(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_potion_mut(&mut self) -> Option<&mut PotionData> {
        match self {
            Self::Potion(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&ArmorColorData> {
        match self {
            Self::ArmorColor(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_armor_mut(&mut self) -> Option<&mut ArmorColorData> {
        match self {
            Self::ArmorColor(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_firework(&self) -> Option<&FireworkData> {
        match self {
            Self::Firework(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_firework_mut(&mut self) -> Option<&mut FireworkData> {
        match self {
            Self::Firework(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_banner(&self) -> Option<&BannerData> {
        match self {
            Self::Banner(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_banner_mut(&mut self) -> Option<&mut BannerData> {
        match self {
            Self::Banner(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_book(&self) -> Option<&BookData> {
        match self {
            Self::Book(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_book_mut(&mut self) -> Option<&mut BookData> {
        match self {
            Self::Book(data) => Some(data),
            _ => None,
        }
    }
}

// ============================================================================
// Skull
// ============================================================================

/// Owner of a player head
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkullData {
    owner: Option<String>,
}

impl SkullData {
    #[inline]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn set_owner(&mut self, owner: Option<String>) {
        self.owner = owner;
    }
}

// ============================================================================
// Potion
// ============================================================================

/// Effect of a potion. `None` is an uncrafted water bottle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PotionData {
    effect: Option<PotionEffect>,
}

impl PotionData {
    #[inline]
    pub fn effect(&self) -> Option<&PotionEffect> {
        self.effect.as_ref()
    }

    /// Install `effect` as the sole effect, replacing any previous one.
    pub fn apply(&mut self, effect: PotionEffect) {
        self.effect = Some(effect);
    }
}

// ============================================================================
// Armor Color
// ============================================================================

/// Dye color of a leather armor piece. `None` is the platform default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmorColorData {
    color: Option<Color>,
}

impl ArmorColorData {
    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }
}

// ============================================================================
// Firework
// ============================================================================

/// Flight power and burst effects of a firework rocket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FireworkData {
    power: u32,
    effects: Vec<FireworkEffect>,
}

impl FireworkData {
    /// Flight power; each unit is half a second of flight.
    #[inline]
    pub fn power(&self) -> u32 {
        self.power
    }

    #[inline]
    pub fn effects(&self) -> &[FireworkEffect] {
        &self.effects
    }

    pub fn set_power(&mut self, power: u32) {
        self.power = power;
    }

    pub fn add_effects(&mut self, effects: impl IntoIterator<Item = FireworkEffect>) {
        self.effects.extend(effects);
    }

    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    /// Remove every effect equal to one of `effects`. Returns how many were
    /// removed.
    pub fn remove_effects(&mut self, effects: &[FireworkEffect]) -> usize {
        sequence::remove_matching_from_end(&mut self.effects, effects)
    }
}

// ============================================================================
// Banner
// ============================================================================

/// Base color and pattern layers of a banner, bottom layer first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerData {
    base_color: Option<DyeColor>,
    patterns: Vec<Pattern>,
}

impl BannerData {
    #[inline]
    pub fn base_color(&self) -> Option<DyeColor> {
        self.base_color
    }

    #[inline]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn set_base_color(&mut self, color: DyeColor) {
        self.base_color = Some(color);
    }

    pub fn add_pattern(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    /// Replace the layer at `index`.
    ///
    /// # Errors
    ///
    /// [`DomainError::Validation`] if `index` is past the last layer.
    pub fn set_pattern(&mut self, index: usize, pattern: Pattern) -> Result<(), DomainError> {
        let len = self.patterns.len();
        let slot = self.patterns.get_mut(index).ok_or_else(|| {
            DomainError::validation(format!(
                "Pattern index {} is out of range for {} patterns",
                index, len
            ))
        })?;
        *slot = pattern;
        Ok(())
    }

    pub fn set_patterns(&mut self, patterns: Vec<Pattern>) {
        self.patterns = patterns;
    }

    /// Remove every layer equal to one of `patterns`. Returns how many were
    /// removed.
    pub fn remove_patterns(&mut self, patterns: &[Pattern]) -> usize {
        sequence::remove_matching_from_end(&mut self.patterns, patterns)
    }
}

// ============================================================================
// Book
// ============================================================================

/// Title, author and pages of a written book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookData {
    title: Option<String>,
    author: Option<String>,
    pages: Vec<String>,
}

impl BookData {
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[inline]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Pages in reading order
    #[inline]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn set_author(&mut self, author: Option<String>) {
        self.author = author;
    }

    pub fn add_pages(&mut self, pages: impl IntoIterator<Item = String>) {
        self.pages.extend(pages);
    }

    /// Replace the page at zero-based `index`.
    ///
    /// # Errors
    ///
    /// [`DomainError::Validation`] if `index` is past the last page.
    pub fn set_page(&mut self, index: usize, content: String) -> Result<(), DomainError> {
        let len = self.pages.len();
        let page = self.pages.get_mut(index).ok_or_else(|| {
            DomainError::validation(format!(
                "Page index {} is out of range for {} pages",
                index, len
            ))
        })?;
        *page = content;
        Ok(())
    }

    /// Replace every page. An empty sequence clears the book.
    pub fn set_pages(&mut self, pages: Vec<String>) {
        self.pages = pages;
    }

    /// Remove the pages at `indices` (zero-based, any order).
    ///
    /// # Errors
    ///
    /// [`DomainError::Validation`] for duplicate or out-of-range indices; the
    /// pages are left unchanged.
    pub fn remove_pages(&mut self, indices: &[usize]) -> Result<(), DomainError> {
        self.pages = sequence::remove_indices(&self.pages, indices)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FireworkEffectType, PatternType};

    fn descriptor(material: Material, durability: u16) -> ItemDescriptor {
        ItemDescriptor::new(material).with_durability(durability)
    }

    mod kind {
        use super::*;

        #[test]
        fn player_head_variant_is_skull() {
            let rules = ItemRules::default();
            assert_eq!(
                ExtensionKind::for_descriptor(&descriptor(Material::SkullItem, 3), &rules),
                Some(ExtensionKind::Skull)
            );
        }

        #[test]
        fn mob_skull_variants_carry_no_payload() {
            let rules = ItemRules::default();
            for variant in [0, 1, 2, 4] {
                assert_eq!(
                    ExtensionKind::for_descriptor(&descriptor(Material::SkullItem, variant), &rules),
                    None
                );
            }
        }

        #[test]
        fn player_head_variant_follows_rules() {
            let rules = ItemRules {
                player_head_variant: 5,
                ..ItemRules::default()
            };
            assert_eq!(
                ExtensionKind::for_descriptor(&descriptor(Material::SkullItem, 5), &rules),
                Some(ExtensionKind::Skull)
            );
            assert_eq!(
                ExtensionKind::for_descriptor(&descriptor(Material::SkullItem, 3), &rules),
                None
            );
        }

        #[test]
        fn category_mapping() {
            let rules = ItemRules::default();
            let cases = [
                (Material::Potion, Some(ExtensionKind::Potion)),
                (Material::LeatherHelmet, Some(ExtensionKind::ArmorColor)),
                (Material::LeatherBoots, Some(ExtensionKind::ArmorColor)),
                (Material::IronBoots, None),
                (Material::Firework, Some(ExtensionKind::Firework)),
                (Material::Banner, Some(ExtensionKind::Banner)),
                (Material::WrittenBook, Some(ExtensionKind::Book)),
                (Material::BookAndQuill, None),
                (Material::Stone, None),
            ];
            for (material, expected) in cases {
                assert_eq!(
                    ExtensionKind::for_descriptor(&descriptor(material, 0), &rules),
                    expected,
                    "{material}"
                );
            }
        }

        #[test]
        fn empty_payload_has_requested_kind() {
            for kind in [
                ExtensionKind::Skull,
                ExtensionKind::Potion,
                ExtensionKind::ArmorColor,
                ExtensionKind::Firework,
                ExtensionKind::Banner,
                ExtensionKind::Book,
            ] {
                assert_eq!(ExtensionPayload::empty(kind).kind(), kind);
            }
        }
    }

    mod views {
        use super::*;

        #[test]
        fn only_matching_view_is_available() {
            let mut payload = ExtensionPayload::empty(ExtensionKind::Book);
            assert!(payload.as_book().is_some());
            assert!(payload.as_book_mut().is_some());
            assert!(payload.as_skull().is_none());
            assert!(payload.as_potion_mut().is_none());
            assert!(payload.as_firework().is_none());
            assert!(payload.as_banner_mut().is_none());
            assert!(payload.as_armor().is_none());
        }
    }

    mod firework {
        use super::*;

        fn effect(kind: FireworkEffectType) -> FireworkEffect {
            FireworkEffect::new(kind).with_color(Color::RED)
        }

        #[test]
        fn remove_effects_by_value() {
            let e1 = effect(FireworkEffectType::Ball);
            let e2 = effect(FireworkEffectType::Star);
            let e3 = effect(FireworkEffectType::Burst);

            let mut data = FireworkData::default();
            data.add_effects([e1.clone(), e2.clone(), e3.clone()]);
            assert_eq!(data.remove_effects(&[e2]), 1);
            assert_eq!(data.effects(), &[e1, e3]);
        }

        #[test]
        fn remove_effects_removes_duplicates() {
            let e1 = effect(FireworkEffectType::Ball);
            let e2 = effect(FireworkEffectType::Creeper);

            let mut data = FireworkData::default();
            data.add_effects([e2.clone(), e1.clone(), e2.clone(), e2.clone()]);
            assert_eq!(data.remove_effects(&[e2]), 3);
            assert_eq!(data.effects(), &[e1]);
        }
    }

    mod banner {
        use super::*;

        #[test]
        fn set_pattern_replaces_in_place() {
            let mut data = BannerData::default();
            data.add_pattern(Pattern::new(DyeColor::Red, PatternType::Cross));
            data.add_pattern(Pattern::new(DyeColor::Blue, PatternType::Border));

            data.set_pattern(1, Pattern::new(DyeColor::Black, PatternType::Skull))
                .unwrap();
            assert_eq!(
                data.patterns(),
                &[
                    Pattern::new(DyeColor::Red, PatternType::Cross),
                    Pattern::new(DyeColor::Black, PatternType::Skull),
                ]
            );
        }

        #[test]
        fn set_pattern_out_of_range_is_rejected() {
            let mut data = BannerData::default();
            let err = data
                .set_pattern(0, Pattern::new(DyeColor::Red, PatternType::Cross))
                .unwrap_err();
            assert!(err.is_validation());
            assert!(data.patterns().is_empty());
        }

        #[test]
        fn remove_patterns_counts_every_match() {
            let cross = Pattern::new(DyeColor::Red, PatternType::Cross);
            let border = Pattern::new(DyeColor::Blue, PatternType::Border);
            let mut data = BannerData::default();
            data.set_patterns(vec![cross, border, cross]);

            assert_eq!(data.remove_patterns(&[cross]), 2);
            assert_eq!(data.patterns(), &[border]);
            assert_eq!(data.remove_patterns(&[cross]), 0);
        }
    }

    mod book {
        use super::*;

        fn pages(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        #[test]
        fn set_pages_installs_given_pages() {
            let mut data = BookData::default();
            data.add_pages(pages(&["old"]));
            data.set_pages(pages(&["one", "two"]));
            assert_eq!(data.pages(), pages(&["one", "two"]).as_slice());
        }

        #[test]
        fn set_page_uses_zero_based_index() {
            let mut data = BookData::default();
            data.add_pages(pages(&["one", "two"]));
            data.set_page(0, "first".to_string()).unwrap();
            assert_eq!(data.pages(), pages(&["first", "two"]).as_slice());
            assert!(data.set_page(2, "third".to_string()).is_err());
        }

        #[test]
        fn remove_pages_rejects_duplicates() {
            let mut data = BookData::default();
            data.add_pages(pages(&["a", "b", "c"]));
            assert!(data.remove_pages(&[2, 2]).is_err());
            data.remove_pages(&[0, 2]).unwrap();
            assert_eq!(data.pages(), pages(&["b"]).as_slice());
        }
    }
}
