//! Item categories
//!
//! `Material` is the item type held by a descriptor. Only a handful of
//! materials carry category-specific extension data; everything else is opaque
//! to the builder and simply forwarded to the platform.

use super::vocabulary::define_vocabulary;

define_vocabulary! {
    /// Item type of a descriptor
    Material {
        Air => "AIR",
        Stone => "STONE",
        Dirt => "DIRT",
        Cobblestone => "COBBLESTONE",
        Wood => "WOOD",
        Stick => "STICK",
        Arrow => "ARROW",
        Bow => "BOW",
        Paper => "PAPER",
        Book => "BOOK",
        BookAndQuill => "BOOK_AND_QUILL",
        /// Signed book with title, author and pages
        WrittenBook => "WRITTEN_BOOK",
        /// Mob or player head; durability selects the variant
        SkullItem => "SKULL_ITEM",
        Potion => "POTION",
        GlassBottle => "GLASS_BOTTLE",
        Firework => "FIREWORK",
        FireworkCharge => "FIREWORK_CHARGE",
        Banner => "BANNER",
        LeatherHelmet => "LEATHER_HELMET",
        LeatherChestplate => "LEATHER_CHESTPLATE",
        LeatherLeggings => "LEATHER_LEGGINGS",
        LeatherBoots => "LEATHER_BOOTS",
        IronHelmet => "IRON_HELMET",
        IronChestplate => "IRON_CHESTPLATE",
        IronLeggings => "IRON_LEGGINGS",
        IronBoots => "IRON_BOOTS",
        DiamondHelmet => "DIAMOND_HELMET",
        DiamondChestplate => "DIAMOND_CHESTPLATE",
        DiamondLeggings => "DIAMOND_LEGGINGS",
        DiamondBoots => "DIAMOND_BOOTS",
        WoodSword => "WOOD_SWORD",
        StoneSword => "STONE_SWORD",
        IronSword => "IRON_SWORD",
        GoldSword => "GOLD_SWORD",
        DiamondSword => "DIAMOND_SWORD",
        IronPickaxe => "IRON_PICKAXE",
        DiamondPickaxe => "DIAMOND_PICKAXE",
        FishingRod => "FISHING_ROD",
        Diamond => "DIAMOND",
        Emerald => "EMERALD",
        GoldIngot => "GOLD_INGOT",
        IronIngot => "IRON_INGOT",
        NetherStar => "NETHER_STAR",
        EnchantedBook => "ENCHANTED_BOOK",
        Compass => "COMPASS",
        Watch => "WATCH",
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::Air
    }
}

impl Material {
    /// Returns true for the four dyeable leather armor pieces.
    pub fn is_leather_armor(&self) -> bool {
        matches!(
            self,
            Material::LeatherHelmet
                | Material::LeatherChestplate
                | Material::LeatherLeggings
                | Material::LeatherBoots
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_platform_names() {
        assert_eq!(Material::from_str("WRITTEN_BOOK").unwrap(), Material::WrittenBook);
        assert_eq!(Material::from_str("leather boots").unwrap(), Material::LeatherBoots);
        assert_eq!(Material::from_str("skull-item").unwrap(), Material::SkullItem);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = Material::from_str("UNOBTAINIUM").unwrap_err();
        assert!(err.to_string().contains("Unknown Material"));
    }

    #[test]
    fn display_matches_platform_name() {
        assert_eq!(Material::Firework.to_string(), "FIREWORK");
        assert_eq!(Material::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn all_excludes_unknown() {
        assert!(!Material::all().contains(&Material::Unknown));
        assert!(Material::all().contains(&Material::Banner));
    }

    #[test]
    fn leather_armor_detection() {
        let leather: Vec<_> = Material::all()
            .iter()
            .filter(|m| m.is_leather_armor())
            .collect();
        assert_eq!(leather.len(), 4);
        assert!(!Material::IronHelmet.is_leather_armor());
    }

    #[test]
    fn serde_uses_platform_names_and_falls_back() {
        let json = serde_json::to_string(&Material::SkullItem).unwrap();
        assert_eq!(json, "\"SKULL_ITEM\"");

        let parsed: Material = serde_json::from_str("\"SOME_FUTURE_BLOCK\"").unwrap();
        assert_eq!(parsed, Material::Unknown);
    }
}
