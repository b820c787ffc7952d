//! Metadata vocabulary shared by every item category

use super::vocabulary::define_vocabulary;

define_vocabulary! {
    /// Capability marker that hides part of an item's tooltip
    ItemFlag {
        /// Hide enchantment lines (used by the glow toggle)
        HideEnchants => "HIDE_ENCHANTS",
        HideAttributes => "HIDE_ATTRIBUTES",
        HideUnbreakable => "HIDE_UNBREAKABLE",
        HideDestroys => "HIDE_DESTROYS",
        HidePlacedOn => "HIDE_PLACED_ON",
        HidePotionEffects => "HIDE_POTION_EFFECTS",
    }
}

define_vocabulary! {
    /// Enchantment kind
    Enchantment {
        Protection => "PROTECTION_ENVIRONMENTAL",
        FireProtection => "PROTECTION_FIRE",
        FeatherFalling => "PROTECTION_FALL",
        BlastProtection => "PROTECTION_EXPLOSIONS",
        ProjectileProtection => "PROTECTION_PROJECTILE",
        Respiration => "OXYGEN",
        AquaAffinity => "WATER_WORKER",
        Thorns => "THORNS",
        DepthStrider => "DEPTH_STRIDER",
        Sharpness => "DAMAGE_ALL",
        Smite => "DAMAGE_UNDEAD",
        BaneOfArthropods => "DAMAGE_ARTHROPODS",
        Knockback => "KNOCKBACK",
        FireAspect => "FIRE_ASPECT",
        Looting => "LOOT_BONUS_MOBS",
        Efficiency => "DIG_SPEED",
        SilkTouch => "SILK_TOUCH",
        Unbreaking => "DURABILITY",
        Fortune => "LOOT_BONUS_BLOCKS",
        Power => "ARROW_DAMAGE",
        Punch => "ARROW_KNOCKBACK",
        Flame => "ARROW_FIRE",
        Infinity => "ARROW_INFINITE",
        LuckOfTheSea => "LUCK",
        /// Fishing enchantment, harmless on any other item
        Lure => "LURE",
    }
}
