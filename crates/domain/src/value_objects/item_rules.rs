//! Item rules configuration
//!
//! Rules the builder consults when deciding which extension payload an item
//! carries and how the glow toggle is encoded. Defaults match the platform's
//! stock behavior; deployments can override them from JSON or environment
//! variables.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::{Enchantment, ItemFlag};

/// Configurable builder rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRules {
    /// Durability value that turns a `SKULL_ITEM` into a player head
    pub player_head_variant: u16,

    // ============================================================================
    // Glow
    // ============================================================================
    /// Sentinel enchantment applied at level 1 to make an item glow
    pub glow_enchantment: Enchantment,
    /// Flag that hides the sentinel enchantment from the tooltip
    pub glow_flag: ItemFlag,
}

impl Default for ItemRules {
    fn default() -> Self {
        Self {
            player_head_variant: 3,
            glow_enchantment: Enchantment::Lure,
            glow_flag: ItemFlag::HideEnchants,
        }
    }
}

impl ItemRules {
    /// Parse rules from JSON. Missing fields take their default values.
    ///
    /// # Example
    ///
    /// ```
    /// use itemforge_domain::{Enchantment, ItemRules};
    ///
    /// let rules = ItemRules::from_json(r#"{ "glow_enchantment": "DURABILITY" }"#).unwrap();
    /// assert_eq!(rules.glow_enchantment, Enchantment::Unbreaking);
    /// assert_eq!(rules.player_head_variant, 3);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let rules: Self = serde_json::from_str(json)?;
        if rules.glow_enchantment == Enchantment::Unknown || rules.glow_flag == ItemFlag::Unknown {
            return Err(DomainError::parse(
                "Glow rules must name a known enchantment and flag",
            ));
        }
        Ok(rules)
    }

    /// Load from environment variables, using defaults for missing or
    /// unparseable values
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            player_head_variant: env_or("ITEMFORGE_PLAYER_HEAD_VARIANT", defaults.player_head_variant),
            glow_enchantment: env_or("ITEMFORGE_GLOW_ENCHANTMENT", defaults.glow_enchantment),
            glow_flag: env_or("ITEMFORGE_GLOW_FLAG", defaults.glow_flag),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_lure_and_hide_enchants() {
        let rules = ItemRules::default();
        assert_eq!(rules.player_head_variant, 3);
        assert_eq!(rules.glow_enchantment, Enchantment::Lure);
        assert_eq!(rules.glow_flag, ItemFlag::HideEnchants);
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let rules = ItemRules::from_json(r#"{ "player_head_variant": 5 }"#).unwrap();
        assert_eq!(rules.player_head_variant, 5);
        assert_eq!(rules.glow_enchantment, Enchantment::Lure);
    }

    #[test]
    fn from_json_empty_object_is_default() {
        assert_eq!(ItemRules::from_json("{}").unwrap(), ItemRules::default());
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = ItemRules::from_json("{ player_head_variant: ").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn from_json_rejects_unknown_glow_values() {
        let err = ItemRules::from_json(r#"{ "glow_flag": "HIDE_EVERYTHING" }"#).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn serialize_round_trips_through_from_json() {
        let rules = ItemRules {
            player_head_variant: 4,
            glow_enchantment: Enchantment::Infinity,
            glow_flag: ItemFlag::HideAttributes,
        };
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(ItemRules::from_json(&json).unwrap(), rules);
    }

    // Keep this the only test that touches ITEMFORGE_* keys.
    #[test]
    fn from_env_overrides_and_falls_back() {
        std::env::set_var("ITEMFORGE_PLAYER_HEAD_VARIANT", "5");
        std::env::set_var("ITEMFORGE_GLOW_ENCHANTMENT", "ARROW_INFINITE");
        std::env::set_var("ITEMFORGE_GLOW_FLAG", "not-a-flag");

        let rules = ItemRules::from_env();

        std::env::remove_var("ITEMFORGE_PLAYER_HEAD_VARIANT");
        std::env::remove_var("ITEMFORGE_GLOW_ENCHANTMENT");
        std::env::remove_var("ITEMFORGE_GLOW_FLAG");

        assert_eq!(rules.player_head_variant, 5);
        assert_eq!(rules.glow_enchantment, Enchantment::Infinity);
        assert_eq!(rules.glow_flag, ItemFlag::HideEnchants);
        assert_eq!(ItemRules::from_env(), ItemRules::default());
    }

    #[test]
    fn env_or_falls_back_for_missing_keys() {
        assert_eq!(env_or("ITEMFORGE_TEST_SURELY_UNSET_KEY", 7u16), 7);
    }
}
