//! Item descriptor - the base category/quantity/durability triple

use crate::types::Material;

/// Identifies an item's kind and stack size.
///
/// This is a data-carrying struct with no invariants of its own. Ranges are
/// the caller's responsibility; the platform clamps stack sizes when the item
/// is placed in an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemDescriptor {
    pub material: Material,
    pub quantity: u32,
    /// Damage value, or the variant for items such as skulls
    pub durability: u16,
}

impl ItemDescriptor {
    /// A single undamaged item of `material`
    pub fn new(material: Material) -> Self {
        Self {
            material,
            quantity: 1,
            durability: 0,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_durability(mut self, durability: u16) -> Self {
        self.durability = durability;
        self
    }
}

impl Default for ItemDescriptor {
    fn default() -> Self {
        Self::new(Material::default())
    }
}
