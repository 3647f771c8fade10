//! Equipment - Worn items, one per slot

use super::summary::StatsSummary;
use super::BuildError;
use crate::types::{EquipmentSlot, WeaponType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An item with its already-resolved flat bonuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Slot the item is worn in (any ring slot accepts a ring)
    pub slot: EquipmentSlot,
    /// Full-body armor: worn as a top, also occupies the bottom
    #[serde(default)]
    pub full_body: bool,
    /// Weapon archetype, for weapons
    #[serde(default)]
    pub weapon_type: Option<WeaponType>,
    #[serde(default)]
    pub stats: StatsSummary,
}

impl Item {
    /// Whether this item may go into `slot`
    pub fn fits(&self, slot: EquipmentSlot) -> bool {
        if self.slot.is_ring() {
            return slot.is_ring();
        }
        if self.full_body && self.slot != EquipmentSlot::Top {
            return false;
        }
        self.slot == slot
    }
}

/// Items currently worn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    items: BTreeMap<EquipmentSlot, Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip `item` into `slot`, returning whatever it displaced
    ///
    /// A full-body top also removes the worn bottom; a bottom cannot be
    /// equipped while a full-body top is worn.
    pub fn equip(&mut self, slot: EquipmentSlot, item: Item) -> Result<Vec<Item>, BuildError> {
        if !item.fits(slot) {
            return Err(BuildError::WrongSlot {
                item: item.name,
                slot,
            });
        }
        if self.is_blocked(slot) {
            return Err(BuildError::SlotBlocked(slot));
        }

        let mut displaced = Vec::new();
        if item.full_body {
            if let Some(bottom) = self.items.remove(&EquipmentSlot::Bottom) {
                displaced.push(bottom);
            }
        }
        if let Some(previous) = self.items.insert(slot, item) {
            displaced.push(previous);
        }
        Ok(displaced)
    }

    /// Remove and return the item in `slot`
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.items.remove(&slot)
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.items.get(&slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EquipmentSlot, &Item)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `slot` is logically occupied by another slot's item
    pub fn is_blocked(&self, slot: EquipmentSlot) -> bool {
        slot == EquipmentSlot::Bottom
            && self
                .items
                .get(&EquipmentSlot::Top)
                .is_some_and(|top| top.full_body)
    }

    /// Sum of every worn item's bonuses
    pub fn aggregate(&self) -> StatsSummary {
        self.items.values().map(|item| &item.stats).sum()
    }

    /// Weapon archetype of the equipped weapon
    pub fn weapon_type(&self) -> Option<WeaponType> {
        self.items
            .get(&EquipmentSlot::Weapon)
            .and_then(|weapon| weapon.weapon_type)
    }
}
