//! Core enums shared by every calculator

use serde::{Deserialize, Serialize};

/// Job branch of a character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Job {
    Warrior,
    Archer,
    Magician,
    Thief,
    Pirate,
    /// No job selected yet
    #[default]
    None,
}

impl Job {
    /// Get all jobs
    pub fn all() -> &'static [Job] {
        &[
            Job::Warrior,
            Job::Archer,
            Job::Magician,
            Job::Thief,
            Job::Pirate,
            Job::None,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Job::Warrior => "Warrior",
            Job::Archer => "Archer",
            Job::Magician => "Magician",
            Job::Thief => "Thief",
            Job::Pirate => "Pirate",
            Job::None => "None",
        }
    }

    pub fn is_magician(&self) -> bool {
        matches!(self, Job::Magician)
    }

    /// (main, sub) stat roles for this job holding `weapon`.
    ///
    /// Pirates holding a gun use DEX as their main stat; every other pirate
    /// weapon (or no weapon) uses STR. A character without a job has no roles.
    pub fn stat_roles(&self, weapon: Option<WeaponType>) -> Option<(PrimaryStat, PrimaryStat)> {
        match self {
            Job::Warrior => Some((PrimaryStat::Str, PrimaryStat::Dex)),
            Job::Archer => Some((PrimaryStat::Dex, PrimaryStat::Str)),
            Job::Magician => Some((PrimaryStat::Int, PrimaryStat::Luk)),
            Job::Thief => Some((PrimaryStat::Luk, PrimaryStat::Dex)),
            Job::Pirate => match weapon {
                Some(w) if w.is_ranged_sidearm() => Some((PrimaryStat::Dex, PrimaryStat::Str)),
                _ => Some((PrimaryStat::Str, PrimaryStat::Dex)),
            },
            Job::None => None,
        }
    }

    /// Main stat for this job holding `weapon`
    pub fn main_stat(&self, weapon: Option<WeaponType>) -> Option<PrimaryStat> {
        self.stat_roles(weapon).map(|(main, _)| main)
    }

    /// Which constant-term profile the physical incoming formula uses
    pub fn defense_profile(&self) -> DefenseProfile {
        match self {
            Job::Warrior => DefenseProfile::Warrior,
            _ => DefenseProfile::Standard,
        }
    }
}

/// Weighting of primary stats in the physical defense constant term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseProfile {
    Warrior,
    Standard,
}

/// The four allocable primary stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryStat {
    Str,
    Dex,
    Int,
    Luk,
}

impl PrimaryStat {
    pub fn all() -> &'static [PrimaryStat] {
        &[PrimaryStat::Str, PrimaryStat::Dex, PrimaryStat::Int, PrimaryStat::Luk]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimaryStat::Str => "STR",
            PrimaryStat::Dex => "DEX",
            PrimaryStat::Int => "INT",
            PrimaryStat::Luk => "LUK",
        }
    }
}

/// Weapon archetypes, each with its own damage constant pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    OneHandedSword,
    OneHandedAxe,
    OneHandedBluntWeapon,
    TwoHandedSword,
    TwoHandedAxe,
    TwoHandedBluntWeapon,
    Spear,
    Polearm,
    Wand,
    Staff,
    Bow,
    Crossbow,
    Claw,
    Dagger,
    Knuckle,
    Gun,
}

impl WeaponType {
    pub fn all() -> &'static [WeaponType] {
        &[
            WeaponType::OneHandedSword,
            WeaponType::OneHandedAxe,
            WeaponType::OneHandedBluntWeapon,
            WeaponType::TwoHandedSword,
            WeaponType::TwoHandedAxe,
            WeaponType::TwoHandedBluntWeapon,
            WeaponType::Spear,
            WeaponType::Polearm,
            WeaponType::Wand,
            WeaponType::Staff,
            WeaponType::Bow,
            WeaponType::Crossbow,
            WeaponType::Claw,
            WeaponType::Dagger,
            WeaponType::Knuckle,
            WeaponType::Gun,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeaponType::OneHandedSword => "One-Handed Sword",
            WeaponType::OneHandedAxe => "One-Handed Axe",
            WeaponType::OneHandedBluntWeapon => "One-Handed Blunt Weapon",
            WeaponType::TwoHandedSword => "Two-Handed Sword",
            WeaponType::TwoHandedAxe => "Two-Handed Axe",
            WeaponType::TwoHandedBluntWeapon => "Two-Handed Blunt Weapon",
            WeaponType::Spear => "Spear",
            WeaponType::Polearm => "Polearm",
            WeaponType::Wand => "Wand",
            WeaponType::Staff => "Staff",
            WeaponType::Bow => "Bow",
            WeaponType::Crossbow => "Crossbow",
            WeaponType::Claw => "Claw",
            WeaponType::Dagger => "Dagger",
            WeaponType::Knuckle => "Knuckle",
            WeaponType::Gun => "Gun",
        }
    }

    /// Ranged sidearm (selects DEX as the pirate main stat)
    pub fn is_ranged_sidearm(&self) -> bool {
        matches!(self, WeaponType::Gun)
    }
}

/// Elemental tag on a magic attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Poison,
}

/// Damage formula a monster attack goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    Physical,
    Magic,
}

/// Damage-type tag used to match reduction skills against an incoming hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageTag {
    /// Body contact
    Touch,
    Physical,
    Magic,
    Fire,
    Ice,
    Lightning,
    Poison,
}

impl DamageTag {
    pub fn all() -> &'static [DamageTag] {
        &[
            DamageTag::Touch,
            DamageTag::Physical,
            DamageTag::Magic,
            DamageTag::Fire,
            DamageTag::Ice,
            DamageTag::Lightning,
            DamageTag::Poison,
        ]
    }

    /// Tag for an attack of `kind` carrying an optional element.
    /// Elements only tag magic attacks.
    pub fn for_attack(kind: AttackKind, element: Option<Element>) -> Self {
        match (kind, element) {
            (AttackKind::Physical, _) => DamageTag::Physical,
            (AttackKind::Magic, None) => DamageTag::Magic,
            (AttackKind::Magic, Some(Element::Fire)) => DamageTag::Fire,
            (AttackKind::Magic, Some(Element::Ice)) => DamageTag::Ice,
            (AttackKind::Magic, Some(Element::Lightning)) => DamageTag::Lightning,
            (AttackKind::Magic, Some(Element::Poison)) => DamageTag::Poison,
        }
    }

    /// Whether this tag goes through the magic formula
    pub fn is_magical(&self) -> bool {
        !matches!(self, DamageTag::Touch | DamageTag::Physical)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DamageTag::Touch => "Touch",
            DamageTag::Physical => "Physical",
            DamageTag::Magic => "Magic",
            DamageTag::Fire => "Fire",
            DamageTag::Ice => "Ice",
            DamageTag::Lightning => "Lightning",
            DamageTag::Poison => "Poison",
        }
    }
}

/// Equipment slot, one item each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Hat,
    Top,
    Bottom,
    Shoes,
    Gloves,
    Cape,
    Shield,
    Earrings,
    Face,
    Eye,
    Pendant,
    Belt,
    Medal,
    Shoulder,
    Ring1,
    Ring2,
    Ring3,
    Ring4,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Weapon,
            EquipmentSlot::Hat,
            EquipmentSlot::Top,
            EquipmentSlot::Bottom,
            EquipmentSlot::Shoes,
            EquipmentSlot::Gloves,
            EquipmentSlot::Cape,
            EquipmentSlot::Shield,
            EquipmentSlot::Earrings,
            EquipmentSlot::Face,
            EquipmentSlot::Eye,
            EquipmentSlot::Pendant,
            EquipmentSlot::Belt,
            EquipmentSlot::Medal,
            EquipmentSlot::Shoulder,
            EquipmentSlot::Ring1,
            EquipmentSlot::Ring2,
            EquipmentSlot::Ring3,
            EquipmentSlot::Ring4,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Hat => "Hat",
            EquipmentSlot::Top => "Top",
            EquipmentSlot::Bottom => "Bottom",
            EquipmentSlot::Shoes => "Shoes",
            EquipmentSlot::Gloves => "Gloves",
            EquipmentSlot::Cape => "Cape",
            EquipmentSlot::Shield => "Shield",
            EquipmentSlot::Earrings => "Earrings",
            EquipmentSlot::Face => "Face",
            EquipmentSlot::Eye => "Eye",
            EquipmentSlot::Pendant => "Pendant",
            EquipmentSlot::Belt => "Belt",
            EquipmentSlot::Medal => "Medal",
            EquipmentSlot::Shoulder => "Shoulder",
            EquipmentSlot::Ring1 => "Ring 1",
            EquipmentSlot::Ring2 => "Ring 2",
            EquipmentSlot::Ring3 => "Ring 3",
            EquipmentSlot::Ring4 => "Ring 4",
        }
    }

    /// Whether any ring slot
    pub fn is_ring(&self) -> bool {
        matches!(
            self,
            EquipmentSlot::Ring1 | EquipmentSlot::Ring2 | EquipmentSlot::Ring3 | EquipmentSlot::Ring4
        )
    }
}
