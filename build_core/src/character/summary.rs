//! StatsSummary - Flat bonuses carried by an item or a whole equipment set

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Flat stat bonuses
///
/// Used both for a single item and for the aggregate of everything worn;
/// the aggregate is simply the field-wise sum of the items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSummary {
    /// Weapon attack
    pub attack: i32,
    pub str: i32,
    pub dex: i32,
    pub int: i32,
    pub luk: i32,
    /// Magic attack
    pub mad: i32,
    /// Physical defense
    pub pdef: i32,
    /// Magic defense
    pub mdef: i32,
    /// Accuracy
    pub acc: i32,
    /// Avoidability
    pub eva: i32,
    /// Magic accuracy
    pub macc: i32,
    pub speed: i32,
    pub jump: i32,
    pub hp: i32,
    pub mp: i32,
}

impl StatsSummary {
    /// An empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every field is zero
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Named non-zero fields, for display
    pub fn non_zero(&self) -> Vec<(&'static str, i32)> {
        [
            ("ATT", self.attack),
            ("STR", self.str),
            ("DEX", self.dex),
            ("INT", self.int),
            ("LUK", self.luk),
            ("M.ATT", self.mad),
            ("W.DEF", self.pdef),
            ("M.DEF", self.mdef),
            ("ACC", self.acc),
            ("AVOID", self.eva),
            ("M.ACC", self.macc),
            ("Speed", self.speed),
            ("Jump", self.jump),
            ("HP", self.hp),
            ("MP", self.mp),
        ]
        .into_iter()
        .filter(|(_, v)| *v != 0)
        .collect()
    }
}

impl AddAssign for StatsSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.attack += rhs.attack;
        self.str += rhs.str;
        self.dex += rhs.dex;
        self.int += rhs.int;
        self.luk += rhs.luk;
        self.mad += rhs.mad;
        self.pdef += rhs.pdef;
        self.mdef += rhs.mdef;
        self.acc += rhs.acc;
        self.eva += rhs.eva;
        self.macc += rhs.macc;
        self.speed += rhs.speed;
        self.jump += rhs.jump;
        self.hp += rhs.hp;
        self.mp += rhs.mp;
    }
}

impl Add for StatsSummary {
    type Output = StatsSummary;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for StatsSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(StatsSummary::default(), |acc, s| acc + s)
    }
}

impl<'a> Sum<&'a StatsSummary> for StatsSummary {
    fn sum<I: Iterator<Item = &'a StatsSummary>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_is_field_wise() {
        let weapon = StatsSummary {
            attack: 92,
            str: 3,
            ..Default::default()
        };
        let hat = StatsSummary {
            str: 5,
            pdef: 60,
            hp: 50,
            ..Default::default()
        };

        let total: StatsSummary = [weapon, hat].iter().sum();
        assert_eq!(total.attack, 92);
        assert_eq!(total.str, 8);
        assert_eq!(total.pdef, 60);
        assert_eq!(total.hp, 50);
    }

    #[test]
    fn test_empty() {
        assert!(StatsSummary::new().is_empty());
        let item = StatsSummary {
            jump: 1,
            ..Default::default()
        };
        assert!(!item.is_empty());
        assert_eq!(item.non_zero(), vec![("Jump", 1)]);
    }

    #[test]
    fn test_partial_deserialize() {
        let summary: StatsSummary = serde_json::from_str(r#"{"attack": 10, "luk": 4}"#).unwrap();
        assert_eq!(summary.attack, 10);
        assert_eq!(summary.luk, 4);
        assert_eq!(summary.dex, 0);
    }
}
