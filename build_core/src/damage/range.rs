//! DamageRange - Integer min/max damage and what it means in hits

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive integer damage range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: i64,
    pub max: i64,
}

impl DamageRange {
    pub const ZERO: DamageRange = DamageRange { min: 0, max: 0 };

    pub fn new(min: i64, max: i64) -> Self {
        DamageRange { min, max }
    }

    pub fn is_zero(&self) -> bool {
        self.max <= 0
    }

    pub fn average(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }

    /// Draw a uniform roll from the range
    pub fn roll(&self, rng: &mut impl Rng) -> i64 {
        if self.min >= self.max {
            self.max
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }

    /// Apply `f` to both bounds
    pub fn map(self, f: impl Fn(i64) -> i64) -> Self {
        DamageRange {
            min: f(self.min),
            max: f(self.max),
        }
    }
}

impl std::fmt::Display for DamageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.min, self.max)
    }
}

/// Fewest and most hits needed to deplete a pool of HP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitCount {
    /// Every hit rolls max
    pub fewest: u64,
    /// Every hit rolls min
    pub most: u64,
}

fn hits_needed(hp: i64, range: DamageRange) -> Option<HitCount> {
    if hp <= 0 {
        return Some(HitCount { fewest: 0, most: 0 });
    }
    if range.is_zero() {
        return None;
    }
    let per_hit = |damage: i64| (hp as u64).div_ceil(damage.max(1) as u64);
    Some(HitCount {
        fewest: per_hit(range.max),
        most: per_hit(range.min),
    })
}

/// Hits the character needs to kill a monster with `monster_hp`
pub fn hits_to_kill(range: DamageRange, monster_hp: i64) -> Option<HitCount> {
    hits_needed(monster_hp, range)
}

/// Hits of `range` the character survives before dying at `hp`
pub fn hits_to_die(hp: i64, range: DamageRange) -> Option<HitCount> {
    hits_needed(hp, range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roll_within_bounds() {
        let range = DamageRange::new(576, 1027);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let roll = range.roll(&mut rng);
            assert!((576..=1027).contains(&roll));
        }
    }

    #[test]
    fn test_degenerate_roll() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(DamageRange::new(5, 5).roll(&mut rng), 5);
        assert_eq!(DamageRange::ZERO.roll(&mut rng), 0);
    }

    #[test]
    fn test_hits_to_kill() {
        let hits = hits_to_kill(DamageRange::new(500, 1000), 2500).unwrap();
        assert_eq!(hits.fewest, 3);
        assert_eq!(hits.most, 5);
        assert!(hits_to_kill(DamageRange::ZERO, 2500).is_none());
    }

    #[test]
    fn test_hits_to_die() {
        let hits = hits_to_die(1000, DamageRange::new(1, 400)).unwrap();
        assert_eq!(hits.fewest, 3);
        assert_eq!(hits.most, 1000);
        assert_eq!(hits_to_die(0, DamageRange::new(1, 1)).unwrap().fewest, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(DamageRange::new(576, 1027).to_string(), "576 ~ 1027");
    }
}
