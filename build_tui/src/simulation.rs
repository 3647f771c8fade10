//! Monte-Carlo survival simulation

use build_core::{BuildReport, DamageRange, MonsterSnapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rounds after which a fight counts as a stalemate
const MAX_ROUNDS: u32 = 10_000;

/// Averages over many simulated duels
#[derive(Debug, Clone, PartialEq)]
pub struct SurvivalSummary {
    pub trials: u32,
    /// Fraction of fights the character won
    pub win_rate: f64,
    /// Fraction of fights that hit the round limit
    pub stalemate_rate: f64,
    /// Average rounds until either side dropped
    pub avg_rounds: f64,
    /// Average HP left in won fights
    pub avg_hp_left: f64,
}

enum Outcome {
    Won { rounds: u32, hp_left: i64 },
    Lost { rounds: u32 },
    Stalemate,
}

/// One incoming attack as the simulation sees it
struct Threat {
    range: DamageRange,
    /// Chance in percent that the character dodges
    dodge: f64,
}

/// Duel the report's target until one side drops, `trials` times
///
/// Each round the character swings first (hit rate × damage roll), then the
/// monster uses one of its attacks chosen uniformly (dodge chance × damage
/// roll). Returns `None` when the report has no target.
pub fn simulate_survival(
    report: &BuildReport,
    monster: &MonsterSnapshot,
    trials: u32,
    seed: u64,
) -> Option<SurvivalSummary> {
    let target = report.target.as_ref()?;
    let threats: Vec<Threat> = target
        .incoming
        .entries
        .iter()
        .map(|entry| Threat {
            range: entry.final_range,
            dodge: if entry.tag.is_magical() {
                target.rates.magic_evasion_total
            } else {
                target.rates.physical_evasion_total
            },
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut wins = 0u32;
    let mut stalemates = 0u32;
    let mut rounds_sum = 0u64;
    let mut hp_left_sum = 0i64;

    for _ in 0..trials {
        let outcome = duel(
            report.outgoing,
            target.rates.hit_rate,
            report.stats.hp as i64,
            monster.max_hp,
            &threats,
            &mut rng,
        );
        match outcome {
            Outcome::Won { rounds, hp_left } => {
                wins += 1;
                rounds_sum += rounds as u64;
                hp_left_sum += hp_left;
            }
            Outcome::Lost { rounds } => rounds_sum += rounds as u64,
            Outcome::Stalemate => stalemates += 1,
        }
    }

    let finished = trials - stalemates;
    let ratio = |count: u32| {
        if trials == 0 {
            0.0
        } else {
            count as f64 / trials as f64
        }
    };

    let summary = SurvivalSummary {
        trials,
        win_rate: ratio(wins),
        stalemate_rate: ratio(stalemates),
        avg_rounds: if finished == 0 {
            0.0
        } else {
            rounds_sum as f64 / finished as f64
        },
        avg_hp_left: if wins == 0 {
            0.0
        } else {
            hp_left_sum as f64 / wins as f64
        },
    };
    tracing::debug!(?summary, seed, "survival simulation finished");
    Some(summary)
}

fn duel(
    outgoing: DamageRange,
    hit_rate: f64,
    hp: i64,
    monster_hp: i64,
    threats: &[Threat],
    rng: &mut StdRng,
) -> Outcome {
    let mut hp = hp;
    let mut monster_hp = monster_hp;

    for round in 1..=MAX_ROUNDS {
        if rng.gen_range(0.0..100.0) < hit_rate {
            monster_hp -= outgoing.roll(rng);
        }
        if monster_hp <= 0 {
            return Outcome::Won {
                rounds: round,
                hp_left: hp,
            };
        }

        if !threats.is_empty() {
            let threat = &threats[rng.gen_range(0..threats.len())];
            if rng.gen_range(0.0..100.0) >= threat.dodge {
                hp -= threat.range.roll(rng);
            }
        }
        if hp <= 0 {
            return Outcome::Lost { rounds: round };
        }
    }

    Outcome::Stalemate
}
