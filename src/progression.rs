//! Experience thresholds and level-up growth.
//!
//! The cascade loop (apply level-ups while the threshold is met) lives in the
//! battle engine; the single-step semantics live here. One step consumes
//! exactly one `experience_required(old_level)` worth of exp, applies the
//! class growth to the maximum stats, and fully restores HP and MP. When a
//! reward crosses several thresholds at once the engine repeats this step,
//! one level at a time, with the full restore on every iteration.

use crate::player::Player;
use schema::{rank_for_level, PlayerClass};

// Constants for progression calculations
const EXP_PER_LEVEL: u32 = 30;
const MILESTONE_LEVEL_INTERVAL: u8 = 5;
const MILESTONE_HP_BONUS: u16 = 3;
const MILESTONE_MP_BONUS: u16 = 2;

/// Experience needed to advance from `level` to `level + 1`.
pub fn experience_required(level: u8) -> u32 {
    level as u32 * EXP_PER_LEVEL
}

/// Whether accumulated experience meets the current level's threshold.
pub fn can_level_up(current_exp: u32, current_level: u8) -> bool {
    current_exp >= experience_required(current_level)
}

/// Per-level stat gains. All deltas are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatGrowth {
    pub hp: u16,
    pub mp: u16,
    pub atk: u16,
    pub defense: u16,
    pub spd: u16,
}

/// Growth for reaching `new_level`, by class. Every level divisible by 5
/// carries a flat HP/MP bonus on top of the class rates.
pub fn level_up_growth(class: PlayerClass, new_level: u8) -> StatGrowth {
    let mut growth = match class {
        PlayerClass::MaleSales => StatGrowth {
            hp: 5,
            mp: 2,
            atk: 2,
            defense: 1,
            spd: 1,
        },
        PlayerClass::FemaleSales => StatGrowth {
            hp: 4,
            mp: 3,
            atk: 1,
            defense: 1,
            spd: 2,
        },
    };

    if new_level % MILESTONE_LEVEL_INTERVAL == 0 {
        growth.hp += MILESTONE_HP_BONUS;
        growth.mp += MILESTONE_MP_BONUS;
    }

    growth
}

/// What one cascade step did, for narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpReport {
    pub new_level: u8,
    pub growth: StatGrowth,
    pub rank: &'static str,
}

/// Apply exactly one level-up step to the player.
///
/// Callers are responsible for checking `can_level_up` first; the threshold
/// subtraction here is saturating only as a guard against misuse, the loop
/// condition guarantees `exp >= experience_required(old_level)`.
pub fn apply_level_up(player: &mut Player) -> LevelUpReport {
    let old_level = player.level;
    player.level += 1;
    player.exp = player.exp.saturating_sub(experience_required(old_level));

    let growth = level_up_growth(player.class, player.level);
    player.max_hp += growth.hp;
    player.max_mp += growth.mp;
    player.atk += growth.atk;
    player.defense += growth.defense;
    player.spd += growth.spd;

    // Full restore on every step, not just the last one of a cascade.
    player.hp = player.max_hp;
    player.mp = player.max_mp;

    LevelUpReport {
        new_level: player.level,
        growth,
        rank: rank_for_level(player.level),
    }
}
