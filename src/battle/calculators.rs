//! Pure outcome formulas. No state, no side effects: every function takes
//! its inputs and an explicit random source and only produces values. None
//! of them can fail; degenerate stat combinations (defense at or above
//! twice the attack, zero speeds) floor or clamp instead of erroring.

use crate::battle::state::BattleRng;
use crate::combatant::Combatant;
use schema::{EnemyKind, IntoEnumIterator};

// Battle tuning constants
pub const DAMAGE_VARIANCE: f64 = 0.1;
pub const CRITICAL_CHANCE: f64 = 0.05;
pub const CRITICAL_MULTIPLIER: f64 = 1.5;
const ESCAPE_BASE_RATE: f64 = 0.5;
const ESCAPE_RATE_PER_SPEED: f64 = 0.05;
const ESCAPE_MIN_RATE: f64 = 0.10;
const ESCAPE_MAX_RATE: f64 = 0.90;
const AREA_LEVEL_MIN: i32 = 1;
const AREA_LEVEL_MAX: i32 = 10;

/// Result of one damage computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    pub damage: u16,
    pub critical: bool,
}

/// Compute attack damage.
///
/// Base is `(atk * 2 - defense) * skill_power`, floored at 1. A 5% critical
/// roll (skipped when `force_critical` is set, so no roll is consumed)
/// multiplies the base by 1.5. A uniform variance multiplier in
/// [1 - V, 1 + V] is then applied and the product floored to an integer.
///
/// The floor is re-applied after variance: a base of exactly 1 with a low
/// variance roll would otherwise truncate to 0, violating the minimum-damage
/// guarantee.
pub fn calculate_damage(
    attacker: &dyn Combatant,
    defender: &dyn Combatant,
    skill_power: f64,
    force_critical: bool,
    rng: &mut BattleRng,
) -> DamageOutcome {
    let raw = (attacker.atk() as i32 * 2 - defender.defense() as i32) as f64 * skill_power;
    let mut base = raw.max(1.0);

    let critical = force_critical || rng.roll("critical check") < CRITICAL_CHANCE;
    if critical {
        base *= CRITICAL_MULTIPLIER;
    }

    let variance = rng.roll_range(
        1.0 - DAMAGE_VARIANCE,
        1.0 + DAMAGE_VARIANCE,
        "damage variance",
    );
    let damage = ((base * variance).floor() as i64).max(1) as u16;

    DamageOutcome { damage, critical }
}

/// Probability that an escape attempt succeeds, clamped to [0.10, 0.90].
pub fn escape_chance(player_spd: u16, enemy_spd: u16) -> f64 {
    let speed_diff = (player_spd as f64 - enemy_spd as f64) * ESCAPE_RATE_PER_SPEED;
    (ESCAPE_BASE_RATE + speed_diff).clamp(ESCAPE_MIN_RATE, ESCAPE_MAX_RATE)
}

/// Roll an escape attempt.
pub fn escape_success(player_spd: u16, enemy_spd: u16, rng: &mut BattleRng) -> bool {
    rng.roll("escape check") < escape_chance(player_spd, enemy_spd)
}

/// Pick an encounter for an area: a uniform archetype and a level within
/// one of the area level, clamped to the supported range.
pub fn pick_area_enemy(area_level: u8, rng: &mut BattleRng) -> (EnemyKind, u8) {
    let kinds: Vec<EnemyKind> = EnemyKind::iter().collect();
    let kind = kinds[rng.pick_index(kinds.len(), "area enemy kind")];

    let jitter = rng.roll_int(-1, 1, "area enemy level");
    let level = (area_level as i32 + jitter).clamp(AREA_LEVEL_MIN, AREA_LEVEL_MAX) as u8;

    (kind, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Combatant;
    use crate::player::Player;
    use crate::roster::EnemyRoster;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::PlayerClass;

    fn fighter(atk: u16, defense: u16, spd: u16) -> Player {
        let mut player = Player::new_game("Fighter", PlayerClass::MaleSales);
        player.atk = atk;
        player.defense = defense;
        player.spd = spd;
        player
    }

    #[rstest]
    #[case(8, 3, 13)] // (8*2 - 3) * 1.0
    #[case(10, 0, 20)]
    #[case(1, 0, 2)]
    #[case(5, 10, 1)] // defense equals 2x attack: floors to 1
    #[case(2, 50, 1)] // defense far above 2x attack: still 1, never negative
    fn test_base_damage_with_neutral_variance(
        #[case] atk: u16,
        #[case] def: u16,
        #[case] expected: u16,
    ) {
        let attacker = fighter(atk, 0, 5);
        let defender = fighter(0, def, 5);
        // Rolls: critical check (miss), variance (0.5 -> multiplier 1.0).
        let mut rng = BattleRng::scripted(vec![0.99, 0.5]);

        let outcome = calculate_damage(&attacker, &defender, 1.0, false, &mut rng);

        assert_eq!(outcome.damage, expected);
        assert!(!outcome.critical);
    }

    #[test]
    fn test_damage_floor_survives_low_variance() {
        let attacker = fighter(5, 0, 5);
        let defender = fighter(0, 10, 5);
        // Base damage is exactly 1; the lowest variance roll gives 0.9,
        // which would truncate to 0 without the post-variance floor.
        let mut rng = BattleRng::scripted(vec![0.99, 0.0]);

        let outcome = calculate_damage(&attacker, &defender, 1.0, false, &mut rng);

        assert_eq!(outcome.damage, 1);
    }

    #[test]
    fn test_forced_critical_multiplies_base() {
        let attacker = fighter(8, 0, 5);
        let defender = fighter(0, 3, 5);
        // force_critical skips the critical roll; only variance is consumed.
        let mut rng = BattleRng::scripted(vec![0.5]);

        let outcome = calculate_damage(&attacker, &defender, 1.0, true, &mut rng);

        // floor(13 * 1.5 * 1.0) = 19
        assert_eq!(outcome.damage, 19);
        assert!(outcome.critical);
    }

    #[test]
    fn test_natural_critical_roll() {
        let attacker = fighter(8, 0, 5);
        let defender = fighter(0, 3, 5);
        // 0.04 < 0.05 lands the critical; variance stays neutral.
        let mut rng = BattleRng::scripted(vec![0.04, 0.5]);

        let outcome = calculate_damage(&attacker, &defender, 1.0, false, &mut rng);

        assert_eq!(outcome.damage, 19);
        assert!(outcome.critical);

        // 0.05 just misses the 5% window.
        let mut rng = BattleRng::scripted(vec![0.05, 0.5]);
        let outcome = calculate_damage(&attacker, &defender, 1.0, false, &mut rng);
        assert!(!outcome.critical);
    }

    #[test]
    fn test_skill_power_scales_base() {
        let attacker = fighter(8, 0, 5);
        let defender = fighter(0, 3, 5);
        let mut rng = BattleRng::scripted(vec![0.99, 0.5]);

        let outcome = calculate_damage(&attacker, &defender, 2.0, false, &mut rng);

        assert_eq!(outcome.damage, 26);
    }

    #[test]
    fn test_variance_bounds_on_damage() {
        let attacker = fighter(8, 0, 5);
        let defender = fighter(0, 3, 5);

        // Lowest variance: floor(13 * 0.9) = 11.
        let mut rng = BattleRng::scripted(vec![0.99, 0.0]);
        assert_eq!(calculate_damage(&attacker, &defender, 1.0, false, &mut rng).damage, 11);

        // Near-highest variance: floor(13 * ~1.1) = 14.
        let mut rng = BattleRng::scripted(vec![0.99, 0.9999]);
        assert_eq!(calculate_damage(&attacker, &defender, 1.0, false, &mut rng).damage, 14);
    }

    #[test]
    fn test_damage_floor_holds_across_stat_grid() {
        for atk in 0..=20u16 {
            for def in 0..=40u16 {
                let attacker = fighter(atk, 0, 5);
                let defender = fighter(0, def, 5);
                let mut rng = BattleRng::scripted(vec![0.99, 0.0]);
                let outcome = calculate_damage(&attacker, &defender, 1.0, false, &mut rng);
                assert!(
                    outcome.damage >= 1,
                    "damage fell below 1 for atk={} def={}",
                    atk,
                    def
                );
            }
        }
    }

    #[rstest]
    #[case(5, 5, 0.5)] // even speeds: base rate
    #[case(15, 5, 0.9)] // +10 speed: clamped at the cap
    #[case(30, 0, 0.9)]
    #[case(5, 15, 0.1)] // -10 speed: clamped at the floor (Scenario D)
    #[case(0, 50, 0.1)]
    #[case(7, 5, 0.6)]
    #[case(0, 0, 0.5)] // zero speeds stay well-defined
    fn test_escape_chance(#[case] player_spd: u16, #[case] enemy_spd: u16, #[case] expected: f64) {
        let chance = escape_chance(player_spd, enemy_spd);
        assert!((chance - expected).abs() < 1e-12);
        assert!((0.10..=0.90).contains(&chance));
    }

    #[test]
    fn test_escape_roll_against_chance() {
        // Chance is 0.5 at even speeds: 0.49 escapes, 0.51 does not.
        let mut rng = BattleRng::scripted(vec![0.49]);
        assert!(escape_success(5, 5, &mut rng));

        let mut rng = BattleRng::scripted(vec![0.51]);
        assert!(!escape_success(5, 5, &mut rng));
    }

    #[test]
    fn test_area_pick_jitters_and_clamps_level() {
        // Rolls: kind pick, then level jitter.
        let mut rng = BattleRng::scripted(vec![0.0, 0.0]);
        let (kind, level) = pick_area_enemy(1, &mut rng);
        assert_eq!(kind, EnemyKind::RealEstateCompany);
        // Jitter of -1 at area level 1 clamps to 1.
        assert_eq!(level, 1);

        let mut rng = BattleRng::scripted(vec![0.9, 0.9]);
        let (kind, level) = pick_area_enemy(10, &mut rng);
        assert_eq!(kind, EnemyKind::Delinquent);
        // Jitter of +1 at area level 10 clamps to 10.
        assert_eq!(level, 10);

        let mut rng = BattleRng::scripted(vec![0.0, 0.5]);
        let (_, level) = pick_area_enemy(4, &mut rng);
        assert_eq!(level, 4);
    }

    #[test]
    fn test_area_pick_spawns_from_roster() {
        let roster = EnemyRoster::builtin();
        let mut rng = BattleRng::from_seed(7);
        for _ in 0..32 {
            let (kind, level) = pick_area_enemy(5, &mut rng);
            assert!((4..=6).contains(&level));
            let enemy = roster.spawn(kind, level).unwrap();
            assert!(enemy.is_alive());
        }
    }
}
