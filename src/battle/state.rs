use crate::progression::StatGrowth;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Battle phases. `PlayerTurn` and `EnemyTurn` alternate; the other three
/// are terminal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
    Escaped,
}

impl BattlePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BattlePhase::Victory | BattlePhase::Defeat | BattlePhase::Escaped
        )
    }
}

/// One narration step. Events carry everything their message needs (names
/// are cloned at emit time), queue in FIFO order, and each formats to exactly
/// one line for the display layer.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    EnemyAppeared { name: String },
    /// Attack announcement without a damage figure; precedes `CriticalHit`.
    AttackAnnounced { attacker: String },
    /// A normal hit, by either side.
    AttackLanded { attacker: String, damage: u16 },
    CriticalHit { damage: u16 },
    Braced { name: String },
    GotAway { name: String },
    EscapeFailed,
    Observing { name: String },
    EnemyDefeated { name: String },
    ExpGained { amount: u32 },
    GoldGained { amount: u32 },
    LevelUp { level: u8 },
    RankChanged { rank: &'static str },
    StatGains { growth: StatGrowth },
    PlayerDefeated { name: String },
}

impl BattleEvent {
    /// Formats the event into the line shown to the player.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::EnemyAppeared { name } => format!("{} appeared!", name),
            BattleEvent::AttackAnnounced { attacker } => format!("{} attacks!", attacker),
            BattleEvent::AttackLanded { attacker, damage } => {
                format!("{} attacks! {} damage!", attacker, damage)
            }
            BattleEvent::CriticalHit { damage } => {
                format!("A critical hit! {} damage!", damage)
            }
            BattleEvent::Braced { name } => format!("{} braces for the attack!", name),
            BattleEvent::GotAway { name } => format!("{} got away!", name),
            BattleEvent::EscapeFailed => "Couldn't get away!".to_string(),
            BattleEvent::Observing { name } => format!("{} is watching and waiting.", name),
            BattleEvent::EnemyDefeated { name } => format!("Defeated {}!", name),
            BattleEvent::ExpGained { amount } => format!("Gained {} EXP!", amount),
            BattleEvent::GoldGained { amount } => format!("Got \u{a5}{}!", amount),
            BattleEvent::LevelUp { level } => format!("Level rose to {}!", level),
            BattleEvent::RankChanged { rank } => format!("Rank: {}", rank),
            BattleEvent::StatGains { growth } => format!(
                "HP+{} MP+{} ATK+{} DEF+{} SPD+{}",
                growth.hp, growth.mp, growth.atk, growth.defense, growth.spd
            ),
            BattleEvent::PlayerDefeated { name } => format!("{} collapsed...", name),
        }
    }
}

/// The battle's random source. Formulas draw unit rolls from an explicit
/// `&mut BattleRng` so outcomes are reproducible: seed it for deterministic
/// replays, or script the exact rolls in tests.
#[derive(Debug, Clone)]
pub enum BattleRng {
    Seeded(rand::rngs::StdRng),
    Scripted { rolls: Vec<f64>, index: usize },
}

impl BattleRng {
    pub fn new_random() -> Self {
        Self::from_seed(rand::rng().random())
    }

    pub fn from_seed(seed: u64) -> Self {
        BattleRng::Seeded(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Fixed roll sequence for tests. Each formula consumes rolls in a
    /// documented order; running out is a test-authoring bug.
    pub fn scripted(rolls: Vec<f64>) -> Self {
        BattleRng::Scripted { rolls, index: 0 }
    }

    /// Draw a unit roll in [0, 1). The reason names what the roll decides.
    pub fn roll(&mut self, reason: &str) -> f64 {
        match self {
            BattleRng::Seeded(rng) => rng.random::<f64>(),
            BattleRng::Scripted { rolls, index } => {
                if *index >= rolls.len() {
                    panic!(
                        "Scripted rolls exhausted! Tried to get a value for: '{}'. Need more rolls.",
                        reason
                    );
                }
                let outcome = rolls[*index];

                #[cfg(test)]
                println!("[RNG] Consumed {} for: {}", outcome, reason);

                *index += 1;
                outcome
            }
        }
    }

    /// Uniform draw in [lo, hi).
    pub fn roll_range(&mut self, lo: f64, hi: f64, reason: &str) -> f64 {
        lo + self.roll(reason) * (hi - lo)
    }

    /// Uniform integer draw in [lo, hi], inclusive on both ends.
    pub fn roll_int(&mut self, lo: i32, hi: i32, reason: &str) -> i32 {
        let span = (hi - lo + 1) as f64;
        lo + ((self.roll(reason) * span) as i32).min(hi - lo)
    }

    /// Uniform index draw in [0, len).
    pub fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        ((self.roll(reason) * len as f64) as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_terminal_phases() {
        assert!(!BattlePhase::PlayerTurn.is_terminal());
        assert!(!BattlePhase::EnemyTurn.is_terminal());
        assert!(BattlePhase::Victory.is_terminal());
        assert!(BattlePhase::Defeat.is_terminal());
        assert!(BattlePhase::Escaped.is_terminal());
    }

    #[test]
    fn test_event_text_samples() {
        let appeared = BattleEvent::EnemyAppeared {
            name: "Local Realty Agent".to_string(),
        };
        assert_eq!(appeared.format(), "Local Realty Agent appeared!");

        let hit = BattleEvent::AttackLanded {
            attacker: "Hero".to_string(),
            damage: 13,
        };
        assert_eq!(hit.format(), "Hero attacks! 13 damage!");

        let crit = BattleEvent::CriticalHit { damage: 19 };
        assert_eq!(crit.format(), "A critical hit! 19 damage!");

        let gold = BattleEvent::GoldGained { amount: 80 };
        assert_eq!(gold.format(), "Got \u{a5}80!");

        let gains = BattleEvent::StatGains {
            growth: StatGrowth { hp: 5, mp: 2, atk: 2, defense: 1, spd: 1 },
        };
        assert_eq!(gains.format(), "HP+5 MP+2 ATK+2 DEF+1 SPD+1");
    }

    #[test]
    fn test_scripted_rolls_in_order() {
        let mut rng = BattleRng::scripted(vec![0.25, 0.75]);
        assert_eq!(rng.roll("first"), 0.25);
        assert_eq!(rng.roll("second"), 0.75);
    }

    #[test]
    #[should_panic(expected = "Scripted rolls exhausted")]
    fn test_scripted_exhaustion_panics() {
        let mut rng = BattleRng::scripted(vec![0.5]);
        rng.roll("only");
        rng.roll("one too many");
    }

    #[test]
    fn test_roll_range_midpoint() {
        let mut rng = BattleRng::scripted(vec![0.5]);
        let value = rng.roll_range(0.9, 1.1, "variance");
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_roll_int_covers_inclusive_span() {
        let mut rng = BattleRng::scripted(vec![0.0, 0.5, 0.999]);
        assert_eq!(rng.roll_int(-1, 1, "low"), -1);
        assert_eq!(rng.roll_int(-1, 1, "mid"), 0);
        assert_eq!(rng.roll_int(-1, 1, "high"), 1);
    }

    #[test]
    fn test_seeded_rolls_are_reproducible() {
        let mut a = BattleRng::from_seed(42);
        let mut b = BattleRng::from_seed(42);
        for _ in 0..16 {
            let roll = a.roll("replay");
            assert_eq!(roll, b.roll("replay"));
            assert!((0.0..1.0).contains(&roll));
        }
    }
}
