use crate::combatant::Combatant;
use schema::{rank_for_level, PlayerClass};
use serde::{Deserialize, Serialize};

/// The player combatant. Long-lived across battles: created once at new-game
/// (or restored from a snapshot) and mutated in place by the battle engine.
/// Field position and movement belong to the exploration layer, not here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub class: PlayerClass,
    pub level: u8,
    pub exp: u32,
    pub hp: u16,
    pub max_hp: u16,
    pub mp: u16,
    pub max_mp: u16,
    pub atk: u16,
    pub defense: u16,
    pub spd: u16,
}

impl Player {
    /// Create a fresh level-1 player with new-game starting stats.
    pub fn new_game(name: impl Into<String>, class: PlayerClass) -> Self {
        Player {
            name: name.into(),
            class,
            level: 1,
            exp: 0,
            hp: 30,
            max_hp: 30,
            mp: 10,
            max_mp: 10,
            atk: 8,
            defense: 6,
            spd: 5,
        }
    }

    /// Current rank title, derived from level.
    pub fn rank(&self) -> &'static str {
        rank_for_level(self.level)
    }

    /// Restore MP, clamped to the maximum. Returns the amount restored.
    pub fn restore_mp(&mut self, amount: u16) -> u16 {
        let old_mp = self.mp;
        self.mp = (self.mp + amount).min(self.max_mp);
        self.mp - old_mp
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> u8 {
        self.level
    }

    fn atk(&self) -> u16 {
        self.atk
    }

    fn defense(&self) -> u16 {
        self.defense
    }

    fn spd(&self) -> u16 {
        self.spd
    }

    fn hp(&self) -> u16 {
        self.hp
    }

    fn max_hp(&self) -> u16 {
        self.max_hp
    }

    fn take_damage(&mut self, amount: u16) -> u16 {
        let applied = amount.min(self.hp);
        self.hp -= applied;
        applied
    }
}
