use crate::combatant::Combatant;
use crate::roster::EnemyEntry;
use schema::EnemyKind;

/// An enemy combatant. Owned exclusively by one battle: built from roster
/// data when an encounter starts and discarded when the battle ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub name: String,
    pub level: u8,
    pub hp: u16,
    pub max_hp: u16,
    pub mp: u16,
    pub max_mp: u16,
    pub atk: u16,
    pub defense: u16,
    pub spd: u16,
    pub exp_reward: u32,
    pub gold_reward: u32,
    /// Flavor text only (e.g. months in arrears); never used numerically.
    pub special_stat: Option<String>,
    pub alive: bool,
}

impl Enemy {
    /// Build an enemy from a resolved roster entry. Starts at full HP/MP.
    pub fn from_entry(kind: EnemyKind, level: u8, entry: &EnemyEntry) -> Self {
        Enemy {
            kind,
            name: entry.name.clone(),
            level,
            hp: entry.hp,
            max_hp: entry.hp,
            mp: entry.mp,
            max_mp: entry.mp,
            atk: entry.atk,
            defense: entry.def,
            spd: entry.spd,
            exp_reward: entry.exp,
            gold_reward: entry.gold,
            special_stat: entry.special_stat.clone(),
            alive: true,
        }
    }

    /// Restore HP, clamped to the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let old_hp = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - old_hp
    }

    /// Multi-line status block for display layers.
    pub fn status_text(&self) -> String {
        let mut status = format!("{} Lv.{}\nHP: {}/{}", self.name, self.level, self.hp, self.max_hp);
        if let Some(special) = &self.special_stat {
            status.push('\n');
            status.push_str(special);
        }
        status
    }
}

impl Combatant for Enemy {
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
        if self.hp == 0 {
            self.alive = false;
        }
        applied
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}
