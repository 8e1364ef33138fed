//! Plain progression state for an external save/load component.
//!
//! The engine does no file I/O. A snapshot is the serializable mirror of the
//! fields a save system persists; where it is written and how slots are
//! managed is the caller's concern. Field position and facing belong to the
//! exploration layer and are appended by it, outside this core.

use crate::player::Player;
use schema::PlayerClass;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
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

impl PlayerSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        PlayerSnapshot {
            name: player.name.clone(),
            class: player.class,
            level: player.level,
            exp: player.exp,
            hp: player.hp,
            max_hp: player.max_hp,
            mp: player.mp,
            max_mp: player.max_mp,
            atk: player.atk,
            defense: player.defense,
            spd: player.spd,
        }
    }
}

impl Player {
    /// Rebuild a player from persisted progression state.
    pub fn from_snapshot(snapshot: PlayerSnapshot) -> Self {
        Player {
            name: snapshot.name,
            class: snapshot.class,
            level: snapshot.level,
            exp: snapshot.exp,
            hp: snapshot.hp,
            max_hp: snapshot.max_hp,
            mp: snapshot.mp,
            max_mp: snapshot.max_mp,
            atk: snapshot.atk,
            defense: snapshot.defense,
            spd: snapshot.spd,
        }
    }
}
