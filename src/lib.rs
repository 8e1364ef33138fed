// In: src/lib.rs

//! Sales Quest Battle Engine
//!
//! The turn-based battle core of a corporate-themed 2D RPG: alternating
//! player/enemy turns, deterministic-with-injectable-randomness outcome
//! formulas, a FIFO narration queue, and experience-driven level-up
//! cascades. Rendering, input, the field layer, and save-file I/O are
//! external callers of this crate.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod combatant;
pub mod enemy;
pub mod errors;
pub mod player;
pub mod progression;
pub mod roster;
pub mod saves;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `sales-quest` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the shared data definitions.
pub use schema::{rank_for_level, EnemyKind, PlayerClass, RANK_TABLE};

// --- From this crate's modules (`src/`) ---

// Core battle engine state machine and its vocabulary.
pub use battle::engine::{Battle, BattleOutcome};
pub use battle::state::{BattleEvent, BattlePhase, BattleRng};

// Outcome formulas.
pub use battle::ai::{Behavior, EnemyAction, StandardBehavior};
pub use battle::calculators::{
    calculate_damage, escape_chance, escape_success, pick_area_enemy, DamageOutcome,
};
pub use progression::{
    apply_level_up, can_level_up, experience_required, level_up_growth, LevelUpReport, StatGrowth,
};

// Core runtime types for a battle.
pub use combatant::Combatant;
pub use enemy::Enemy;
pub use player::Player;

// External data surface.
pub use roster::{EnemyArchetype, EnemyEntry, EnemyRoster};
pub use saves::PlayerSnapshot;

// Crate-specific error and result types.
pub use errors::{RosterError, RosterResult};
