//! Enemy decision-making for battle turns.

use crate::battle::state::BattleRng;
use crate::enemy::Enemy;
use crate::player::Player;

/// What an enemy does with its turn. `Observe` only narrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    Attack,
    Observe,
}

/// A trait for any system that can decide an enemy's battle action.
/// This provides a common seam for harder or scripted opponents later.
pub trait Behavior {
    /// Inspects both combatants and decides the enemy's next action.
    fn decide_action(&self, enemy: &Enemy, player: &Player, rng: &mut BattleRng) -> EnemyAction;
}

const ATTACK_CHANCE: f64 = 0.8;

/// The stock opponent: 80% attack, 20% observe, drawn independently each
/// enemy turn regardless of either side's condition.
pub struct StandardBehavior;

impl Behavior for StandardBehavior {
    fn decide_action(&self, _enemy: &Enemy, _player: &Player, rng: &mut BattleRng) -> EnemyAction {
        if rng.roll("enemy action") < ATTACK_CHANCE {
            EnemyAction::Attack
        } else {
            EnemyAction::Observe
        }
    }
}
