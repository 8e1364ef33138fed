use crate::battle::ai::{Behavior, EnemyAction, StandardBehavior};
use crate::battle::calculators::{calculate_damage, escape_success};
use crate::battle::state::{BattleEvent, BattlePhase, BattleRng};
use crate::combatant::Combatant;
use crate::enemy::Enemy;
use crate::player::Player;
use crate::progression::{apply_level_up, can_level_up};
use std::collections::VecDeque;

/// Terminal summary of a battle. Rewards are non-zero only on victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub phase: BattlePhase,
    pub exp_gained: u32,
    pub gold_gained: u32,
    pub turns: u32,
}

/// One battle: a borrowed player against an owned enemy.
///
/// The caller selects an action in the player turn, drains the message queue
/// one line per tick, and fires `execute_enemy_turn` once the queue empties
/// in the enemy turn phase. Side effects are applied eagerly when an action
/// executes; the queue only paces what the player has been shown. Calling an
/// action outside its phase is a caller bug and panics.
pub struct Battle<'a> {
    player: &'a mut Player,
    enemy: Enemy,
    phase: BattlePhase,
    turn_count: u32,
    messages: VecDeque<BattleEvent>,
    rng: BattleRng,
    behavior: Box<dyn Behavior>,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a mut Player, enemy: Enemy, rng: BattleRng) -> Self {
        Self::with_behavior(player, enemy, rng, Box::new(StandardBehavior))
    }

    pub fn with_behavior(
        player: &'a mut Player,
        enemy: Enemy,
        rng: BattleRng,
        behavior: Box<dyn Behavior>,
    ) -> Self {
        let mut battle = Battle {
            player,
            enemy,
            phase: BattlePhase::PlayerTurn,
            turn_count: 0,
            messages: VecDeque::new(),
            rng,
            behavior,
        };
        battle.push_event(BattleEvent::EnemyAppeared {
            name: battle.enemy.name.clone(),
        });
        battle
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Completed enemy turns that returned control to the player.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn player(&self) -> &Player {
        &*self.player
    }

    fn push_event(&mut self, event: BattleEvent) {
        self.messages.push_back(event);
    }

    /// Remove and format the oldest undisplayed narration line.
    pub fn pop_message(&mut self) -> Option<String> {
        self.messages.pop_front().map(|event| event.format())
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn result(&self) -> BattleOutcome {
        let won = self.phase == BattlePhase::Victory;
        BattleOutcome {
            phase: self.phase,
            exp_gained: if won { self.enemy.exp_reward } else { 0 },
            gold_gained: if won { self.enemy.gold_reward } else { 0 },
            turns: self.turn_count,
        }
    }

    fn require_phase(&self, required: BattlePhase, operation: &str) {
        if self.phase != required {
            panic!(
                "{} called in {:?} phase; only valid in {:?}",
                operation, self.phase, required
            );
        }
    }

    /// The player's basic attack. Valid only in the player turn.
    pub fn execute_attack(&mut self) {
        self.require_phase(BattlePhase::PlayerTurn, "execute_attack");

        let outcome = calculate_damage(&*self.player, &self.enemy, 1.0, false, &mut self.rng);
        self.enemy.take_damage(outcome.damage);

        if outcome.critical {
            self.push_event(BattleEvent::AttackAnnounced {
                attacker: self.player.name.clone(),
            });
            self.push_event(BattleEvent::CriticalHit {
                damage: outcome.damage,
            });
        } else {
            self.push_event(BattleEvent::AttackLanded {
                attacker: self.player.name.clone(),
                damage: outcome.damage,
            });
        }

        if !self.enemy.is_alive() {
            self.handle_victory();
        } else {
            self.phase = BattlePhase::EnemyTurn;
        }
    }

    /// Brace for the enemy. Narration only: defending has no mechanical
    /// effect on incoming damage.
    pub fn execute_defend(&mut self) {
        self.require_phase(BattlePhase::PlayerTurn, "execute_defend");

        self.push_event(BattleEvent::Braced {
            name: self.player.name.clone(),
        });
        self.phase = BattlePhase::EnemyTurn;
    }

    /// Attempt to flee. Success ends the battle; failure hands the turn to
    /// the enemy.
    pub fn execute_escape(&mut self) {
        self.require_phase(BattlePhase::PlayerTurn, "execute_escape");

        if escape_success(self.player.spd, self.enemy.spd, &mut self.rng) {
            self.push_event(BattleEvent::GotAway {
                name: self.player.name.clone(),
            });
            self.phase = BattlePhase::Escaped;
        } else {
            self.push_event(BattleEvent::EscapeFailed);
            self.phase = BattlePhase::EnemyTurn;
        }
    }

    /// Run the enemy's turn. A dead enemy is a benign no-op (the battle has
    /// already resolved); any other out-of-phase call panics.
    pub fn execute_enemy_turn(&mut self) {
        if !self.enemy.is_alive() {
            return;
        }
        self.require_phase(BattlePhase::EnemyTurn, "execute_enemy_turn");

        let action = self
            .behavior
            .decide_action(&self.enemy, &*self.player, &mut self.rng);

        match action {
            EnemyAction::Attack => {
                let outcome =
                    calculate_damage(&self.enemy, &*self.player, 1.0, false, &mut self.rng);
                self.player.take_damage(outcome.damage);

                // The enemy's narration does not call out criticals; the
                // multiplier still applies to the damage dealt.
                self.push_event(BattleEvent::AttackLanded {
                    attacker: self.enemy.name.clone(),
                    damage: outcome.damage,
                });

                if self.player.hp == 0 {
                    self.handle_defeat();
                } else {
                    self.phase = BattlePhase::PlayerTurn;
                    self.turn_count += 1;
                }
            }
            EnemyAction::Observe => {
                self.push_event(BattleEvent::Observing {
                    name: self.enemy.name.clone(),
                });
                self.phase = BattlePhase::PlayerTurn;
                self.turn_count += 1;
            }
        }
    }

    fn handle_victory(&mut self) {
        self.phase = BattlePhase::Victory;

        self.push_event(BattleEvent::EnemyDefeated {
            name: self.enemy.name.clone(),
        });
        self.push_event(BattleEvent::ExpGained {
            amount: self.enemy.exp_reward,
        });
        self.push_event(BattleEvent::GoldGained {
            amount: self.enemy.gold_reward,
        });

        self.player.exp += self.enemy.exp_reward;

        // One reward can cross several thresholds; each iteration consumes
        // one old-level threshold and fully restores HP/MP.
        while can_level_up(self.player.exp, self.player.level) {
            let report = apply_level_up(self.player);
            self.push_event(BattleEvent::LevelUp {
                level: report.new_level,
            });
            self.push_event(BattleEvent::RankChanged { rank: report.rank });
            self.push_event(BattleEvent::StatGains {
                growth: report.growth,
            });
        }
    }

    fn handle_defeat(&mut self) {
        self.phase = BattlePhase::Defeat;
        self.push_event(BattleEvent::PlayerDefeated {
            name: self.player.name.clone(),
        });
    }
}
