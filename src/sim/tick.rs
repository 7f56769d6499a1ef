//! Fixed timestep simulation tick
//!
//! One call advances the session by one frame: movement, boundary reset,
//! pickups, traps, enemy pursuit, enemy contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::step_enemies;
use super::player::{MoveKeys, apply_input, enforce_boundary};
use super::proximity::{in_contact, planar_distance};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::floor_xz;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub keys: MoveKeys,
    /// Demo mode - steer toward the nearest item instead of reading keys
    pub autopilot: bool,
}

impl TickInput {
    pub fn keys(keys: MoveKeys) -> Self {
        Self {
            keys,
            autopilot: false,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn items_collected(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::ItemCollected { .. }))
            .count()
    }

    pub fn damage_events(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::TrapTriggered { .. } | GameEvent::EnemyHit { .. }))
            .count()
    }

    pub fn boundary_reset(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::BoundaryReset { .. }))
    }

    pub fn game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    }
}

/// Keys that walk the player toward the nearest remaining item
pub fn autopilot_keys(state: &GameState) -> MoveKeys {
    let here = floor_xz(state.player.pos);
    let Some(target) = state
        .entities
        .items
        .iter()
        .map(|item| item.pos)
        .min_by(|a, b| {
            planar_distance(*a, here)
                .partial_cmp(&planar_distance(*b, here))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return MoveKeys::default();
    };

    let delta: Vec2 = target - here;
    let dead_zone = MOVE_STEP * 0.5;
    MoveKeys {
        left: delta.x < -dead_zone,
        right: delta.x > dead_zone,
        forward: delta.y > dead_zone,
        back: delta.y < -dead_zone,
    }
}

/// Mark the run over and record the event
fn end_game(state: &mut GameState, report: &mut TickReport) {
    state.phase = GamePhase::GameOver;
    report.events.push(GameEvent::GameOver {
        score: state.player.score,
    });
    log::info!(
        "Game Over! score {} after {} ticks",
        state.player.score,
        state.time_ticks
    );
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    // Terminal: nothing moves once the run has ended
    if state.phase == GamePhase::GameOver {
        return report;
    }

    state.time_ticks += 1;

    // --- MOVEMENT ---
    let keys = if input.autopilot {
        autopilot_keys(state)
    } else {
        input.keys
    };
    let from = apply_input(state.player.pos, &keys, MOVE_STEP);
    state.player.pos = from;
    if enforce_boundary(&mut state.player.pos) {
        log::debug!("Left the maze at ({:.2}, {:.2}), back to spawn", from.x, from.z);
        report.events.push(GameEvent::BoundaryReset { from });
    }

    let rule = state.proximity;
    let player_pos = state.player.pos;

    // --- PICKUPS ---
    // Collect first, then remove, so the set is never mutated mid-iteration
    let collected: Vec<u32> = state
        .entities
        .items
        .iter()
        .filter(|item| in_contact(rule, item.pos, player_pos))
        .map(|item| item.id)
        .collect();
    for id in collected {
        if state.entities.remove_item(id).is_some() {
            state.player.score += ITEM_SCORE;
            report.events.push(GameEvent::ItemCollected {
                id,
                score: state.player.score,
            });
            log::debug!("Collected item {} (score {})", id, state.player.score);
        }
    }

    // --- TRAPS ---
    let cooldown = state.trap_cooldown_ticks;
    let mut dead = false;
    for trap in state.entities.traps.iter_mut() {
        if trap.cooldown > 0 {
            trap.cooldown -= 1;
            continue;
        }
        if !in_contact(rule, trap.pos, player_pos) {
            continue;
        }
        trap.cooldown = cooldown;
        dead = state.player.take_damage(TRAP_DAMAGE);
        report.events.push(GameEvent::TrapTriggered {
            id: trap.id,
            health: state.player.health,
        });
        log::debug!("Trap {} hit (health {})", trap.id, state.player.health);
        if dead {
            break;
        }
    }
    if dead {
        end_game(state, &mut report);
        return report;
    }

    // --- ENEMY PURSUIT ---
    step_enemies(&mut state.entities.enemies, floor_xz(player_pos));

    // --- ENEMY CONTACT ---
    for enemy in &state.entities.enemies {
        if !in_contact(rule, enemy.pos, player_pos) {
            continue;
        }
        dead = state.player.take_damage(ENEMY_DAMAGE);
        report.events.push(GameEvent::EnemyHit {
            id: enemy.id,
            health: state.player.health,
        });
        log::debug!("Enemy {} hit (health {})", enemy.id, state.player.health);
        if dead {
            break;
        }
    }
    if dead {
        end_game(state, &mut report);
        return report;
    }

    log::trace!(
        "tick {}: pos ({:.2}, {:.2}) score {} health {}",
        state.time_ticks,
        state.player.pos.x,
        state.player.pos.z,
        state.player.score,
        state.player.health
    );

    report
}
