//! Enemy pursuit
//!
//! Enemies have no state of their own beyond a position: each tick, any
//! enemy within sight range closes a fixed distance toward the player.

use glam::Vec2;

use super::proximity::planar_distance;
use super::state::Entity;
use crate::consts::{ENEMY_SIGHT_RANGE, ENEMY_STEP};

/// Position after one pursuit step toward `target`
///
/// Returns `pos` unchanged when the target is out of range or already
/// exactly on top of the enemy.
pub fn pursue(pos: Vec2, target: Vec2) -> Vec2 {
    if planar_distance(pos, target) >= ENEMY_SIGHT_RANGE {
        return pos;
    }
    pos + (target - pos).normalize_or_zero() * ENEMY_STEP
}

/// Advance every enemy one pursuit step. Returns how many moved.
pub fn step_enemies(enemies: &mut [Entity], target: Vec2) -> usize {
    let mut moved = 0;
    for enemy in enemies.iter_mut() {
        let next = pursue(enemy.pos, target);
        if next != enemy.pos {
            enemy.pos = next;
            moved += 1;
        }
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_out_of_range_is_stationary() {
        let pos = Vec2::new(8.0, 0.0);
        assert_eq!(pursue(pos, Vec2::ZERO), pos);
        // Exactly at range does not chase
        assert_eq!(pursue(Vec2::new(6.0, 0.0), Vec2::ZERO), Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_in_range_closes_distance() {
        let next = pursue(Vec2::new(4.0, 0.0), Vec2::ZERO);
        assert!((next.x - 3.95).abs() < 1e-6);
        assert_eq!(next.y, 0.0);
    }

    #[test]
    fn test_on_target_stays_put() {
        let p = Vec2::new(1.0, 1.0);
        assert_eq!(pursue(p, p), p);
    }

    #[test]
    fn test_step_enemies_counts_movers() {
        let mut enemies = vec![
            Entity::new(1, Vec2::new(2.0, 2.0)),
            Entity::new(2, Vec2::new(10.0, 10.0)),
        ];
        assert_eq!(step_enemies(&mut enemies, Vec2::ZERO), 1);
        assert_eq!(enemies[1].pos, Vec2::new(10.0, 10.0));
        assert!(enemies[0].pos.length() < Vec2::new(2.0, 2.0).length());
    }

    proptest! {
        #[test]
        fn prop_step_length(
            ex in -10.0f32..10.0, ez in -10.0f32..10.0,
            px in -10.0f32..10.0, pz in -10.0f32..10.0,
        ) {
            let enemy = Vec2::new(ex, ez);
            let player = Vec2::new(px, pz);
            let dist = enemy.distance(player);
            let next = pursue(enemy, player);
            if dist >= 6.0 {
                prop_assert_eq!(next, enemy);
            } else if dist > 1e-3 {
                prop_assert!((next.distance(enemy) - 0.05).abs() < 1e-4);
                // Moves along the direction to the player
                let dir = (player - enemy).normalize();
                prop_assert!((next - enemy).normalize().dot(dir) > 0.999);
            }
        }
    }
}
