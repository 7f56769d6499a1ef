//! Player movement and boundary handling
//!
//! Movement is a fixed step per tick on each held axis; the player never
//! turns. Leaving the outer bound teleports the player back to spawn.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Direction keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub back: bool,
}

impl MoveKeys {
    pub const FORWARD: Self = Self {
        left: false,
        right: false,
        forward: true,
        back: false,
    };

    pub fn any(&self) -> bool {
        self.left || self.right || self.forward || self.back
    }
}

/// Integrate held keys into a new position (left/right = -x/+x, forward/back = +z/-z)
pub fn apply_input(pos: Vec3, keys: &MoveKeys, step: f32) -> Vec3 {
    let mut next = pos;
    if keys.left {
        next.x -= step;
    }
    if keys.right {
        next.x += step;
    }
    if keys.forward {
        next.z += step;
    }
    if keys.back {
        next.z -= step;
    }
    next
}

/// True if the position lies strictly outside the maze bound on x or z
pub fn out_of_bounds(pos: Vec3) -> bool {
    pos.x < -WORLD_BOUND || pos.x > WORLD_BOUND || pos.z < -WORLD_BOUND || pos.z > WORLD_BOUND
}

/// Reset x/z to spawn when out of bounds, preserving y. Returns true on reset.
pub fn enforce_boundary(pos: &mut Vec3) -> bool {
    if out_of_bounds(*pos) {
        pos.x = SPAWN_X;
        pos.z = SPAWN_Z;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_each_direction() {
        let p = Vec3::new(0.0, 1.0, 0.0);
        let step = MOVE_STEP;
        let left = MoveKeys { left: true, ..Default::default() };
        let right = MoveKeys { right: true, ..Default::default() };
        let back = MoveKeys { back: true, ..Default::default() };
        assert_eq!(apply_input(p, &left, step), Vec3::new(-0.1, 1.0, 0.0));
        assert_eq!(apply_input(p, &right, step), Vec3::new(0.1, 1.0, 0.0));
        assert_eq!(apply_input(p, &MoveKeys::FORWARD, step), Vec3::new(0.0, 1.0, 0.1));
        assert_eq!(apply_input(p, &back, step), Vec3::new(0.0, 1.0, -0.1));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let p = Vec3::new(2.0, 1.0, 2.0);
        let keys = MoveKeys { left: true, right: true, ..Default::default() };
        assert_eq!(apply_input(p, &keys, MOVE_STEP), p);
        assert!(!MoveKeys::default().any());
    }

    #[test]
    fn test_bound_is_inclusive() {
        assert!(!out_of_bounds(Vec3::new(10.0, 1.0, -10.0)));
        assert!(out_of_bounds(Vec3::new(10.01, 1.0, 0.0)));
        assert!(out_of_bounds(Vec3::new(0.0, 1.0, -10.01)));
    }

    #[test]
    fn test_reset_keeps_height() {
        let mut p = Vec3::new(12.0, 3.5, 4.0);
        assert!(enforce_boundary(&mut p));
        assert_eq!(p, Vec3::new(0.0, 3.5, -5.0));

        let mut inside = Vec3::new(9.0, 1.0, 9.0);
        assert!(!enforce_boundary(&mut inside));
        assert_eq!(inside, Vec3::new(9.0, 1.0, 9.0));
    }

    proptest! {
        #[test]
        fn prop_outside_resets_to_spawn(
            x in -20.0f32..20.0,
            z in -20.0f32..20.0,
            y in -2.0f32..2.0,
        ) {
            let mut p = Vec3::new(x, y, z);
            let outside = x.abs() > 10.0 || z.abs() > 10.0;
            prop_assert_eq!(enforce_boundary(&mut p), outside);
            if outside {
                prop_assert_eq!(p, Vec3::new(0.0, y, -5.0));
            } else {
                prop_assert_eq!(p, Vec3::new(x, y, z));
            }
        }
    }
}
