//! Distance checks between the player and floor entities

use glam::{Vec2, Vec3};

use crate::consts::CONTACT_RADIUS;
use crate::floor_xz;
use crate::settings::ProximityRule;

/// Distance on the floor plane, ignoring height
#[inline]
pub fn planar_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Distance used by the pickup, trap and enemy contact checks
///
/// Under `LegacyXOnly` the entity point is taken as (entity.x, player.z), so
/// the result is just the x separation.
pub fn contact_distance(rule: ProximityRule, entity: Vec2, player: Vec3) -> f32 {
    let player = floor_xz(player);
    match rule {
        ProximityRule::LegacyXOnly => Vec2::new(entity.x, player.y).distance(player),
        ProximityRule::Planar => planar_distance(entity, player),
    }
}

/// Is the entity touching the player?
#[inline]
pub fn in_contact(rule: ProximityRule, entity: Vec2, player: Vec3) -> bool {
    contact_distance(rule, entity, player) < CONTACT_RADIUS
}
