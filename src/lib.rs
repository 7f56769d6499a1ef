//! Maze Walker - a first-person corridor maze
//!
//! Core modules:
//! - `game`: Frame loop driver
//! - `sim`: Deterministic simulation (maze, player, entities, enemy AI)
//! - `renderer`: Scene extraction and wireframe geometry
//! - `platform`: Window/render collaborator abstraction
//! - `settings`: Runtime configuration
//! - `highscores`: Leaderboard

pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::{FrameOutcome, Game};
pub use highscores::HighScores;
pub use settings::{ProximityRule, Settings};

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (matches the 10 ms frame pacing)
    pub const SIM_DT: f32 = 0.01;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Maze cell coordinates span [-MAZE_HALF_EXTENT, MAZE_HALF_EXTENT]
    pub const MAZE_HALF_EXTENT: i32 = 5;
    /// World units between neighbouring cell centres
    pub const CELL_SIZE: f32 = 2.0;
    /// Player is reset to spawn once |x| or |z| exceeds this
    pub const WORLD_BOUND: f32 = 10.0;

    /// Player spawn point
    pub const SPAWN_X: f32 = 0.0;
    pub const SPAWN_Y: f32 = 1.0;
    pub const SPAWN_Z: f32 = -5.0;
    /// Per-tick movement along an axis while a key is held
    pub const MOVE_STEP: f32 = 0.1;

    pub const START_HEALTH: u32 = 100;
    pub const ITEM_SCORE: u64 = 10;
    pub const TRAP_DAMAGE: u32 = 10;
    pub const ENEMY_DAMAGE: u32 = 20;

    /// Distance under which pickups, traps and enemies touch the player
    pub const CONTACT_RADIUS: f32 = 1.5;
    /// Enemies within this planar distance chase the player
    pub const ENEMY_SIGHT_RANGE: f32 = 6.0;
    /// Distance an enemy closes per tick while chasing
    pub const ENEMY_STEP: f32 = 0.05;

    pub const DEFAULT_ITEM_COUNT: usize = 5;
    pub const DEFAULT_TRAP_COUNT: usize = 5;
    pub const DEFAULT_ENEMY_COUNT: usize = 5;
}

/// Project a world position onto the maze floor plane (x, z)
#[inline]
pub fn floor_xz(pos: Vec3) -> Vec2 {
    Vec2::new(pos.x, pos.z)
}

/// Lift a floor-plane position back into the world at height `y`
#[inline]
pub fn lift_xz(pos: Vec2, y: f32) -> Vec3 {
    Vec3::new(pos.x, y, pos.y)
}
