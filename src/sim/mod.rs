//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod enemy;
pub mod maze;
pub mod player;
pub mod proximity;
pub mod state;
pub mod tick;
pub mod timestep;

pub use maze::{Cell, is_wall, wall_cells};
pub use player::{MoveKeys, apply_input, enforce_boundary, out_of_bounds};
pub use proximity::{contact_distance, in_contact, planar_distance};
pub use state::{
    Entity, EntityKind, EntityRegistry, GameEvent, GamePhase, GameState, Player, RngState,
    spawn_positions,
};
pub use tick::{TickInput, TickReport, autopilot_keys, tick};
pub use timestep::FixedTimestep;
