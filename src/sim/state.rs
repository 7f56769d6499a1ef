//! Game state and core simulation types
//!
//! All state the frame loop owns and passes into `tick` lives here.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::{ProximityRule, Settings};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Health ran out; terminal
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the maze and was put back at spawn
    BoundaryReset { from: Vec3 },
    ItemCollected { id: u32, score: u64 },
    TrapTriggered { id: u32, health: u32 },
    EnemyHit { id: u32, health: u32 },
    GameOver { score: u64 },
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    pub score: u64,
    pub health: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Self::spawn_point(SPAWN_Y),
            score: 0,
            health: START_HEALTH,
        }
    }
}

impl Player {
    pub fn spawn_point(y: f32) -> Vec3 {
        Vec3::new(SPAWN_X, y, SPAWN_Z)
    }

    /// Apply damage, saturating at zero. Returns true once health is gone.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// Which registry set an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Item,
    Trap,
    Enemy,
}

impl EntityKind {
    /// PCG stream per kind, so each set draws from an independent sequence
    fn stream(self) -> u64 {
        match self {
            EntityKind::Item => 1,
            EntityKind::Trap => 2,
            EntityKind::Enemy => 3,
        }
    }
}

/// An item, trap or enemy on the maze floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// Floor position (x, z)
    pub pos: Vec2,
    /// Ticks left before a trap can fire again
    #[serde(default)]
    pub cooldown: u32,
}

impl Entity {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            cooldown: 0,
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64, stream: u64) -> Self {
        Self { seed, stream }
    }

    pub fn to_rng(&self) -> Pcg32 {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        if self.stream != 0 {
            rng = Pcg32::new(rng.random(), self.stream);
        }
        rng
    }
}

/// Draw `count` cell-aligned floor positions: (randint(-5,5)*2, randint(-5,5)*2)
///
/// Duplicates are allowed, both within one call and across calls.
pub fn spawn_positions(count: usize, rng: &mut impl Rng) -> Vec<Vec2> {
    (0..count)
        .map(|_| {
            let x = rng.random_range(-MAZE_HALF_EXTENT..=MAZE_HALF_EXTENT);
            let z = rng.random_range(-MAZE_HALF_EXTENT..=MAZE_HALF_EXTENT);
            Vec2::new(x as f32 * CELL_SIZE, z as f32 * CELL_SIZE)
        })
        .collect()
}

/// Current items, traps and enemies
///
/// Order carries no meaning; each set is kept sorted by id so iteration is
/// stable for determinism.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityRegistry {
    pub items: Vec<Entity>,
    pub traps: Vec<Entity>,
    pub enemies: Vec<Entity>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    pub fn set(&self, kind: EntityKind) -> &[Entity] {
        match kind {
            EntityKind::Item => &self.items,
            EntityKind::Trap => &self.traps,
            EntityKind::Enemy => &self.enemies,
        }
    }

    fn set_mut(&mut self, kind: EntityKind) -> &mut Vec<Entity> {
        match kind {
            EntityKind::Item => &mut self.items,
            EntityKind::Trap => &mut self.traps,
            EntityKind::Enemy => &mut self.enemies,
        }
    }

    /// Add an entity at `pos`, returning its id
    pub fn insert(&mut self, kind: EntityKind, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.set_mut(kind).push(Entity::new(id, pos));
        id
    }

    /// Spawn `count` entities of `kind` at seeded random cells
    pub fn spawn(&mut self, kind: EntityKind, count: usize, seed: u64) -> Vec<u32> {
        let mut rng = RngState::new(seed, kind.stream()).to_rng();
        spawn_positions(count, &mut rng)
            .into_iter()
            .map(|pos| self.insert(kind, pos))
            .collect()
    }

    pub fn spawn_items(&mut self, count: usize, seed: u64) -> Vec<u32> {
        self.spawn(EntityKind::Item, count, seed)
    }

    pub fn spawn_traps(&mut self, count: usize, seed: u64) -> Vec<u32> {
        self.spawn(EntityKind::Trap, count, seed)
    }

    pub fn spawn_enemies(&mut self, count: usize, seed: u64) -> Vec<u32> {
        self.spawn(EntityKind::Enemy, count, seed)
    }

    /// Remove one item. Removing an id that is already gone does nothing.
    pub fn remove_item(&mut self, id: u32) -> Option<Entity> {
        let idx = self.items.iter().position(|e| e.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Remove every listed item, returning how many were actually present
    pub fn remove_items(&mut self, ids: &[u32]) -> usize {
        let before = self.items.len();
        self.items.retain(|e| !ids.contains(&e.id));
        before - self.items.len()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub proximity: ProximityRule,
    pub trap_cooldown_ticks: u32,
    pub player: Player,
    pub entities: EntityRegistry,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
}

impl GameState {
    /// Create a new session with default counts and rules
    pub fn new(seed: u64) -> Self {
        Self::from_settings(&Settings {
            seed,
            ..Settings::default()
        })
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut entities = EntityRegistry::new();
        entities.spawn_items(settings.item_count, settings.seed);
        entities.spawn_traps(settings.trap_count, settings.seed);
        entities.spawn_enemies(settings.enemy_count, settings.seed);

        log::debug!(
            "Spawned {} items, {} traps, {} enemies (seed {})",
            entities.items.len(),
            entities.traps.len(),
            entities.enemies.len(),
            settings.seed
        );

        Self {
            seed: settings.seed,
            proximity: settings.proximity,
            trap_cooldown_ticks: settings.trap_cooldown_ticks,
            player: Player::default(),
            entities,
            time_ticks: 0,
            phase: GamePhase::Running,
        }
    }

    /// A session with no items, traps or enemies
    pub fn empty() -> Self {
        Self::from_settings(&Settings {
            item_count: 0,
            trap_count: 0,
            enemy_count: 0,
            ..Settings::default()
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_counts() {
        let state = GameState::new(7);
        assert_eq!(state.entities.items.len(), DEFAULT_ITEM_COUNT);
        assert_eq!(state.entities.traps.len(), DEFAULT_TRAP_COUNT);
        assert_eq!(state.entities.enemies.len(), DEFAULT_ENEMY_COUNT);
        assert_eq!(state.player.pos, Vec3::new(0.0, 1.0, -5.0));
        assert_eq!(state.player.health, 100);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_spawn_positions_on_cell_grid() {
        let mut rng = RngState::new(3, 0).to_rng();
        for p in spawn_positions(200, &mut rng) {
            for v in [p.x, p.y] {
                assert!((-10.0..=10.0).contains(&v));
                assert_eq!(v.rem_euclid(2.0), 0.0);
            }
        }
    }

    #[test]
    fn test_spawn_is_seeded() {
        let a = GameState::new(1234);
        let b = GameState::new(1234);
        assert_eq!(a.entities.items, b.entities.items);
        assert_eq!(a.entities.enemies, b.entities.enemies);
    }

    #[test]
    fn test_ids_unique_across_sets() {
        let state = GameState::new(99);
        let mut ids: Vec<u32> = [EntityKind::Item, EntityKind::Trap, EntityKind::Enemy]
            .iter()
            .flat_map(|k| state.entities.set(*k).iter().map(|e| e.id))
            .collect();
        let n = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), n);
    }

    #[test]
    fn test_remove_item_once() {
        let mut reg = EntityRegistry::new();
        let id = reg.insert(EntityKind::Item, Vec2::new(2.0, 2.0));
        reg.insert(EntityKind::Item, Vec2::new(4.0, 2.0));

        assert!(reg.remove_item(id).is_some());
        assert_eq!(reg.items.len(), 1);
        assert!(reg.remove_item(id).is_none());
        assert_eq!(reg.items.len(), 1);
        assert_eq!(reg.remove_items(&[id]), 0);
    }

    #[test]
    fn test_damage_saturates() {
        let mut player = Player::default();
        assert!(!player.take_damage(90));
        assert!(player.take_damage(20));
        assert_eq!(player.health, 0);
        assert!(player.is_dead());
    }
}
