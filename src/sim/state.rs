//! Game state and core simulation types
//!
//! Everything needed to re-render or replay a round lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen
    NotStarted,
    /// Active gameplay
    Active,
    /// Game is paused
    Paused,
    /// Round ended
    Over,
}

/// Sound cues emitted for the presentation layer to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player fired a bullet
    Shoot,
    /// A bullet struck an enemy
    Hit,
    /// Round ended
    GameOver,
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (SCREEN_WIDTH - PLAYER_WIDTH) / 2.0,
                SCREEN_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
            ),
        }
    }
}

impl Player {
    /// Apply a movement delta, clamped to screen bounds
    pub fn apply_delta(&mut self, delta: Vec2) {
        self.pos.x = (self.pos.x + delta.x).clamp(0.0, SCREEN_WIDTH - PLAYER_WIDTH);
        self.pos.y = (self.pos.y + delta.y).clamp(0.0, SCREEN_HEIGHT - PLAYER_HEIGHT);
    }

    /// Muzzle position: a new bullet spawns top-center of the player
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + (PLAYER_WIDTH - BULLET_WIDTH) / 2.0,
            self.pos.y - BULLET_HEIGHT,
        )
    }
}

/// A bullet entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub health: i32,
    /// Spawn lane index (render hint; movement is purely vertical)
    pub lane: u32,
}

impl Enemy {
    pub fn new(id: u32, lane: u32, y: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(crate::lane_x(lane), y),
            health: ENEMY_FULL_HEALTH,
            lane,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player sprite
    pub player: Player,
    /// Live bullets (vector order is the collision tie-break order)
    pub bullets: Vec<Bullet>,
    /// Live enemies (vector order is the collision tie-break order)
    pub enemies: Vec<Enemy>,
    /// Score (monotone while the round is active)
    pub score: u32,
    /// Enemies destroyed this round
    pub kills: u32,
    /// Ticks until the spawner next fires
    pub spawn_cooldown: u32,
    /// Sound cues emitted by the last tick (drained by the host)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh round in the `NotStarted` phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::NotStarted,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            kills: 0,
            spawn_cooldown: SPAWN_BASE_TICKS,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Hits required to destroy one enemy: grows by one every
    /// `KILLS_PER_LEVEL` kills
    pub fn bullets_needed(&self) -> u32 {
        1 + self.kills / KILLS_PER_LEVEL
    }

    /// Damage applied per bullet hit at the current difficulty
    pub fn damage_per_hit(&self) -> i32 {
        ENEMY_FULL_HEALTH / self.bullets_needed() as i32
    }

    /// Reset all entities and counters to initial values, keeping the seed
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }

    /// Render-contract view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: PlayerView {
                pos: self.player.pos,
                size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            },
            bullets: self
                .bullets
                .iter()
                .map(|b| BulletView { id: b.id, pos: b.pos })
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    pos: e.pos,
                    health: e.health,
                })
                .collect(),
            score: self.score,
            kills: self.kills,
            bullets_needed: self.bullets_needed(),
            phase: self.phase,
        }
    }
}

/// Player as seen by the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Bullet as seen by the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u32,
    pub pos: Vec2,
}

/// Enemy as seen by the renderer (health drives the health bar)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub pos: Vec2,
    pub health: i32,
}

/// Per-tick view handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub score: u32,
    pub kills: u32,
    pub bullets_needed: u32,
    pub phase: GamePhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_initial_values() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.kills, 0);
        assert_eq!(state.player.pos.x, (SCREEN_WIDTH - PLAYER_WIDTH) / 2.0);
    }

    #[test]
    fn test_player_clamps_to_screen() {
        let mut player = Player::default();
        player.apply_delta(Vec2::new(-10_000.0, 0.0));
        assert_eq!(player.pos.x, 0.0);
        player.apply_delta(Vec2::new(10_000.0, 0.0));
        assert_eq!(player.pos.x, SCREEN_WIDTH - PLAYER_WIDTH);
        player.apply_delta(Vec2::new(0.0, 10_000.0));
        assert_eq!(player.pos.y, SCREEN_HEIGHT - PLAYER_HEIGHT);
    }

    #[test]
    fn test_bullets_needed_steps_every_ten_kills() {
        let mut state = GameState::new(1);
        assert_eq!(state.bullets_needed(), 1);
        assert_eq!(state.damage_per_hit(), 100);
        state.kills = 9;
        assert_eq!(state.bullets_needed(), 1);
        state.kills = 10;
        assert_eq!(state.bullets_needed(), 2);
        assert_eq!(state.damage_per_hit(), 50);
        state.kills = 25;
        assert_eq!(state.bullets_needed(), 3);
        assert_eq!(state.damage_per_hit(), 33);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new(42);
        state.phase = GamePhase::Over;
        state.score = 500;
        state.kills = 12;
        state.enemies.push(Enemy::new(1, 0, 100.0));
        state.bullets.push(Bullet {
            id: 2,
            pos: Vec2::new(10.0, 10.0),
        });

        state.reset();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.kills, 0);
        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.seed, 42);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(3);
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(id, 2, 50.0));
        state.score = 30;

        let snap = state.snapshot();
        assert_eq!(snap.enemies.len(), 1);
        assert_eq!(snap.enemies[0].health, ENEMY_FULL_HEALTH);
        assert_eq!(snap.score, 30);
        assert_eq!(snap.player.size, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));

        // The snapshot is the render wire format
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"score\":30"));
    }
}
