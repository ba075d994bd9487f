//! Lane Strike - deterministic core for a top-down lane shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, tick reducer, spawner)
//! - `tuning`: Data-driven game balance
//! - `audio`: Sound-cue seam for the presentation layer
//! - `highscores`: Local leaderboard persistence
//!
//! Rendering, input capture, and audio playback live in the host application;
//! the crate exposes a per-tick snapshot, accepts discrete commands, and emits
//! sound-cue events.

pub mod audio;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (30 Hz)
    pub const SIM_DT: f32 = 1.0 / 30.0;

    /// Logical screen dimensions
    pub const SCREEN_WIDTH: f32 = 360.0;
    pub const SCREEN_HEIGHT: f32 = 640.0;

    /// Player sprite
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Distance moved per movement command (and per tick while held)
    pub const PLAYER_MOVE_STEP: f32 = 10.0;
    /// Gap between the player's default position and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 40.0;

    /// Bullet sprite
    pub const BULLET_WIDTH: f32 = 6.0;
    pub const BULLET_HEIGHT: f32 = 12.0;
    /// Upward bullet speed in pixels per second
    pub const BULLET_SPEED: f32 = 420.0;

    /// Enemy sprite
    pub const ENEMY_WIDTH: f32 = 50.0;
    pub const ENEMY_HEIGHT: f32 = 50.0;
    /// Downward enemy speed in pixels per second at difficulty level 1
    pub const ENEMY_BASE_SPEED: f32 = 60.0;
    /// Full enemy health
    pub const ENEMY_FULL_HEALTH: i32 = 100;

    /// Number of equal-width spawn lanes across the screen
    pub const LANE_COUNT: u32 = 5;

    /// Base score per bullet hit (multiplied by bullets_needed)
    pub const SCORE_PER_HIT: u32 = 10;
    /// Kills required to raise bullets_needed by one
    pub const KILLS_PER_LEVEL: u32 = 10;

    /// Spawner cadence in ticks
    pub const SPAWN_BASE_TICKS: u32 = 45;
    pub const SPAWN_MIN_TICKS: u32 = 15;
}

/// Width of one spawn lane
#[inline]
pub fn lane_width() -> f32 {
    consts::SCREEN_WIDTH / consts::LANE_COUNT as f32
}

/// X coordinate of an enemy centered in the given lane
#[inline]
pub fn lane_x(lane: u32) -> f32 {
    lane as f32 * lane_width() + (lane_width() - consts::ENEMY_WIDTH) / 2.0
}
