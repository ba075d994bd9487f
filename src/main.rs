//! Headless demo run
//!
//! Drives the simulation with a small autopilot so a round can be watched in
//! the logs without a renderer. Usage:
//!
//!   lane-strike [seed] [max-ticks]

use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use lane_strike::audio::{self, LogSink};
use lane_strike::consts::*;
use lane_strike::sim::{Direction, GamePhase, GameState, TickInput, tick};
use lane_strike::{HighScores, Tuning};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(12345);
    let max_ticks: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3600);

    log::info!("Lane Strike headless demo, seed {seed}");

    let tuning = Tuning::load(Path::new("tuning.json"));
    let mut state = GameState::new(seed);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut sink = LogSink::default();

    // Leave the start screen
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, &tuning, &mut rng, SIM_DT);

    while state.phase == GamePhase::Active && state.time_ticks < max_ticks {
        let input = autopilot(&state);
        tick(&mut state, &input, &tuning, &mut rng, SIM_DT);
        audio::play_cues(&state.events, &mut sink);
    }

    let snap = state.snapshot();
    log::info!(
        "Run over after {} ticks: score {}, kills {}, difficulty x{}",
        state.time_ticks,
        snap.score,
        snap.kills,
        snap.bullets_needed
    );

    let path = Path::new("highscores.json");
    let mut scores = HighScores::load(path);
    if let Some(rank) = scores.add(snap.score, snap.kills) {
        log::info!("New high score, rank {rank}");
        if let Err(e) = scores.save(path) {
            log::warn!("Failed to save high scores: {e}");
        }
    }
}

/// Chase the lowest enemy's column and fire every other tick
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput {
        fire: state.time_ticks % 2 == 0,
        ..Default::default()
    };

    let target = state
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(enemy) = target {
        let enemy_center = enemy.pos.x + ENEMY_WIDTH / 2.0;
        let player_center = state.player.pos.x + PLAYER_WIDTH / 2.0;
        if enemy_center < player_center - PLAYER_MOVE_STEP {
            input.held = Some(Direction::Left);
        } else if enemy_center > player_center + PLAYER_MOVE_STEP {
            input.held = Some(Direction::Right);
        }
    }

    input
}
