//! Fixed timestep simulation tick
//!
//! A single reducer advances everything in one defined order per frame:
//! phase transitions, movement, fire, bullet advance, enemy advance,
//! collision resolution, scoring, player contact, spawn decision. The host
//! owns the frame timer; nothing here schedules itself.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{bullet_box, enemy_box, player_box};
use super::spawn::run_spawner;
use super::state::{Bullet, GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::tuning::Tuning;

/// Movement directions, each a fixed position delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Position delta for one movement step
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-PLAYER_MOVE_STEP, 0.0),
            Direction::Right => Vec2::new(PLAYER_MOVE_STEP, 0.0),
            Direction::Up => Vec2::new(0.0, -PLAYER_MOVE_STEP),
            Direction::Down => Vec2::new(0.0, PLAYER_MOVE_STEP),
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Direction currently held (move-start .. move-stop); repeats every tick
    pub held: Option<Direction>,
    /// One discrete movement press this tick
    pub step: Option<Direction>,
    /// Fire one bullet
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Leave the start screen
    pub start: bool,
    /// Reset everything and begin a new round
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, rng: &mut impl Rng, dt: f32) {
    state.events.clear();

    // Restart works from any phase and goes straight back into play
    if input.restart {
        state.reset();
        state.phase = GamePhase::Active;
        return;
    }

    match state.phase {
        GamePhase::NotStarted => {
            if input.start {
                state.phase = GamePhase::Active;
            }
            return;
        }
        GamePhase::Active => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return;
            }
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Active;
            }
            return;
        }
        GamePhase::Over => return,
    }

    state.time_ticks += 1;

    // Difficulty is sampled once per tick; a kill that crosses a threshold
    // mid-tick takes effect next tick
    let bullets_needed = state.bullets_needed();

    // Movement intent: held direction repeats each tick, discrete presses
    // apply once; both clamp to screen bounds
    if let Some(dir) = input.held {
        state.player.apply_delta(dir.delta());
    }
    if let Some(dir) = input.step {
        state.player.apply_delta(dir.delta());
    }

    if input.fire {
        let id = state.next_entity_id();
        let pos = state.player.muzzle();
        state.bullets.push(Bullet { id, pos });
        state.events.push(GameEvent::Shoot);
    }

    // Advance bullets upward, cull those fully above the screen
    for bullet in &mut state.bullets {
        bullet.pos.y -= tuning.bullet_speed * dt;
    }
    state.bullets.retain(|b| b.pos.y + BULLET_HEIGHT > 0.0);

    // Advance enemies downward; the first one to reach the bottom edge ends
    // the round
    let enemy_speed = tuning.enemy_speed(bullets_needed);
    let mut breached = false;
    for enemy in &mut state.enemies {
        enemy.pos.y += enemy_speed * dt;
        if enemy.pos.y + ENEMY_HEIGHT >= SCREEN_HEIGHT {
            breached = true;
        }
    }
    if breached {
        game_over(state);
        return;
    }

    // Collision resolution: each bullet strikes the first still-alive enemy
    // overlapping it, in vector order
    let damage = state.damage_per_hit();
    let mut hits = 0u32;
    {
        let enemies = &mut state.enemies;
        let events = &mut state.events;
        state.bullets.retain(|bullet| {
            let bbox = bullet_box(bullet.pos);
            for enemy in enemies.iter_mut() {
                if enemy.health <= 0 {
                    continue;
                }
                if bbox.overlaps(&enemy_box(enemy.pos)) {
                    enemy.health -= damage;
                    hits += 1;
                    events.push(GameEvent::Hit);
                    return false;
                }
            }
            true
        });
    }

    let killed = state.enemies.iter().filter(|e| e.health <= 0).count() as u32;
    state.enemies.retain(|e| e.health > 0);
    state.kills += killed;

    // All of this tick's hits score at once
    state.score += hits * SCORE_PER_HIT * bullets_needed;

    // Direct contact with the player ends the round regardless of the
    // bottom-edge check above
    let pbox = player_box(state.player.pos);
    if state.enemies.iter().any(|e| pbox.overlaps(&enemy_box(e.pos))) {
        game_over(state);
        return;
    }

    run_spawner(state, tuning, rng);
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::Over;
    state.events.push(GameEvent::GameOver);
}
