//! The game loop: one tick of the road game.
//!
//! [`GameLoop`] owns the session, the spawner and the crash dispatcher and
//! sequences the tick steps. It is independent of the terminal so the main
//! binary and the integration tests drive exactly the same code.

use crate::core::config::GameConfig;
use crate::crash::CrashDispatcher;
use crate::road::logic::{
    accumulate_active_time, advance_obstacles, enter_crashed, find_collision, move_player,
    remove_passed_obstacles, restart, RoadInput,
};
use crate::road::{RoadGame, SessionState, Snapshot, Spawner};
use rand::Rng;
use std::path::PathBuf;

/// Result of one game tick - captures everything that happened.
///
/// Used by the presentation layer for logging; the renderer only needs
/// the [`Snapshot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Quit was requested; the loop should stop.
    pub quit: bool,
    /// An obstacle was spawned this tick
    pub spawned: bool,
    /// Obstacles removed after leaving the screen
    pub removed: usize,
    /// The player crashed this tick
    pub crashed: bool,
    /// Crash media opened this tick
    pub media_opened: Option<PathBuf>,
    /// Crash media attempt failed this tick
    pub media_error: Option<String>,
    /// Obstacle speed increased this tick
    pub sped_up: bool,
    /// The session restarted this tick
    pub restarted: bool,
}

pub struct GameLoop {
    game: RoadGame,
    spawner: Spawner,
    dispatcher: CrashDispatcher,
}

impl GameLoop {
    pub fn new(config: &GameConfig, dispatcher: CrashDispatcher) -> Self {
        Self {
            game: RoadGame::new(config),
            spawner: Spawner::new(
                config.spawn_interval(),
                config.obstacle_width,
                config.obstacle_height,
            ),
            dispatcher,
        }
    }

    /// Execute one game tick of `dt` seconds. Returns what happened.
    pub fn tick(&mut self, input: &RoadInput, dt: f64, rng: &mut impl Rng) -> TickResult {
        let mut result = TickResult::default();

        if input.quit {
            result.quit = true;
            return result;
        }

        match self.game.state {
            SessionState::Playing => self.tick_playing(input, dt, rng, &mut result),
            SessionState::Crashed => {
                if input.restart && restart(&mut self.game) {
                    self.spawner.reset();
                    result.restarted = true;
                    tracing::info!("restarted");
                }
            }
        }

        result
    }

    fn tick_playing(
        &mut self,
        input: &RoadInput,
        dt: f64,
        rng: &mut impl Rng,
        result: &mut TickResult,
    ) {
        let game = &mut self.game;

        result.spawned = self
            .spawner
            .advance(dt, &game.track, &mut game.obstacles, rng);
        if result.spawned {
            tracing::trace!(count = game.obstacles.len(), "obstacle spawned");
        }

        move_player(game, input);
        advance_obstacles(game);
        result.removed = remove_passed_obstacles(game);

        if find_collision(game).is_some() {
            let dispatcher = &mut self.dispatcher;
            let mut opened = None;
            let attempted = enter_crashed(game, || match dispatcher.dispatch() {
                Ok(path) => {
                    opened = Some(path);
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            });

            result.crashed = true;
            tracing::info!(score = game.display_score(), "crashed");
            if attempted {
                match &game.last_error {
                    Some(message) => {
                        tracing::warn!(error = %message, "crash media failed");
                        result.media_error = Some(message.clone());
                    }
                    None => {
                        if let Some(path) = &opened {
                            tracing::info!(path = %path.display(), "crash media opened");
                        }
                        result.media_opened = opened;
                    }
                }
            }
        }

        result.sped_up = accumulate_active_time(game, dt);
        if result.sped_up {
            tracing::debug!(speed = game.obstacle_speed, "obstacles sped up");
        }
    }

    /// Read-only view for the renderer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.game.snapshot()
    }

    /// Current game state (read-only).
    pub fn game(&self) -> &RoadGame {
        &self.game
    }

    /// Current game state (mutable).
    pub fn game_mut(&mut self) -> &mut RoadGame {
        &mut self.game
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn dispatcher(&self) -> &CrashDispatcher {
        &self.dispatcher
    }
}
