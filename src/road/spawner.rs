//! Timer-driven obstacle spawner.
//!
//! The spawner is not a thread or an event source: the game loop feeds it
//! active time each tick and it fires once the accumulated time reaches the
//! spawn interval.

use super::types::{Obstacle, Rect, Track};
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Spawner {
    interval: f64,
    accumulated: f64,
    obstacle_width: f64,
    obstacle_height: f64,
}

impl Spawner {
    pub fn new(interval: Duration, obstacle_width: f64, obstacle_height: f64) -> Self {
        Self {
            interval: interval.as_secs_f64(),
            accumulated: 0.0,
            obstacle_width,
            obstacle_height,
        }
    }

    /// Seconds accumulated toward the next spawn.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    /// Advance by `dt` seconds of active time. Appends at most one obstacle
    /// to `obstacles` and returns whether it fired.
    ///
    /// The carried-over remainder is capped at one interval so a stalled
    /// frame does not queue a burst of spawns.
    pub fn advance<R: Rng>(
        &mut self,
        dt: f64,
        track: &Track,
        obstacles: &mut Vec<Obstacle>,
        rng: &mut R,
    ) -> bool {
        self.accumulated += dt.max(0.0);
        if self.accumulated < self.interval {
            return false;
        }

        self.accumulated = (self.accumulated - self.interval).min(self.interval);
        obstacles.push(self.spawn(track, rng));
        true
    }

    /// Create one obstacle at a uniformly random lateral position, with its
    /// bottom edge at the top of the visible area.
    pub fn spawn<R: Rng>(&self, track: &Track, rng: &mut R) -> Obstacle {
        let span = track.lateral_span(self.obstacle_width);
        let offset = if span > 0.0 {
            rng.gen_range(0.0..=span)
        } else {
            0.0
        };

        Obstacle {
            rect: Rect::new(
                track.left + offset,
                -self.obstacle_height,
                self.obstacle_width,
                self.obstacle_height,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn track() -> Track {
        Track::new(60.0, 420.0, 640.0)
    }

    fn spawner() -> Spawner {
        Spawner::new(Duration::from_millis(900), 50.0, 80.0)
    }

    #[test]
    fn test_does_not_fire_before_interval() {
        let mut spawner = spawner();
        let mut obstacles = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..53 {
            assert!(!spawner.advance(1.0 / 60.0, &track(), &mut obstacles, &mut rng));
        }
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut spawner = spawner();
        let mut obstacles = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        // 9.5 seconds of 250ms steps -> 10 spawns
        let mut fired = 0;
        for _ in 0..38 {
            if spawner.advance(0.25, &track(), &mut obstacles, &mut rng) {
                fired += 1;
            }
        }
        assert_eq!(fired, 10);
        assert_eq!(obstacles.len(), 10);
    }

    #[test]
    fn test_long_stall_spawns_one_and_caps_backlog() {
        let mut spawner = spawner();
        let mut obstacles = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert!(spawner.advance(10.0, &track(), &mut obstacles, &mut rng));
        assert_eq!(obstacles.len(), 1);
        assert!(spawner.accumulated() <= 0.9 + 1e-9);
    }

    #[test]
    fn test_spawn_within_track_above_screen() {
        let spawner = spawner();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let track = track();
        for _ in 0..500 {
            let obstacle = spawner.spawn(&track, &mut rng);
            assert!(obstacle.rect.left() >= track.left);
            assert!(obstacle.rect.right() <= track.right);
            assert!((obstacle.rect.y - -80.0).abs() < f64::EPSILON);
            assert!(obstacle.rect.bottom() <= 0.0);
        }
    }

    #[test]
    fn test_spawn_on_track_narrower_than_obstacle() {
        let spawner = spawner();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let narrow = Track::new(100.0, 130.0, 640.0);
        let obstacle = spawner.spawn(&narrow, &mut rng);
        assert!((obstacle.rect.x - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_clears_accumulator() {
        let mut spawner = spawner();
        let mut obstacles = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        spawner.advance(0.5, &track(), &mut obstacles, &mut rng);
        assert!(spawner.accumulated() > 0.0);
        spawner.reset();
        assert!(spawner.accumulated().abs() < f64::EPSILON);
    }
}
