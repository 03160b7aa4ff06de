use glam::Vec2;

use super::World;
use super::events::{FrameEvent, SpawnRejection};
use crate::entities::Enemy;
use crate::rng::RandomSource;

impl World {
    /// Shortens the spawn interval once per ramp period, never past the floor.
    pub(super) fn ramp_spawn_interval(&mut self) {
        let config = &self.config;
        if self.frame_count % config.spawn_ramp_period == 0
            && self.spawn_interval > config.min_spawn_interval
        {
            self.spawn_interval = self
                .spawn_interval
                .saturating_sub(config.spawn_interval_step)
                .max(config.min_spawn_interval);
            log::debug!(
                "Spawn interval now {} frames (frame {})",
                self.spawn_interval,
                self.frame_count
            );
        }
    }

    /// One spawn attempt on interval-aligned frames while below the cap.
    pub(super) fn spawn_step(&mut self, rng: &mut dyn RandomSource) -> Option<FrameEvent> {
        if self.frame_count % self.spawn_interval != 0
            || self.enemies.len() >= self.config.max_enemies
        {
            return None;
        }
        Some(self.try_spawn(rng))
    }

    /// Draws one candidate near the player and places an enemy there if it is
    /// clear. A rejected candidate is not retried.
    pub fn try_spawn(&mut self, rng: &mut dyn RandomSource) -> FrameEvent {
        let jitter = self.config.spawn_jitter;
        let offset = Vec2::new(rng.jitter(jitter) as f32, rng.jitter(jitter) as f32);
        let candidate = self.player.pos + offset;

        if let Some(reason) = self.spawn_rejection(candidate) {
            log::trace!("Spawn at {candidate} rejected: {reason:?}");
            return FrameEvent::SpawnRejected {
                at: candidate,
                reason,
            };
        }

        self.enemies.push(Enemy::new(
            candidate,
            self.config.enemy_radius,
            self.config.enemy_health,
        ));
        FrameEvent::EnemySpawned { at: candidate }
    }

    pub fn spawn_rejection(&self, candidate: Vec2) -> Option<SpawnRejection> {
        if self.enemies.len() >= self.config.max_enemies {
            return Some(SpawnRejection::AtCapacity);
        }

        // A candidate exactly at the minimum distance is still too close
        if candidate.distance(self.player.pos) <= self.config.spawn_min_player_distance {
            return Some(SpawnRejection::TooCloseToPlayer);
        }

        let spacing = 2.0 * self.config.enemy_radius;
        if self
            .enemies
            .iter()
            .any(|enemy| enemy.pos.distance(candidate) < spacing)
        {
            return Some(SpawnRejection::Crowded);
        }

        None
    }
}
