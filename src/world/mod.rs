//! The simulation: one `World` owns every entity and counter of a session.

mod collision;
mod events;
mod spawn;

use glam::Vec2;

pub use events::{FrameEvent, SpawnRejection};

use crate::config::GameConfig;
use crate::entities::{AimLine, Direction, Enemy, GameState, Player, Projectile};
use crate::rng::RandomSource;

#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub state: GameState,
    pub player: Player,
    pub aim: AimLine,
    /// Last pointer position in world coordinates
    pub pointer: Vec2,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    /// May dip to zero or below for the tick that ends the game
    pub health: i32,
    pub money: i64,
    pub frame_count: u64,
    pub spawn_interval: u64,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        let center = Vec2::new(config.world_width / 2.0, config.world_height / 2.0);
        let player = Player::new(center, config.player_radius);
        let aim = AimLine::new(center, config.aim_length, config.aim_width);

        Self {
            state: GameState::Playing,
            pointer: aim.end,
            player,
            aim,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            health: config.max_health,
            money: 0,
            frame_count: 0,
            spawn_interval: config.initial_spawn_interval,
            config,
        }
    }

    /// Advances the world by one frame.
    ///
    /// A tick that starts with health at or below zero resets the world and
    /// enters `GameOver` instead of simulating. Paused and game-over worlds do
    /// not advance.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        if self.state != GameState::Playing {
            return events;
        }

        if self.health <= 0 {
            let final_money = self.money;
            self.reset();
            self.state = GameState::GameOver;
            log::info!(
                "Game over at frame {} with {} money",
                self.frame_count,
                final_money
            );
            events.push(FrameEvent::GameOver {
                final_money,
                frame: self.frame_count,
            });
            return events;
        }

        self.frame_count = self.frame_count.wrapping_add(1);
        self.player.update_cooldown();

        self.ramp_spawn_interval();
        if let Some(event) = self.spawn_step(rng) {
            events.push(event);
        }

        self.resolve_entities(rng, &mut events);
        events
    }

    /// Restores health and money and clears the field. The frame counter and
    /// spawn interval carry on.
    pub fn reset(&mut self) {
        self.health = self.config.max_health;
        self.money = 0;
        self.projectiles.clear();
        self.enemies.clear();
        self.player.reset_cooldown(0);
    }

    /// Leaves the game-over screen.
    pub fn restart(&mut self) {
        if self.state == GameState::GameOver {
            self.state = GameState::Playing;
            log::info!("Restarted at frame {}", self.frame_count);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            GameState::GameOver => GameState::GameOver,
        };
    }

    pub fn point_at(&mut self, pointer: Vec2) {
        self.pointer = pointer;
        self.aim.point_at(self.player.pos, pointer);
    }

    pub fn move_player(&mut self, direction: Direction) {
        if self.state != GameState::Playing {
            return;
        }
        let max = Vec2::new(self.config.world_width, self.config.world_height);
        self.player
            .step(direction, self.config.player_step, Vec2::ZERO, max);
        self.aim.follow(self.player.pos);
    }

    /// Launches a projectile toward the current pointer.
    pub fn fire(&mut self) -> Option<FrameEvent> {
        if self.state != GameState::Playing || !self.player.can_fire() {
            return None;
        }

        let projectile = self.player.shoot(
            &self.aim,
            self.pointer,
            self.config.projectile_speed,
            self.config.projectile_radius,
            self.config.projectile_damage,
        );
        self.player.reset_cooldown(self.config.fire_cooldown_frames);

        let event = FrameEvent::Fired {
            origin: projectile.pos,
            velocity: projectile.vel,
        };
        self.projectiles.push(projectile);
        Some(event)
    }
}
