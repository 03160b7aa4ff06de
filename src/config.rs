//! Game tuning values.
//!
//! Every gameplay constant lives here so a JSON file can override it. Missing
//! fields fall back to the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "topdown.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub frames_per_second: u32,

    // === Player ===
    pub player_radius: f32,
    pub player_step: f32,
    pub max_health: i32,
    pub aim_length: f32,
    pub aim_width: f32,

    // === Projectiles ===
    pub projectile_radius: f32,
    pub projectile_speed: f32,
    pub projectile_damage: i32,
    /// Frames between shots; 0 fires on every press
    pub fire_cooldown_frames: u64,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_speed: f32,
    pub enemy_health: i32,
    /// Half-width of the box around the player that enemies steer into
    pub enemy_target_jitter: i32,
    pub max_enemies: usize,

    // === Spawning ===
    pub initial_spawn_interval: u64,
    pub min_spawn_interval: u64,
    pub spawn_interval_step: u64,
    /// Frames between spawn interval decrements
    pub spawn_ramp_period: u64,
    /// Half-width of the box around the player that candidates are drawn from
    pub spawn_jitter: i32,
    pub spawn_min_player_distance: f32,

    // === Scoring ===
    pub kill_reward: i64,
    pub kill_heal: i32,
    pub collision_penalty: i64,
    pub collision_damage: i32,
    pub escape_bounty: i64,

    // === HUD ===
    pub health_bar_width: f32,

    // === Runtime ===
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
    pub audio: bool,
    pub volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            frames_per_second: 60,

            player_radius: 20.0,
            player_step: 5.0,
            max_health: 100,
            aim_length: 50.0,
            aim_width: 5.0,

            projectile_radius: 5.0,
            projectile_speed: 5.0,
            projectile_damage: 10,
            fire_cooldown_frames: 0,

            enemy_radius: 20.0,
            enemy_speed: 2.0,
            enemy_health: 25,
            enemy_target_jitter: 50,
            max_enemies: 5,

            initial_spawn_interval: 60,
            min_spawn_interval: 60,
            spawn_interval_step: 5,
            spawn_ramp_period: 600,
            spawn_jitter: 100,
            spawn_min_player_distance: 100.0,

            kill_reward: 10,
            kill_heal: 1,
            collision_penalty: 20,
            collision_damage: 10,
            escape_bounty: 5,

            health_bar_width: 200.0,

            seed: None,
            audio: true,
            volume: 0.05,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).wrap_err("malformed game config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&json).wrap_err_with(|| format!("in config file {}", path.display()))
    }

    /// Loads the explicit path if given, otherwise `topdown.json` when it
    /// exists, otherwise the built-in defaults.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            log::info!("Loading config from {}", path.display());
            return Self::from_file(&path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            log::info!("Loading config from {}", fallback.display());
            return Self::from_file(fallback);
        }

        log::info!("No config file found, using defaults");
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            bail!(
                "world size must be positive, got {}x{}",
                self.world_width,
                self.world_height
            );
        }
        if self.max_health <= 0 {
            bail!("max_health must be positive, got {}", self.max_health);
        }
        if self.initial_spawn_interval == 0 || self.min_spawn_interval == 0 {
            bail!("spawn intervals must be at least one frame");
        }
        if self.spawn_ramp_period == 0 {
            bail!("spawn_ramp_period must be at least one frame");
        }
        if self.frames_per_second == 0 {
            bail!("frames_per_second must be positive");
        }
        if self.player_radius <= 0.0 || self.enemy_radius <= 0.0 || self.projectile_radius <= 0.0
        {
            bail!("entity radii must be positive");
        }
        if self.enemy_target_jitter <= 0 || self.spawn_jitter <= 0 {
            bail!("jitter spans must be positive");
        }
        if self.health_bar_width <= 0.0 {
            bail!("health_bar_width must be positive");
        }
        if self.kill_reward < 0
            || self.escape_bounty < 0
            || self.collision_penalty < 0
            || self.kill_heal < 0
            || self.collision_damage < 0
        {
            bail!("scoring rewards, penalties and damage must not be negative");
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_micros(1_000_000 / u64::from(self.frames_per_second))
    }
}
