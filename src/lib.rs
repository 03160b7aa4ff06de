// Library exports for testing
pub use app::App;
pub use config::GameConfig;
pub use entities::{AimLine, Direction, Enemy, GameState, Player, Projectile};
pub use hud::Hud;
pub use rng::{RandomSource, ScriptedSource, SeededSource};
pub use world::{FrameEvent, SpawnRejection, World};

pub mod app;
pub mod audio;
pub mod config;
pub mod entities;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod rng;
pub mod world;
