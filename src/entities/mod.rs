mod enemy;
mod game_state;
mod player;
mod projectile;

// Re-export all public types
pub use enemy::Enemy;
pub use game_state::GameState;
pub use player::{AimLine, Direction, Player, heading};
pub use projectile::Projectile;
