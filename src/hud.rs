//! Health bars and labels, derived from the world every frame.

use crate::entities::GameState;
use crate::world::World;

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// Red bar width in world units, within `[0, health_bar_width]`
    pub health_bar_width: f32,
    /// Yellow segment for health above max
    pub overheal_bar_width: f32,
    pub full_bar_width: f32,
    pub health_text: String,
    pub money_text: String,
    pub game_over_visible: bool,
}

impl Hud {
    pub fn project(world: &World) -> Self {
        let max = world.config.max_health as f32;
        let full = world.config.health_bar_width;
        let health = world.health as f32;

        let health_bar_width = (health / max).clamp(0.0, 1.0) * full;
        let overheal_bar_width = ((health - max).max(0.0) / max) * full;

        Self {
            health_bar_width,
            overheal_bar_width,
            full_bar_width: full,
            health_text: format!("{} / {}", world.health.max(0), world.config.max_health),
            money_text: format!("Money: {}", world.money),
            game_over_visible: world.state == GameState::GameOver,
        }
    }

    /// Scales a bar width to whole terminal cells for a bar `cells` wide.
    pub fn cells(&self, width: f32, cells: u16) -> u16 {
        let fraction = (width / self.full_bar_width).max(0.0);
        (fraction * cells as f32).round() as u16
    }
}
