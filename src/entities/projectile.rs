use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub damage: i32,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, damage: i32) -> Self {
        Self {
            pos,
            vel,
            radius,
            damage,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// True once the centre is past the right or bottom edge.
    ///
    /// Shots heading left or up stay live so they can still reach enemies
    /// waiting beyond those edges.
    pub fn is_out_of_bounds(&self, width: f32, height: f32) -> bool {
        self.pos.x > width || self.pos.y > height
    }
}
