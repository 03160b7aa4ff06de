use glam::Vec2;

use super::projectile::Projectile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub fire_cooldown: u64,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            fire_cooldown: 0,
        }
    }

    /// Steps the player and keeps the centre inside `[min, max]`.
    pub fn step(&mut self, direction: Direction, distance: f32, min: Vec2, max: Vec2) {
        self.pos = (self.pos + direction.unit() * distance).clamp(min, max);
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown == 0
    }

    pub fn reset_cooldown(&mut self, frames: u64) {
        self.fire_cooldown = frames;
    }

    pub fn update_cooldown(&mut self) {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
    }

    /// Fires toward `target` from the aim origin.
    pub fn shoot(
        &self,
        aim: &AimLine,
        target: Vec2,
        speed: f32,
        radius: f32,
        damage: i32,
    ) -> Projectile {
        let velocity = heading(self.pos, target) * speed;
        Projectile::new(aim.origin, velocity, radius, damage)
    }
}

/// Unit vector from `from` toward `to`; a zero offset points along +x.
pub fn heading(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    Vec2::from_angle(delta.y.atan2(delta.x))
}

/// The red aiming ray drawn from the player toward the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct AimLine {
    pub origin: Vec2,
    pub end: Vec2,
    pub length: f32,
    pub width: f32,
}

impl AimLine {
    /// Starts pointing right, like a pointer that has not moved yet.
    pub fn new(player: Vec2, length: f32, width: f32) -> Self {
        let origin = player + Vec2::new(0.0, width / 2.0);
        Self {
            origin,
            end: origin + Vec2::new(length, 0.0),
            length,
            width,
        }
    }

    pub fn follow(&mut self, player: Vec2) {
        self.origin = player + Vec2::new(0.0, self.width / 2.0);
    }

    pub fn point_at(&mut self, player: Vec2, pointer: Vec2) {
        self.end = player + Vec2::new(0.0, self.width / 2.0) + heading(player, pointer) * self.length;
    }
}
