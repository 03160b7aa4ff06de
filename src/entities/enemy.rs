use glam::Vec2;

use super::player::heading;

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Carried for display and config; a single projectile hit still kills.
    pub health: i32,
}

impl Enemy {
    pub fn new(pos: Vec2, radius: f32, health: i32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            health,
        }
    }

    /// Aims the velocity at `target` with the given speed.
    pub fn steer_towards(&mut self, target: Vec2, speed: f32) {
        self.vel = heading(self.pos, target) * speed;
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    pub fn overlaps(&self, pos: Vec2, radius: f32) -> bool {
        self.pos.distance(pos) < self.radius + radius
    }

    /// Enemies only escape past the bottom or right edge.
    pub fn has_escaped(&self, width: f32, height: f32) -> bool {
        self.pos.y > height || self.pos.x > width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_starts_still() {
        let enemy = Enemy::new(Vec2::new(100.0, 100.0), 20.0, 25);
        assert_eq!(enemy.vel, Vec2::ZERO);
        assert_eq!(enemy.health, 25);
    }

    #[test]
    fn test_steer_and_update_moves_toward_target() {
        let mut enemy = Enemy::new(Vec2::new(100.0, 100.0), 20.0, 25);
        enemy.steer_towards(Vec2::new(100.0, 200.0), 2.0);
        enemy.update();
        assert!((enemy.pos.x - 100.0).abs() < 1e-4);
        assert!((enemy.pos.y - 102.0).abs() < 1e-4);
    }

    #[test]
    fn test_overlap_is_strict() {
        let enemy = Enemy::new(Vec2::new(0.0, 0.0), 20.0, 25);
        assert!(enemy.overlaps(Vec2::new(24.9, 0.0), 5.0));
        assert!(!enemy.overlaps(Vec2::new(25.0, 0.0), 5.0));
    }

    #[test]
    fn test_escape_only_past_bottom_or_right() {
        let left = Enemy::new(Vec2::new(-50.0, 300.0), 20.0, 25);
        assert!(!left.has_escaped(800.0, 600.0));
        let top = Enemy::new(Vec2::new(300.0, -50.0), 20.0, 25);
        assert!(!top.has_escaped(800.0, 600.0));
        let right = Enemy::new(Vec2::new(801.0, 300.0), 20.0, 25);
        assert!(right.has_escaped(800.0, 600.0));
        let bottom = Enemy::new(Vec2::new(300.0, 601.0), 20.0, 25);
        assert!(bottom.has_escaped(800.0, 600.0));
    }
}
