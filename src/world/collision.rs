use glam::Vec2;

use super::World;
use super::events::FrameEvent;
use crate::rng::RandomSource;

impl World {
    /// Moves every entity and resolves hits, collisions and escapes.
    ///
    /// Removals are marked during the scans and compacted at the end, so an
    /// entity destroyed early in the frame is skipped by every later check.
    pub(super) fn resolve_entities(
        &mut self,
        rng: &mut dyn RandomSource,
        events: &mut Vec<FrameEvent>,
    ) {
        for projectile in &mut self.projectiles {
            projectile.update();
        }

        let mut projectile_removed = vec![false; self.projectiles.len()];
        let mut enemy_removed = vec![false; self.enemies.len()];

        // Projectiles hitting enemies
        for (p_idx, projectile) in self.projectiles.iter().enumerate() {
            for (e_idx, enemy) in self.enemies.iter().enumerate() {
                if enemy_removed[e_idx] || !enemy.overlaps(projectile.pos, projectile.radius) {
                    continue;
                }

                enemy_removed[e_idx] = true;
                projectile_removed[p_idx] = true;

                self.money = self.money.saturating_add(self.config.kill_reward);
                if self.health < self.config.max_health {
                    self.health = self
                        .health
                        .saturating_add(self.config.kill_heal)
                        .min(self.config.max_health);
                }

                events.push(FrameEvent::EnemyDestroyed {
                    at: enemy.pos,
                    reward: self.config.kill_reward,
                });
                break;
            }
        }

        // Enemies wander toward the player and ram it
        let player_pos = self.player.pos;
        let jitter = self.config.enemy_target_jitter;
        for (e_idx, enemy) in self.enemies.iter_mut().enumerate() {
            if enemy_removed[e_idx] {
                continue;
            }

            let target =
                player_pos + Vec2::new(rng.jitter(jitter) as f32, rng.jitter(jitter) as f32);
            enemy.steer_towards(target, self.config.enemy_speed);
            enemy.update();

            if enemy.overlaps(player_pos, self.player.radius) {
                enemy_removed[e_idx] = true;

                let penalty = self.money.min(self.config.collision_penalty).max(0);
                self.money = self.money.saturating_sub(penalty);
                self.health = self.health.saturating_sub(self.config.collision_damage);

                events.push(FrameEvent::PlayerHit {
                    at: enemy.pos,
                    penalty,
                    damage: self.config.collision_damage,
                });
            }
        }

        // Bounds culling: only the bottom and right edges discard anything
        let (width, height) = (self.config.world_width, self.config.world_height);
        for (e_idx, enemy) in self.enemies.iter().enumerate() {
            if !enemy_removed[e_idx] && enemy.has_escaped(width, height) {
                enemy_removed[e_idx] = true;
                self.money = self.money.saturating_add(self.config.escape_bounty);
                events.push(FrameEvent::EnemyEscaped {
                    at: enemy.pos,
                    bounty: self.config.escape_bounty,
                });
            }
        }
        for (p_idx, projectile) in self.projectiles.iter().enumerate() {
            if projectile.is_out_of_bounds(width, height) {
                projectile_removed[p_idx] = true;
            }
        }

        compact(&mut self.projectiles, &projectile_removed);
        compact(&mut self.enemies, &enemy_removed);
    }
}

/// Drops every item whose flag is set, keeping the survivors in order.
fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !removed[idx];
        idx += 1;
        keep
    });
}
