/// Integration tests for game logic
///
/// These tests drive whole ticks of the world with scripted randomness and
/// check scoring, spawning and the game-over reset end to end.
use glam::Vec2;
use proptest::prelude::*;
use topdown_shooter::{
    Direction, Enemy, FrameEvent, GameConfig, GameState, Hud, Projectile, ScriptedSource,
    SpawnRejection, World,
};

fn world() -> World {
    World::new(GameConfig::default())
}

/// Runs ticks until the frame counter reaches `frame`, including the tick for
/// that frame.
fn tick_to(world: &mut World, frame: u64, rng: &mut ScriptedSource) -> Vec<FrameEvent> {
    let mut events = Vec::new();
    while world.frame_count < frame {
        events.extend(world.tick(rng));
    }
    events
}

#[test]
fn test_blocked_spawn_leaves_enemies_unchanged() {
    let mut world = world();
    // Existing enemy sits right on the candidate (300, 200)
    world.enemies.push(Enemy::new(Vec2::new(300.0, 200.0), 20.0, 25));
    world.frame_count = 59;

    // Spawn draws (-100, -100); the existing enemy then steers with (0, 0)
    let mut rng = ScriptedSource::new([-100, -100, 0, 0]);
    let events = world.tick(&mut rng);

    assert_eq!(world.enemies.len(), 1);
    assert!(events.iter().any(|event| matches!(
        event,
        FrameEvent::SpawnRejected {
            reason: SpawnRejection::Crowded,
            ..
        }
    )));
}

#[test]
fn test_interval_aligned_frame_spawns() {
    let mut world = world();
    let mut rng = ScriptedSource::new([-100, -100]);
    let events = tick_to(&mut world, 60, &mut rng);

    assert_eq!(world.enemies.len(), 1);
    assert!(
        events
            .iter()
            .any(|event| matches!(event, FrameEvent::EnemySpawned { .. }))
    );
}

#[test]
fn test_enemy_cap_holds_over_long_run() {
    let config = GameConfig {
        seed: Some(3),
        ..GameConfig::default()
    };
    let mut world = World::new(config);
    let mut rng = topdown_shooter::SeededSource::new(3);
    for _ in 0..3_000 {
        world.tick(&mut rng);
        assert!(world.enemies.len() <= 5);
        if world.state == GameState::GameOver {
            world.restart();
        }
    }
}

#[test]
fn test_overlapping_pair_resolves_once() {
    let mut world = world();
    world.enemies.push(Enemy::new(Vec2::new(600.0, 100.0), 20.0, 25));
    world.projectiles.push(Projectile::new(
        Vec2::new(610.0, 100.0),
        Vec2::ZERO,
        5.0,
        10,
    ));

    let events = world.tick(&mut ScriptedSource::default());

    let kills = events
        .iter()
        .filter(|event| matches!(event, FrameEvent::EnemyDestroyed { .. }))
        .count();
    assert_eq!(kills, 1);
    assert!(world.enemies.is_empty());
    assert!(world.projectiles.is_empty());
    assert_eq!(world.money, 10);
}

#[test]
fn test_dead_tick_resets_world() {
    let mut world = world();
    world.health = 0;
    world.money = 55;
    world.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), 20.0, 25));
    world.projectiles.push(Projectile::new(
        Vec2::new(200.0, 100.0),
        Vec2::new(5.0, 0.0),
        5.0,
        10,
    ));

    world.tick(&mut ScriptedSource::default());

    assert_eq!(world.health, world.config.max_health);
    assert_eq!(world.money, 0);
    assert!(world.projectiles.is_empty());
    assert!(world.enemies.is_empty());
    assert_eq!(world.state, GameState::GameOver);
    assert!(Hud::project(&world).game_over_visible);
}

#[test]
fn test_rammed_to_death_then_reset_on_next_tick() {
    let mut world = world();
    world.health = 10;
    world.money = 12;
    world.enemies.push(Enemy::new(Vec2::new(430.0, 300.0), 20.0, 25));

    world.tick(&mut ScriptedSource::default());
    assert_eq!(world.health, 0);
    assert_eq!(world.money, 0);
    assert_eq!(Hud::project(&world).health_text, "0 / 100");
    assert_eq!(world.state, GameState::Playing);

    let events = world.tick(&mut ScriptedSource::default());
    assert!(matches!(events.as_slice(), [FrameEvent::GameOver { .. }]));
    assert_eq!(world.health, 100);
}

#[test]
fn test_shooting_approaching_enemy_scenario() {
    let mut world = world();
    assert_eq!(world.player.pos, Vec2::new(400.0, 300.0));

    let enemy_pos = Vec2::new(550.0, 300.0);
    world.enemies.push(Enemy::new(enemy_pos, 20.0, 25));
    world.point_at(enemy_pos);
    assert!(world.fire().is_some());

    // Zero jitter: the enemy walks straight at the player
    let mut rng = ScriptedSource::default();
    for _ in 0..40 {
        world.tick(&mut rng);
        if world.enemies.is_empty() {
            break;
        }
    }

    assert!(world.enemies.is_empty());
    assert!(world.projectiles.is_empty());
    assert_eq!(world.money, 10);
    assert_eq!(world.health, world.config.max_health);
    assert!(world.frame_count < 60);
}

#[test]
fn test_shot_fired_left_of_world_still_hits() {
    let mut world = world();
    for _ in 0..80 {
        world.move_player(Direction::Left);
    }
    assert_eq!(world.player.pos, Vec2::new(0.0, 300.0));

    // Waiting beyond the left edge, where escapes are never counted
    world.enemies.push(Enemy::new(Vec2::new(-200.0, 302.5), 20.0, 25));
    world.point_at(Vec2::new(-300.0, 300.0));
    assert!(world.fire().is_some());

    let mut rng = ScriptedSource::default();
    for _ in 0..50 {
        world.tick(&mut rng);
        if world.enemies.is_empty() {
            break;
        }
    }

    assert!(world.enemies.is_empty());
    assert!(world.projectiles.is_empty());
    assert_eq!(world.money, 10);
    assert_eq!(world.health, world.config.max_health);
}

#[test]
fn test_spawn_exactly_at_min_distance_rejected() {
    let mut world = world();
    world.frame_count = 59;

    let mut rng = ScriptedSource::new([0, -100]);
    let events = world.tick(&mut rng);

    assert!(world.enemies.is_empty());
    assert!(events.contains(&FrameEvent::SpawnRejected {
        at: Vec2::new(400.0, 200.0),
        reason: SpawnRejection::TooCloseToPlayer,
    }));
}

#[test]
fn test_escaping_enemy_pays_bounty_once() {
    let mut world = world();
    world.enemies.push(Enemy::new(Vec2::new(400.0, 640.0), 20.0, 25));
    world.tick(&mut ScriptedSource::default());
    world.tick(&mut ScriptedSource::default());
    assert!(world.enemies.is_empty());
    assert_eq!(world.money, 5);
}

proptest! {
    #[test]
    fn test_collision_penalty_never_overdraws(money in 0i64..200) {
        let mut world = world();
        world.money = money;
        world.enemies.push(Enemy::new(Vec2::new(430.0, 300.0), 20.0, 25));

        world.tick(&mut ScriptedSource::default());

        let expected = if money >= 20 { money - 20 } else { 0 };
        prop_assert_eq!(world.money, expected);
        prop_assert_eq!(world.health, 90);
    }

    #[test]
    fn test_money_never_negative_under_random_play(seed in any::<u64>()) {
        let mut world = world();
        let mut rng = topdown_shooter::SeededSource::new(seed);
        for frame in 0..600u32 {
            if frame % 7 == 0 {
                world.point_at(Vec2::new((frame % 800) as f32, 100.0));
                world.fire();
            }
            world.tick(&mut rng);
            prop_assert!(world.money >= 0);
            let hud = Hud::project(&world);
            prop_assert!(hud.health_bar_width >= 0.0);
        }
    }

    #[test]
    fn test_hit_anywhere_inside_radius_scores(
        dx in -24.0f32..24.0,
        dy in -24.0f32..24.0,
    ) {
        prop_assume!((dx * dx + dy * dy).sqrt() < 24.5);
        let mut world = world();
        let enemy_pos = Vec2::new(150.0, 150.0);
        world.enemies.push(Enemy::new(enemy_pos, 20.0, 25));
        world.projectiles.push(Projectile::new(
            enemy_pos + Vec2::new(dx, dy),
            Vec2::ZERO,
            5.0,
            10,
        ));

        world.tick(&mut ScriptedSource::default());

        prop_assert!(world.enemies.is_empty());
        prop_assert!(world.projectiles.is_empty());
        prop_assert_eq!(world.money, 10);
    }
}
