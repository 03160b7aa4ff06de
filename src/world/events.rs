use glam::Vec2;

/// Why a spawn attempt placed nothing this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnRejection {
    AtCapacity,
    TooCloseToPlayer,
    /// Overlaps an enemy that is already on the field
    Crowded,
}

/// Something that happened during a tick or an input action.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    Fired { origin: Vec2, velocity: Vec2 },
    EnemySpawned { at: Vec2 },
    SpawnRejected { at: Vec2, reason: SpawnRejection },
    EnemyDestroyed { at: Vec2, reward: i64 },
    PlayerHit { at: Vec2, penalty: i64, damage: i32 },
    EnemyEscaped { at: Vec2, bounty: i64 },
    GameOver { final_money: i64, frame: u64 },
}
