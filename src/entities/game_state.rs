#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    /// The world has already been reset; waiting for a restart.
    GameOver,
}
