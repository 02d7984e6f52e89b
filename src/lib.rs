//! Berry Chase - an arcade chase game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, pursuit, collisions, difficulty)
//! - `game`: Fixed-rate driver, phase transitions and game-over side effects
//! - `platform`: Collaborator traits (storage, audio, drawing) and their backends
//! - `render`: Per-frame draw calls against a render surface
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Canvas logical size
    pub const CANVAS_WIDTH: f32 = 750.0;
    pub const CANVAS_HEIGHT: f32 = 750.0;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_HZ: f64 = 60.0;
    /// Milliseconds between ticks
    pub const TICK_MS: f64 = 1000.0 / TICK_HZ;
    /// Longest frame the driver will catch up on (prevents spiral of death)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Player spawn
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 30.0;

    /// Entity sizes
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const POWER_UP_SIZE: f32 = 30.0;
    pub const HAZARD_SIZE: f32 = 40.0;
    /// Pursuers are drawn larger than they collide
    pub const PURSUER_VISUAL_SIZE: f32 = 30.0;
    pub const PURSUER_HITBOX_SIZE: f32 = 20.0;

    /// Scoring
    pub const COLLECTIBLE_REWARD: u64 = 10;
    /// Score multiple that raises the difficulty level
    pub const LEVEL_THRESHOLD: u64 = 50;
    /// Chance a consumed collectible drops a power-up
    pub const POWER_UP_CHANCE: f64 = 0.10;

    /// Slow effect
    pub const SLOW_DURATION_MS: f64 = 5000.0;
    pub const SLOW_FACTOR: f32 = 0.5;
}
