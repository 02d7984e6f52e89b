//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; the driver owns exactly
//! one and nothing else holds game data.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effect::StatusEffect;
use super::geometry::Rect;
use super::pool::Pool;
use super::spawn;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start, nothing ticks
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; ticking halted until restart
    GameOver,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Pursuer,
    Hazard,
}

/// Things that happened during a tick, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A collectible was eaten; `score` is the total afterwards
    CollectibleEaten { score: u64 },
    PowerUpSpawned,
    SlowStarted,
    SlowEnded,
    LevelUp { level: u32 },
    GameOver { score: u64, cause: DeathCause },
}

/// The player-controlled avatar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
}

impl Player {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    /// Center the avatar on a canvas-relative pointer position.
    /// Off-canvas positions are taken as-is.
    pub fn follow_pointer(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x - self.size / 2.0, y - self.size / 2.0);
    }
}

/// Item that scores and respawns when eaten
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: f32,
}

/// Item that triggers the slow effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: f32,
}

/// Static obstacle; touching it ends the run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub size: f32,
}

/// Enemy that walks toward the player every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pursuer {
    pub pos: Vec2,
    /// Drawn size; collisions use the tuning's hit-box size instead
    pub size: f32,
    /// Pixels per tick, fixed at spawn
    pub speed: f32,
}

impl Collectible {
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

impl PowerUp {
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

impl Hazard {
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

impl Pursuer {
    pub fn hitbox(&self, hitbox_size: f32) -> Rect {
        Rect::square(self.pos, hitbox_size)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Balance table for this run
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation clock (ms since the run started)
    pub clock_ms: f64,
    /// Ticks since the run started
    pub time_ticks: u64,
    pub player: Player,
    pub collectibles: Pool<Collectible>,
    pub power_ups: Pool<PowerUp>,
    pub pursuers: Pool<Pursuer>,
    pub hazards: Pool<Hazard>,
    pub score: u64,
    /// Difficulty level, starts at 1
    pub level: u32,
    /// Slow-pursuer status effect
    pub slow: StatusEffect,
    /// Events since the driver last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle game with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(
            Vec2::new(tuning.player_start_x, tuning.player_start_y),
            tuning.player_size,
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Idle,
            clock_ms: 0.0,
            time_ticks: 0,
            player,
            collectibles: Pool::new(),
            power_ups: Pool::new(),
            pursuers: Pool::new(),
            hazards: Pool::new(),
            score: 0,
            level: 1,
            slow: StatusEffect::new(),
            events: Vec::new(),
        }
    }

    /// Reset everything a run owns and enter `Running`.
    ///
    /// The RNG keeps its stream so consecutive runs differ.
    pub fn begin_run(&mut self) {
        self.player = Player::new(
            Vec2::new(self.tuning.player_start_x, self.tuning.player_start_y),
            self.tuning.player_size,
        );
        self.collectibles.clear();
        self.power_ups.clear();
        self.pursuers.clear();
        self.hazards.clear();
        self.score = 0;
        self.level = 1;
        self.clock_ms = 0.0;
        self.time_ticks = 0;
        self.slow.reset();
        self.events.clear();

        self.spawn_collectible();
        self.spawn_pursuer();

        self.phase = GamePhase::Running;
    }

    /// Add a collectible at a random in-bounds position
    pub fn spawn_collectible(&mut self) -> Collectible {
        let c = spawn::collectible(&mut self.rng, &self.tuning);
        self.collectibles.push(c);
        c
    }

    /// Add a power-up at a random in-bounds position
    pub fn spawn_power_up(&mut self) -> PowerUp {
        let p = spawn::power_up(&mut self.rng, &self.tuning);
        self.power_ups.push(p);
        p
    }

    /// Add a hazard at a random in-bounds position
    pub fn spawn_hazard(&mut self) -> Hazard {
        let h = spawn::hazard(&mut self.rng, &self.tuning);
        self.hazards.push(h);
        h
    }

    /// Add a pursuer on a random canvas edge, moving at the current level's speed
    pub fn spawn_pursuer(&mut self) -> Pursuer {
        let p = spawn::pursuer(&mut self.rng, &self.tuning, self.level);
        self.pursuers.push(p);
        p
    }

    /// Roll the power-up drop chance
    pub fn roll_power_up(&mut self) -> bool {
        spawn::roll(&mut self.rng, self.tuning.power_up_chance)
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pointer moved (input source)
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.player.follow_pointer(x, y);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
