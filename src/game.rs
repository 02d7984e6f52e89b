//! Fixed-rate game driver
//!
//! Owns the [`GameState`] and its collaborators. The host feeds it pointer
//! positions and elapsed wall time; a repeating timer turns that time into
//! simulation ticks. Phase transitions and game-over side effects (audio,
//! high score) happen here, the rules themselves live in [`crate::sim`].

use crate::audio::AudioManager;
use crate::consts::MAX_FRAME_MS;
use crate::highscores::HighScore;
use crate::platform::{AudioSink, KeyValueStore, RenderSurface};
use crate::render;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TimerHandle, Timers, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverEvent {
    Tick,
}

/// Game instance holding all state
pub struct Game {
    /// Simulation state (read it for HUD and rendering)
    pub state: GameState,
    store: Box<dyn KeyValueStore>,
    audio: AudioManager,
    high_score: HighScore,
    timers: Timers<DriverEvent>,
    tick_timer: Option<TimerHandle>,
    /// Wall clock accumulated from `advance` (ms)
    now_ms: f64,
}

impl Game {
    /// Build an idle game. Settings and the high score are read from `store`.
    pub fn new(
        seed: u64,
        tuning: Tuning,
        store: Box<dyn KeyValueStore>,
        music: Box<dyn AudioSink>,
        game_over_sound: Box<dyn AudioSink>,
    ) -> Self {
        let settings = Settings::load(&*store);
        let high_score = HighScore::load(&*store);
        Self {
            state: GameState::new(seed, tuning),
            store,
            audio: AudioManager::new(music, game_over_sound, &settings),
            high_score,
            timers: Timers::new(),
            tick_timer: None,
            now_ms: 0.0,
        }
    }

    /// Begin a run from Idle or GameOver. Ignored while a run is in progress.
    pub fn start(&mut self) -> bool {
        if self.state.phase == GamePhase::Running {
            log::warn!("start() ignored: a run is already in progress");
            return false;
        }

        self.state.begin_run();
        if let Some(handle) = self.tick_timer.take() {
            self.timers.cancel(handle);
        }
        self.tick_timer = self
            .timers
            .every(self.now_ms, self.state.tuning.tick_ms, DriverEvent::Tick);
        self.audio.on_run_started();

        log::info!(
            "Run started (seed {}, high score {})",
            self.state.seed,
            self.high_score.best()
        );
        true
    }

    /// Start again after a game over. Ignored in any other phase.
    pub fn restart(&mut self) -> bool {
        if self.state.phase != GamePhase::GameOver {
            log::warn!("restart() ignored in phase {:?}", self.state.phase);
            return false;
        }
        self.start()
    }

    /// Latest canvas-relative pointer position
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.state.pointer_moved(x, y);
    }

    /// Let `elapsed_ms` of wall time pass, running every tick that falls due.
    /// Returns the game events those ticks produced.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<GameEvent> {
        let elapsed_ms = elapsed_ms.clamp(0.0, MAX_FRAME_MS);
        self.now_ms += elapsed_ms;

        let mut events = Vec::new();
        for due in self.timers.poll(self.now_ms) {
            match due {
                DriverEvent::Tick => {
                    if !self.state.is_running() {
                        continue;
                    }
                    tick(&mut self.state);
                    for event in self.state.drain_events() {
                        self.handle_event(event);
                        events.push(event);
                    }
                }
            }
        }
        events
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameOver { score, .. } => self.end_run(score),
            GameEvent::LevelUp { .. }
            | GameEvent::CollectibleEaten { .. }
            | GameEvent::PowerUpSpawned
            | GameEvent::SlowStarted
            | GameEvent::SlowEnded => {}
        }
    }

    /// Stop ticking, play the game-over sound and record the score
    fn end_run(&mut self, score: u64) {
        if let Some(handle) = self.tick_timer.take() {
            self.timers.cancel(handle);
        }
        self.audio.on_game_over();
        self.high_score.submit(score, &mut *self.store);
    }

    /// Draw the current frame
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        render::draw_frame(&self.state, surface);
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    /// Whether the fixed-rate tick timer is scheduled
    pub fn is_ticking(&self) -> bool {
        self.tick_timer
            .map(|h| self.timers.is_pending(h))
            .unwrap_or(false)
    }

    /// Music toggle button. Returns true if music is now playing.
    pub fn toggle_music(&mut self) -> bool {
        let playing = self.audio.toggle_music();
        self.audio.settings().save(&mut *self.store);
        playing
    }

    /// Volume slider (0.0 - 1.0)
    pub fn set_music_volume(&mut self, volume: f32) {
        self.audio.set_music_volume(volume);
        self.audio.settings().save(&mut *self.store);
    }

    pub fn music_playing(&self) -> bool {
        self.audio.music_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_MS;
    use crate::platform::{MemoryStore, RecordingSurface, SilentSink};
    use crate::sim::state::{Collectible, Hazard};
    use glam::Vec2;

    fn game_with_store(store: MemoryStore) -> Game {
        Game::new(
            2024,
            Tuning::default(),
            Box::new(store),
            Box::new(SilentSink::new("music")),
            Box::new(SilentSink::new("game over")),
        )
    }

    fn game() -> Game {
        game_with_store(MemoryStore::new())
    }

    /// Clear threats and move the pointer so nothing can end the run
    fn make_safe(game: &mut Game) {
        game.state.pursuers.clear();
        game.state.hazards.clear();
        game.pointer_moved(-1000.0, -1000.0);
    }

    #[test]
    fn test_idle_until_started() {
        let mut g = game();
        assert_eq!(g.phase(), GamePhase::Idle);
        assert!(!g.is_ticking());
        g.advance(100.0);
        assert_eq!(g.state.time_ticks, 0);
    }

    #[test]
    fn test_start_begins_ticking_at_fixed_rate() {
        let mut g = game();
        assert!(g.start());
        assert_eq!(g.phase(), GamePhase::Running);
        assert!(g.is_ticking());
        assert!(g.music_playing());
        make_safe(&mut g);

        g.advance(TICK_MS * 3.5);
        assert_eq!(g.state.time_ticks, 3);
        g.advance(TICK_MS);
        assert_eq!(g.state.time_ticks, 4);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut g = game();
        g.start();
        make_safe(&mut g);

        g.advance(10_000.0);
        // At most 100 ms worth of ticks at 60 Hz
        assert!((5..=6).contains(&g.state.time_ticks));
    }

    #[test]
    fn test_start_and_restart_guards() {
        let mut g = game();
        assert!(!g.restart());
        assert!(g.start());
        assert!(!g.start());
        assert!(!g.restart());
    }

    #[test]
    fn test_restart_fully_resets() {
        let mut g = game();
        g.start();
        g.state.score = 70;
        g.state.level = 2;
        g.state.spawn_hazard();
        g.state.spawn_power_up();
        g.state.hazards.push(Hazard {
            pos: g.state.player.pos,
            size: 40.0,
        });
        g.advance(TICK_MS);
        assert_eq!(g.phase(), GamePhase::GameOver);

        assert!(g.restart());
        assert_eq!(g.phase(), GamePhase::Running);
        assert_eq!(g.score(), 0);
        assert_eq!(g.level(), 1);
        assert_eq!(g.state.collectibles.len(), 1);
        assert_eq!(g.state.pursuers.len(), 1);
        assert!(g.state.power_ups.is_empty());
        assert!(g.state.hazards.is_empty());
        assert!(g.is_ticking());
    }

    /// Score 40 -> eat -> level 2 brings a hazard -> walk into it
    fn die_on_level_two_hazard(g: &mut Game) {
        g.start();
        g.state.tuning.power_up_chance = 0.0;
        g.state.pursuers.clear();
        g.state.collectibles.clear();
        g.state.score = 40;
        let at = g.state.player.pos;
        g.state.collectibles.push(Collectible { pos: at, size: 30.0 });

        g.advance(TICK_MS);
        assert_eq!(g.score(), 50);
        assert_eq!(g.level(), 2);
        assert_eq!(g.state.hazards.len(), 1);
        assert_eq!(g.phase(), GamePhase::Running);

        let hazard = g.state.hazards.as_slice()[0].bounds().center();
        g.state.collectibles.clear();
        g.pointer_moved(hazard.x, hazard.y);
        let events = g.advance(TICK_MS);

        assert_eq!(g.phase(), GamePhase::GameOver);
        assert!(!g.is_ticking());
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { score: 50, .. }))
        );
        assert!(!g.music_playing());
    }

    #[test]
    fn test_game_over_sets_new_high_score() {
        let mut store = MemoryStore::new();
        store.set_u64(HighScore::STORAGE_KEY, 30);
        let mut g = game_with_store(store);

        die_on_level_two_hazard(&mut g);
        assert_eq!(g.high_score(), 50);
        assert_eq!(g.store.get_u64(HighScore::STORAGE_KEY), Some(50));
    }

    #[test]
    fn test_game_over_keeps_better_high_score() {
        let mut store = MemoryStore::new();
        store.set_u64(HighScore::STORAGE_KEY, 100);
        let mut g = game_with_store(store);

        die_on_level_two_hazard(&mut g);
        assert_eq!(g.high_score(), 100);
        assert_eq!(g.store.get_u64(HighScore::STORAGE_KEY), Some(100));
    }

    #[test]
    fn test_no_ticks_after_game_over() {
        let mut g = game();
        g.start();
        g.state.hazards.push(Hazard {
            pos: g.state.player.pos,
            size: 40.0,
        });
        g.advance(TICK_MS * 3.0);
        assert_eq!(g.phase(), GamePhase::GameOver);
        assert_eq!(g.state.time_ticks, 1);

        let pursuers: Vec<Vec2> = g.state.pursuers.iter().map(|p| p.pos).collect();
        g.advance(MAX_FRAME_MS);
        let after: Vec<Vec2> = g.state.pursuers.iter().map(|p| p.pos).collect();
        assert_eq!(pursuers, after);
    }

    #[test]
    fn test_music_preferences_persist() {
        let mut g = game();
        g.start();
        assert!(!g.toggle_music());
        g.set_music_volume(0.3);

        let saved = Settings::load(&*g.store);
        assert!(!saved.music_enabled);
        assert_eq!(saved.music_volume, 0.3);

        // Music stays off on the next run
        g.state.hazards.push(Hazard {
            pos: g.state.player.pos,
            size: 40.0,
        });
        g.advance(TICK_MS);
        g.restart();
        assert!(!g.music_playing());
    }

    #[test]
    fn test_render_after_start() {
        let mut g = game();
        let mut surface = RecordingSurface::default();
        g.render(&mut surface);
        assert!(surface.calls.is_empty());

        g.start();
        g.render(&mut surface);
        // player + collectible + pursuer
        assert_eq!(surface.calls.len(), 3);
    }
}
