//! Platform abstraction layer
//!
//! The simulation talks to the outside world through three small traits:
//! - [`KeyValueStore`]: persisted key-value storage (high score, settings)
//! - [`AudioSink`]: a single playable sound or music track
//! - [`RenderSurface`]: fire-and-forget sprite drawing
//!
//! Backends: in-memory and silent ones here, a JSON file store for native
//! builds, and LocalStorage / `<audio>` / canvas 2D for the browser.

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Persistent string storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);

    /// Read an unsigned integer. Missing or unparsable values are `None`.
    fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    fn set_u64(&mut self, key: &str, value: u64) {
        self.set(key, &value.to_string());
    }
}

/// A sound that can be started, paused and rewound
pub trait AudioSink {
    fn play(&mut self);
    fn pause(&mut self);
    /// Volume in 0.0 - 1.0
    fn set_volume(&mut self, volume: f32);
    /// Seek back to the start
    fn rewind(&mut self);
    fn is_paused(&self) -> bool;
}

/// What to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Collectible,
    PowerUp,
    Pursuer,
    Hazard,
}

impl SpriteKind {
    /// Image asset for the browser build
    pub fn asset(&self) -> &'static str {
        match self {
            SpriteKind::Player => "zlato.png",
            SpriteKind::Collectible => "body.png",
            SpriteKind::PowerUp => "slowtime.png",
            SpriteKind::Pursuer => "severa.png",
            SpriteKind::Hazard => "zed.png",
        }
    }
}

/// A target for one frame of draw calls
pub trait RenderSurface {
    /// Wipe the previous frame
    fn clear(&mut self);
    fn draw(&mut self, sprite: SpriteKind, x: f32, y: f32, w: f32, h: f32);
}

/// Volatile store, used by tests and as a fallback when nothing else works
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Audio sink that only tracks its own state (native builds have no audio)
#[derive(Debug, Clone)]
pub struct SilentSink {
    name: &'static str,
    paused: bool,
    volume: f32,
    /// Times `play` was called
    pub plays: u32,
}

impl SilentSink {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            paused: true,
            volume: 1.0,
            plays: 0,
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl AudioSink for SilentSink {
    fn play(&mut self) {
        self.paused = false;
        self.plays += 1;
        log::debug!("[audio] play {}", self.name);
    }

    fn pause(&mut self) {
        self.paused = true;
        log::debug!("[audio] pause {}", self.name);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn rewind(&mut self) {}

    fn is_paused(&self) -> bool {
        self.paused
    }
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub sprite: SpriteKind,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Surface that keeps the last frame's draw calls (headless runs and tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    /// Frames cleared so far
    pub frames: u64,
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.clear();
        self.frames += 1;
    }

    fn draw(&mut self, sprite: SpriteKind, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall { sprite, x, y, w, h });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u64_helpers() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_u64("highScore"), None);

        store.set_u64("highScore", 120);
        assert_eq!(store.get_u64("highScore"), Some(120));

        store.set("highScore", "not a number");
        assert_eq!(store.get_u64("highScore"), None);

        store.set("highScore", " 40 ");
        assert_eq!(store.get_u64("highScore"), Some(40));
    }

    #[test]
    fn test_silent_sink_tracks_state() {
        let mut sink = SilentSink::new("music");
        assert!(sink.is_paused());
        sink.play();
        assert!(!sink.is_paused());
        sink.pause();
        assert!(sink.is_paused());
        assert_eq!(sink.plays, 1);
    }
}
