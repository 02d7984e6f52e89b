//! Music and sound effects
//!
//! Two sinks: looping background music and a one-shot game-over sound. The
//! manager applies volumes and the music toggle; the sinks do the playing.

use crate::platform::AudioSink;
use crate::settings::Settings;

/// Audio manager for the game
pub struct AudioManager {
    music: Box<dyn AudioSink>,
    game_over: Box<dyn AudioSink>,
    music_enabled: bool,
    music_volume: f32,
    sfx_volume: f32,
}

impl AudioManager {
    pub fn new(
        mut music: Box<dyn AudioSink>,
        mut game_over: Box<dyn AudioSink>,
        settings: &Settings,
    ) -> Self {
        let music_volume = settings.music_volume.clamp(0.0, 1.0);
        let sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        music.set_volume(music_volume);
        game_over.set_volume(sfx_volume);
        Self {
            music,
            game_over,
            music_enabled: settings.music_enabled,
            music_volume,
            sfx_volume,
        }
    }

    /// Run started: music on (unless the player switched it off)
    pub fn on_run_started(&mut self) {
        if self.music_enabled {
            self.music.play();
        }
    }

    /// Run ended: stop and rewind the music, play the game-over sound
    pub fn on_game_over(&mut self) {
        self.music.pause();
        self.music.rewind();
        self.game_over.rewind();
        self.game_over.play();
    }

    /// Flip the music between playing and paused. Returns true if it is
    /// now playing.
    pub fn toggle_music(&mut self) -> bool {
        if self.music.is_paused() {
            self.music.play();
            self.music_enabled = true;
        } else {
            self.music.pause();
            self.music_enabled = false;
        }
        self.music_enabled
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        self.music.set_volume(self.music_volume);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
        self.game_over.set_volume(self.sfx_volume);
    }

    pub fn music_playing(&self) -> bool {
        !self.music.is_paused()
    }

    pub fn game_over_playing(&self) -> bool {
        !self.game_over.is_paused()
    }

    /// Current preferences, for saving
    pub fn settings(&self) -> Settings {
        Settings {
            music_enabled: self.music_enabled,
            music_volume: self.music_volume,
            sfx_volume: self.sfx_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SilentSink;

    fn manager(settings: &Settings) -> AudioManager {
        AudioManager::new(
            Box::new(SilentSink::new("music")),
            Box::new(SilentSink::new("game over")),
            settings,
        )
    }

    #[test]
    fn test_run_lifecycle() {
        let mut audio = manager(&Settings::default());
        audio.on_run_started();
        assert!(audio.music_playing());

        audio.on_game_over();
        assert!(!audio.music_playing());
        assert!(audio.game_over_playing());
    }

    #[test]
    fn test_disabled_music_stays_off() {
        let settings = Settings {
            music_enabled: false,
            ..Settings::default()
        };
        let mut audio = manager(&settings);
        audio.on_run_started();
        assert!(!audio.music_playing());
    }

    #[test]
    fn test_toggle() {
        let mut audio = manager(&Settings::default());
        audio.on_run_started();
        assert!(!audio.toggle_music());
        assert!(!audio.music_playing());
        assert!(audio.toggle_music());
        assert!(audio.music_playing());
        assert!(audio.settings().music_enabled);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = manager(&Settings::default());
        audio.set_music_volume(1.7);
        audio.set_sfx_volume(-1.0);
        let s = audio.settings();
        assert_eq!(s.music_volume, 1.0);
        assert_eq!(s.sfx_volume, 0.0);
    }
}
