//! High score
//!
//! A single best score persisted under `highScore`. Missing or unreadable
//! values count as zero.

use crate::platform::KeyValueStore;

/// Best score seen on this device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    /// Store key
    pub const STORAGE_KEY: &'static str = "highScore";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        let best = store.get_u64(Self::STORAGE_KEY).unwrap_or(0);
        log::info!("High score: {}", best);
        Self { best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score beats the stored best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run. Writes to the store only when the best score
    /// is beaten; returns whether it was.
    pub fn submit(&mut self, score: u64, store: &mut dyn KeyValueStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        store.set_u64(Self::STORAGE_KEY, score);
        log::info!("New high score: {}", score);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_missing_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best(), 0);
    }

    #[test]
    fn test_garbage_is_zero() {
        let mut store = MemoryStore::new();
        store.set(HighScore::STORAGE_KEY, "lots");
        assert_eq!(HighScore::load(&store).best(), 0);
    }

    #[test]
    fn test_submit_only_when_beaten() {
        let mut store = MemoryStore::new();
        store.set_u64(HighScore::STORAGE_KEY, 50);
        let mut hs = HighScore::load(&store);

        assert!(!hs.submit(50, &mut store));
        assert!(!hs.submit(30, &mut store));
        assert_eq!(store.get_u64(HighScore::STORAGE_KEY), Some(50));

        assert!(hs.submit(60, &mut store));
        assert_eq!(hs.best(), 60);
        assert_eq!(store.get_u64(HighScore::STORAGE_KEY), Some(60));
    }

    #[test]
    fn test_zero_never_qualifies() {
        let hs = HighScore::new();
        assert!(!hs.qualifies(0));
        assert!(hs.qualifies(10));
    }
}
