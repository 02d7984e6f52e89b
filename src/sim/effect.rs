//! Timed slow-pursuer status effect
//!
//! Each activation schedules its own deactivation. Activating again while the
//! effect is already on does not push back the earlier deadline, so the flag
//! drops at the earliest deadline still pending.
// NOTE: a refresh-on-retrigger variant would cancel the earlier handle in
// `activate`; the current behaviour shortens stacked pickups.

use super::timer::Timers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Expire;

/// The slow effect flag plus its pending deactivations
#[derive(Debug, Clone, Default)]
pub struct StatusEffect {
    active: bool,
    expiries: Timers<Expire>,
}

impl StatusEffect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turn the effect on and schedule a deactivation `duration_ms` from now
    pub fn activate(&mut self, now_ms: f64, duration_ms: f64) {
        self.active = true;
        self.expiries.after(now_ms, duration_ms, Expire);
    }

    /// Run deactivations due by `now_ms`. Returns true if the flag went from
    /// on to off.
    pub fn update(&mut self, now_ms: f64) -> bool {
        if self.expiries.poll(now_ms).is_empty() {
            return false;
        }
        let was_active = self.active;
        self.active = false;
        was_active
    }

    /// Number of deactivations still scheduled
    pub fn pending(&self) -> usize {
        self.expiries.len()
    }

    /// Speed multiplier for pursuers: `slow_factor` while active, else 1
    #[inline]
    pub fn speed_multiplier(&self, slow_factor: f32) -> f32 {
        if self.active { slow_factor } else { 1.0 }
    }

    /// Drop the flag and every pending deactivation
    pub fn reset(&mut self) {
        self.active = false;
        self.expiries.clear();
    }
}
