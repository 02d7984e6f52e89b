//! Deterministic timer service
//!
//! Deferred and repeating events measured on a caller-supplied clock
//! (milliseconds). Nothing fires on its own: the owner calls [`Timers::poll`]
//! with the current time and handles the returned events in deadline order.

/// Handle to a scheduled timer, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Pending<E> {
    id: u64,
    due_ms: f64,
    /// `Some` for repeating timers
    period_ms: Option<f64>,
    event: E,
}

/// A queue of one-shot and repeating timers
#[derive(Debug, Clone)]
pub struct Timers<E> {
    pending: Vec<Pending<E>>,
    next_id: u64,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 1,
        }
    }

    fn schedule(&mut self, due_ms: f64, period_ms: Option<f64>, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_ms,
            period_ms,
            event,
        });
        TimerHandle(id)
    }

    /// Fire `event` once, `delay_ms` after `now_ms`
    pub fn after(&mut self, now_ms: f64, delay_ms: f64, event: E) -> TimerHandle {
        self.schedule(now_ms + delay_ms.max(0.0), None, event)
    }

    /// Fire `event` every `period_ms`, first at `now_ms + period_ms`.
    /// Non-positive periods are rejected (`None`).
    pub fn every(&mut self, now_ms: f64, period_ms: f64, event: E) -> Option<TimerHandle> {
        if period_ms <= 0.0 {
            log::warn!("Refusing repeating timer with period {} ms", period_ms);
            return None;
        }
        Some(self.schedule(now_ms + period_ms, Some(period_ms), event))
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != handle.0);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.id == handle.0)
    }

    /// Earliest deadline still pending
    pub fn next_due(&self) -> Option<f64> {
        self.pending.iter().map(|p| p.due_ms).min_by(f64::total_cmp)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<E: Clone> Timers<E> {
    /// Collect every event due at or before `now_ms`, ordered by deadline
    /// (ties broken by scheduling order). One-shot timers are removed;
    /// repeating timers fire once per elapsed period and stay scheduled.
    pub fn poll(&mut self, now_ms: f64) -> Vec<E> {
        let mut fired: Vec<(f64, u64, E)> = Vec::new();

        for p in &mut self.pending {
            match p.period_ms {
                Some(period) => {
                    while p.due_ms <= now_ms {
                        fired.push((p.due_ms, p.id, p.event.clone()));
                        p.due_ms += period;
                    }
                }
                None => {
                    if p.due_ms <= now_ms {
                        fired.push((p.due_ms, p.id, p.event.clone()));
                    }
                }
            }
        }
        self.pending
            .retain(|p| p.period_ms.is_some() || p.due_ms > now_ms);

        fired.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        fired.into_iter().map(|(_, _, event)| event).collect()
    }
}
