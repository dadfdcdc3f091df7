use std::time::Duration;

/// Temporizadores de un solo disparo que maneja el quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    FeedbackEnd,
    RestartCooldown,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<(Duration, Timer)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, timer: Timer, due: Duration) {
        self.pending.push((due, timer));
    }

    /// Saca los temporizadores vencidos en `now`, en orden de vencimiento.
    pub fn drain_due(&mut self, now: Duration) -> Vec<Timer> {
        let mut due: Vec<(Duration, Timer)> = Vec::new();
        self.pending.retain(|&(at, timer)| {
            if at <= now {
                due.push((at, timer));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, timer)| timer).collect()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|(at, _)| *at).min()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
