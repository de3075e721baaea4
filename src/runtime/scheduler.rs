use crate::form::event::Intent;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Keys for delayed intents. Scheduling against a key associates the timer
/// with the entity it affects; cancelling the key abandons pending timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    NotificationHide,
    NotificationRemove,
}

#[derive(Debug, Clone)]
pub enum TimerCommand {
    EmitNow(Intent),
    EmitAfter {
        key: TimerKey,
        delay: Duration,
        intent: Intent,
    },
    Cancel {
        key: TimerKey,
    },
}

#[derive(Debug, Clone)]
struct Pending {
    due_at: Instant,
    key: TimerKey,
    version: u64,
    intent: Intent,
}

/// Cooperative timer queue. Each key carries a version; cancelling bumps the
/// version so already-queued timers for that key are dropped instead of
/// firing late.
#[derive(Default)]
pub struct Scheduler {
    ready: VecDeque<Intent>,
    pending: Vec<Pending>,
    versions: HashMap<TimerKey, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: TimerCommand, now: Instant) {
        match command {
            TimerCommand::EmitNow(intent) => {
                self.ready.push_back(intent);
            }
            TimerCommand::EmitAfter { key, delay, intent } => {
                let version = *self.versions.entry(key).or_insert(0);
                self.pending.push(Pending {
                    due_at: now + delay,
                    key,
                    version,
                    intent,
                });
            }
            TimerCommand::Cancel { key } => {
                let entry = self.versions.entry(key).or_insert(0);
                *entry = entry.saturating_add(1);
            }
        }
    }

    pub fn drain_ready(&mut self, now: Instant) -> Vec<Intent> {
        let mut idx = 0usize;
        while idx < self.pending.len() {
            if self.pending[idx].due_at <= now {
                let pending = self.pending.swap_remove(idx);
                if self.is_current(&pending) {
                    self.ready.push_back(pending.intent);
                }
            } else {
                idx += 1;
            }
        }

        self.ready.drain(..).collect()
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        let mut next = default_timeout;

        for pending in &self.pending {
            let due_in = pending.due_at.saturating_duration_since(now);
            if due_in < next {
                next = due_in;
            }
        }

        next
    }

    fn is_current(&self, pending: &Pending) -> bool {
        let current = *self.versions.get(&pending.key).unwrap_or(&0);
        current == pending.version
    }
}
