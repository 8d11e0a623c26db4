// Frame-polled timers. The frame loop calls `poll`/`step` with the current
// instant instead of scheduling browser timeouts.

use instant::Instant;
use std::collections::VecDeque;
use std::time::Duration;

/// Fires once `delay` after the most recent `bump`, carrying the last value.
#[derive(Debug)]
pub struct Debounce<T> {
    delay: Duration,
    deadline: Option<Instant>,
    value: Option<T>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            value: None,
        }
    }

    pub fn bump(&mut self, now: Instant, value: T) {
        self.deadline = Some(now + self.delay);
        self.value = Some(value);
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                self.value.take()
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
        self.value = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

struct Timed<T> {
    born: Instant,
    activated: bool,
    item: T,
}

/// Short-lived decorations: activated shortly after spawning, expired after
/// their lifetime. Items are kept in spawn order.
pub struct Ephemeral<T> {
    activate_after: Duration,
    lifetime: Duration,
    items: VecDeque<Timed<T>>,
}

impl<T> Ephemeral<T> {
    pub fn new(activate_after: Duration, lifetime: Duration) -> Self {
        Self {
            activate_after,
            lifetime,
            items: VecDeque::new(),
        }
    }

    pub fn spawn(&mut self, now: Instant, item: T) {
        self.items.push_back(Timed {
            born: now,
            activated: false,
            item,
        });
    }

    pub fn step(&mut self, now: Instant, mut on_activate: impl FnMut(&T), mut on_expire: impl FnMut(T)) {
        while let Some(front) = self.items.front() {
            if now.duration_since(front.born) < self.lifetime {
                break;
            }
            if let Some(t) = self.items.pop_front() {
                on_expire(t.item);
            }
        }
        for t in self.items.iter_mut() {
            if !t.activated && now.duration_since(t.born) >= self.activate_after {
                t.activated = true;
                on_activate(&t.item);
            }
        }
    }

    /// Remove everything without waiting for expiry.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..).map(|t| t.item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
