use fnv::FnvHashMap;

/// One-shot visibility flag. Only ever moves from hidden to visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    /// Feed an intersection ratio; returns `true` only on the sample that
    /// flips the latch.
    pub fn observe(&mut self, ratio: f64, threshold: f64) -> bool {
        if self.visible || !(ratio >= threshold) {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    Armed,
    Fired,
    Disposed,
}

/// Subscription-side state of a reveal: fires once, then disengages.
///
/// Disposal is valid in any state and never fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealWatch {
    threshold: f64,
    latch: VisibilityLatch,
    state: WatchState,
}

impl RevealWatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            latch: VisibilityLatch::default(),
            state: WatchState::Armed,
        }
    }

    /// Returns `true` when this sample is the one that fires the watch.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state != WatchState::Armed {
            return false;
        }
        if self.latch.observe(ratio, self.threshold) {
            self.state = WatchState::Fired;
            return true;
        }
        false
    }

    /// Returns `true` if the watch was still armed, i.e. the caller still
    /// holds a live observation that must be released.
    pub fn dispose(&mut self) -> bool {
        let was_armed = self.state == WatchState::Armed;
        if self.state != WatchState::Fired {
            self.state = WatchState::Disposed;
        }
        was_armed
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.latch.is_visible()
    }
}

/// Latches keyed by section id.
#[derive(Debug, Default)]
pub struct VisibilityRegistry {
    latches: FnvHashMap<String, VisibilityLatch>,
}

impl VisibilityRegistry {
    pub fn mark_visible(&mut self, id: &str) -> bool {
        self.latches
            .entry(id.to_string())
            .or_default()
            .observe(1.0, 0.0)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.latches
            .get(id)
            .map(VisibilityLatch::is_visible)
            .unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.latches.values().filter(|l| l.is_visible()).count()
    }
}
