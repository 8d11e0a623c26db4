// Host event plumbing shared by the interactive components.
//
// Components never reach for `window` directly: they are handed an
// `EventSource` and a `FrameScheduler`, which the web front-end implements
// over the DOM and tests implement with recording fakes.

use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    Scroll,
    PointerMove,
}

impl EventKind {
    /// DOM event name registered on `window`.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Resize => "resize",
            EventKind::Scroll => "scroll",
            EventKind::PointerMove => "mousemove",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Resize { width: f64, height: f64 },
    Scroll { y: f64 },
    PointerMove { x: f64, y: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

pub type Handler = Box<dyn FnMut(&HostEvent)>;

pub trait EventSource {
    fn listen(&self, kind: EventKind, handler: Handler) -> ListenerId;
    fn unlisten(&self, id: ListenerId);
}

/// Owned registration on an `EventSource`; unlistens when dropped.
pub struct Subscription {
    source: Rc<dyn EventSource>,
    id: Option<ListenerId>,
}

impl Subscription {
    pub fn new(source: &Rc<dyn EventSource>, kind: EventKind, handler: Handler) -> Self {
        let id = source.listen(kind, handler);
        Self {
            source: source.clone(),
            id: Some(id),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            self.source.unlisten(id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub type FrameHandle = i32;

pub trait FrameScheduler {
    /// Ask for one callback on the next frame. `None` when the host refused.
    fn request(&self) -> Option<FrameHandle>;
    fn cancel(&self, handle: FrameHandle);
}

/// A recurring per-frame task with an explicit start/stop lifecycle.
///
/// The task keeps at most one frame request outstanding. `tick` must be
/// called from the frame callback; it reports whether the frame should do
/// work, which is never the case after `stop`.
#[derive(Debug, Default)]
pub struct TickedTask {
    running: bool,
    pending: Option<FrameHandle>,
    ticks: u64,
}

impl TickedTask {
    pub fn start(&mut self, scheduler: &dyn FrameScheduler) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.pending = scheduler.request();
        true
    }

    pub fn tick(&mut self, scheduler: &dyn FrameScheduler) -> bool {
        self.pending = None;
        if !self.running {
            return false;
        }
        self.ticks += 1;
        self.pending = scheduler.request();
        true
    }

    pub fn stop(&mut self, scheduler: &dyn FrameScheduler) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// How the page is leaving when `pagehide` fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    Unload,
    /// Kept in the back/forward cache; listeners survive and resume on restore.
    Cached,
}

impl PageHide {
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Cached
        } else {
            PageHide::Unload
        }
    }

    pub fn tears_down(self) -> bool {
        self == PageHide::Unload
    }
}
