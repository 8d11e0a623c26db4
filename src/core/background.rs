use super::host::{EventKind, EventSource, FrameScheduler, HostEvent, Subscription, TickedTask};
use super::particles::{FieldCanvas, FieldConfig, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;

/// Full-viewport particle field driven by its own frame task.
///
/// Resize events only record the new surface size; the field is re-seeded at
/// the start of the next frame so the particle count never changes while a
/// frame is being advanced or drawn.
pub struct ParticleBackground {
    config: FieldConfig,
    field: ParticleField,
    rng: StdRng,
    task: TickedTask,
    pending_resize: Rc<Cell<Option<(f32, f32)>>>,
    resize_sub: Option<Subscription>,
    needs_surface_sync: bool,
}

impl ParticleBackground {
    pub fn new(config: FieldConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            field: ParticleField::default(),
            rng,
            task: TickedTask::default(),
            pending_resize: Rc::new(Cell::new(None)),
            resize_sub: None,
            needs_surface_sync: false,
        }
    }

    pub fn attach(
        &mut self,
        events: &Rc<dyn EventSource>,
        scheduler: &dyn FrameScheduler,
        width: f32,
        height: f32,
    ) {
        if self.task.is_running() {
            return;
        }
        self.reseed(width, height);
        let pending = self.pending_resize.clone();
        self.resize_sub = Some(Subscription::new(
            events,
            EventKind::Resize,
            Box::new(move |ev: &HostEvent| {
                if let HostEvent::Resize { width, height } = *ev {
                    pending.set(Some((width as f32, height as f32)));
                }
            }),
        ));
        self.task.start(scheduler);
        log::info!(
            "[field] attached {:.0}x{:.0} with {} particles",
            width,
            height,
            self.field.len()
        );
    }

    /// Run one animation frame. Returns `false` when the task is not running
    /// and nothing was touched.
    pub fn frame(&mut self, scheduler: &dyn FrameScheduler, canvas: &mut impl FieldCanvas) -> bool {
        if !self.task.tick(scheduler) {
            return false;
        }
        if let Some((w, h)) = self.pending_resize.take() {
            self.reseed(w, h);
            log::debug!("[field] reseeded {:.0}x{:.0} -> {} particles", w, h, self.field.len());
        }
        if self.needs_surface_sync {
            let (w, h) = self.field.size();
            canvas.resize(w, h);
            self.needs_surface_sync = false;
        }
        self.field.advance();
        self.field.draw(canvas, &self.config);
        true
    }

    pub fn detach(&mut self, scheduler: &dyn FrameScheduler) {
        let was_running = self.task.is_running();
        self.task.stop(scheduler);
        if let Some(mut sub) = self.resize_sub.take() {
            sub.cancel();
        }
        self.pending_resize.set(None);
        if was_running {
            log::info!("[field] detached after {} frames", self.task.ticks());
        }
    }

    pub fn is_attached(&self) -> bool {
        self.task.is_running()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn task(&self) -> &TickedTask {
        &self.task
    }

    fn reseed(&mut self, width: f32, height: f32) {
        self.field = ParticleField::seed(width, height, &self.config, &mut self.rng);
        self.needs_surface_sync = true;
    }
}
