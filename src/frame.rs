use crate::core::timing::{Debounce, Ephemeral};
use crate::core::{EventSource, FrameHandle, FrameScheduler, ParticleBackground, SiteConfig};
use crate::dom;
use crate::notice;
use crate::render::Canvas2d;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` scheduler. The callback slot is filled by
/// `start_loop` and emptied by `release`, which breaks the closure's
/// reference back to the frame context.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn release(&self) {
        self.callback.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&self) -> Option<FrameHandle> {
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(h) => Some(h),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

pub struct FrameContext {
    pub document: web::Document,
    pub background: ParticleBackground,
    pub canvas: Canvas2d,
    pub scheduler: Rc<RafScheduler>,
    pub hero_entrance: Debounce<()>,
    pub spotlight_pointer: Rc<RefCell<Debounce<(f64, f64)>>>,
    pub spotlights: Ephemeral<web::Element>,
    pub notice_hide: Rc<RefCell<Debounce<()>>>,
}

impl FrameContext {
    pub fn new(
        document: web::Document,
        canvas: Canvas2d,
        scheduler: Rc<RafScheduler>,
        config: &SiteConfig,
    ) -> Self {
        let mut hero_entrance = Debounce::new(config.hero_entrance_delay);
        hero_entrance.bump(Instant::now(), ());
        Self {
            document,
            background: ParticleBackground::new(config.field.clone(), None),
            canvas,
            scheduler,
            hero_entrance,
            spotlight_pointer: Rc::new(RefCell::new(Debounce::new(config.spotlight_debounce))),
            spotlights: Ephemeral::new(config.spotlight_activate, config.spotlight_lifetime),
            notice_hide: Rc::new(RefCell::new(Debounce::new(config.notice_lifetime))),
        }
    }

    pub fn frame(&mut self) {
        if !self.background.frame(&*self.scheduler, &mut self.canvas) {
            return;
        }
        let now = Instant::now();
        if self.hero_entrance.poll(now).is_some() {
            if let Some(hero) = self.document.get_element_by_id("hero") {
                dom::set_class(&hero, "loaded", true);
            }
        }
        let spot = self.spotlight_pointer.borrow_mut().poll(now);
        if let Some((x, y)) = spot {
            if let Some(el) = spawn_spotlight(&self.document, x, y) {
                self.spotlights.spawn(now, el);
            }
        }
        let hide_notice = self.notice_hide.borrow_mut().poll(now);
        if hide_notice.is_some() {
            notice::hide(&self.document);
        }
        self.spotlights.step(
            now,
            |el| dom::set_class(el, "active", true),
            |el| el.remove(),
        );
    }

    pub fn teardown(&mut self) {
        self.background.detach(&*self.scheduler);
        self.spotlight_pointer.borrow_mut().cancel();
        self.notice_hide.borrow_mut().cancel();
        for el in self.spotlights.drain() {
            el.remove();
        }
    }
}

fn spawn_spotlight(document: &web::Document, x: f64, y: f64) -> Option<web::Element> {
    let body = document.body()?;
    let el = document.create_element("div").ok()?;
    dom::set_class(&el, "spotlight", true);
    dom::set_style(&el, "left", &format!("{}px", x));
    dom::set_style(&el, "top", &format!("{}px", y));
    body.append_child(&el).ok()?;
    Some(el)
}

pub fn start_loop(
    frame_ctx: Rc<RefCell<FrameContext>>,
    events: &Rc<dyn EventSource>,
    width: f64,
    height: f64,
) {
    let scheduler = frame_ctx.borrow().scheduler.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *scheduler.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    frame_ctx
        .borrow_mut()
        .background
        .attach(events, &*scheduler, width as f32, height as f32);
}
