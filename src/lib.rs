#![cfg(target_arch = "wasm32")]
use crate::core::{EventSource, PageHide, SiteConfig, Subscription, VisibilityRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod nav;
mod notice;
mod render;
mod reveal;

/// Everything the page keeps alive. Dropping it removes every listener and
/// observer it registered.
struct App {
    scheduler: Rc<frame::RafScheduler>,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    subscriptions: Vec<Subscription>,
    cards: Vec<events::TiltCard>,
    tabs: Vec<events::TabGroup>,
    reveals: Vec<reveal::SectionReveal>,
    nav: Option<nav::Navigator>,
    contact: Option<events::ContactForm>,
}

impl App {
    fn teardown(self) {
        self.frame_ctx.borrow_mut().teardown();
        self.scheduler.release();
        let revealed = self.reveals.iter().filter(|r| r.is_visible()).count();
        let active = self.nav.as_ref().map(|n| n.active()).unwrap_or("-");
        log::info!(
            "[app] shutting down: {} subscriptions, {} cards, {} tab groups, {}/{} sections revealed, active={}",
            self.subscriptions.len(),
            self.cards.len(),
            self.tabs.len(),
            revealed,
            self.reveals.len(),
            active
        );
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Detach the particle loop and every listener. Safe to call repeatedly.
#[wasm_bindgen]
pub fn shutdown() {
    let app = APP.with(|a| a.borrow_mut().take());
    if let Some(app) = app {
        app.teardown();
    }
}

fn load_config(document: &web::Document) -> SiteConfig {
    let body = document.body();
    SiteConfig::default().with_overrides(|key| {
        body.as_ref()
            .and_then(|b| b.get_attribute(&format!("data-{}", key)))
    })
}

fn wire_pagehide(window: &web::Window) {
    let closure = Closure::wrap(Box::new(|ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map_or(false, |e| e.persisted());
        if PageHide::from_persisted(persisted).tears_down() {
            shutdown();
        } else {
            log::info!("[app] page cached; keeping listeners for restore");
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn init() -> anyhow::Result<()> {
    if APP.with(|a| a.borrow().is_some()) {
        log::warn!("[app] already started; ignoring");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::by_id(&document, "particle-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #particle-canvas"))?;
    let config = load_config(&document);

    let events: Rc<dyn EventSource> = Rc::new(events::WindowEvents::new(window.clone()));
    let scheduler = Rc::new(frame::RafScheduler::new(window.clone()));
    let surface = render::Canvas2d::new(canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        document.clone(),
        surface,
        scheduler.clone(),
        &config,
    )));

    let spotlight = frame_ctx.borrow().spotlight_pointer.clone();
    let notice_hide = frame_ctx.borrow().notice_hide.clone();
    let subscriptions = vec![
        events::wire_hero_parallax(&events, &document),
        events::wire_spotlight(&events, spotlight),
    ];

    let registry = Rc::new(RefCell::new(VisibilityRegistry::default()));
    let app = App {
        scheduler,
        frame_ctx: frame_ctx.clone(),
        subscriptions,
        cards: events::wire_tilt_cards(&document),
        tabs: events::wire_tab_groups(&document),
        reveals: reveal::wire_reveals(&document, config.reveal_threshold, &registry),
        nav: nav::Navigator::wire(&events, &window, &document),
        contact: events::ContactForm::wire(&document, config.contact_endpoint.clone(), notice_hide),
    };
    if app.nav.is_none() {
        log::warn!("[nav] #site-nav or #nav-list missing; navigation disabled");
    }
    if app.contact.is_none() {
        log::warn!("[contact] #contact-form missing; contact relay disabled");
    }

    let (width, height) = dom::viewport_size(&window);
    frame::start_loop(frame_ctx, &events, width, height);
    APP.with(|a| *a.borrow_mut() = Some(app));
    wire_pagehide(&window);
    Ok(())
}
