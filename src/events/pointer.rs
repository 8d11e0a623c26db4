use crate::constants::GLOW_COLOR;
use crate::core::parallax::HeroParallax;
use crate::core::timing::Debounce;
use crate::core::{CardTilt, EventKind, EventSource, HostEvent, Subscription};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type MouseListener = Closure<dyn FnMut(web::MouseEvent)>;

/// Pointer-reactive tilt for one `.tilt-card` element. Listeners are removed
/// when the card is dropped.
pub struct TiltCard {
    el: web::Element,
    state: Rc<RefCell<CardTilt>>,
    listeners: Vec<(&'static str, MouseListener)>,
}

impl TiltCard {
    pub fn wire(el: web::Element) -> Self {
        let state = Rc::new(RefCell::new(CardTilt::default()));
        let mut card = Self {
            el,
            state,
            listeners: Vec::new(),
        };
        card.on("mouseenter", |tilt, _, _| tilt.on_enter());
        card.on("mousemove", |tilt, el, ev| {
            let rect = dom::surface_rect(el);
            tilt.on_move(ev.client_x() as f64, ev.client_y() as f64, &rect);
        });
        card.on("mouseleave", |tilt, _, _| tilt.on_leave());
        apply(&card.el, &card.state.borrow());
        card
    }

    fn on(
        &mut self,
        name: &'static str,
        update: impl Fn(&mut CardTilt, &web::Element, &web::MouseEvent) + 'static,
    ) {
        let el = self.el.clone();
        let state = self.state.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let mut tilt = state.borrow_mut();
            update(&mut tilt, &el, &ev);
            apply(&el, &tilt);
        }) as Box<dyn FnMut(_)>);
        _ = self
            .el
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        self.listeners.push((name, closure));
    }
}

impl Drop for TiltCard {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            _ = self
                .el
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

fn apply(el: &web::Element, tilt: &CardTilt) {
    dom::set_style(el, "transform", &tilt.transform_css());
    dom::set_class(el, "is-hovered", tilt.is_hovered());
    if let Ok(Some(glow)) = el.query_selector(".card-glow") {
        match tilt.glow_css(GLOW_COLOR) {
            Some(bg) => {
                dom::set_style(&glow, "background", &bg);
                dom::set_style(&glow, "display", "block");
            }
            None => dom::set_style(&glow, "display", "none"),
        }
    }
}

pub fn wire_tilt_cards(document: &web::Document) -> Vec<TiltCard> {
    let Some(root) = document.document_element() else {
        return Vec::new();
    };
    let cards: Vec<TiltCard> = dom::query_all(&root, ".tilt-card")
        .into_iter()
        .map(TiltCard::wire)
        .collect();
    log::info!("[tilt] wired {} cards", cards.len());
    cards
}

/// Hero title and background blobs follow the pointer.
pub fn wire_hero_parallax(events: &Rc<dyn EventSource>, document: &web::Document) -> Subscription {
    let doc = document.clone();
    let mut parallax = HeroParallax::default();
    Subscription::new(
        events,
        EventKind::PointerMove,
        Box::new(move |ev: &HostEvent| {
            let HostEvent::PointerMove { x, y } = *ev else {
                return;
            };
            let Some(hero) = doc.get_element_by_id("hero") else {
                return;
            };
            let rect = dom::surface_rect(&hero);
            if !parallax.update(x as f32, y as f32, rect.width as f32, rect.height as f32) {
                return;
            }
            if let Some(title) = doc.get_element_by_id("hero-title") {
                dom::set_style(&title, "transform", &parallax.title_transform());
            }
            let blobs = dom::query_all(&hero, ".hero-blob");
            for (el, transform) in blobs.iter().zip(parallax.blob_transforms().iter()) {
                dom::set_style(el, "transform", transform);
            }
        }),
    )
}

/// Every pointer move re-arms the spotlight debounce polled by the frame loop.
pub fn wire_spotlight(
    events: &Rc<dyn EventSource>,
    debounce: Rc<RefCell<Debounce<(f64, f64)>>>,
) -> Subscription {
    Subscription::new(
        events,
        EventKind::PointerMove,
        Box::new(move |ev: &HostEvent| {
            if let HostEvent::PointerMove { x, y } = *ev {
                debounce.borrow_mut().bump(Instant::now(), (x, y));
            }
        }),
    )
}
