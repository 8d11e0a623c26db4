use crate::core::{EventKind, EventSource, Handler, HostEvent, ListenerId};
use crate::dom;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type DomListener = Closure<dyn FnMut(web::Event)>;

/// `EventSource` over `window` listeners. Every `listen` is matched by a
/// `removeEventListener` on `unlisten` or when the source is dropped.
pub struct WindowEvents {
    window: web::Window,
    next_id: Cell<u32>,
    listeners: RefCell<FnvHashMap<ListenerId, (EventKind, DomListener)>>,
}

impl WindowEvents {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            next_id: Cell::new(1),
            listeners: RefCell::new(FnvHashMap::default()),
        }
    }
}

fn translate(kind: EventKind, window: &web::Window, ev: &web::Event) -> Option<HostEvent> {
    match kind {
        EventKind::Resize => {
            let (width, height) = dom::viewport_size(window);
            Some(HostEvent::Resize { width, height })
        }
        EventKind::Scroll => window.scroll_y().ok().map(|y| HostEvent::Scroll { y }),
        EventKind::PointerMove => ev.dyn_ref::<web::MouseEvent>().map(|m| HostEvent::PointerMove {
            x: m.client_x() as f64,
            y: m.client_y() as f64,
        }),
    }
}

impl EventSource for WindowEvents {
    fn listen(&self, kind: EventKind, mut handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Some(host_ev) = translate(kind, &window, &ev) {
                handler(&host_ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        if let Err(e) = self
            .window
            .add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] could not listen for {}: {:?}", kind.dom_name(), e);
        }
        self.listeners.borrow_mut().insert(id, (kind, closure));
        id
    }

    fn unlisten(&self, id: ListenerId) {
        let removed = self.listeners.borrow_mut().remove(&id);
        if let Some((kind, closure)) = removed {
            _ = self
                .window
                .remove_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for WindowEvents {
    fn drop(&mut self) {
        for (_, (kind, closure)) in self.listeners.get_mut().drain() {
            _ = self
                .window
                .remove_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref());
        }
    }
}
