use crate::core::showcase::skill_bar_width;
use crate::core::{RevealWatch, VisibilityRegistry};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Sections that animate in on first sight.
pub const REVEAL_SECTIONS: [&str; 5] = ["about", "education", "skills", "projects", "contact"];

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// One-shot entrance trigger for a section. Dropping it before or after it
/// fires disconnects the observer.
pub struct SectionReveal {
    observer: web::IntersectionObserver,
    watch: Rc<RefCell<RevealWatch>>,
    _callback: ObserverCallback,
}

impl SectionReveal {
    pub fn observe(
        el: web::Element,
        threshold: f64,
        registry: Rc<RefCell<VisibilityRegistry>>,
    ) -> Option<Self> {
        let watch = Rc::new(RefCell::new(RevealWatch::new(threshold)));
        let watch_cb = watch.clone();
        let target = el.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if watch_cb.borrow_mut().observe(entry.intersection_ratio()) {
                        observer.disconnect();
                        reveal(&target, &registry);
                        break;
                    }
                }
            },
        ) as Box<dyn FnMut(_, _)>);

        let init = web::IntersectionObserverInit::new();
        init.set_root_margin("0px");
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(o) => o,
                Err(e) => {
                    log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
                    return None;
                }
            };
        observer.observe(&el);
        Some(Self {
            observer,
            watch,
            _callback: callback,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.watch.borrow().is_visible()
    }
}

impl Drop for SectionReveal {
    fn drop(&mut self) {
        self.watch.borrow_mut().dispose();
        self.observer.disconnect();
    }
}

fn reveal(section: &web::Element, registry: &Rc<RefCell<VisibilityRegistry>>) {
    if registry.borrow().is_visible(&section.id()) {
        return;
    }
    dom::set_class(section, "is-visible", true);
    for bar in dom::query_all(section, ".skill-bar[data-level]") {
        let level = bar
            .get_attribute("data-level")
            .and_then(|v| v.trim().parse::<u8>().ok())
            .unwrap_or(0);
        dom::set_style(&bar, "width", &skill_bar_width(level, true));
    }
    registry.borrow_mut().mark_visible(&section.id());
    log::info!(
        "[reveal] {} visible ({} of {})",
        section.id(),
        registry.borrow().visible_count(),
        REVEAL_SECTIONS.len()
    );
}

pub fn wire_reveals(
    document: &web::Document,
    threshold: f64,
    registry: &Rc<RefCell<VisibilityRegistry>>,
) -> Vec<SectionReveal> {
    REVEAL_SECTIONS
        .iter()
        .filter_map(|id| document.get_element_by_id(id))
        .filter_map(|el| {
            for bar in dom::query_all(&el, ".skill-bar[data-level]") {
                dom::set_style(&bar, "width", &skill_bar_width(0, false));
            }
            SectionReveal::observe(el, threshold, registry.clone())
        })
        .collect()
}
