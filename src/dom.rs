use crate::core::{Scroller, SectionLayout, SectionRect, SurfaceRect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property(property, value);
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

pub fn surface_rect(el: &web::Element) -> SurfaceRect {
    let r = el.get_bounding_client_rect();
    SurfaceRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Section geometry read live from the document.
pub struct DomLayout {
    pub document: web::Document,
}

impl SectionLayout for DomLayout {
    fn rect(&self, id: &str) -> Option<SectionRect> {
        let el = self.document.get_element_by_id(id)?;
        let r = el.get_bounding_client_rect();
        Some(SectionRect {
            top: r.top(),
            bottom: r.bottom(),
        })
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        let el: web::HtmlElement = by_id(&self.document, id)?;
        Some(el.offset_top() as f64)
    }
}

pub struct WindowScroller {
    pub window: web::Window,
}

impl Scroller for WindowScroller {
    fn smooth_scroll_to(&self, top: f64) {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}
