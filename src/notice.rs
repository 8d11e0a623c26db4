use crate::core::contact::Notice;
use crate::core::timing::Debounce;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use web_sys as web;

const NOTICE_ID: &str = "contact-notice";

#[inline]
pub fn show(document: &web::Document, notice: Notice, detail: Option<&str>) {
    if let Some(el) = document.get_element_by_id(NOTICE_ID) {
        for n in [Notice::Sent, Notice::Failed] {
            dom::set_class(&el, n.css_class(), n == notice);
        }
        let description = detail.unwrap_or(notice.description());
        el.set_inner_html(&format!(
            "<strong>{}</strong><p>{}</p>",
            notice.title(),
            escape(description)
        ));
        dom::set_class(&el, "hidden", false);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(NOTICE_ID) {
        dom::set_class(&el, "hidden", true);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Show a notice and re-arm its hide timer. A later flash pushes the hide
/// back, so an older notice can never cut a newer one short.
pub fn flash(
    document: &web::Document,
    notice: Notice,
    detail: Option<&str>,
    hide_after: &RefCell<Debounce<()>>,
) {
    show(document, notice, detail);
    hide_after.borrow_mut().bump(Instant::now(), ());
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
