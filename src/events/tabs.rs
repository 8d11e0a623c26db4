use crate::core::showcase::{
    filter_mask, parse_tab, stagger_delays, Category, ProjectCategory, SkillCategory, Tab,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `.tab-group` container: category buttons filtering the items below them.
pub struct TabGroup {
    buttons: Vec<(web::Element, Closure<dyn FnMut()>)>,
}

impl TabGroup {
    pub fn wire(group: web::Element) -> Option<Self> {
        let kind = group.get_attribute("data-kind")?;
        let apply: fn(&web::Element, &str) -> bool = match kind.as_str() {
            "skills" => apply_tab::<SkillCategory>,
            "projects" => apply_tab::<ProjectCategory>,
            other => {
                log::warn!("[tabs] unknown tab group kind {:?}", other);
                return None;
            }
        };
        let mut buttons = Vec::new();
        for button in dom::query_all(&group, "button[data-tab]") {
            let group_cb = group.clone();
            let tab = button.get_attribute("data-tab").unwrap_or_default();
            let closure = Closure::wrap(Box::new(move || {
                if apply(&group_cb, &tab) {
                    for b in dom::query_all(&group_cb, "button[data-tab]") {
                        let on = b.get_attribute("data-tab").as_deref() == Some(tab.as_str());
                        dom::set_class(&b, "active", on);
                    }
                }
            }) as Box<dyn FnMut()>);
            _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            buttons.push((button, closure));
        }
        apply(&group, "all");
        Some(Self { buttons })
    }
}

impl Drop for TabGroup {
    fn drop(&mut self) {
        for (button, closure) in self.buttons.drain(..) {
            _ = button.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

fn apply_tab<C: Category>(group: &web::Element, raw: &str) -> bool {
    let Some(tab) = parse_tab::<C>(raw) else {
        log::warn!("[tabs] unknown tab {:?}", raw);
        return false;
    };
    let items = dom::query_all(group, "[data-category]");
    let categories: Vec<Option<C>> = items
        .iter()
        .map(|el| el.get_attribute("data-category").and_then(|c| C::parse(&c)))
        .collect();
    let mask = filter_mask(tab, &categories);
    for ((el, keep), delay) in items.iter().zip(&mask).zip(stagger_delays(&mask)) {
        dom::set_class(el, "hidden", !keep);
        if let Some(ms) = delay {
            dom::set_style(el, "transition-delay", &format!("{}ms", ms));
        }
    }
    let label = match tab {
        Tab::All => "all",
        Tab::Only(c) => c.as_str(),
    };
    log::debug!(
        "[tabs] {} -> {} of {} shown",
        label,
        mask.iter().filter(|k| **k).count(),
        mask.len()
    );
    true
}

pub fn wire_tab_groups(document: &web::Document) -> Vec<TabGroup> {
    let Some(root) = document.document_element() else {
        return Vec::new();
    };
    dom::query_all(&root, ".tab-group")
        .into_iter()
        .filter_map(TabGroup::wire)
        .collect()
}
