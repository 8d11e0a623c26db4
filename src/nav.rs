use crate::core::{EventKind, EventSource, HostEvent, ScrollSpy, Subscription, SECTIONS};
use crate::dom::{self, DomLayout, WindowScroller};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fixed navigation bar: one button per section, scroll-spy highlighting and
/// a `scrolled` style once the page leaves the top.
pub struct Navigator {
    spy: Rc<RefCell<ScrollSpy>>,
    buttons: Vec<(web::Element, Closure<dyn FnMut()>)>,
    _scroll: Subscription,
}

impl Navigator {
    pub fn wire(
        events: &Rc<dyn EventSource>,
        window: &web::Window,
        document: &web::Document,
    ) -> Option<Self> {
        let nav = document.get_element_by_id("site-nav")?;
        let list = document.get_element_by_id("nav-list")?;
        let spy = Rc::new(RefCell::new(ScrollSpy::new(SECTIONS)));

        let mut buttons = Vec::new();
        for section in SECTIONS {
            let Ok(li) = document.create_element("li") else {
                continue;
            };
            let Ok(button) = document.create_element("button") else {
                continue;
            };
            button.set_text_content(Some(section.label));
            _ = button.set_attribute("data-section", section.id);
            _ = li.append_child(&button);
            _ = list.append_child(&li);

            let spy_click = spy.clone();
            let layout = DomLayout {
                document: document.clone(),
            };
            let scroller = WindowScroller {
                window: window.clone(),
            };
            let id = section.id;
            let closure = Closure::wrap(Box::new(move || {
                if !spy_click.borrow().scroll_to(id, &layout, &scroller) {
                    log::warn!("[nav] no section #{} to scroll to", id);
                }
            }) as Box<dyn FnMut()>);
            _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            buttons.push((button, closure));
        }

        let spy_scroll = spy.clone();
        let doc = document.clone();
        let nav_el = nav.clone();
        let list_el = list.clone();
        let scroll = Subscription::new(
            events,
            EventKind::Scroll,
            Box::new(move |ev: &HostEvent| {
                if let HostEvent::Scroll { y } = *ev {
                    let layout = DomLayout {
                        document: doc.clone(),
                    };
                    let mut spy = spy_scroll.borrow_mut();
                    let update = spy.update(y, &layout);
                    if update.scrolled_changed {
                        dom::set_class(&nav_el, "scrolled", spy.is_scrolled());
                    }
                    if update.active_changed {
                        log::info!("[nav] active section -> {}", spy.active());
                        highlight(&list_el, spy.active());
                    }
                }
            }),
        );

        highlight(&list, spy.borrow().active());
        log::info!("[nav] wired {} sections", buttons.len());
        Some(Self {
            spy,
            buttons,
            _scroll: scroll,
        })
    }

    pub fn active(&self) -> &'static str {
        self.spy.borrow().active()
    }
}

impl Drop for Navigator {
    fn drop(&mut self) {
        for (button, closure) in self.buttons.drain(..) {
            _ = button.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

fn highlight(list: &web::Element, active: &str) {
    for button in dom::query_all(list, "button[data-section]") {
        let is_active = button.get_attribute("data-section").as_deref() == Some(active);
        dom::set_class(&button, "active", is_active);
    }
}
