use crate::core::contact::{check_status, ContactError, ContactPayload, Notice, Submission};
use crate::core::timing::Debounce;
use crate::notice;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Contact form posting JSON to the configured relay.
pub struct ContactForm {
    form: web::HtmlFormElement,
    listener: Closure<dyn FnMut(web::Event)>,
}

impl ContactForm {
    pub fn wire(
        document: &web::Document,
        endpoint: String,
        notice_hide: Rc<RefCell<Debounce<()>>>,
    ) -> Option<Self> {
        let form: web::HtmlFormElement = crate::dom::by_id(document, "contact-form")?;
        let submission_cb = Rc::new(RefCell::new(Submission::default()));
        let doc = document.clone();
        let form_cb = form.clone();
        let listener = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let payload = read_payload(&form_cb);
            if let Err(e) = payload.validate() {
                notice::flash(&doc, Notice::Failed, Some(&e.to_string()), &notice_hide);
                return;
            }
            if !submission_cb.borrow_mut().begin() {
                log::info!("[contact] submission already in flight");
                return;
            }
            let doc = doc.clone();
            let form = form_cb.clone();
            let submission = submission_cb.clone();
            let endpoint = endpoint.clone();
            let notice_hide = notice_hide.clone();
            spawn_local(async move {
                let outcome = post_json(&endpoint, &payload).await;
                let shown = submission.borrow_mut().finish(&outcome);
                match &outcome {
                    Ok(()) => {
                        log::info!("[contact] message sent");
                        form.reset();
                    }
                    Err(e) => log::error!("[contact] send failed: {}", e),
                }
                notice::flash(&doc, shown, None, &notice_hide);
            });
        }) as Box<dyn FnMut(_)>);
        _ = form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref());
        Some(Self {
            form,
            listener,
        })
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        _ = self
            .form
            .remove_event_listener_with_callback("submit", self.listener.as_ref().unchecked_ref());
    }
}

fn field_value(form: &web::HtmlFormElement, name: &str) -> String {
    let Ok(Some(el)) = form.query_selector(&format!("[name=\"{}\"]", name)) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn read_payload(form: &web::HtmlFormElement) -> ContactPayload {
    ContactPayload::new(
        &field_value(form, "name"),
        &field_value(form, "email"),
        &field_value(form, "message"),
    )
}

async fn post_json(endpoint: &str, payload: &ContactPayload) -> Result<(), ContactError> {
    let body = payload.to_json()?;
    let window = web::window().ok_or_else(|| ContactError::Network("no window".into()))?;

    let headers = web::Headers::new().map_err(js_network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_network)?;
    headers.set("Accept", "application/json").map_err(js_network)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(js_network)?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_network)?;
    let resp: web::Response = resp.dyn_into().map_err(js_network)?;
    check_status(resp.status())
}

fn js_network(e: JsValue) -> ContactError {
    ContactError::Network(format!("{:?}", e))
}
