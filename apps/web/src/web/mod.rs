//! `web-sys` implementations of the kernel traits and the listener wiring.

mod document;
mod scheduler;
mod transport;
mod window;

pub use self::document::BrowserDocument;
pub use self::scheduler::TimeoutScheduler;
pub use self::transport::FetchTransport;
pub use self::window::BrowserWindow;

use crate::error::WebError;
use crate::page_config::parse_page_config;
use crate::ready::awaits_markup;
use std::rc::Rc;
use tour::PageInteractionController;
use tour::domain::config::PageConfig;
use tour::domain::constants::PAGE_CONFIG;
use tour_logger::{LevelFilter, Logger};
use tracing::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget};

type Controller =
    PageInteractionController<BrowserDocument, BrowserWindow, TimeoutScheduler, FetchTransport>;

/// Text of a thrown JS value, for error messages.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Installs logging and attaches the page interactions once the markup has been parsed.
///
/// # Errors
/// Fails when logging is already initialized, when `window`/`document` are missing, or
/// when a listener cannot be registered.
pub fn start() -> Result<(), WebError> {
    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(LevelFilter::INFO)
        .init()?;

    let window = web_sys::window().ok_or_else(|| WebError::unavailable("window"))?;
    let document = window.document().ok_or_else(|| WebError::unavailable("document"))?;

    if awaits_markup(&document.ready_state()) {
        let deferred = document.clone();
        listen(&document, "DOMContentLoaded", move |_| {
            if let Err(err) = attach(&deferred) {
                error!(error = %err, "Page interactions failed to attach");
            }
        })
    } else {
        attach(&document)
    }
}

fn attach(document: &web_sys::Document) -> Result<(), WebError> {
    let window = web_sys::window().ok_or_else(|| WebError::unavailable("window"))?;
    let config = read_config(document);

    let controller: Rc<Controller> = Rc::new(PageInteractionController::attach(
        BrowserDocument::new(document.clone()),
        BrowserWindow::new(window.clone()),
        TimeoutScheduler::new(window.clone()),
        FetchTransport::new(window.clone()),
        config,
    ));

    let on_click = Rc::clone(&controller);
    listen(document, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if on_click.on_click(&target).is_prevented() {
            event.prevent_default();
        }
    })?;

    let on_scroll = Rc::clone(&controller);
    listen(&window, "scroll", move |_| on_scroll.on_scroll())?;

    if let Some(form) = controller.booking_form() {
        let on_submit = Rc::clone(&controller);
        listen(form, "submit", move |event| {
            event.prevent_default();
            let controller = Rc::clone(&on_submit);
            wasm_bindgen_futures::spawn_local(async move {
                controller.submit_booking().await;
            });
        })?;
    }

    info!("Page listeners registered");
    Ok(())
}

/// A malformed config block is reported and replaced by the defaults.
fn read_config(document: &web_sys::Document) -> PageConfig {
    let raw = document.get_element_by_id(PAGE_CONFIG).and_then(|block| block.text_content());
    parse_page_config(raw.as_deref()).unwrap_or_else(|err| {
        warn!(error = %err, "Ignoring page config");
        PageConfig::default()
    })
}

/// Registers `handler` for the lifetime of the page.
fn listen(
    target: &EventTarget,
    kind: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|err| {
            WebError::script(format!("Failed to listen for `{kind}`: {}", describe(&err)))
        })?;
    closure.forget();
    Ok(())
}
