use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Startup lookup failures. A feature whose markup is missing reports one of
/// these instead of failing later on a dangling handle.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no <body>")]
    NoBody,
    #[error("missing element `{0}`")]
    Missing(String),
    #[error("element `{selector}` is not a {expected}")]
    WrongType {
        selector: String,
        expected: &'static str,
    },
}

pub fn window() -> Result<web::Window, DomError> {
    web::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<web::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body(document: &web::Document) -> Result<web::HtmlElement, DomError> {
    document.body().ok_or(DomError::NoBody)
}

fn cast<T: JsCast>(el: web::Element, selector: &str) -> Result<T, DomError> {
    el.dyn_into::<T>().map_err(|_| DomError::WrongType {
        selector: selector.to_string(),
        expected: std::any::type_name::<T>(),
    })
}

/// `#id` lookup, cast to the expected element type.
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> Result<T, DomError> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(format!("#{id}")))?;
    cast(el, id)
}

/// First match of `selector` in the document.
pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> Result<T, DomError> {
    let el = document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| DomError::Missing(selector.to_string()))?;
    cast(el, selector)
}

/// First match of `selector` below `root`.
pub fn query_in<T: JsCast>(root: &web::Element, selector: &str) -> Result<T, DomError> {
    let el = root
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| DomError::Missing(selector.to_string()))?;
    cast(el, selector)
}

/// All elements matching `selector`, in document order. An invalid selector
/// yields an empty list.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Trimmed text of the first `selector` match below `root`, or empty.
pub fn text_in(root: &web::Element, selector: &str) -> String {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

#[inline]
pub fn set_shown(el: &web::HtmlElement, shown: bool) {
    set_style(el, "display", if shown { "block" } else { "none" });
}

#[inline]
pub fn as_html(el: &web::Element) -> Option<web::HtmlElement> {
    el.dyn_ref::<web::HtmlElement>().cloned()
}

/// Attach a listener for the lifetime of the page.
pub fn on<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    on::<web::MouseEvent>(el, "click", move |ev| handler(ev));
}

/// Run `f` once after `delay_ms`. Not cancellable: callers re-check their
/// state when it fires.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
    {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(f);
    window.request_animation_frame(cb.unchecked_ref()).ok()
}

pub fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}
