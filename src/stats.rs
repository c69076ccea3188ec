use crate::constants::*;
use crate::core::counter::CountUp;
use crate::dom;
use crate::frame;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn count_up(number: web::Element) {
    let text = number.text_content().unwrap_or_default();
    let Some(counter) = CountUp::parse(&text) else {
        log::debug!("[stats] `{}` is not a number; leaving as is", text.trim());
        return;
    };
    let started = Instant::now();
    frame::start_loop(move || {
        let elapsed = started.elapsed().as_secs_f64();
        number.set_text_content(Some(&counter.label_at(elapsed)));
        !counter.is_finished(elapsed)
    });
}

/// Count each stat heading up from zero the first time its card scrolls into view.
pub fn wire_count_up(document: &web::Document) -> Result<(), JsValue> {
    let cards = dom::query_all(document, SEL_STAT_CARD);
    if cards.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let card = entry.target();
                observer.unobserve(&card);
                let Ok(Some(number)) = card.query_selector(SEL_STAT_NUMBER) else {
                    continue;
                };
                if number.has_attribute(ATTR_ANIMATED) {
                    continue;
                }
                _ = number.set_attribute(ATTR_ANIMATED, "true");
                count_up(number);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    for card in &cards {
        observer.observe(card);
    }
    callback.forget();
    log::info!("[stats] watching {} stat cards", cards.len());
    Ok(())
}
