use crate::anim::Tween;
use crate::constants::*;
use crate::core::page::{filter_look, filter_matches};
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Category filter buttons: the clicked one becomes active and non-matching
/// tiles dim out of reach.
pub fn wire_filter(document: &web::Document) {
    let buttons = dom::query_all(document, SEL_FILTER_BTN);
    let items = dom::query_all(document, SEL_PORTFOLIO_ITEM);
    for button in &buttons {
        let buttons = buttons.clone();
        let items = items.clone();
        let this = button.clone();
        dom::add_click_listener(button, move |_| {
            for b in &buttons {
                _ = b.class_list().remove_1(CLASS_ACTIVE);
            }
            _ = this.class_list().add_1(CLASS_ACTIVE);

            let filter = this.get_attribute(ATTR_FILTER).unwrap_or_default();
            log::debug!("[portfolio] filter {}", filter);
            for item in &items {
                let category = item.get_attribute(ATTR_CATEGORY);
                let matches = filter_matches(&filter, category.as_deref());
                let look = filter_look(matches);
                let target: JsValue = item.clone().into();
                Tween::new()
                    .duration(FILTER_TWEEN_SEC)
                    .num("opacity", look.opacity)
                    .text("pointerEvents", look.pointer_events)
                    .ease("power2.out")
                    .to(&target);
                if matches {
                    if let Some(item) = dom::as_html(item) {
                        dom::set_style(&item, "display", "block");
                    }
                }
            }
        });
    }
}
