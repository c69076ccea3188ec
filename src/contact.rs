use crate::anim::Tween;
use crate::constants::*;
use crate::dom::{self, DomError};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Local-only submit feedback: nothing is sent anywhere.
pub fn wire_contact_form(document: &web::Document) -> Result<(), DomError> {
    let form: web::HtmlFormElement = dom::by_id(document, ID_CONTACT_FORM)?;
    let button: web::HtmlElement = dom::query_in(&form, SEL_SUBMIT_BTN)?;
    // Captured once so a second submit during the confirmation can't make it stick.
    let original_text = button.text_content().unwrap_or_default();

    let form_for_submit = form.clone();
    dom::on::<web::Event>(&form, "submit", move |ev| {
        ev.prevent_default();
        let target: JsValue = button.clone().into();
        press(&target, SUBMIT_PRESS_SCALE);

        let button = button.clone();
        let form = form_for_submit.clone();
        let original_text = original_text.clone();
        dom::set_timeout(SUBMIT_PRESS_MS, move || {
            let target: JsValue = button.clone().into();
            press(&target, 1.0);
            button.set_text_content(Some(SUBMIT_CONFIRM_TEXT));
            dom::set_style(&button, "background", SUBMIT_CONFIRM_BG);

            dom::set_timeout(SUBMIT_CONFIRM_MS, move || {
                button.set_text_content(Some(&original_text));
                dom::clear_style(&button, "background");
                form.reset();
            });
        });
        log::info!("[contact] submit (local only)");
    });
    Ok(())
}

fn press(target: &JsValue, scale: f64) {
    Tween::new()
        .duration(0.3)
        .num("scale", scale)
        .ease("power2.out")
        .to(target);
}
