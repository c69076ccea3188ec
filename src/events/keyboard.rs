use crate::core::modal::closes_on_key;
use crate::modal::VideoModal;
use std::rc::Rc;
use web_sys as web;

// Escape is the only global binding; everything else belongs to the browser.
pub fn wire_escape(document: &web::Document, modal: &Rc<VideoModal>) {
    let modal = modal.clone();
    crate::dom::on::<web::KeyboardEvent>(document, "keydown", move |ev| {
        if closes_on_key(&ev.key(), modal.is_open()) {
            modal.close();
        }
    });
}
