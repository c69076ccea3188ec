use crate::anim::{self, Tween};
use crate::constants::*;
use crate::core::constants::NAVBAR_HEIGHT_PX;
use crate::core::page::{fragment_id, navbar_shadow, section_scroll_top};
use crate::core::FrameGate;
use crate::dom::{self, DomError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

fn smooth_scroll_to(window: &web::Window, top: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Hamburger toggle and `.nav-link` section jumps.
pub fn wire_menu(document: &web::Document) -> Result<(), DomError> {
    let hamburger: web::Element = dom::by_id(document, ID_HAMBURGER)?;
    let menu: web::Element = dom::by_id(document, ID_NAV_MENU)?;

    let menu_toggle = menu.clone();
    dom::add_click_listener(&hamburger, move |_| {
        _ = menu_toggle.class_list().toggle(CLASS_ACTIVE);
    });

    let window = dom::window()?;
    for link in dom::query_all(document, SEL_NAV_LINK) {
        let menu = menu.clone();
        let window = window.clone();
        let doc = document.clone();
        let href = link.get_attribute("href");
        dom::add_click_listener(&link, move |ev| {
            _ = menu.class_list().remove_1(CLASS_ACTIVE);
            let Some(href) = href.as_deref() else {
                return;
            };
            if !href.starts_with('#') {
                return;
            }
            ev.prevent_default();
            let Some(id) = fragment_id(href) else {
                return;
            };
            if let Ok(target) = dom::by_id::<web::HtmlElement>(&doc, id) {
                smooth_scroll_to(&window, section_scroll_top(target.offset_top() as f64));
            }
        });
    }
    Ok(())
}

/// In-page anchors outside the nav menu scroll with the ScrollTo plugin.
pub fn wire_anchor_scrolling(document: &web::Document) {
    for anchor in dom::query_all(document, SEL_FRAGMENT_LINKS) {
        if anchor.class_list().contains(CLASS_NAV_LINK) {
            continue;
        }
        let href = anchor.get_attribute("href");
        let doc = document.clone();
        dom::add_click_listener(&anchor, move |ev| {
            let Some(href) = href.as_deref() else {
                return;
            };
            if fragment_id(href).is_none() {
                return;
            }
            ev.prevent_default();
            let Ok(Some(target)) = doc.query_selector(href) else {
                return;
            };
            let target: JsValue = target.into();
            let window: JsValue = match dom::window() {
                Ok(w) => w.into(),
                Err(_) => return,
            };
            Tween::new()
                .duration(ANCHOR_SCROLL_SEC)
                .nested(
                    "scrollTo",
                    Tween::new()
                        .val("y", &target)
                        .num("offsetY", NAVBAR_HEIGHT_PX),
                )
                .ease("power2.inOut")
                .to(&window);
        });
    }
}

/// Navbar shadow and one ScrollTrigger update per frame while scrolling.
pub fn wire_scroll_effects(document: &web::Document, animate: bool) -> Result<(), DomError> {
    let navbar: web::HtmlElement = dom::query(document, SEL_NAVBAR)?;
    let window = dom::window()?;
    let gate = Rc::new(RefCell::new(FrameGate::default()));
    let win = window.clone();
    dom::on::<web::Event>(&window, "scroll", move |_| {
        let top = win.scroll_y().unwrap_or(0.0);
        dom::set_style(&navbar, "box-shadow", navbar_shadow(top));

        if animate && gate.borrow_mut().request() {
            let gate = gate.clone();
            dom::next_frame(move || {
                gate.borrow_mut().fire();
                anim::update_scroll_triggers();
            });
        }
    });
    Ok(())
}
