#![cfg(target_arch = "wasm32")]
use crate::core::page::show_floating_cards;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod anim;
mod constants;
mod contact;
pub mod core;
mod dom;
mod events;
mod follower;
mod frame;
mod modal;
mod nav;
mod portfolio;
mod reveal;
mod stats;

use constants::*;

fn report(area: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{}] disabled: {:#}", area, e);
    }
}

fn wire_floating_cards(window: &web::Window) {
    let apply = |window: &web::Window| {
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let display = if show_floating_cards(width) { "block" } else { "none" };
        anim::Tween::new()
            .text("display", display)
            .set(&JsValue::from_str(SEL_FLOATING_CARD));
    };
    apply(window);
    let win = window.clone();
    dom::on::<web::Event>(window, "resize", move |_| apply(&win));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reel-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    // Markup-driven features first; each one fails on its own.
    report(
        "modal",
        modal::wire(&document)
            .map(|m| events::wire_escape(&document, &m))
            .map_err(Into::into),
    );
    report("nav", nav::wire_menu(&document).map_err(Into::into));
    report(
        "contact",
        contact::wire_contact_form(&document).map_err(Into::into),
    );
    report(
        "stats",
        stats::wire_count_up(&document).map_err(|e| anyhow::anyhow!("{:?}", e)),
    );
    reveal::wrap_words(&document);

    let animate = anim::register_plugins();
    report(
        "scroll",
        nav::wire_scroll_effects(&document, animate).map_err(Into::into),
    );
    if !animate {
        return Ok(());
    }

    if dom::media_matches(MQ_REDUCED_MOTION) {
        anim::set_global_time_scale(REDUCED_MOTION_TIME_SCALE);
        log::info!("[anim] reduced motion: time scale {}", REDUCED_MOTION_TIME_SCALE);
    }
    if dom::media_matches(MQ_FINE_POINTER) {
        match follower::mount(&document) {
            Ok(parts) => events::wire_follower_hover(&document, &parts),
            Err(e) => log::error!("[follower] disabled: {}", e),
        }
    }
    nav::wire_anchor_scrolling(&document);
    portfolio::wire_filter(&document);
    events::wire_hover_feedback(&document);
    reveal::wire_reveals(&document);
    reveal::wire_body_fade(&window);
    wire_floating_cards(&window);

    anim::refresh_scroll_triggers();
    log::info!("reel-web ready");
    Ok(())
}
