use crate::anim::Tween;
use crate::constants::*;
use crate::core::follower::Follower;
use crate::dom::{self, DomError};
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// The follower's three decorative nodes, as tween targets.
#[derive(Clone)]
pub struct FollowerParts {
    pub ring: JsValue,
    pub dot: JsValue,
    pub film: JsValue,
}

fn create_div(document: &web::Document, class: &str) -> Result<web::Element, DomError> {
    let el = document
        .create_element("div")
        .map_err(|_| DomError::Missing(format!("div.{class}")))?;
    el.set_class_name(class);
    Ok(el)
}

/// Append the follower to `<body>`, track the pointer and start the frame loop.
pub fn mount(document: &web::Document) -> Result<FollowerParts, DomError> {
    let body = dom::body(document)?;
    let ring = create_div(document, CLASS_FOLLOWER)?;
    let dot = create_div(document, CLASS_FOLLOWER_PLAY)?;
    let film = create_div(document, CLASS_FOLLOWER_FILM)?;
    _ = ring.append_child(&dot);
    _ = body.append_child(&ring);
    _ = body.append_child(&film);

    let state = Rc::new(RefCell::new(Follower::default()));
    let state_move = state.clone();
    dom::on::<web::MouseEvent>(document, "mousemove", move |ev| {
        state_move
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    });

    let parts = FollowerParts {
        ring: ring.into(),
        dot: dot.into(),
        film: film.into(),
    };
    let targets = parts.clone();
    frame::start_loop(move || {
        let mut f = state.borrow_mut();
        f.step();
        let head = f.head_translate();
        let trail = f.trail_translate();
        Tween::new()
            .num("x", head.x as f64)
            .num("y", head.y as f64)
            .set(&targets.ring);
        Tween::new()
            .num("x", trail.x as f64)
            .num("y", trail.y as f64)
            .num("rotation", f.rotation_deg as f64)
            .set(&targets.film);
        true
    });
    log::info!("[follower] mounted");
    Ok(parts)
}
