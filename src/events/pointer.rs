use crate::anim::Tween;
use crate::constants::*;
use crate::dom;
use crate::follower::FollowerParts;
use wasm_bindgen::JsValue;
use web_sys as web;

fn on_hover(el: &web::Element, enter: impl Fn() + 'static, leave: impl Fn() + 'static) {
    dom::on::<web::MouseEvent>(el, "mouseenter", move |_| enter());
    dom::on::<web::MouseEvent>(el, "mouseleave", move |_| leave());
}

/// Cards lift and buttons swell while hovered.
pub fn wire_hover_feedback(document: &web::Document) {
    for card in dom::query_all(document, SEL_LIFT_CARDS) {
        let target: JsValue = card.clone().into();
        let target_leave = target.clone();
        on_hover(
            &card,
            move || {
                Tween::new()
                    .duration(HOVER_TWEEN_SEC)
                    .num("y", CARD_LIFT_Y)
                    .text("boxShadow", CARD_SHADOW_LIFTED)
                    .ease("power2.out")
                    .to(&target)
            },
            move || {
                Tween::new()
                    .duration(HOVER_TWEEN_SEC)
                    .num("y", 0.0)
                    .text("boxShadow", CARD_SHADOW_REST)
                    .ease("power2.out")
                    .to(&target_leave)
            },
        );
    }

    for button in dom::query_all(document, SEL_HOVER_BUTTONS) {
        let target: JsValue = button.clone().into();
        let target_leave = target.clone();
        on_hover(
            &button,
            move || scale_to(&target, BUTTON_HOVER_SCALE, BUTTON_HOVER_SEC),
            move || scale_to(&target_leave, 1.0, BUTTON_HOVER_SEC),
        );
    }
}

fn scale_to(target: &JsValue, scale: f64, seconds: f64) {
    Tween::new()
        .duration(seconds)
        .num("scale", scale)
        .ease("power2.out")
        .to(target);
}

fn follower_look(parts: &FollowerParts, hovered: bool) {
    let (ring, dot, film, film_opacity, bg, glow) = if hovered {
        (
            FOLLOWER_HOVER_SCALE,
            FOLLOWER_PLAY_HOVER_SCALE,
            FOLLOWER_FILM_HOVER_SCALE,
            1.0,
            FOLLOWER_PLAY_HOVER_BG,
            FOLLOWER_PLAY_HOVER_GLOW,
        )
    } else {
        (
            1.0,
            1.0,
            1.0,
            FOLLOWER_FILM_REST_OPACITY,
            FOLLOWER_PLAY_REST_BG,
            FOLLOWER_PLAY_REST_GLOW,
        )
    };
    scale_to(&parts.ring, ring, HOVER_TWEEN_SEC);
    Tween::new()
        .duration(HOVER_TWEEN_SEC)
        .num("scale", dot)
        .text("background", bg)
        .text("boxShadow", glow)
        .to(&parts.dot);
    Tween::new()
        .duration(HOVER_TWEEN_SEC)
        .num("scale", film)
        .num("opacity", film_opacity)
        .to(&parts.film);
}

/// Grow the cursor follower over anything clickable.
pub fn wire_follower_hover(document: &web::Document, parts: &FollowerParts) {
    for el in dom::query_all(document, SEL_FOLLOWER_TARGETS) {
        let enter = parts.clone();
        let leave = parts.clone();
        on_hover(
            &el,
            move || follower_look(&enter, true),
            move || follower_look(&leave, false),
        );
    }
}
