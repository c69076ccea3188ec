use crate::anim::{self, Tween};
use crate::constants::*;
use crate::core::page::reveal_words;
use crate::core::reveal::{
    Reveal, ABOUT_PARAGRAPHS, ABOUT_PARAGRAPH_STAGGER, HERO_STEPS, HERO_STEP_DURATION, REVEALS,
};
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

fn hero_intro() {
    anim::timeline_from(HERO_STEPS.iter().map(|step| {
        (
            JsValue::from_str(step.selector),
            Tween::new()
                .duration(HERO_STEP_DURATION)
                .num("opacity", 0.0)
                .num("y", step.y)
                .ease("power3.out"),
            step.position,
        )
    }));
}

fn hero_circle() {
    let circle = JsValue::from_str(SEL_CIRCLE);
    Tween::new()
        .duration(CIRCLE_SPIN_SEC)
        .num("rotation", 360.0)
        .num("repeat", -1.0)
        .ease("none")
        .to(&circle);
    Tween::new()
        .num("y", CIRCLE_PARALLAX_Y)
        .nested(
            "scrollTrigger",
            Tween::new()
                .text("trigger", SEL_HERO)
                .text("start", "top top")
                .text("end", "bottom top")
                .num("scrub", 1.0),
        )
        .to(&circle);
}

fn reveal_each(document: &web::Document, reveal: &Reveal) -> usize {
    let elements = dom::query_all(document, reveal.selector);
    for (i, el) in elements.iter().enumerate() {
        let target: JsValue = el.clone().into();
        let (prop, from) = reveal.from.for_index(i);
        Tween::new()
            .scroll_trigger(&target, reveal.start)
            .duration(reveal.duration)
            .num("opacity", 0.0)
            .num(prop, from)
            .num("delay", reveal.delay.delay_for(i))
            .ease(reveal.ease)
            .from(&target);
    }
    elements.len()
}

fn about_paragraphs() {
    let target = JsValue::from_str(ABOUT_PARAGRAPHS);
    Tween::new()
        .scroll_trigger(&target, "top 80%")
        .duration(0.8)
        .num("opacity", 0.0)
        .num("y", 30.0)
        .num("stagger", ABOUT_PARAGRAPH_STAGGER)
        .ease("power3.out")
        .from(&target);
}

/// Hero intro, parallax and every scroll-triggered entrance on the page.
pub fn wire_reveals(document: &web::Document) {
    hero_intro();
    hero_circle();
    about_paragraphs();
    let total: usize = REVEALS.iter().map(|r| reveal_each(document, r)).sum();
    log::info!("[reveal] {} scroll reveals registered", total);
}

/// Fade the whole page in once every resource has loaded.
pub fn wire_body_fade(window: &web::Window) {
    dom::on::<web::Event>(window, "load", |_| {
        Tween::new()
            .duration(BODY_FADE_SEC)
            .num("opacity", 0.0)
            .ease("power2.out")
            .from(&JsValue::from_str("body"));
    });
}

/// Wrap each word of the reveal paragraphs in `span.word` at rest opacity.
pub fn wrap_words(document: &web::Document) {
    for p in dom::query_all(document, SEL_TEXT_REVEAL) {
        let Some(html) = dom::as_html(&p) else {
            continue;
        };
        let text = html.inner_text();
        let words = reveal_words(&text);
        if words.is_empty() {
            continue;
        }
        p.set_text_content(None);
        for (i, word) in words.into_iter().enumerate() {
            if i > 0 {
                _ = p.append_child(&document.create_text_node(" "));
            }
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_class_name(CLASS_WORD);
            span.set_text_content(Some(word));
            if let Some(span) = dom::as_html(&span) {
                dom::set_style(&span, "opacity", WORD_REST_OPACITY);
            }
            _ = p.append_child(&span);
        }
    }
}
