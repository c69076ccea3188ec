// Host-side tests for the page-level helpers: reveal tables, count-up,
// cursor follower and navigation/filter rules.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod counter {
        include!("../src/core/counter.rs");
    }
    pub mod follower {
        include!("../src/core/follower.rs");
    }
    pub mod page {
        include!("../src/core/page.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use crate::core::counter::{ease_power1_out, CountUp};
use crate::core::follower::Follower;
use crate::core::page::*;
use crate::core::reveal::*;

#[test]
fn delay_rules() {
    assert_eq!(DelayRule::None.delay_for(7), 0.0);
    assert!((DelayRule::Step(0.1).delay_for(3) - 0.3).abs() < 1e-12);
    let row = DelayRule::Cycle {
        period: 3,
        step: 0.1,
    };
    assert_eq!(row.delay_for(0), 0.0);
    assert!((row.delay_for(2) - 0.2).abs() < 1e-12);
    assert_eq!(row.delay_for(3), 0.0);
    let degenerate = DelayRule::Cycle {
        period: 0,
        step: 0.1,
    };
    assert_eq!(degenerate.delay_for(5), 0.0);
}

#[test]
fn alternating_offset_starts_from_the_left() {
    let o = Offset::AlternatingX(50.0);
    assert_eq!(o.for_index(0), ("x", -50.0));
    assert_eq!(o.for_index(1), ("x", 50.0));
    assert_eq!(o.for_index(2), ("x", -50.0));
    assert_eq!(Offset::Scale(0.8).for_index(4), ("scale", 0.8));
    assert_eq!(Offset::Y(50.0).for_index(1), ("y", 50.0));
}

#[test]
fn reveal_table_is_well_formed() {
    assert!(!REVEALS.is_empty());
    for r in REVEALS {
        assert!(!r.selector.is_empty());
        assert!(r.start.starts_with("top "), "{}", r.selector);
        assert!(r.duration > 0.0);
    }
    let tech = REVEALS.iter().find(|r| r.selector == ".tech-item").unwrap();
    assert_eq!(tech.ease, "back.out");
    assert!((tech.delay.delay_for(5) - 0.05).abs() < 1e-12);
}

#[test]
fn hero_steps_overlap_after_the_first() {
    assert_eq!(HERO_STEPS[0].position, None);
    assert!(HERO_STEPS[1..].iter().all(|s| s.position == Some("-=0.6")));
}

#[test]
fn power1_out_is_monotonic_and_bounded() {
    assert_eq!(ease_power1_out(0.0), 0.0);
    assert_eq!(ease_power1_out(1.0), 1.0);
    assert_eq!(ease_power1_out(2.0), 1.0);
    assert_eq!(ease_power1_out(-1.0), 0.0);
    assert!((ease_power1_out(0.5) - 0.75).abs() < 1e-12);
    let mut prev = 0.0;
    for i in 1..=20 {
        let v = ease_power1_out(i as f64 / 20.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn count_up_parses_heading_text() {
    let c = CountUp::parse("150+").unwrap();
    assert_eq!(c.target, 150);
    assert_eq!(c.suffix, "+");
    let c = CountUp::parse(" 12 ").unwrap();
    assert_eq!(c.target, 12);
    assert_eq!(c.suffix, "");
    assert!(CountUp::parse("N/A").is_none());
    assert!(CountUp::parse("").is_none());
}

#[test]
fn count_up_lands_exactly_on_target() {
    let c = CountUp::parse("250+").unwrap();
    assert_eq!(c.label_at(0.0), "0+");
    assert_eq!(c.value_at(c.duration_sec / 2.0), 187); // 250 * 0.75
    assert_eq!(c.label_at(c.duration_sec), "250+");
    assert_eq!(c.value_at(c.duration_sec * 3.0), 250);
    assert!(c.is_finished(c.duration_sec));
    assert!(!c.is_finished(0.1));
}

#[test]
fn follower_converges_on_pointer() {
    let mut f = Follower::default();
    f.set_pointer(400.0, 300.0);
    f.step();
    assert!((f.head.x - 48.0).abs() < 1e-3); // 400 * 0.12
    assert!((f.trail.x - 32.0).abs() < 1e-3); // 400 * 0.08
    for _ in 0..400 {
        f.step();
    }
    assert!((f.head - f.pointer).length() < 0.01);
    assert!((f.trail - f.pointer).length() < 0.01);
    let t = f.head_translate();
    assert!((t.x - 380.0).abs() < 0.05 && (t.y - 280.0).abs() < 0.05);
}

#[test]
fn follower_rotation_wraps() {
    let mut f = Follower::default();
    for _ in 0..181 {
        f.step();
    }
    assert!((f.rotation_deg - 2.0).abs() < 1e-3);
}

#[test]
fn navbar_shadow_deepens_after_threshold() {
    assert_eq!(navbar_shadow(0.0), "0 4px 6px rgba(0, 0, 0, 0.07)");
    assert_eq!(navbar_shadow(100.0), "0 4px 6px rgba(0, 0, 0, 0.07)");
    assert_eq!(navbar_shadow(101.0), "0 4px 6px rgba(0, 0, 0, 0.1)");
}

#[test]
fn fragment_links() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("/blog#x"), None);
    assert_eq!(section_scroll_top(580.0), 500.0);
}

#[test]
fn filter_rules() {
    assert!(filter_matches("all", None));
    assert!(filter_matches("all", Some("music")));
    assert!(filter_matches("music", Some("music")));
    assert!(!filter_matches("music", Some("social")));
    assert!(!filter_matches("music", None));
    assert_eq!(filter_look(true).opacity, 1.0);
    assert_eq!(filter_look(false).pointer_events, "none");
}

#[test]
fn floating_cards_hide_on_narrow_viewports() {
    assert!(!show_floating_cards(767.0));
    assert!(show_floating_cards(768.0));
}

#[test]
fn reveal_words_collapse_whitespace() {
    assert_eq!(reveal_words("  cut  the\nreel "), vec!["cut", "the", "reel"]);
    assert!(reveal_words("   ").is_empty());
}
