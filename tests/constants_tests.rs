// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn modal_timings_are_ordered() {
    // The active class must land well before a close could hide the modal.
    assert!(MODAL_ACTIVATE_DELAY_MS > 0);
    assert!(MODAL_HIDE_DELAY_MS > MODAL_ACTIVATE_DELAY_MS);
    assert_eq!(MODAL_HIDE_DELAY_MS, 300);
    assert_eq!(CANCEL_KEY, "Escape");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn follower_trail_lags_the_head() {
    assert!(FOLLOWER_HEAD_EASE > 0.0 && FOLLOWER_HEAD_EASE < 1.0);
    assert!(FOLLOWER_TRAIL_EASE > 0.0 && FOLLOWER_TRAIL_EASE < FOLLOWER_HEAD_EASE);
    assert!(FOLLOWER_HEAD_HALF_PX > FOLLOWER_TRAIL_HALF_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_and_filter_values_are_sane() {
    assert!(BUTTON_HOVER_SCALE > 1.0);
    assert!(FOLLOWER_HOVER_SCALE > 1.0);
    assert!(FOLLOWER_PLAY_HOVER_SCALE < 1.0);
    assert!(FILTER_DIMMED_OPACITY > 0.0 && FILTER_DIMMED_OPACITY < 1.0);
    assert!(REDUCED_MOTION_TIME_SCALE > 0.0 && REDUCED_MOTION_TIME_SCALE < 1.0);
    assert!(SUBMIT_CONFIRM_MS > SUBMIT_PRESS_MS);
}

#[test]
fn selectors_and_ids_are_plain() {
    for id in [
        ID_VIDEO_MODAL,
        ID_CLOSE_VIDEO_MODAL,
        ID_PORTFOLIO_VIDEO,
        ID_PLAY_PAUSE_BTN,
        ID_MUTE_BTN,
        ID_FULLSCREEN_BTN,
        ID_VIDEO_TITLE,
        ID_VIDEO_DESCRIPTION,
        ID_HAMBURGER,
        ID_NAV_MENU,
        ID_CONTACT_FORM,
    ] {
        assert!(!id.starts_with('#') && !id.contains(' '), "{}", id);
    }
    for sel in [SEL_PROGRESS_BAR, SEL_PLAYER_CONTAINER, SEL_PORTFOLIO_ITEM, SEL_STAT_CARD] {
        assert!(sel.starts_with('.'), "{}", sel);
    }
}
