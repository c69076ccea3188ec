// Host-side tests for the video modal controller and its transport commands.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod modal {
        include!("../src/core/modal.rs");
    }
    pub mod playback {
        include!("../src/core/playback.rs");
    }
    pub mod progress {
        include!("../src/core/progress.rs");
    }
    pub mod transport {
        include!("../src/core/transport.rs");
    }
}

use crate::core::catalog::{lookup, SelectionRequest};
use crate::core::constants::CANCEL_KEY;
use crate::core::modal::{closes_on_key, ModalController};
use crate::core::playback::PlaybackSurface;
use crate::core::transport::{seek_fraction, PlayIcon, VolumeIcon};
use std::cell::{Cell, RefCell};

/// In-memory stand-in for the `<video>` element.
#[derive(Default)]
struct FakeVideo {
    src: RefCell<String>,
    time: Cell<f64>,
    duration: Cell<f64>,
    paused: Cell<bool>,
    muted: Cell<bool>,
    play_calls: Cell<u32>,
    pause_calls: Cell<u32>,
}

impl FakeVideo {
    fn new() -> Self {
        let v = FakeVideo::default();
        v.paused.set(true);
        v.duration.set(f64::NAN);
        v
    }

    fn load_metadata(&self, duration: f64) {
        self.duration.set(duration);
    }
}

impl PlaybackSurface for FakeVideo {
    fn source(&self) -> String {
        self.src.borrow().clone()
    }
    fn set_source(&self, url: &str) {
        *self.src.borrow_mut() = url.to_string();
        self.duration.set(f64::NAN);
    }
    fn current_time(&self) -> f64 {
        self.time.get()
    }
    fn set_current_time(&self, seconds: f64) {
        self.time.set(seconds);
    }
    fn duration(&self) -> f64 {
        self.duration.get()
    }
    fn paused(&self) -> bool {
        self.paused.get()
    }
    fn muted(&self) -> bool {
        self.muted.get()
    }
    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }
    fn play(&self) {
        self.play_calls.set(self.play_calls.get() + 1);
        self.paused.set(false);
    }
    fn pause(&self) {
        self.pause_calls.set(self.pause_calls.get() + 1);
        self.paused.set(true);
    }
}

fn category(key: &str) -> SelectionRequest {
    SelectionRequest::Category(key.to_string())
}

fn explicit(url: &str, title: &str) -> SelectionRequest {
    SelectionRequest::Explicit {
        source_url: url.to_string(),
        title: title.to_string(),
        description: "desc".to_string(),
    }
}

#[test]
fn starts_closed_and_idle() {
    let c = ModalController::new(FakeVideo::new());
    assert!(!c.is_open());
    assert!(c.surface().paused());
    assert_eq!(c.surface().play_calls.get(), 0);
}

#[test]
fn open_points_surface_at_selection_and_plays_from_zero() {
    let mut c = ModalController::new(FakeVideo::new());
    c.surface().set_current_time(42.0);
    let state = c.open(&category("music")).clone();

    assert!(state.visible);
    assert_eq!(state.source_url, lookup("music").source_url);
    assert_eq!(state.title, lookup("music").title);
    assert_eq!(c.surface().source(), state.source_url);
    assert_eq!(c.surface().current_time(), 0.0);
    assert!(!c.surface().paused());
}

#[test]
fn open_with_unknown_category_shows_fallback() {
    let mut c = ModalController::new(FakeVideo::new());
    let state = c.open(&category("nope")).clone();
    assert_eq!(state.title, "Brand Campaign - TechStart");
}

#[test]
fn close_pauses_and_schedules_hide() {
    let mut c = ModalController::new(FakeVideo::new());
    c.open(&category("social"));
    assert!(c.close());
    assert!(!c.is_open());
    assert!(c.surface().paused());
    assert!(c.hide_due());
    assert!(!c.activate_due());
}

#[test]
fn close_when_closed_is_noop() {
    let mut c = ModalController::new(FakeVideo::new());
    assert!(!c.close());
    assert_eq!(c.surface().pause_calls.get(), 0);
}

#[test]
fn reopen_during_hide_delay_keeps_modal_visible_with_new_content() {
    let mut c = ModalController::new(FakeVideo::new());
    c.open(&explicit("a.mp4", "A"));
    assert!(c.close());
    // Second open lands before the 300ms hide fires.
    c.open(&explicit("b.mp4", "B"));

    // The pending hide re-reads state when it fires.
    assert!(!c.hide_due());
    assert!(c.is_open());
    assert_eq!(c.state().title, "B");
    assert_eq!(c.surface().source(), "b.mp4");
}

#[test]
fn reopen_while_open_replaces_content_in_place() {
    let mut c = ModalController::new(FakeVideo::new());
    c.open(&category("documentary"));
    c.surface().set_current_time(12.0);
    c.open(&explicit("clip.mp4", "Clip"));
    assert!(c.is_open());
    assert_eq!(c.state().source_url, "clip.mp4");
    assert_eq!(c.surface().current_time(), 0.0);
}

#[test]
fn transport_is_inert_while_closed() {
    let c = ModalController::new(FakeVideo::new());
    c.surface().load_metadata(100.0);
    assert_eq!(c.toggle_play(), None);
    assert_eq!(c.toggle_mute(), None);
    assert_eq!(c.seek_to_fraction(0.5), None);
    c.play();
    assert!(c.surface().paused());
    assert!(!c.surface().muted());
    assert_eq!(c.surface().current_time(), 0.0);
}

#[test]
fn play_twice_while_playing_stays_playing() {
    let mut c = ModalController::new(FakeVideo::new());
    c.open(&category("music"));
    let calls = c.surface().play_calls.get();
    c.play();
    c.play();
    assert!(!c.surface().paused());
    assert_eq!(c.surface().play_calls.get(), calls);
}

#[test]
fn toggle_play_flips_state_and_icon() {
    let mut c = ModalController::new(FakeVideo::new());
    c.open(&category("music"));
    assert_eq!(c.toggle_play(), Some(PlayIcon::Play));
    assert!(c.surface().paused());
    assert_eq!(c.toggle_play(), Some(PlayIcon::Pause));
    assert!(!c.surface().paused());
}

#[test]
fn toggle_mute_flips_flag_and_icon() {
    let mut c = ModalController::new(FakeVideo::new());
    c.open(&category("music"));
    assert_eq!(c.toggle_mute(), Some(VolumeIcon::Muted));
    assert!(c.surface().muted());
    assert_eq!(c.toggle_mute(), Some(VolumeIcon::High));
    assert!(!c.surface().muted());
}

#[test]
fn seek_edges_map_to_zero_and_duration() {
    let mut c = ModalController::new(FakeVideo::new());
    c.open(&category("music"));
    c.surface().load_metadata(120.0);

    let left = seek_fraction(100.0, 100.0, 400.0);
    assert_eq!(c.seek_to_fraction(left), Some(0.0));
    assert_eq!(c.surface().current_time(), 0.0);

    let right = seek_fraction(500.0, 100.0, 400.0);
    assert_eq!(c.seek_to_fraction(right), Some(120.0));
    assert_eq!(c.surface().current_time(), 120.0);

    let middle = seek_fraction(300.0, 100.0, 400.0);
    assert_eq!(c.seek_to_fraction(middle), Some(60.0));
}

#[test]
fn seek_before_metadata_is_noop() {
    let mut c = ModalController::new(FakeVideo::new());
    c.open(&category("music"));
    c.surface().set_current_time(3.0);
    assert_eq!(c.seek_to_fraction(0.5), None);
    assert_eq!(c.surface().current_time(), 3.0);
}

#[test]
fn progress_tracks_current_time() {
    let mut c = ModalController::new(FakeVideo::new());
    c.open(&category("music"));
    assert!(c.progress().is_none());

    c.surface().load_metadata(200.0);
    c.surface().set_current_time(50.0);
    let frame = c.progress().unwrap();
    assert!((frame.percent - 25.0).abs() < 1e-9);
    assert_eq!(frame.current_label, "0:50");
    assert_eq!(frame.css_percent(), "25%");
}

#[test]
fn escape_closes_only_when_open() {
    assert!(closes_on_key(CANCEL_KEY, true));
    assert!(!closes_on_key(CANCEL_KEY, false));
    assert!(!closes_on_key("Enter", true));
    assert!(!closes_on_key("escape", true));
}
