// Host-side tests for catalog lookup and selection resolution.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod catalog {
    include!("../src/core/catalog.rs");
}

use catalog::*;

#[test]
fn known_keys_resolve_to_their_entry() {
    for entry in CATALOG {
        let r = resolve(&SelectionRequest::Category(entry.key.to_string()));
        assert_eq!(r.source_url, entry.source_url);
        assert_eq!(r.title, entry.title);
        assert_eq!(r.description, entry.description);
    }
}

#[test]
fn unknown_keys_fall_back() {
    for key in ["unknown", "", "Music", "commercial "] {
        let r = resolve(&SelectionRequest::Category(key.to_string()));
        assert_eq!(r, Resolved::from(&FALLBACK), "key {:?}", key);
    }
}

#[test]
fn catalog_keys_are_unique_and_include_fallback() {
    let mut keys: Vec<&str> = CATALOG.iter().map(|e| e.key).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), CATALOG.len());
    assert_eq!(lookup(FALLBACK.key), &FALLBACK);
}

#[test]
fn explicit_source_is_returned_verbatim() {
    let r = resolve(&SelectionRequest::Explicit {
        source_url: "videos/x.mp4".to_string(),
        title: "T".to_string(),
        description: "D".to_string(),
    });
    assert_eq!(r.source_url, "videos/x.mp4");
    assert_eq!(r.title, "T");
    assert_eq!(r.description, "D");
}

#[test]
fn video_attribute_wins_over_category() {
    let req = SelectionRequest::from_attributes(Some("x.mp4"), Some("music"), "T", "D");
    assert_eq!(
        req,
        SelectionRequest::Explicit {
            source_url: "x.mp4".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
        }
    );
    assert_eq!(resolve(&req).source_url, "x.mp4");
}

#[test]
fn empty_video_attribute_uses_category() {
    let req = SelectionRequest::from_attributes(Some("  "), Some("social"), "T", "D");
    assert_eq!(req, SelectionRequest::Category("social".to_string()));
    assert_eq!(resolve(&req).title, "Social Reels Collection");
}

#[test]
fn tile_without_any_attribute_gets_fallback() {
    let req = SelectionRequest::from_attributes(None, None, "", "");
    assert_eq!(resolve(&req).source_url, FALLBACK.source_url);
}

#[test]
fn explicit_tile_text_is_trimmed() {
    let req = SelectionRequest::from_attributes(Some("a.mp4"), None, "\n  Reel  ", " Cut ");
    let r = resolve(&req);
    assert_eq!(r.title, "Reel");
    assert_eq!(r.description, "Cut");
}
