// Host-side tests for one-shot visibility latches and reveal watches.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod visibility {
        include!("../src/core/visibility.rs");
    }
}

use crate::core::visibility::*;

#[test]
fn latch_fires_exactly_once_at_threshold() {
    let mut watch = RevealWatch::new(0.2);
    let fired: Vec<bool> = [0.0, 0.1, 0.2, 0.0, 0.9]
        .iter()
        .map(|r| watch.observe(*r))
        .collect();
    assert_eq!(fired, vec![false, false, true, false, false]);
    assert!(watch.is_visible());
    assert_eq!(watch.state(), WatchState::Fired);
}

#[test]
fn leaving_the_viewport_never_hides_again() {
    let mut latch = VisibilityLatch::default();
    assert!(latch.observe(0.5, 0.2));
    assert!(!latch.observe(0.0, 0.2));
    assert!(latch.is_visible());
}

#[test]
fn nan_ratio_never_fires() {
    let mut watch = RevealWatch::new(0.2);
    assert!(!watch.observe(f64::NAN));
    assert_eq!(watch.state(), WatchState::Armed);
}

#[test]
fn zero_threshold_fires_on_first_sample() {
    let mut watch = RevealWatch::new(0.0);
    assert!(watch.observe(0.0));
}

#[test]
fn dispose_before_firing_disarms() {
    let mut watch = RevealWatch::new(0.2);
    assert!(watch.dispose());
    assert_eq!(watch.state(), WatchState::Disposed);
    assert!(!watch.observe(1.0));
    assert!(!watch.is_visible());
    assert!(!watch.dispose());
}

#[test]
fn dispose_after_firing_keeps_the_reveal() {
    let mut watch = RevealWatch::new(0.2);
    watch.observe(0.3);
    assert!(!watch.dispose());
    assert_eq!(watch.state(), WatchState::Fired);
    assert!(watch.is_visible());
}

#[test]
fn registry_tracks_sections_independently() {
    let mut reg = VisibilityRegistry::default();
    assert!(!reg.is_visible("about"));
    assert!(reg.mark_visible("about"));
    assert!(!reg.mark_visible("about"));
    assert!(reg.mark_visible("skills"));
    assert!(reg.is_visible("about"));
    assert!(!reg.is_visible("contact"));
    assert_eq!(reg.visible_count(), 2);
}
