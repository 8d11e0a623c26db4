// Host-side tests for scroll-spy navigation over a fake page layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod scroll_spy {
        include!("../src/core/scroll_spy.rs");
    }
}

use crate::core::scroll_spy::*;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
struct FakeLayout {
    rects: HashMap<&'static str, SectionRect>,
    offsets: HashMap<&'static str, f64>,
}

impl FakeLayout {
    fn with(mut self, id: &'static str, top: f64, bottom: f64) -> Self {
        self.rects.insert(id, SectionRect { top, bottom });
        self
    }

    fn with_offset(mut self, id: &'static str, top: f64) -> Self {
        self.offsets.insert(id, top);
        self
    }
}

impl SectionLayout for FakeLayout {
    fn rect(&self, id: &str) -> Option<SectionRect> {
        self.rects.get(id).copied()
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.offsets.get(id).copied()
    }
}

#[derive(Default)]
struct FakeScroller {
    targets: RefCell<Vec<f64>>,
}

impl Scroller for FakeScroller {
    fn smooth_scroll_to(&self, top: f64) {
        self.targets.borrow_mut().push(top);
    }
}

#[test]
fn sections_are_listed_in_page_order() {
    let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        vec!["hero", "about", "education", "skills", "projects", "contact"]
    );
    assert_eq!(SECTIONS[0].label, "Home");
}

#[test]
fn spy_starts_on_the_first_section() {
    let spy = ScrollSpy::new(SECTIONS);
    assert_eq!(spy.active(), "hero");
    assert!(!spy.is_scrolled());
}

#[test]
fn straddling_section_becomes_active() {
    let layout = FakeLayout::default()
        .with("hero", -700.0, -100.0)
        .with("about", -100.0, 500.0)
        .with("education", 500.0, 1100.0);
    let mut spy = ScrollSpy::new(SECTIONS);
    let update = spy.update(700.0, &layout);
    assert!(update.active_changed);
    assert_eq!(spy.active(), "about");

    let again = spy.update(701.0, &layout);
    assert!(!again.active_changed);
}

#[test]
fn first_section_wins_when_two_straddle() {
    let layout = FakeLayout::default()
        .with("about", 0.0, 300.0)
        .with("education", 150.0, 900.0);
    let mut spy = ScrollSpy::new(SECTIONS);
    spy.update(400.0, &layout);
    assert_eq!(spy.active(), "about");
}

#[test]
fn reference_line_edges_are_inclusive() {
    let layout = FakeLayout::default().with("skills", 200.0, 800.0);
    let mut spy = ScrollSpy::new(SECTIONS);
    spy.update(900.0, &layout);
    assert_eq!(spy.active(), "skills");

    let layout = FakeLayout::default().with("projects", -400.0, 200.0);
    spy.update(1500.0, &layout);
    assert_eq!(spy.active(), "projects");
}

#[test]
fn gap_between_sections_keeps_previous_active() {
    let mut spy = ScrollSpy::new(SECTIONS);
    spy.update(800.0, &FakeLayout::default().with("about", 0.0, 400.0));
    assert_eq!(spy.active(), "about");

    let gap = FakeLayout::default()
        .with("about", -300.0, 100.0)
        .with("education", 250.0, 800.0);
    let update = spy.update(1100.0, &gap);
    assert!(!update.active_changed);
    assert_eq!(spy.active(), "about");
}

#[test]
fn top_of_page_keeps_hero_when_nothing_reaches_the_line() {
    let layout = SECTIONS
        .iter()
        .enumerate()
        .fold(FakeLayout::default(), |l, (i, s)| {
            let top = 250.0 + 600.0 * i as f64;
            l.with(s.id, top, top + 600.0)
        });
    let mut spy = ScrollSpy::new(SECTIONS);
    let update = spy.update(0.0, &layout);
    assert!(!update.active_changed);
    assert!(!update.scrolled_changed);
    assert_eq!(spy.active(), "hero");
}

#[test]
fn scrolled_flag_is_strictly_past_threshold() {
    let layout = FakeLayout::default();
    let mut spy = ScrollSpy::new(SECTIONS);
    assert!(!spy.update(100.0, &layout).scrolled_changed);
    assert!(!spy.is_scrolled());

    assert!(spy.update(101.0, &layout).scrolled_changed);
    assert!(spy.is_scrolled());
    assert!(!spy.update(400.0, &layout).scrolled_changed);

    assert!(spy.update(0.0, &layout).scrolled_changed);
    assert!(!spy.is_scrolled());
}

#[test]
fn scroll_to_targets_section_offset() {
    let layout = FakeLayout::default().with_offset("projects", 2400.0);
    let scroller = FakeScroller::default();
    let spy = ScrollSpy::new(SECTIONS);
    assert!(spy.scroll_to("projects", &layout, &scroller));
    assert_eq!(*scroller.targets.borrow(), vec![2400.0]);
}

#[test]
fn scroll_to_ignores_unknown_and_absent_sections() {
    let layout = FakeLayout::default().with_offset("blog", 10.0);
    let scroller = FakeScroller::default();
    let spy = ScrollSpy::new(SECTIONS);
    assert!(!spy.scroll_to("blog", &layout, &scroller));
    assert!(!spy.scroll_to("contact", &layout, &scroller));
    assert!(scroller.targets.borrow().is_empty());
}
