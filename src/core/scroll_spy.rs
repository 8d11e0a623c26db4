use crate::constants::{NAV_REFERENCE_LINE, NAV_SCROLLED_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

/// Page sections in scroll order.
pub const SECTIONS: &[NavSection] = &[
    NavSection { id: "hero", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "education", label: "Education" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "contact", label: "Contact" },
];

/// Viewport-relative vertical extent of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    #[inline]
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

pub trait SectionLayout {
    /// Current viewport-relative rect, `None` when the section is absent.
    fn rect(&self, id: &str) -> Option<SectionRect>;
    /// Document offset used as a scroll target.
    fn offset_top(&self, id: &str) -> Option<f64>;
}

pub trait Scroller {
    fn smooth_scroll_to(&self, top: f64);
}

/// First section in list order whose rect straddles `line`.
pub fn section_at_line(
    sections: &[NavSection],
    layout: &impl SectionLayout,
    line: f64,
) -> Option<&'static str> {
    sections
        .iter()
        .find(|s| layout.rect(s.id).map_or(false, |r| r.straddles(line)))
        .map(|s| s.id)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpyUpdate {
    pub active_changed: bool,
    pub scrolled_changed: bool,
}

#[derive(Clone, Debug)]
pub struct ScrollSpy {
    sections: &'static [NavSection],
    active: &'static str,
    scrolled: bool,
    reference_line: f64,
    scrolled_threshold: f64,
}

impl ScrollSpy {
    /// Starts with the first section active.
    pub fn new(sections: &'static [NavSection]) -> Self {
        Self {
            sections,
            active: sections.first().map(|s| s.id).unwrap_or(""),
            scrolled: false,
            reference_line: NAV_REFERENCE_LINE,
            scrolled_threshold: NAV_SCROLLED_THRESHOLD,
        }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute state for a scroll tick. When no section straddles the
    /// reference line the previous active section is kept.
    pub fn update(&mut self, scroll_y: f64, layout: &impl SectionLayout) -> SpyUpdate {
        let mut out = SpyUpdate::default();
        let scrolled = scroll_y > self.scrolled_threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            out.scrolled_changed = true;
        }
        if let Some(id) = section_at_line(self.sections, layout, self.reference_line) {
            if id != self.active {
                self.active = id;
                out.active_changed = true;
            }
        }
        out
    }

    /// Smooth-scroll to a section. Unknown or absent sections are ignored.
    pub fn scroll_to(&self, id: &str, layout: &impl SectionLayout, scroller: &impl Scroller) -> bool {
        if !self.sections.iter().any(|s| s.id == id) {
            return false;
        }
        match layout.offset_top(id) {
            Some(top) => {
                scroller.smooth_scroll_to(top);
                true
            }
            None => false,
        }
    }
}
