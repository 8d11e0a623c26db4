use crate::constants::{STAGGER_BASE_MS, STAGGER_STEP_MS};

/// A filter tab: everything, or one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab<C> {
    All,
    Only(C),
}

impl<C: PartialEq> Tab<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            Tab::All => true,
            Tab::Only(c) => c == category,
        }
    }
}

pub trait Category: Sized + Copy + PartialEq {
    fn parse(s: &str) -> Option<Self>;
    fn as_str(&self) -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Programming,
    Design,
    Soft,
}

impl Category for SkillCategory {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "programming" => Some(Self::Programming),
            "design" => Some(Self::Design),
            "soft" => Some(Self::Soft),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Design => "design",
            Self::Soft => "soft",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Other,
}

impl Category for ProjectCategory {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "web" => Some(Self::Web),
            "mobile" => Some(Self::Mobile),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Other => "other",
        }
    }
}

/// `"all"` or a category name from a `data-tab` attribute.
pub fn parse_tab<C: Category>(s: &str) -> Option<Tab<C>> {
    match s.trim() {
        "all" => Some(Tab::All),
        other => C::parse(other).map(Tab::Only),
    }
}

/// Visibility per item under `tab`; items with an unknown category are only
/// shown under `All`.
pub fn filter_mask<C: Category>(tab: Tab<C>, categories: &[Option<C>]) -> Vec<bool> {
    categories
        .iter()
        .map(|c| match (tab, c) {
            (Tab::All, _) => true,
            (Tab::Only(_), None) => false,
            (t, Some(c)) => t.matches(c),
        })
        .collect()
}

/// Transition delay for the `index`-th shown item.
#[inline]
pub fn stagger_delay_ms(index: usize) -> u32 {
    STAGGER_BASE_MS.saturating_add(STAGGER_STEP_MS.saturating_mul(index as u32))
}

/// Delays for shown items, counting only the ones the mask keeps.
pub fn stagger_delays(mask: &[bool]) -> Vec<Option<u32>> {
    let mut shown = 0usize;
    mask.iter()
        .map(|&keep| {
            keep.then(|| {
                let d = stagger_delay_ms(shown);
                shown += 1;
                d
            })
        })
        .collect()
}

/// Skill bar width; bars stay collapsed until their section is revealed.
pub fn skill_bar_width(level: u8, visible: bool) -> String {
    if visible {
        format!("{}%", level.min(100))
    } else {
        "0%".to_string()
    }
}
