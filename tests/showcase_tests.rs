// Host-side tests for tab filtering, staggered entrances and skill bars.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod showcase {
        include!("../src/core/showcase.rs");
    }
}

use crate::core::showcase::*;

#[test]
fn tabs_parse_all_and_known_categories() {
    assert_eq!(parse_tab::<SkillCategory>("all"), Some(Tab::All));
    assert_eq!(
        parse_tab::<SkillCategory>(" design "),
        Some(Tab::Only(SkillCategory::Design))
    );
    assert_eq!(
        parse_tab::<ProjectCategory>("mobile"),
        Some(Tab::Only(ProjectCategory::Mobile))
    );
    assert_eq!(parse_tab::<SkillCategory>("web"), None);
    assert_eq!(parse_tab::<ProjectCategory>(""), None);
}

#[test]
fn category_names_round_trip() {
    for c in [SkillCategory::Programming, SkillCategory::Design, SkillCategory::Soft] {
        assert_eq!(SkillCategory::parse(c.as_str()), Some(c));
    }
    for c in [ProjectCategory::Web, ProjectCategory::Mobile, ProjectCategory::Other] {
        assert_eq!(ProjectCategory::parse(c.as_str()), Some(c));
    }
}

#[test]
fn filter_keeps_matching_items_and_hides_unknown() {
    use SkillCategory::*;
    let items = [Some(Programming), Some(Design), None, Some(Design)];
    assert_eq!(
        filter_mask(Tab::Only(Design), &items),
        vec![false, true, false, true]
    );
    assert_eq!(filter_mask(Tab::All, &items), vec![true; 4]);
    assert!(filter_mask(Tab::Only(Soft), &items).iter().all(|k| !k));
}

#[test]
fn stagger_counts_only_shown_items() {
    assert_eq!(stagger_delay_ms(0), 300);
    assert_eq!(stagger_delay_ms(3), 600);
    assert_eq!(
        stagger_delays(&[false, true, false, true, true]),
        vec![None, Some(300), None, Some(400), Some(500)]
    );
    assert!(stagger_delays(&[]).is_empty());
}

#[test]
fn stagger_saturates_instead_of_wrapping() {
    assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
}

#[test]
fn skill_bars_fill_only_when_visible() {
    assert_eq!(skill_bar_width(85, true), "85%");
    assert_eq!(skill_bar_width(85, false), "0%");
    assert_eq!(skill_bar_width(150, true), "100%");
    assert_eq!(skill_bar_width(0, true), "0%");
}
