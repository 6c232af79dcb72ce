use super::*;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { id: "home".to_owned(), top: 0.0, height: 700.0 },
        SectionBounds { id: "projects".to_owned(), top: 700.0, height: 900.0 },
        SectionBounds { id: "services".to_owned(), top: 1600.0, height: 800.0 },
    ]
}

#[test]
fn top_of_page_is_always_home() {
    assert_eq!(active_section(0.0, &sections()), Some("home"));
    assert_eq!(active_section(99.0, &[]), Some("home"));
}

#[test]
fn section_activates_ahead_of_its_top() {
    let sections = sections();
    assert_eq!(active_section(599.0, &sections), Some("home"));
    assert_eq!(active_section(600.0, &sections), Some("projects"));
    assert_eq!(active_section(1500.0, &sections), Some("services"));
}

#[test]
fn past_last_section_nothing_is_active() {
    assert_eq!(active_section(5000.0, &sections()), None);
}

#[test]
fn shadow_and_anchor_offsets() {
    assert!(!navbar_shadow(50.0));
    assert!(navbar_shadow(51.0));
    assert_eq!(anchor_scroll_target(1600.0), 1520.0);
}
