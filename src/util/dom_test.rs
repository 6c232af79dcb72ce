use super::*;

#[test]
fn headless_readers_return_fallbacks() {
    assert_eq!(viewport_width(), FALLBACK_VIEWPORT_WIDTH);
    assert_eq!(local_hour(), FALLBACK_HOUR);
    assert_eq!(scroll_y(), 0.0);
    assert_eq!(offset_top("home"), None);
    assert!(section_bounds().is_empty());
}

#[test]
fn headless_fallbacks_pick_desktop_and_light() {
    use crate::state::slider::{SliderConfig, SliderMode};

    let breakpoint = SliderConfig::default().mobile_breakpoint_px;
    assert_eq!(SliderMode::from_viewport_width(viewport_width(), breakpoint), SliderMode::Desktop);
    assert_eq!(Theme::for_hour(local_hour()), Theme::Light);
}

#[test]
fn headless_writers_are_noops() {
    apply_theme(Theme::Dark);
    apply_language(Language::Fr);
    smooth_scroll_to(120.0);
}
