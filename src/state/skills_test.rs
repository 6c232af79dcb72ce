use super::*;

const CENTER: Point = Point { x: 250.0, y: 250.0 };

fn assert_close(actual: Point, x: f64, y: f64) {
    assert!((actual.x - x).abs() < 1e-9, "x: {} != {x}", actual.x);
    assert!((actual.y - y).abs() < 1e-9, "y: {} != {y}", actual.y);
}

// =============================================================
// ring_slot
// =============================================================

#[test]
fn first_slot_is_at_twelve_o_clock() {
    assert_close(ring_slot(0, 4, CENTER, 220.0), 250.0, 30.0);
    assert_close(ring_slot(1, 4, CENTER, 220.0), 470.0, 250.0);
    assert_close(ring_slot(2, 4, CENTER, 220.0), 250.0, 470.0);
}

#[test]
fn empty_ring_collapses_to_center() {
    assert_eq!(ring_slot(0, 0, CENTER, 220.0), CENTER);
}

// =============================================================
// SkillRing
// =============================================================

#[test]
fn unfocused_ring_spaces_items_evenly() {
    let ring = SkillRing::new(CODING_SKILLS.len());
    let positions = ring.positions(CENTER);
    assert_eq!(positions.len(), 9);
    for p in positions {
        let r = ((p.x - CENTER.x).powi(2) + (p.y - CENTER.y).powi(2)).sqrt();
        assert!((r - RING_RADIUS_PX).abs() < 1e-9);
    }
}

#[test]
fn focusing_moves_item_to_center_and_closes_gap() {
    let mut ring = SkillRing::new(5);
    assert_eq!(ring.click(2), Some(SkillClick::Focused(2)));
    let positions = ring.positions(CENTER);

    assert_eq!(positions[2], CENTER);
    assert_close(positions[0], 250.0, 30.0);
    assert_close(positions[3], ring_slot(2, 4, CENTER, RING_RADIUS_PX).x, ring_slot(2, 4, CENTER, RING_RADIUS_PX).y);
    assert_close(positions[4], 30.0, 250.0);
}

#[test]
fn clicking_focused_item_resets() {
    let mut ring = SkillRing::new(5);
    ring.click(1);
    ring.click(3);
    assert_eq!(ring.focused(), Some(3));
    assert_eq!(ring.click(3), Some(SkillClick::Reset));
    assert_eq!(ring.focused(), None);
    assert_close(ring.positions(CENTER)[3], ring_slot(3, 5, CENTER, RING_RADIUS_PX).x, ring_slot(3, 5, CENTER, RING_RADIUS_PX).y);
}

#[test]
fn single_item_focus_has_no_ring() {
    let mut ring = SkillRing::new(1);
    ring.click(0);
    assert_eq!(ring.positions(CENTER), vec![CENTER]);
}

#[test]
fn out_of_range_click_is_ignored() {
    let mut ring = SkillRing::new(3);
    assert_eq!(ring.click(3), None);
    assert_eq!(ring.focused(), None);
}

// =============================================================
// Tables and panels
// =============================================================

#[test]
fn skill_tables_have_expected_sizes() {
    assert_eq!(CODING_SKILLS.len(), 9);
    assert_eq!(SOFTWARE_SKILLS.len(), 13);
    assert_eq!(SOFTWARE_SKILLS[3].icon_class, Some("icon-figma"));
}

#[test]
fn ai_icon_follows_theme() {
    let ai = SOFTWARE_SKILLS[0];
    assert_eq!(ai.image_for(Theme::Light), "images/skills/Ai-light.svg");
    assert_eq!(ai.image_for(Theme::Dark), "images/skills/Ai-dark.svg");
    assert_eq!(CODING_SKILLS[0].image_for(Theme::Light), "images/skills/HTML5.svg");
}

#[test]
fn panel_scroll_thresholds() {
    let mut panel = PanelScroll { scroll_top: 0.0, client_height: 200.0, scroll_height: 500.0 };
    assert!(panel.can_scroll_down());
    assert!(panel.indicator_visible());

    panel.scroll_top = 285.0;
    assert!(panel.can_scroll_down());
    assert!(!panel.indicator_visible());

    panel.scroll_top = 295.0;
    assert!(!panel.can_scroll_down());
}

#[test]
fn point_style_uses_pixels() {
    assert_eq!(Point::center_of(500.0, 400.0).style(), "left: 250px; top: 200px;");
}

// =============================================================
// Descriptions and dots
// =============================================================

#[test]
fn every_skill_has_a_description() {
    for skill in CODING_SKILLS.iter().chain(SOFTWARE_SKILLS.iter()) {
        assert!(description(skill.content_key).is_some(), "missing {}", skill.content_key);
    }
    assert_eq!(description("cobol-desc"), None);
}

#[test]
fn dot_motion_is_stable_per_key() {
    assert_eq!(DotMotion::for_key("html-desc"), DotMotion::for_key("html-desc"));
    assert_eq!(DotMotion::for_key("html-desc").style(), "animation: move-dot-forward 4.61s linear infinite;");
    assert_eq!(DotMotion::for_key("css-desc").style(), "animation: move-dot-backward 2.75s linear infinite;");
}

#[test]
fn dot_motions_vary_within_range() {
    let motions: Vec<DotMotion> =
        CODING_SKILLS.iter().chain(SOFTWARE_SKILLS.iter()).map(|s| DotMotion::for_key(s.content_key)).collect();
    for m in &motions {
        assert!((DOT_MIN_SECS..DOT_MIN_SECS + DOT_SPREAD_SECS).contains(&m.duration_secs));
    }
    assert!(motions.iter().any(|m| m.forward));
    assert!(motions.iter().any(|m| !m.forward));
}
