use super::*;

#[test]
fn starts_at_first_slide_with_prev_disabled() {
    let carousel = Carousel::projects();
    assert_eq!(carousel.index(), 0);
    assert!(!carousel.can_go_prev());
    assert!(carousel.can_go_next());
    assert_eq!(carousel.track_style(), "transform: translateX(0%);");
}

#[test]
fn next_saturates_at_max_index() {
    let mut carousel = Carousel::projects();
    for _ in 0..5 {
        carousel.next();
    }
    assert_eq!(carousel.index(), 2);
    assert!(!carousel.can_go_next());
    assert_eq!(carousel.offset_percent(), -204.0);
}

#[test]
fn prev_saturates_at_zero() {
    let mut carousel = Carousel::services();
    carousel.next();
    carousel.prev();
    carousel.prev();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn services_carousel_has_four_slides() {
    let mut carousel = Carousel::services();
    carousel.next();
    carousel.next();
    carousel.next();
    assert_eq!(carousel.index(), 3);
    assert_eq!(carousel.track_style(), "transform: translateX(-306%);");
}
