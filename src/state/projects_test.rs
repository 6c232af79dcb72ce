use super::*;

fn catalog(n_web: usize, n_landing: usize) -> ProjectCatalog {
    let categories = std::iter::repeat_n("web", n_web).chain(std::iter::repeat_n("landing", n_landing));
    ProjectCatalog::new(categories)
}

#[test]
fn initially_shows_first_six() {
    let catalog = catalog(8, 4);
    let visibility = catalog.visibility();
    assert_eq!(visibility.iter().filter(|v| **v).count(), 6);
    assert!(visibility[..6].iter().all(|v| *v));
    assert!(catalog.shows_load_more());
    assert!(!catalog.shows_empty_message());
}

#[test]
fn load_more_reveals_next_page_then_hides_button() {
    let mut catalog = catalog(8, 4);
    catalog.load_more();
    assert_eq!(catalog.visible_total(), 12);
    assert!(!catalog.shows_load_more());
}

#[test]
fn category_filter_resets_pagination_and_hides_button() {
    let mut catalog = catalog(8, 4);
    catalog.load_more();
    catalog.set_filter(Filter::from_attr("landing"));

    let visibility = catalog.visibility();
    assert!(visibility[..8].iter().all(|v| !*v));
    assert!(visibility[8..].iter().all(|v| *v));
    assert!(!catalog.shows_load_more());

    catalog.set_filter(Filter::from_attr("web"));
    assert_eq!(catalog.visible_total(), 6);
}

#[test]
fn unknown_category_shows_empty_message() {
    let mut catalog = catalog(3, 0);
    catalog.set_filter(Filter::Category("mobile".to_owned()));
    assert!(catalog.shows_empty_message());
}

#[test]
fn small_catalog_has_no_load_more() {
    let catalog = ProjectCatalog::from_cards(&PROJECT_CARDS[..4]);
    assert_eq!(catalog.visible_total(), 4);
    assert!(!catalog.shows_load_more());
    assert_eq!(Filter::from_attr("all"), Filter::All);
}
