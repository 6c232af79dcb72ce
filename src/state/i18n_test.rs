use super::*;

#[test]
fn every_language_has_distinct_menu_title() {
    let titles: Vec<_> = Language::ALL.iter().map(|l| strings(*l).menu_title).collect();
    for (i, a) in titles.iter().enumerate() {
        for b in &titles[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn nav_labels_follow_navbar_order() {
    assert_eq!(strings(Language::En).nav.in_order(), ["Home", "Blog", "Projects", "Services", "Contact"]);
    assert_eq!(strings(Language::Es).nav.in_order()[4], "Contacto");
}

#[test]
fn button_labels_are_translated() {
    assert_eq!(strings(Language::Ro).view_work, "Vezi Munca Mea");
    assert_eq!(strings(Language::Fr).get_in_touch, "Me Contacter");
}

#[test]
fn badge_matches_language_code() {
    for lang in Language::ALL {
        assert_eq!(badge(lang).code, lang.as_str().to_uppercase());
    }
    assert_eq!(badge(Language::En).flag, "images/language/us-flag.svg");
}
