use super::*;

#[test]
fn default_has_everything_closed() {
    let state = MenuState::default();
    assert_eq!(state.open_menu(), None);
    assert!(!state.is_mobile_open());
}

#[test]
fn toggle_opens_then_closes_the_same_menu() {
    let mut state = MenuState::default();
    state.toggle(MegaMenu::Blog);
    assert!(state.is_open(MegaMenu::Blog));
    state.toggle(MegaMenu::Blog);
    assert_eq!(state.open_menu(), None);
}

#[test]
fn opening_one_menu_closes_the_others() {
    let mut state = MenuState::default();
    state.toggle(MegaMenu::Language);
    state.toggle(MegaMenu::Services);

    assert!(state.is_open(MegaMenu::Services));
    let open_count = MegaMenu::ALL.iter().filter(|m| state.is_open(**m)).count();
    assert_eq!(open_count, 1);
}

#[test]
fn close_only_affects_the_named_menu() {
    let mut state = MenuState::default();
    state.toggle(MegaMenu::Projects);
    state.close(MegaMenu::Language);
    assert!(state.is_open(MegaMenu::Projects));
    state.close(MegaMenu::Projects);
    assert_eq!(state.open_menu(), None);
}

#[test]
fn mobile_menu_is_independent_of_mega_menus() {
    let mut state = MenuState::default();
    state.toggle_mobile();
    state.toggle(MegaMenu::Blog);
    assert!(state.is_mobile_open());
    assert!(state.is_open(MegaMenu::Blog));

    state.close_all();
    assert!(state.is_mobile_open());
    state.toggle_mobile();
    assert!(!state.is_mobile_open());
}

#[test]
fn outside_click_closes_everything() {
    let mut state = MenuState::default();
    state.toggle_mobile();
    state.toggle(MegaMenu::Language);

    state.on_document_click(ClickTarget::default());
    assert_eq!(state.open_menu(), None);
    assert!(!state.is_mobile_open());
}

#[test]
fn click_inside_panels_keeps_them_open() {
    let mut state = MenuState::default();
    state.toggle_mobile();
    state.toggle(MegaMenu::Services);

    state.on_document_click(ClickTarget { in_mega_menu: true, in_mobile_menu: true, ..ClickTarget::default() });
    assert!(state.is_open(MegaMenu::Services));
    assert!(state.is_mobile_open());

    state.on_document_click(ClickTarget { on_menu_toggle: true, ..ClickTarget::default() });
    assert!(state.is_open(MegaMenu::Services));
    assert!(!state.is_mobile_open());
}
