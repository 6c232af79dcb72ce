//! Fixed top navigation: section links, mega menus, language and theme.

use leptos::prelude::*;

use crate::state::i18n;
#[cfg(feature = "csr")]
use crate::state::menu::ClickTarget;
use crate::state::menu::{MegaMenu, MenuState};
use crate::state::nav::{self, NAV_SECTIONS};
use crate::state::prefs::{Language, Preferences, Theme};
use crate::util::dom;
use crate::util::storage::BrowserStorage;

/// Link lists shown in the blog, projects and services panels.
const MEGA_LINKS: [(MegaMenu, &[(&str, &str)]); 3] = [
    (
        MegaMenu::Blog,
        &[("Redesign case studies", "#blog"), ("Frontend notes", "#blog"), ("Tooling", "#blog")],
    ),
    (
        MegaMenu::Projects,
        &[("Redesigns", "#projects"), ("Landing pages", "#projects"), ("Web apps", "#projects")],
    ),
    (
        MegaMenu::Services,
        &[("Website redesign", "#services"), ("Responsive layouts", "#services"), ("Maintenance", "#services")],
    ),
];

#[cfg(feature = "csr")]
fn classify_click(e: &leptos::ev::MouseEvent) -> ClickTarget {
    use wasm_bindgen::JsCast;

    let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return ClickTarget::default();
    };
    let inside = |selector: &str| el.closest(selector).ok().flatten().is_some();
    ClickTarget {
        on_menu_toggle: inside(".mega-toggle"),
        in_mega_menu: inside(".mega-menu"),
        in_mobile_menu: inside(".mobile-menu, .mobile-toggle"),
    }
}

/// Smooth-scroll to the section behind `#id` and close the mobile menu.
fn follow_anchor(e: &leptos::ev::MouseEvent, id: &str, menu: RwSignal<MenuState>) {
    e.prevent_default();
    if let Some(top) = dom::offset_top(id) {
        dom::smooth_scroll_to(nav::anchor_scroll_target(top));
    }
    menu.update(MenuState::close_mobile);
}

#[component]
pub fn Navbar() -> impl IntoView {
    let prefs = expect_context::<RwSignal<Preferences>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let active = RwSignal::new(Some("home".to_owned()));
    let shadow = RwSignal::new(false);

    let refresh_scroll = move || {
        let y = dom::scroll_y();
        let bounds = dom::section_bounds();
        let next = nav::active_section(y, &bounds).map(str::to_owned);
        if next.is_some() {
            active.set(next);
        }
        shadow.set(nav::navbar_shadow(y));
    };

    #[cfg(feature = "csr")]
    {
        Effect::new(refresh_scroll);
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| refresh_scroll());
        let on_click = window_event_listener(leptos::ev::click, move |e| {
            let target = classify_click(&e);
            menu.update(|m| m.on_document_click(target));
        });
        on_cleanup(move || {
            on_scroll.remove();
            on_click.remove();
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = refresh_scroll;

    let strings = move || i18n::strings(prefs.get().language);
    let badge = move || i18n::badge(prefs.get().language);
    let theme = move || prefs.get().theme;

    let toggle_theme = move |_| {
        prefs.update(|p| {
            let next = p.toggle_theme(&mut BrowserStorage);
            log::debug!("theme -> {next}");
        });
    };
    let pick_language = move |language: Language| {
        prefs.update(|p| p.set_language(&mut BrowserStorage, language));
        menu.update(|m| m.close(MegaMenu::Language));
    };

    let nav_links = move |class: &'static str| {
        NAV_SECTIONS
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let id = *id;
                view! {
                    <a
                        href=format!("#{id}")
                        class=class
                        class:active=move || active.get().as_deref() == Some(id)
                        on:click=move |e| follow_anchor(&e, id, menu)
                    >
                        {move || strings().nav.in_order()[i]}
                    </a>
                }
            })
            .collect_view()
    };

    let mega_panels = MEGA_LINKS
        .iter()
        .map(|(which, links)| {
            let which = *which;
            view! {
                <div class="mega-item">
                    <button
                        class=format!("mega-toggle {}-toggle", which.slug())
                        aria-expanded=move || menu.get().is_open(which).to_string()
                        on:click=move |_| menu.update(|m| m.toggle(which))
                    >
                        {which.slug()}
                        <i class="fa-solid fa-chevron-down"></i>
                    </button>
                    <div class=format!("mega-menu {}-menu", which.slug()) class:open=move || menu.get().is_open(which)>
                        {links
                            .iter()
                            .map(|(label, href)| view! { <a href=*href class="mega-link">{*label}</a> })
                            .collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    let language_options = Language::ALL
        .into_iter()
        .map(|language| {
            let option = i18n::badge(language);
            view! {
                <button
                    class="lang-option"
                    class:selected=move || prefs.get().language == language
                    on:click=move |_| pick_language(language)
                >
                    <img src=option.flag alt=option.alt/>
                    <span>{option.code}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" class:scrolled=move || shadow.get()>
            <a href="#home" class="nav-brand" on:click=move |e| follow_anchor(&e, "home", menu)>
                "re:design"
            </a>
            <div class="nav-links">{nav_links("nav-link")}</div>
            <div class="nav-mega">{mega_panels}</div>
            <div class="nav-actions">
                <div class="mega-item">
                    <button
                        class="mega-toggle lang-toggle"
                        aria-expanded=move || menu.get().is_open(MegaMenu::Language).to_string()
                        on:click=move |_| menu.update(|m| m.toggle(MegaMenu::Language))
                    >
                        <img src=move || badge().flag alt=move || badge().alt/>
                        <span>{move || badge().code}</span>
                    </button>
                    <div class="mega-menu lang-menu" class:open=move || menu.get().is_open(MegaMenu::Language)>
                        <h3 class="mega-title">{move || strings().menu_title}</h3>
                        {language_options}
                    </div>
                </div>
                <button class="theme-toggle" aria-label=move || theme().toggle_label() on:click=toggle_theme>
                    <i class=move || match theme() {
                        Theme::Light => "fa-solid fa-moon",
                        Theme::Dark => "fa-solid fa-sun",
                    }></i>
                </button>
                <button
                    class="mobile-toggle"
                    aria-label="Toggle menu"
                    class:open=move || menu.get().is_mobile_open()
                    on:click=move |_| menu.update(MenuState::toggle_mobile)
                >
                    <i class="fa-solid fa-bars"></i>
                </button>
            </div>
            <div class="mobile-menu" class:open=move || menu.get().is_mobile_open()>
                {nav_links("mobile-nav-link")}
            </div>
        </nav>
    }
}
