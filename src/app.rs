//! Root application component and shared context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::carousel::{FeaturedProjects, ServicesSection};
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::project_grid::ProjectGrid;
use crate::components::showcase::ShowcaseSection;
use crate::components::skill_ring::SkillRingSection;
use crate::state::i18n;
use crate::state::menu::MenuState;
use crate::state::prefs::Preferences;
use crate::state::skills::{CODING_SKILLS, SOFTWARE_SKILLS};
use crate::util::dom;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Loads stored preferences once, provides them and the menu state as
/// context, and mirrors theme and language onto `<html>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let prefs = RwSignal::new(Preferences::load(&BrowserStorage, dom::local_hour()));
    let menu = RwSignal::new(MenuState::default());
    provide_context(prefs);
    provide_context(menu);

    Effect::new(move || {
        let current = prefs.get();
        dom::apply_theme(current.theme);
        dom::apply_language(current.language);
    });

    let nav = move || &i18n::strings(prefs.get().language).nav;

    view! {
        <Title text="re:design | Portfolio"/>
        <Navbar/>
        <main>
            <Hero/>
            <section id="blog" class="blog">
                <h2 class="section-title">{move || nav().blog}</h2>
            </section>
            <section id="projects" class="projects">
                <h2 class="section-title">{move || nav().projects}</h2>
                <FeaturedProjects/>
                <ProjectGrid/>
            </section>
            <SkillRingSection id="coding-skills" heading="Coding Skills" skills=&CODING_SKILLS/>
            <SkillRingSection id="software-skills" heading="Software Skills" skills=&SOFTWARE_SKILLS/>
            <ShowcaseSection/>
            <ServicesSection/>
            <section id="contact" class="contact">
                <h2 class="section-title">{move || nav().contact}</h2>
                <a href="mailto:hello@example.com" class="btn btn-primary">
                    {move || i18n::strings(prefs.get().language).get_in_touch}
                </a>
            </section>
        </main>
    }
}
