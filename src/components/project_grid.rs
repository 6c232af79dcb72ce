//! Filterable project grid with "load more" paging.

use leptos::prelude::*;

use crate::state::projects::{Filter, PROJECT_CARDS, ProjectCatalog};

/// Filter buttons as `(data-filter value, label)`.
const FILTERS: [(&str, &str); 4] =
    [("all", "All"), ("redesign", "Redesigns"), ("landing", "Landing Pages"), ("web-app", "Web Apps")];

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let catalog = RwSignal::new(ProjectCatalog::from_cards(PROJECT_CARDS));

    let filter_buttons = FILTERS
        .into_iter()
        .map(|(value, label)| {
            let filter = Filter::from_attr(value);
            let selected = filter.clone();
            view! {
                <button
                    class="filter-btn"
                    class:active=move || catalog.with(|c| *c.filter() == selected)
                    on:click=move |_| {
                        let next = filter.clone();
                        catalog.update(|c| c.set_filter(next));
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let cards = PROJECT_CARDS
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let visible = move || catalog.with(|c| c.visibility().get(index).copied().unwrap_or(false));
            view! {
                <article class="project-card" class:hidden=move || !visible() data-category=card.category>
                    <img src=card.image alt=card.title loading="lazy"/>
                    <h3>{card.title}</h3>
                </article>
            }
        })
        .collect_view();

    view! {
        <div class="project-filters">{filter_buttons}</div>
        <div class="projects-grid">{cards}</div>
        <Show when=move || catalog.with(ProjectCatalog::shows_empty_message)>
            <p class="no-projects">"No projects found in this category."</p>
        </Show>
        <button
            class="load-more-btn"
            class:hidden=move || !catalog.with(ProjectCatalog::shows_load_more)
            on:click=move |_| catalog.update(ProjectCatalog::load_more)
        >
            "Load More"
        </button>
    }
}
