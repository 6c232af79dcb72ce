//! Showcase gallery: manual before/after cards and staged loading.

use leptos::prelude::*;

use crate::state::showcase::{LoadMoreStatus, ShowcaseGallery, ShowcaseSlider};

struct ShowcaseItem {
    title: &'static str,
    before: &'static str,
    after: &'static str,
}

const fn item(title: &'static str, before: &'static str, after: &'static str) -> ShowcaseItem {
    ShowcaseItem { title, before, after }
}

/// Always visible.
const FEATURED_ITEMS: [ShowcaseItem; 2] = [
    item("Ironcraft", "images/projects/ironcraft-before.png", "images/projects/ironcraft-after.png"),
    item("Traffic Tamers", "images/projects/traffic-tamers-before.png", "images/projects/traffic-tamers-after.png"),
];

/// Revealed two at a time by "Load More".
const HIDDEN_ITEMS: [ShowcaseItem; 4] = [
    item("Dental Clinic", "images/showcase/dental-before.png", "images/showcase/dental-after.png"),
    item("Law Office", "images/showcase/law-office-before.png", "images/showcase/law-office-after.png"),
    item("Bakery", "images/showcase/bakery-before.png", "images/showcase/bakery-after.png"),
    item("Auto Repair", "images/showcase/auto-repair-before.png", "images/showcase/auto-repair-after.png"),
];

/// One hand-dragged before/after card.
#[component]
fn ShowcaseCard(title: &'static str, before: &'static str, after: &'static str) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let slider = RwSignal::new(ShowcaseSlider::default());

    #[cfg(feature = "csr")]
    let width = move || container_ref.get_untracked().map_or(0.0, |el| el.get_bounding_client_rect().width());

    #[cfg(feature = "csr")]
    {
        let on_move = window_event_listener(leptos::ev::mousemove, move |e| {
            if slider.with_untracked(ShowcaseSlider::is_dragging) {
                let x = f64::from(e.client_x());
                let w = width();
                slider.update(|s| s.update_drag(x, w));
            }
        });
        let on_up = window_event_listener(leptos::ev::mouseup, move |_| {
            if slider.with_untracked(ShowcaseSlider::is_dragging) {
                slider.update(ShowcaseSlider::end_drag);
            }
        });
        on_cleanup(move || {
            on_move.remove();
            on_up.remove();
        });
    }

    let on_mouse_down = move |e: leptos::ev::MouseEvent| {
        e.prevent_default();
        #[cfg(feature = "csr")]
        {
            let x = f64::from(e.client_x());
            slider.update(|s| s.begin_drag(x));
        }
    };
    let on_touch_start = move |e: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(touch) = e.touches().get(0) {
                let x = f64::from(touch.client_x());
                slider.update(|s| s.begin_drag(x));
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = e;
    };
    let on_touch_move = move |e: leptos::ev::TouchEvent| {
        if !slider.with_untracked(ShowcaseSlider::is_dragging) {
            return;
        }
        e.prevent_default();
        #[cfg(feature = "csr")]
        {
            if let Some(touch) = e.touches().get(0) {
                let x = f64::from(touch.client_x());
                let w = width();
                slider.update(|s| s.update_drag(x, w));
            }
        }
    };

    view! {
        <div
            class="before-after-container"
            class:dragging=move || slider.with(ShowcaseSlider::is_dragging)
            node_ref=container_ref
        >
            <img class="before-image" src=before alt=format!("{title} before") loading="lazy"/>
            <img
                class="after-image"
                src=after
                alt=format!("{title} after")
                loading="lazy"
                style=move || format!("clip-path: {};", slider.with(ShowcaseSlider::clip_path))
            />
            <div
                class="slider-handle"
                style=move || slider.with(ShowcaseSlider::handle_style)
                on:mousedown=on_mouse_down
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=move |_| slider.update(ShowcaseSlider::end_drag)
            >
                <div class="handle-circle">
                    <i class="fa-solid fa-arrows-left-right"></i>
                </div>
            </div>
        </div>
        <h3 class="showcase-title">{title}</h3>
    }
}

#[component]
pub fn ShowcaseSection() -> impl IntoView {
    let gallery = RwSignal::new(ShowcaseGallery::new(HIDDEN_ITEMS.len()));
    let status = move || gallery.with(ShowcaseGallery::status);

    let on_load_more = move |_| {
        if !gallery.try_update(ShowcaseGallery::begin_load).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            use crate::state::showcase::{LOAD_DELAY_MS, VIEW_ALL_DELAY_MS};
            use gloo_timers::callback::Timeout;

            Timeout::new(LOAD_DELAY_MS, move || {
                let Some(revealed) = gallery.try_update(ShowcaseGallery::finish_load) else {
                    return;
                };
                log::debug!("showcase revealed items {revealed:?}");
                if gallery.with_untracked(|g| g.status() == LoadMoreStatus::Exhausted) {
                    Timeout::new(VIEW_ALL_DELAY_MS, move || gallery.update(ShowcaseGallery::show_view_all)).forget();
                }
            })
            .forget();
        }
    };

    let featured = FEATURED_ITEMS
        .iter()
        .map(|it| {
            view! {
                <div class="showcase-item">
                    <ShowcaseCard title=it.title before=it.before after=it.after/>
                </div>
            }
        })
        .collect_view();

    let hidden = HIDDEN_ITEMS
        .iter()
        .enumerate()
        .map(|(index, it)| {
            let revealed = move || gallery.with(|g| g.is_revealed(index));
            let delay = ShowcaseGallery::reveal_delay_ms(index);
            view! {
                <div
                    class="showcase-item"
                    class:hidden=move || !revealed()
                    class:animate-in=revealed
                    style=format!("animation-delay: {delay}ms;")
                >
                    <ShowcaseCard title=it.title before=it.before after=it.after/>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="showcase" class="showcase">
            <h2 class="section-title">"Before & After"</h2>
            <div class="showcase-grid">
                {featured}
                {hidden}
            </div>
            <div class="load-more-container">
                <Show when=move || matches!(status(), LoadMoreStatus::Ready | LoadMoreStatus::Loading)>
                    <button
                        id="loadMoreBtn"
                        class="load-more-btn"
                        class:loading=move || status() == LoadMoreStatus::Loading
                        on:click=on_load_more
                    >
                        "Load More"
                    </button>
                </Show>
                <p class="load-more-text">
                    {move || match status() {
                        LoadMoreStatus::Exhausted => Some(view! { <span>"All projects loaded!"</span> }.into_any()),
                        LoadMoreStatus::ViewAll => Some(
                            view! {
                                <a href="/projects" class="view-all-projects-btn animate-in">
                                    <span class="btn-content">
                                        <i class="fa-solid fa-arrow-right"></i>
                                        <span class="btn-text">"View All Projects"</span>
                                    </span>
                                </a>
                            }
                            .into_any(),
                        ),
                        LoadMoreStatus::Ready | LoadMoreStatus::Loading => None,
                    }}
                </p>
            </div>
        </section>
    }
}
