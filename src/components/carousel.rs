//! Horizontal slide carousels for featured projects and services.

use leptos::prelude::*;

use crate::state::carousel::Carousel;

const FEATURED: [(&str, &str, &str); 3] = [
    ("Ironcraft", "Industrial supplier site rebuilt mobile-first.", "images/projects/ironcraft-after.png"),
    ("Traffic Tamers", "Driving school redesign with online booking.", "images/projects/traffic-tamers-after.png"),
    ("Dental Clinic", "Clinic landing page with appointment flow.", "images/projects/dental.png"),
];

const SERVICES: [(&str, &str, &str); 4] = [
    ("fa-solid fa-wand-magic-sparkles", "Website Redesign", "Outdated sites rebuilt with modern layouts."),
    ("fa-solid fa-mobile-screen", "Responsive Design", "Layouts that hold up from phone to desktop."),
    ("fa-solid fa-gauge-high", "Performance", "Faster loads through leaner assets and markup."),
    ("fa-solid fa-screwdriver-wrench", "Maintenance", "Ongoing updates, fixes and content changes."),
];

/// Prev/next buttons around a sliding track.
#[component]
pub fn CarouselTrack(initial: Carousel, #[prop(into)] class: String, children: Children) -> impl IntoView {
    let carousel = RwSignal::new(initial);

    view! {
        <div class=format!("carousel {class}")>
            <button
                class="carousel-btn prev"
                aria-label="Previous"
                disabled=move || !carousel.get().can_go_prev()
                on:click=move |_| carousel.update(Carousel::prev)
            >
                <i class="fa-solid fa-chevron-left"></i>
            </button>
            <div class="carousel-viewport">
                <div class="carousel-track" style=move || carousel.get().track_style()>
                    {children()}
                </div>
            </div>
            <button
                class="carousel-btn next"
                aria-label="Next"
                disabled=move || !carousel.get().can_go_next()
                on:click=move |_| carousel.update(Carousel::next)
            >
                <i class="fa-solid fa-chevron-right"></i>
            </button>
        </div>
    }
}

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    view! {
        <CarouselTrack initial=Carousel::projects() class="projects-carousel">
            {FEATURED
                .iter()
                .map(|(title, blurb, image)| {
                    view! {
                        <article class="carousel-slide project-slide">
                            <img src=*image alt=*title/>
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </article>
                    }
                })
                .collect_view()}
        </CarouselTrack>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <h2 class="section-title">"Services"</h2>
            <CarouselTrack initial=Carousel::services() class="services-carousel">
                {SERVICES
                    .iter()
                    .map(|(icon, title, blurb)| {
                        view! {
                            <article class="carousel-slide service-slide">
                                <i class=*icon></i>
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </CarouselTrack>
        </section>
    }
}
