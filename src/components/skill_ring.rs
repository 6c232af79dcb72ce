//! Radial skill showcase with a description panel.

use leptos::prelude::*;

use crate::state::prefs::Preferences;
use crate::state::skills::{DotMotion, INTRO_STAGGER_MS, PanelScroll, Point, Skill, SkillRing, description};

/// Fallback container size before the ring is measured.
const DEFAULT_RING_PX: f64 = 560.0;

#[component]
pub fn SkillRingSection(
    #[prop(into)] id: String,
    #[prop(into)] heading: String,
    skills: &'static [Skill],
) -> impl IntoView {
    let prefs = expect_context::<RwSignal<Preferences>>();
    let ring_ref = NodeRef::<leptos::html::Div>::new();
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let ring = RwSignal::new(SkillRing::new(skills.len()));
    let center = RwSignal::new(Point::center_of(DEFAULT_RING_PX, DEFAULT_RING_PX));
    let panel = RwSignal::new(PanelScroll::default());
    let intro = RwSignal::new(false);

    let measure = move || {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = ring_ref.get_untracked() {
                let rect = el.get_bounding_client_rect();
                center.set(Point::center_of(rect.width(), rect.height()));
            }
        }
    };
    let read_panel = move || {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = panel_ref.get_untracked() {
                panel.set(PanelScroll {
                    scroll_top: f64::from(el.scroll_top()),
                    client_height: f64::from(el.client_height()),
                    scroll_height: f64::from(el.scroll_height()),
                });
            }
        }
    };

    Effect::new(move || {
        if ring_ref.get().is_some() {
            measure();
        }
    });

    #[cfg(feature = "csr")]
    {
        let intro_delay = crate::state::skills::INTRO_DELAY_MS;
        gloo_timers::callback::Timeout::new(intro_delay, move || intro.set(true)).forget();
        let on_resize = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || on_resize.remove());
    }

    let on_skill_click = move |index: usize| {
        if ring.try_update(|r| r.click(index)).flatten().is_none() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(el) = panel_ref.get_untracked() {
                el.set_scroll_top(0);
            }
        }
        read_panel();
    };

    let focused = move || ring.get().focused().and_then(|i| skills.get(i));

    let items = skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let skill = *skill;
            let delay = u32::try_from(index).unwrap_or(0) * INTRO_STAGGER_MS;
            let dot_style = DotMotion::for_key(skill.content_key).style();
            let style = move || {
                let position = ring.with(|r| r.positions(center.get()).get(index).copied());
                format!(
                    "{} --border-color: {}; transition-delay: {delay}ms;",
                    position.map(Point::style).unwrap_or_default(),
                    skill.color,
                )
            };
            view! {
                <div
                    class="skill"
                    class:revealed=move || intro.get()
                    class:center=move || ring.get().focused() == Some(index)
                    class:skill-active=move || ring.get().focused() == Some(index)
                    style=style
                    on:click=move |_| on_skill_click(index)
                >
                    <div class="skill-img">
                        <img
                            src=move || skill.image_for(prefs.get().theme)
                            alt=skill.title
                            class=skill.icon_class.unwrap_or_default()
                        />
                    </div>
                    <div class="dot-container">
                        <div class="moving-dot" style=dot_style></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=id class="skills">
            <h2 class="section-title">{heading}</h2>
            <div class="skills-layout">
                <div class="circle-container" node_ref=ring_ref>
                    {items}
                </div>
                <div class="skill-info" class:can-scroll-down=move || panel.get().can_scroll_down()>
                    <h3 class="skill-title" style=move || focused().map(|s| format!("color: {};", s.color)).unwrap_or_default()>
                        {move || focused().map_or("Pick a skill", |s| s.title)}
                    </h3>
                    <div class="skill-description" node_ref=panel_ref on:scroll=move |_| read_panel()>
                        {move || {
                            focused()
                                .map(|s| {
                                    view! {
                                        <div class=format!("desc-active {}", s.content_key)>
                                            <p>{description(s.content_key).unwrap_or_default()}</p>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                    <div
                        class="scroll-indicator"
                        style=move || if focused().is_some() && panel.get().indicator_visible() { "opacity: 1;" } else { "opacity: 0;" }
                    >
                        <i class="fa-solid fa-chevron-down"></i>
                    </div>
                </div>
            </div>
        </section>
    }
}
