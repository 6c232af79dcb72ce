//! Hero section: greeting, typewriter role line, calls to action and the
//! comparison slider.

use leptos::prelude::*;

use super::compare_slider::CompareSlider;
use crate::state::i18n;
use crate::state::prefs::Preferences;
use crate::state::typewriter::Typewriter;

/// Words cycled by the typewriter, as a JSON array.
const TYPEWRITER_WORDS: &str = r#"["Web Developer", "UI Designer", "Website Redesigner"]"#;
/// Hold after a fully typed word, in milliseconds.
const TYPEWRITER_WAIT: &str = "3000";

#[cfg(feature = "csr")]
mod typing {
    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;

    use crate::state::typewriter::Typewriter;

    pub type Slot = StoredValue<Option<Typewriter>, LocalStorage>;
    pub type Pending = StoredValue<Option<Timeout>, LocalStorage>;

    /// Arm the next step `delay_ms` from now, replacing any pending one.
    pub fn schedule(typewriter: Slot, pending: Pending, text: RwSignal<String>, delay_ms: u32) {
        let timeout = Timeout::new(delay_ms, move || {
            let stepped = typewriter
                .try_update_value(|slot| {
                    slot.as_mut().map(|tw| {
                        let delay = tw.step();
                        (tw.text(), delay)
                    })
                })
                .flatten();
            if let Some((typed, delay)) = stepped {
                text.set(typed);
                schedule(typewriter, pending, text, delay);
            }
        });
        pending.set_value(Some(timeout));
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let prefs = expect_context::<RwSignal<Preferences>>();
    let strings = move || i18n::strings(prefs.get().language);
    let typed = RwSignal::new(String::new());

    let typewriter = match Typewriter::from_attrs(TYPEWRITER_WORDS, Some(TYPEWRITER_WAIT)) {
        Ok(tw) => Some(tw),
        Err(e) => {
            log::warn!("typewriter disabled: {e}");
            None
        }
    };
    let enabled = typewriter.is_some();

    #[cfg(feature = "csr")]
    {
        if let Some(tw) = typewriter {
            let start = tw.timing().start_ms;
            let slot = StoredValue::new_local(Some(tw));
            let pending: typing::Pending = StoredValue::new_local(None);
            typing::schedule(slot, pending, typed, start);
            on_cleanup(move || {
                pending.try_update_value(Option::take);
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = typewriter;

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <p class="hero-greeting">{move || strings().greeting}</p>
                <h1 class="hero-role">
                    {move || strings().role}
                    <Show when=move || enabled>
                        <span class="txt-type">
                            <span class="txt">{move || typed.get()}</span>
                        </span>
                    </Show>
                </h1>
                <p class="hero-description" inner_html=move || strings().description></p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">{move || strings().view_work}</a>
                    <a href="#contact" class="btn btn-secondary">{move || strings().get_in_touch}</a>
                </div>
            </div>
            <CompareSlider/>
        </section>
    }
}
