//! Hero before/after comparison slider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in a local `StoredValue`; every input handler and timer
//! callback mutates it through [`drive`], which republishes a
//! [`SliderView`] snapshot into a signal for rendering. Mouse move/up are
//! window listeners so a drag survives leaving the handle; touch events stay
//! on the handle so `touchmove` can cancel page scrolling.

use leptos::prelude::*;

use crate::state::slider::{Axis, SliderConfig, SliderMode, SliderSession, SliderView, default_image_sets};
use crate::util::dom;

#[cfg(feature = "csr")]
type Host = crate::util::timers::BrowserTimers;
#[cfg(not(feature = "csr"))]
type Host = crate::util::timers::ManualTimers;

type SessionSlot = StoredValue<Option<SliderSession<Host>>, LocalStorage>;
type ViewSignal = RwSignal<Option<SliderView>>;

/// Apply `f` to the live session and publish the resulting view.
fn drive(session: SessionSlot, view_state: ViewSignal, f: impl FnOnce(&mut SliderSession<Host>)) {
    let next = session
        .try_update_value(|slot| {
            slot.as_mut().map(|s| {
                f(s);
                s.view()
            })
        })
        .flatten();
    if let Some(next) = next {
        view_state.set(Some(next));
    }
}

#[cfg(feature = "csr")]
fn new_host(session: SessionSlot, view_state: ViewSignal) -> Host {
    Host::new(move |timer| drive(session, view_state, |s| s.fire(timer)))
}

#[cfg(not(feature = "csr"))]
fn new_host(_session: SessionSlot, _view_state: ViewSignal) -> Host {
    Host::new()
}

/// Pointer coordinate along the slider's axis.
#[cfg(feature = "csr")]
fn along(axis: Axis, x: i32, y: i32) -> f64 {
    match axis {
        Axis::Horizontal => f64::from(x),
        Axis::Vertical => f64::from(y),
    }
}

/// Read one string out of the current snapshot, empty before mount.
fn project(view_state: ViewSignal, f: fn(&SliderView) -> String) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || view_state.with(|v| v.as_ref().map(f).unwrap_or_default())
}

#[component]
pub fn CompareSlider() -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let view_state: ViewSignal = RwSignal::new(None);
    let session: SessionSlot = StoredValue::new_local(None);

    Effect::new(move || {
        if container_ref.get().is_none() || session.with_value(Option::is_some) {
            return;
        }
        let config = SliderConfig::default();
        let mode = SliderMode::from_viewport_width(dom::viewport_width(), config.mobile_breakpoint_px);
        let Some(created) = SliderSession::new(mode, default_image_sets(mode), config, new_host(session, view_state))
        else {
            return;
        };
        log::debug!("comparison slider mounted ({mode:?})");
        view_state.set(Some(created.view()));
        session.set_value(Some(created));
    });

    #[cfg(feature = "csr")]
    let axis = move || view_state.with_untracked(|v| v.as_ref().map(|v| v.axis));
    let dragging = move || view_state.with_untracked(|v| v.as_ref().is_some_and(|v| v.dragging));
    #[cfg(feature = "csr")]
    let extent = move |axis: Axis| {
        container_ref.get_untracked().map_or(0.0, |el| {
            let rect = el.get_bounding_client_rect();
            match axis {
                Axis::Horizontal => rect.width(),
                Axis::Vertical => rect.height(),
            }
        })
    };

    #[cfg(feature = "csr")]
    {
        let on_move = window_event_listener(leptos::ev::mousemove, move |e| {
            if !dragging() {
                return;
            }
            let Some(axis) = axis() else {
                return;
            };
            let pointer = along(axis, e.client_x(), e.client_y());
            let extent = extent(axis);
            drive(session, view_state, |s| s.update_drag(pointer, extent));
        });
        let on_up = window_event_listener(leptos::ev::mouseup, move |_| {
            drive(session, view_state, SliderSession::end_drag);
        });
        let on_visibility = window_event_listener_untyped("visibilitychange", move |_| {
            let visible = !document().hidden();
            drive(session, view_state, |s| s.set_page_visible(visible));
        });
        on_cleanup(move || {
            on_move.remove();
            on_up.remove();
            on_visibility.remove();
            session.try_update_value(|slot| {
                if let Some(s) = slot.as_mut() {
                    s.shutdown();
                }
            });
        });
    }

    let on_mouse_down = move |e: leptos::ev::MouseEvent| {
        e.prevent_default();
        #[cfg(feature = "csr")]
        {
            if let Some(axis) = axis() {
                let pointer = along(axis, e.client_x(), e.client_y());
                drive(session, view_state, |s| s.begin_drag(pointer));
            }
        }
    };
    let on_touch_start = move |e: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        {
            if let (Some(axis), Some(touch)) = (axis(), e.touches().get(0)) {
                let pointer = along(axis, touch.client_x(), touch.client_y());
                drive(session, view_state, |s| s.begin_drag(pointer));
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = e;
    };
    let on_touch_move = move |e: leptos::ev::TouchEvent| {
        if !dragging() {
            return;
        }
        e.prevent_default();
        #[cfg(feature = "csr")]
        {
            if let (Some(axis), Some(touch)) = (axis(), e.touches().get(0)) {
                let pointer = along(axis, touch.client_x(), touch.client_y());
                let extent = extent(axis);
                drive(session, view_state, |s| s.update_drag(pointer, extent));
            }
        }
    };
    let on_touch_end = move |_| drive(session, view_state, SliderSession::end_drag);
    let on_enter = move |_| drive(session, view_state, SliderSession::pointer_enter);
    let on_leave = move |_| drive(session, view_state, SliderSession::pointer_leave);
    let on_toggle = move |_| drive(session, view_state, SliderSession::toggle_pause);

    let mounted = move || view_state.with(Option::is_some);
    let paused = move || view_state.with(|v| v.as_ref().is_some_and(|v| v.paused));
    let handle_icon = move || view_state.with(|v| v.as_ref().map_or("", SliderView::handle_icon));
    let control_icon = move || view_state.with(|v| v.as_ref().map_or("", SliderView::control_icon));

    view! {
        <div
            class="comparison-slider"
            class:mobile=move || view_state.with(|v| v.as_ref().is_some_and(|v| v.axis == Axis::Vertical))
            node_ref=container_ref
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <Show when=mounted>
                <img class="before-image" alt="Before" src=project(view_state, |v| v.before_src.clone()) style=project(view_state, SliderView::before_image_style)/>
                <img class="after-image" alt="After" src=project(view_state, |v| v.after_src.clone()) style=project(view_state, SliderView::after_image_style)/>
                <div
                    class="slider-handle"
                    style=project(view_state, SliderView::handle_style)
                    on:mousedown=on_mouse_down
                    on:touchstart=on_touch_start
                    on:touchmove=on_touch_move
                    on:touchend=on_touch_end
                >
                    <div class="handle-line"></div>
                    <div class="handle-circle">
                        <i class=handle_icon></i>
                    </div>
                </div>
                <p class="slider-caption">{project(view_state, |v| v.caption.clone())}</p>
                <button
                    class="slider-control"
                    aria-label=move || if paused() { "Play autoplay" } else { "Pause autoplay" }
                    on:click=on_toggle
                >
                    <i class=control_icon></i>
                </button>
            </Show>
        </div>
    }
}
