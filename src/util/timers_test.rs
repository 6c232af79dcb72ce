use super::*;

#[test]
fn after_fires_once_at_deadline() {
    let mut timers = ManualTimers::new();
    timers.after(SliderTimer::Resume, 3000);

    assert_eq!(timers.due_in(SliderTimer::Resume), Some(3000));
    assert_eq!(timers.pop_due(2999), None);
    assert_eq!(timers.pop_due(3000), Some(SliderTimer::Resume));
    assert_eq!(timers.now_ms(), 3000);
    assert!(!timers.is_armed(SliderTimer::Resume));
}

#[test]
fn every_rearms_one_period_later() {
    let mut timers = ManualTimers::new();
    timers.every(SliderTimer::Tick, 80);

    assert_eq!(timers.pop_due(200), Some(SliderTimer::Tick));
    assert_eq!(timers.pop_due(200), Some(SliderTimer::Tick));
    assert_eq!(timers.pop_due(200), None);
    assert_eq!(timers.now_ms(), 160);
    assert_eq!(timers.due_in(SliderTimer::Tick), Some(80));
}

#[test]
fn rearming_a_key_replaces_the_previous_timer() {
    let mut timers = ManualTimers::new();
    timers.after(SliderTimer::Resume, 3000);
    timers.after(SliderTimer::Resume, 500);

    assert_eq!(timers.count(SliderTimer::Resume), 1);
    assert_eq!(timers.due_in(SliderTimer::Resume), Some(500));
}

#[test]
fn cancel_is_idempotent() {
    let mut timers = ManualTimers::new();
    timers.every(SliderTimer::Tick, 80);
    timers.cancel(SliderTimer::Tick);
    timers.cancel(SliderTimer::Tick);

    assert!(timers.armed().is_empty());
}

#[test]
fn ties_fire_in_arming_order() {
    let mut timers = ManualTimers::new();
    timers.after(SliderTimer::InitialStart, 100);
    timers.after(SliderTimer::PhaseHold, 100);

    assert_eq!(timers.pop_due(100), Some(SliderTimer::InitialStart));
    assert_eq!(timers.pop_due(100), Some(SliderTimer::PhaseHold));
}
