//! Before/after comparison slider engine.
//!
//! DESIGN
//! ======
//! A session is a plain state machine. Every delay it needs is requested
//! through the [`Timers`] seam and handed back through
//! [`SliderSession::fire`], so the browser host and the headless virtual
//! clock drive exactly the same transitions.
//!
//! Desktop mode sweeps the handle back and forth horizontally and swaps the
//! image pair at each extreme. Mobile mode runs a four-phase cycle that
//! scrolls the tall "before" capture, reveals the "after" capture with a
//! vertical handle sweep, scrolls that one too, and starts over.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

/// Lowest logical handle position (percent).
pub const POSITION_MIN: f64 = -1.0;
/// Highest logical handle position (percent).
pub const POSITION_MAX: f64 = 101.0;

/// Timing and rate constants for one slider session.
///
/// The mobile rates are tuned for full-page captures a few thousand pixels
/// tall and are kept as fixed values rather than derived from image size.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Viewports at most this wide run the mobile cycle.
    pub mobile_breakpoint_px: f64,
    pub tick_ms: u32,
    /// Grace period between construction and the first autoplay start.
    pub initial_delay_ms: u32,
    /// Quiet period after user interaction before autoplay resumes.
    pub resume_delay_ms: u32,
    /// Pause at each mobile phase boundary.
    pub hold_ms: u32,
    pub desktop_step: f64,
    pub before_down_step: f64,
    pub before_up_step: f64,
    pub reveal_step: f64,
    pub after_scroll_step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768.0,
            tick_ms: 80,
            initial_delay_ms: 3000,
            resume_delay_ms: 3000,
            hold_ms: 1000,
            desktop_step: 1.0,
            before_down_step: 0.015,
            before_up_step: 0.035,
            reveal_step: 1.875,
            after_scroll_step: 0.01875,
        }
    }
}

/// Layout mode, fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderMode {
    Desktop,
    Mobile,
}

impl SliderMode {
    #[must_use]
    pub fn from_viewport_width(width_px: f64, breakpoint_px: f64) -> Self {
        if width_px <= breakpoint_px {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Desktop => Axis::Horizontal,
            Self::Mobile => Axis::Vertical,
        }
    }
}

/// Axis along which the handle moves and the clip boundary runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One before/after image pair with its caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSet {
    pub before: String,
    pub after: String,
    pub title: String,
}

impl ImageSet {
    pub fn new(before: impl Into<String>, after: impl Into<String>, title: impl Into<String>) -> Self {
        Self { before: before.into(), after: after.into(), title: title.into() }
    }
}

/// Image sets shipped with the site for each mode.
#[must_use]
pub fn default_image_sets(mode: SliderMode) -> Vec<ImageSet> {
    match mode {
        SliderMode::Mobile => vec![ImageSet::new(
            "images/projects/ironcraft-mobile-before-full-page.jpg",
            "images/projects/ironcraft-mobile-after-full-page.jpg",
            "Ironcraft Website Redesign",
        )],
        SliderMode::Desktop => vec![
            ImageSet::new(
                "images/projects/ironcraft-before.png",
                "images/projects/ironcraft-after.png",
                "Ironcraft Website Redesign",
            ),
            ImageSet::new(
                "images/projects/traffic-tamers-before.png",
                "images/projects/traffic-tamers-after.png",
                "Traffic Tamers Website Redesign",
            ),
        ],
    }
}

/// Timers a session may have outstanding. At most one of each is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderTimer {
    /// Repeating autoplay step.
    Tick,
    /// Autoplay resumption after user interaction.
    Resume,
    /// First autoplay start after construction.
    InitialStart,
    /// End of a mobile phase-boundary hold.
    PhaseHold,
}

/// Host scheduler seam.
///
/// Arming a key that is already armed replaces the earlier timer. When a
/// timer elapses the host calls [`SliderSession::fire`] with its key.
pub trait Timers {
    fn every(&mut self, key: SliderTimer, period_ms: u32);
    fn after(&mut self, key: SliderTimer, delay_ms: u32);
    fn cancel(&mut self, key: SliderTimer);
}

/// Desktop sweep direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Desktop sub-machine: a bouncing sweep over the image sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DesktopCycle {
    pub direction: Direction,
    pub set_index: usize,
}

/// Vertical scroll direction of the after image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

/// The four mobile phases, in cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MobileStage {
    ScrollBeforeDown,
    ScrollBeforeUp,
    Reveal,
    ScrollAfter(ScrollDirection),
}

impl MobileStage {
    /// Stage that precedes this one in the cycle.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::ScrollBeforeDown => Self::ScrollAfter(ScrollDirection::Up),
            Self::ScrollBeforeUp => Self::ScrollBeforeDown,
            Self::Reveal => Self::ScrollBeforeUp,
            Self::ScrollAfter(ScrollDirection::Down) => Self::Reveal,
            Self::ScrollAfter(ScrollDirection::Up) => Self::ScrollAfter(ScrollDirection::Down),
        }
    }

    /// Position of the phase in the cycle, ignoring scroll direction.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Self::ScrollBeforeDown => 0,
            Self::ScrollBeforeUp => 1,
            Self::Reveal => 2,
            Self::ScrollAfter(_) => 3,
        }
    }
}

/// Mobile phase: either advancing a stage on each tick, or holding at a
/// boundary until the hold timer moves it into `next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MobilePhase {
    Active(MobileStage),
    Holding { next: MobileStage },
}

impl Default for MobilePhase {
    fn default() -> Self {
        Self::Active(MobileStage::ScrollBeforeDown)
    }
}

/// Mobile sub-machine state. Scroll offsets are fractions in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MobileCycle {
    pub phase: MobilePhase,
    pub before_scroll: f64,
    pub after_scroll: f64,
}

impl MobileCycle {
    /// Stage the cycle is in; a hold still belongs to the stage it ends.
    #[must_use]
    pub fn stage(&self) -> MobileStage {
        match self.phase {
            MobilePhase::Active(stage) => stage,
            MobilePhase::Holding { next } => next.previous(),
        }
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        matches!(self.phase, MobilePhase::Holding { .. })
    }
}

/// Mode-specific autoplay state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Autoplay {
    Desktop(DesktopCycle),
    Mobile(MobileCycle),
}

impl Autoplay {
    fn initial(mode: SliderMode) -> Self {
        match mode {
            SliderMode::Desktop => Self::Desktop(DesktopCycle::default()),
            SliderMode::Mobile => Self::Mobile(MobileCycle::default()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragState {
    origin: f64,
    start_position: f64,
}

/// One comparison-slider widget.
#[derive(Debug)]
pub struct SliderSession<T: Timers> {
    config: SliderConfig,
    mode: SliderMode,
    image_sets: Vec<ImageSet>,
    position: f64,
    autoplay: Autoplay,
    running: bool,
    user_interacting: bool,
    paused: bool,
    page_visible: bool,
    /// `InitialStart` or `Resume` is armed and owns the next start.
    start_pending: bool,
    drag: Option<DragState>,
    before_set: usize,
    after_set: usize,
    timers: T,
}

impl<T: Timers> SliderSession<T> {
    /// Build a session and arm the initial autoplay grace period.
    ///
    /// Returns `None` when there is nothing to show.
    pub fn new(mode: SliderMode, image_sets: Vec<ImageSet>, config: SliderConfig, timers: T) -> Option<Self> {
        if image_sets.is_empty() {
            log::warn!("comparison slider has no image sets; skipping");
            return None;
        }

        let mut session = Self {
            autoplay: Autoplay::initial(mode),
            config,
            mode,
            image_sets,
            position: 0.0,
            running: false,
            user_interacting: false,
            paused: false,
            page_visible: true,
            start_pending: true,
            drag: None,
            before_set: 0,
            after_set: 0,
            timers,
        };
        session.set_position(0.0);
        session
            .timers
            .after(SliderTimer::InitialStart, session.config.initial_delay_ms);
        log::debug!("comparison slider ready: mode={mode:?} sets={}", session.image_sets.len());
        Some(session)
    }

    pub fn mode(&self) -> SliderMode {
        self.mode
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Logical handle position in [-1, 101].
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Reveal boundary in [0, 100].
    pub fn boundary(&self) -> f64 {
        self.position.clamp(0.0, 100.0)
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_user_interacting(&self) -> bool {
        self.user_interacting
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Index of the set the desktop sweep is on. `None` in mobile mode.
    pub fn current_set_index(&self) -> Option<usize> {
        match self.autoplay {
            Autoplay::Desktop(cycle) => Some(cycle.set_index),
            Autoplay::Mobile(_) => None,
        }
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// Move the handle. Non-finite input is ignored.
    pub fn set_position(&mut self, position: f64) {
        if !position.is_finite() {
            return;
        }
        self.position = position.clamp(POSITION_MIN, POSITION_MAX);
    }

    /// Start a drag at `pointer` (client coordinate along the mode's axis).
    pub fn begin_drag(&mut self, pointer: f64) {
        self.drag = Some(DragState { origin: pointer, start_position: self.position });
        self.user_interacting = true;
        self.cancel_pending_start();
        self.stop_autoplay();
    }

    /// Follow the pointer. `extent` is the slider's on-screen size along the
    /// active axis in the same units as `pointer`.
    pub fn update_drag(&mut self, pointer: f64, extent: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        if !extent.is_finite() || extent <= 0.0 {
            return;
        }
        let delta_percent = (pointer - drag.origin) / extent * 100.0;
        self.set_position(drag.start_position + delta_percent);
    }

    pub fn end_drag(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.release_interaction();
    }

    /// Hovering the slider holds autoplay like a drag does.
    pub fn pointer_enter(&mut self) {
        self.user_interacting = true;
        self.cancel_pending_start();
        self.stop_autoplay();
    }

    pub fn pointer_leave(&mut self) {
        if self.drag.is_some() {
            return;
        }
        self.release_interaction();
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            self.cancel_pending_start();
            self.stop_autoplay();
            log::debug!("comparison slider paused at {:.2}", self.position);
        } else {
            self.reset();
            self.start_autoplay();
            log::debug!("comparison slider resumed from the start");
        }
    }

    /// A page coming back into view restarts autoplay only when no grace
    /// period or cooldown is still running; otherwise that timer starts it.
    pub fn set_page_visible(&mut self, visible: bool) {
        self.page_visible = visible;
        if visible {
            if !self.start_pending {
                self.start_autoplay();
            }
        } else {
            self.stop_autoplay();
        }
    }

    /// Start ticking unless the user, the pause control, or a hidden page
    /// holds autoplay, or it is already running.
    pub fn start_autoplay(&mut self) {
        if self.drag.is_some() || self.user_interacting || self.paused || !self.page_visible || self.running {
            return;
        }
        self.timers.every(SliderTimer::Tick, self.config.tick_ms);
        self.running = true;
    }

    pub fn stop_autoplay(&mut self) {
        if !self.running {
            return;
        }
        self.timers.cancel(SliderTimer::Tick);
        self.running = false;
    }

    /// Return to phase zero: first image set, handle at 0.
    pub fn reset(&mut self) {
        self.timers.cancel(SliderTimer::PhaseHold);
        self.autoplay = Autoplay::initial(self.mode);
        self.before_set = 0;
        self.after_set = 0;
        self.set_position(0.0);
    }

    /// Cancel every outstanding timer. The session stays inert afterwards
    /// until autoplay is explicitly started again.
    pub fn shutdown(&mut self) {
        self.stop_autoplay();
        self.drag = None;
        self.cancel_pending_start();
        self.timers.cancel(SliderTimer::PhaseHold);
    }

    /// Deliver an elapsed timer.
    pub fn fire(&mut self, timer: SliderTimer) {
        match timer {
            SliderTimer::Tick => {
                if self.running {
                    self.tick();
                }
            }
            SliderTimer::Resume | SliderTimer::InitialStart => {
                self.start_pending = false;
                self.start_autoplay();
            }
            SliderTimer::PhaseHold => self.finish_hold(),
        }
    }

    /// Render snapshot of the current state.
    pub fn view(&self) -> SliderView {
        let set = |index: usize| &self.image_sets[index.min(self.image_sets.len() - 1)];
        let scroll = match self.autoplay {
            Autoplay::Mobile(cycle) => Some((cycle.before_scroll, cycle.after_scroll)),
            Autoplay::Desktop(_) => None,
        };
        SliderView {
            axis: self.mode.axis(),
            handle_offset: self.position,
            boundary: self.boundary(),
            before_src: set(self.before_set).before.clone(),
            after_src: set(self.after_set).after.clone(),
            caption: set(self.before_set).title.clone(),
            scroll,
            paused: self.paused,
            dragging: self.drag.is_some(),
        }
    }

    fn release_interaction(&mut self) {
        self.user_interacting = false;
        self.timers.after(SliderTimer::Resume, self.config.resume_delay_ms);
        self.start_pending = true;
    }

    fn cancel_pending_start(&mut self) {
        self.timers.cancel(SliderTimer::Resume);
        self.timers.cancel(SliderTimer::InitialStart);
        self.start_pending = false;
    }

    fn tick(&mut self) {
        match self.autoplay {
            Autoplay::Desktop(_) => self.tick_desktop(),
            Autoplay::Mobile(_) => self.tick_mobile(),
        }
    }

    fn tick_desktop(&mut self) {
        let Autoplay::Desktop(cycle) = &mut self.autoplay else {
            return;
        };

        let mut next = self.position + cycle.direction.sign() * self.config.desktop_step;
        if next >= POSITION_MAX {
            next = POSITION_MAX;
            cycle.direction = Direction::Backward;
            cycle.set_index = (cycle.set_index + 1) % self.image_sets.len();
            self.before_set = cycle.set_index;
            log::debug!("comparison slider: before image -> set {}", cycle.set_index);
        } else if next <= POSITION_MIN {
            next = POSITION_MIN;
            cycle.direction = Direction::Forward;
            self.after_set = cycle.set_index;
            log::debug!("comparison slider: after image -> set {}", cycle.set_index);
        }
        self.set_position(next);
    }

    fn tick_mobile(&mut self) {
        let config = &self.config;
        let Autoplay::Mobile(cycle) = &mut self.autoplay else {
            return;
        };
        let MobilePhase::Active(stage) = cycle.phase else {
            return;
        };

        let mut next_position = None;
        let mut hold_into = None;
        match stage {
            MobileStage::ScrollBeforeDown => {
                cycle.before_scroll = (cycle.before_scroll + config.before_down_step).min(1.0);
                if cycle.before_scroll >= 1.0 {
                    hold_into = Some(MobileStage::ScrollBeforeUp);
                }
            }
            MobileStage::ScrollBeforeUp => {
                cycle.before_scroll = (cycle.before_scroll - config.before_up_step).max(0.0);
                if cycle.before_scroll <= 0.0 {
                    hold_into = Some(MobileStage::Reveal);
                }
            }
            MobileStage::Reveal => {
                let next = self.position + config.reveal_step;
                if next >= 100.0 {
                    cycle.after_scroll = 0.0;
                    cycle.phase = MobilePhase::Active(MobileStage::ScrollAfter(ScrollDirection::Down));
                    log::debug!("comparison slider: reveal complete");
                    next_position = Some(100.0);
                } else {
                    next_position = Some(next);
                }
            }
            MobileStage::ScrollAfter(ScrollDirection::Down) => {
                cycle.after_scroll = (cycle.after_scroll + config.after_scroll_step).min(1.0);
                if cycle.after_scroll >= 1.0 {
                    hold_into = Some(MobileStage::ScrollAfter(ScrollDirection::Up));
                }
                next_position = Some(100.0);
            }
            MobileStage::ScrollAfter(ScrollDirection::Up) => {
                cycle.after_scroll = (cycle.after_scroll - config.after_scroll_step).max(0.0);
                if cycle.after_scroll <= 0.0 {
                    hold_into = Some(MobileStage::ScrollBeforeDown);
                }
                next_position = Some(cycle.after_scroll * 100.0);
            }
        }

        if let Some(next) = hold_into {
            cycle.phase = MobilePhase::Holding { next };
        }
        if let Some(position) = next_position {
            self.set_position(position);
        }
        if hold_into.is_some() {
            self.timers.after(SliderTimer::PhaseHold, self.config.hold_ms);
        }
    }

    fn finish_hold(&mut self) {
        let Autoplay::Mobile(cycle) = &mut self.autoplay else {
            return;
        };
        let MobilePhase::Holding { next } = cycle.phase else {
            return;
        };

        cycle.phase = MobilePhase::Active(next);
        match next {
            MobileStage::Reveal => cycle.after_scroll = 0.0,
            MobileStage::ScrollBeforeDown => {
                cycle.before_scroll = 0.0;
                self.set_position(0.0);
            }
            MobileStage::ScrollBeforeUp | MobileStage::ScrollAfter(_) => {}
        }
        log::debug!("comparison slider: mobile phase -> {next:?}");
    }
}

/// Immutable render snapshot of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderView {
    pub axis: Axis,
    /// Logical handle offset in [-1, 101].
    pub handle_offset: f64,
    /// Clip boundary in [0, 100].
    pub boundary: f64,
    pub before_src: String,
    pub after_src: String,
    pub caption: String,
    /// Before/after scroll fractions; mobile only.
    pub scroll: Option<(f64, f64)>,
    pub paused: bool,
    pub dragging: bool,
}

impl SliderView {
    pub fn handle_style(&self) -> String {
        let edge = match self.axis {
            Axis::Horizontal => "left",
            Axis::Vertical => "top",
        };
        format!("{edge}: {}%; cursor: {};", format_percent(self.handle_offset), self.handle_cursor())
    }

    pub fn handle_cursor(&self) -> &'static str {
        match (self.dragging, self.axis) {
            (true, _) => "grabbing",
            (false, Axis::Horizontal) => "ew-resize",
            (false, Axis::Vertical) => "ns-resize",
        }
    }

    /// CSS clip polygon exposing the after image up to the boundary.
    pub fn clip_path(&self) -> String {
        let b = format_percent(self.boundary);
        match self.axis {
            Axis::Horizontal => format!("polygon(0 0, {b}% 0, {b}% 100%, 0 100%)"),
            Axis::Vertical => format!("polygon(0 0, 100% 0, 100% {b}%, 0 {b}%)"),
        }
    }

    pub fn before_object_position(&self) -> Option<String> {
        self.scroll
            .map(|(before, _)| format!("center {}%", format_percent(before * 100.0)))
    }

    pub fn after_object_position(&self) -> Option<String> {
        self.scroll
            .map(|(_, after)| format!("center {}%", format_percent(after * 100.0)))
    }

    /// Font Awesome icon class for the play/pause control.
    pub fn control_icon(&self) -> &'static str {
        if self.paused { "fa-solid fa-play" } else { "fa-solid fa-pause" }
    }

    /// Font Awesome icon class for the drag handle.
    pub fn handle_icon(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "fa-solid fa-arrows-left-right",
            Axis::Vertical => "fa-solid fa-arrows-up-down",
        }
    }

    /// Inline style for the before image.
    pub fn before_image_style(&self) -> String {
        self.before_object_position()
            .map(|p| format!("object-position: {p};"))
            .unwrap_or_default()
    }

    /// Inline style for the after image: the clip plus, on mobile, its scroll.
    pub fn after_image_style(&self) -> String {
        let mut style = format!("clip-path: {};", self.clip_path());
        if let Some(p) = self.after_object_position() {
            style.push_str(&format!(" object-position: {p};"));
        }
        style
    }
}

fn format_percent(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // Avoid printing "-0".
        return "0".to_owned();
    }
    format!("{rounded}")
}
