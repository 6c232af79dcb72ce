//! Showcase gallery: hand-dragged comparison cards and staged "load more".
//!
//! Showcase sliders never autoplay; they only follow the pointer and stay
//! within [0, 100].

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use std::ops::Range;

pub const ITEMS_PER_LOAD: usize = 2;
/// Simulated fetch delay before a batch appears.
pub const LOAD_DELAY_MS: u32 = 1500;
/// Delay between successive cards of one batch.
pub const REVEAL_STAGGER_MS: u32 = 200;
/// How long "All projects loaded!" stays before the link replaces it.
pub const VIEW_ALL_DELAY_MS: u32 = 5000;

/// Manual before/after card slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseSlider {
    position: f64,
    drag: Option<(f64, f64)>,
}

impl Default for ShowcaseSlider {
    fn default() -> Self {
        Self { position: 50.0, drag: None }
    }
}

impl ShowcaseSlider {
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        self.drag = Some((pointer_x, self.position));
    }

    pub fn update_drag(&mut self, pointer_x: f64, width: f64) {
        let Some((origin, start)) = self.drag else {
            return;
        };
        if !width.is_finite() || width <= 0.0 {
            return;
        }
        let next = start + (pointer_x - origin) / width * 100.0;
        if next.is_finite() {
            self.position = next.clamp(0.0, 100.0);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// The after image covers everything right of the handle.
    pub fn clip_path(&self) -> String {
        let p = self.position;
        format!("polygon({p}% 0, 100% 0, 100% 100%, {p}% 100%)")
    }

    pub fn handle_style(&self) -> String {
        format!("left: {}%;", self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMoreStatus {
    Ready,
    Loading,
    /// Everything is shown; the button is gone and a notice is up.
    Exhausted,
    /// The notice was replaced by a link to the full project list.
    ViewAll,
}

/// Reveal state for the initially hidden showcase items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseGallery {
    hidden_total: usize,
    revealed: usize,
    status: LoadMoreStatus,
}

impl ShowcaseGallery {
    #[must_use]
    pub fn new(hidden_total: usize) -> Self {
        let status = if hidden_total == 0 { LoadMoreStatus::Exhausted } else { LoadMoreStatus::Ready };
        Self { hidden_total, revealed: 0, status }
    }

    pub fn status(&self) -> LoadMoreStatus {
        self.status
    }

    pub fn is_revealed(&self, hidden_index: usize) -> bool {
        hidden_index < self.revealed
    }

    /// Start a load. Returns `false` if one is running or nothing is left.
    pub fn begin_load(&mut self) -> bool {
        if self.status != LoadMoreStatus::Ready {
            return false;
        }
        self.status = LoadMoreStatus::Loading;
        true
    }

    /// Reveal the next batch and return the hidden-item indices it covers.
    pub fn finish_load(&mut self) -> Range<usize> {
        if self.status != LoadMoreStatus::Loading {
            return self.revealed..self.revealed;
        }
        let start = self.revealed;
        self.revealed = (self.revealed + ITEMS_PER_LOAD).min(self.hidden_total);
        self.status = if self.revealed >= self.hidden_total {
            LoadMoreStatus::Exhausted
        } else {
            LoadMoreStatus::Ready
        };
        start..self.revealed
    }

    pub fn show_view_all(&mut self) {
        if self.status == LoadMoreStatus::Exhausted {
            self.status = LoadMoreStatus::ViewAll;
        }
    }

    /// Stagger delay for a newly revealed item, by its index in the batch.
    #[must_use]
    pub fn reveal_delay_ms(hidden_index: usize) -> u32 {
        let offset = u32::try_from(hidden_index % ITEMS_PER_LOAD).unwrap_or(0);
        offset * REVEAL_STAGGER_MS
    }
}
