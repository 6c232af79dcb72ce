//! Arrow-driven card carousels.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Horizontal offset per slide, in percent of the track. Slightly over 100
/// to account for the gap between cards.
pub const SLIDE_STRIDE_PERCENT: f64 = 102.0;

/// Bounded slide index for one carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    max_index: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(max_index: usize) -> Self {
        Self { index: 0, max_index }
    }

    /// Featured projects: three slides.
    #[must_use]
    pub fn projects() -> Self {
        Self::new(2)
    }

    /// Services: four slides.
    #[must_use]
    pub fn services() -> Self {
        Self::new(3)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_go_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index < self.max_index
    }

    pub fn prev(&mut self) {
        if self.can_go_prev() {
            self.index -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.index += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn offset_percent(&self) -> f64 {
        0.0 - self.index as f64 * SLIDE_STRIDE_PERCENT
    }

    pub fn track_style(&self) -> String {
        format!("transform: translateX({}%);", self.offset_percent())
    }
}
