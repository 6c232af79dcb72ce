//! Page sections and widgets.
//!
//! Components own DOM handles, listeners and timers; behavior lives in the
//! matching `state` module.

pub mod carousel;
pub mod compare_slider;
pub mod hero;
pub mod navbar;
pub mod project_grid;
pub mod showcase;
pub mod skill_ring;
