//! Client-side state machines, one module per widget.
//!
//! DESIGN
//! ======
//! Every module here is browser-free: components own the DOM and timers and
//! feed input into these types, so the whole layer runs under plain
//! `cargo test`. The comparison slider (`slider`) is the only stateful
//! engine with its own timer schedule; the rest are small event-driven
//! models.

pub mod carousel;
pub mod i18n;
pub mod menu;
pub mod nav;
pub mod prefs;
pub mod projects;
pub mod showcase;
pub mod skills;
pub mod slider;
pub mod typewriter;
