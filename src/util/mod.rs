//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules hold the only `web-sys` glue outside components. With the
//! `csr` feature off they fall back to fixed values so the state layer and
//! its tests run natively.

pub mod dom;
pub mod storage;
pub mod timers;
