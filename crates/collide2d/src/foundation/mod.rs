//! Foundation module - shared math aliases and logging plumbing

pub mod logging;
pub mod math;
