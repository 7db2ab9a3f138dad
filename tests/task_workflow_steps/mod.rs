//! Step definitions for task workflow scenarios.

pub mod then;
pub mod world;
