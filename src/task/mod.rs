//! Task workflow management.
//!
//! Tasks are created open, closed once their work is done and reopened when
//! more work turns up. This module owns the status workflow and the
//! status-filtered queries built on it, and follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
