//! Taskapp: a task tracker with a small status workflow.
//!
//! Tasks are listed, filtered by status, created, edited, deleted and moved
//! through the `open → closed → reopened → closed` workflow.
//!
//! # Architecture
//!
//! Taskapp follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task domain, workflow service and persistence adapters
//! - [`web`]: HTTP routes and dashboard rendering
//! - [`config`]: Server configuration
//! - [`telemetry`]: Log subscriber set-up

pub mod config;
pub mod task;
pub mod telemetry;
pub mod web;
