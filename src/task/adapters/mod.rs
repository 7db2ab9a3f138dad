//! Persistence adapters for the task workflow.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage used by
//!   tests and by the server when no database is configured
//! - [`postgres::PostgresTaskRepository`]: `PostgreSQL` persistence using
//!   Diesel

pub mod memory;
pub mod postgres;
