//! Observability for the Four Pillars engine.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod setup;

pub use setup::{engine_filter, init_tracing, DEFAULT_DIRECTIVES, LOG_ENV};
