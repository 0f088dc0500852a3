//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; one span per request (see http/server.rs)
//! - `x-request-id` flows through every log line of a request
//! - JSON output for log aggregation, pretty format for development

pub mod logging;

pub use logging::init_logging;
