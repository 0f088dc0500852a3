//! View subsystem.
//!
//! # Data Flow
//! ```text
//! route action
//!     → Page { View, ViewContext }   (context.rs, view.rs)
//!     → ViewEngine::render           (engine.rs, minijinja)
//!     → HTML body
//! ```
//!
//! # Design Decisions
//! - Route-to-template links are an enum, checked at compile time
//! - Templates are embedded in the binary; a directory can replace them
//! - Contexts are created per request and never mutated

pub mod context;
pub mod engine;
pub mod view;

pub use context::{AuthContext, ErrorContext, Page, ViewContext};
pub use engine::{ViewEngine, ViewError};
pub use view::View;
