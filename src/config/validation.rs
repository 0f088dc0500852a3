//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check configured directories exist
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::SiteConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.trace_header '{0}' is not a valid header name")]
    InvalidTraceHeader(String),

    #[error("{field} '{}' is not a directory", .path.display())]
    MissingDirectory { field: &'static str, path: PathBuf },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if HeaderName::try_from(config.observability.trace_header.as_str()).is_err() {
        errors.push(ValidationError::InvalidTraceHeader(
            config.observability.trace_header.clone(),
        ));
    }

    let dirs = [
        ("templates.directory", &config.templates.directory),
        ("assets.directory", &config.assets.directory),
    ];
    for (field, dir) in dirs {
        if let Some(path) = dir {
            if !path.is_dir() {
                errors.push(ValidationError::MissingDirectory {
                    field,
                    path: path.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
