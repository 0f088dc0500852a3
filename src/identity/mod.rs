//! Caller identity.
//!
//! Routes ask an [`IdentityResolver`] who the caller is instead of reading
//! sessions or cookies themselves. The only resolver today is
//! [`PlaceholderIdentity`], which answers with fixed values: the public auth
//! screens always see a guest and the profile screen always sees the same
//! signed-in customer.

use std::fmt;

use axum::http::HeaderMap;

/// Display name the placeholder resolver reports for the profile screen.
pub const PLACEHOLDER_DISPLAY_NAME: &str = "Coffee Lover";

/// Who the caller is, as far as the views are concerned.
///
/// A display name only exists for authenticated identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    is_authenticated: bool,
    display_name: Option<String>,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            display_name: None,
        }
    }

    pub fn authenticated(display_name: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            display_name: Some(display_name.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// Resolves the identity shown on the auth screens.
pub trait IdentityResolver: Send + Sync + fmt::Debug {
    /// Identity for the login, register, forgot-password and OTP screens.
    fn guest(&self, headers: &HeaderMap) -> Identity;

    /// Identity for the profile screen.
    fn current(&self, headers: &HeaderMap) -> Identity;
}

/// Fixed identities; ignores the request entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderIdentity;

impl IdentityResolver for PlaceholderIdentity {
    fn guest(&self, _headers: &HeaderMap) -> Identity {
        Identity::anonymous()
    }

    fn current(&self, _headers: &HeaderMap) -> Identity {
        Identity::authenticated(PLACEHOLDER_DISPLAY_NAME)
    }
}
