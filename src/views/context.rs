//! Per-request view contexts.

use serde::Serialize;

use crate::identity::Identity;
use crate::views::View;

/// Context for the auth screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthContext {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl From<&Identity> for AuthContext {
    fn from(identity: &Identity) -> Self {
        Self {
            is_authenticated: identity.is_authenticated(),
            user_name: identity.display_name().map(str::to_owned),
        }
    }
}

/// Context for the error page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContext {
    Empty,
    Auth(AuthContext),
    Error(ErrorContext),
}

/// A view paired with the context it is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub view: View,
    pub context: ViewContext,
}

impl Page {
    pub fn new(view: View) -> Self {
        Self {
            view,
            context: ViewContext::Empty,
        }
    }

    pub fn with_auth(view: View, identity: &Identity) -> Self {
        Self {
            view,
            context: ViewContext::Auth(identity.into()),
        }
    }

    pub fn with_error(request_id: impl Into<String>) -> Self {
        Self {
            view: View::Error,
            context: ViewContext::Error(ErrorContext {
                request_id: request_id.into(),
            }),
        }
    }
}
