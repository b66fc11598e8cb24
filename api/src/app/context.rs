//! Per-request context
//!
//! Carries the caller's credential and identity into a use case explicitly,
//! instead of reading them from ambient session state.

/// Name of the credential in the browser session of the web front end
pub const SESSION_TOKEN_KEY: &str = "JWTToken";

/// Name of the signed-in user's id in the same session
pub const SESSION_USER_KEY: &str = "UserId";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    token: Option<String>,
    user_id: Option<String>,
}

impl RequestContext {
    pub fn new(token: Option<String>, user_id: Option<String>) -> Self {
        Self { token, user_id }
    }

    /// A context with no credential
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// The credential, if one was supplied and is not blank
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn has_credential(&self) -> bool {
        self.token().is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}
