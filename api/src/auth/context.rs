//! Request context extraction

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
};

use crate::app::context::{SESSION_TOKEN_KEY, SESSION_USER_KEY};
use crate::app::RequestContext;

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Extract the token from the Authorization header
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Extract a value from the session cookies set by the web front end
fn extract_session_cookie<'a>(headers: &'a HeaderMap, key: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

fn extract_user_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

/// Never rejects: an anonymous request simply carries no credential.
#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;
        let token =
            extract_bearer(headers).or_else(|| extract_session_cookie(headers, SESSION_TOKEN_KEY));
        let user_id =
            extract_user_id(headers).or_else(|| extract_session_cookie(headers, SESSION_USER_KEY));

        Ok(RequestContext::new(
            token.map(str::to_string),
            user_id.map(str::to_string),
        ))
    }
}
