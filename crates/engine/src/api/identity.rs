//! Caller identity extracted from request headers.
//!
//! The identity provider sits in front of the engine and forwards the user in
//! `X-User-Id` and `X-User-Name`. Handlers take [`Identity`] as an extractor:
//!
//! ```rust,ignore
//! async fn handler(identity: Identity) -> impl IntoResponse {
//!     format!("Hello, {}", identity.display_name)
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};
use yokai_domain::UserId;

use super::http::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    /// Falls back to the user id when no name header is sent
    pub display_name: String,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let user_id = header(USER_ID_HEADER)
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or(ApiError::Unauthorized)?;
        let display_name =
            header(USER_NAME_HEADER).unwrap_or_else(|| user_id.as_str().to_string());

        Ok(Identity {
            user_id,
            display_name,
        })
    }
}
