//! Caller identity forwarded by the identity layer in front of the API.

use crate::ApiError;

use hub_core::{Actor, Role};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_ROLE_HEADER: &str = "X-User-Role";

/// The acting user, from `X-User-Id` (required) and `X-User-Role`
/// (case-insensitive, MEMBER when absent).
pub struct CurrentActor(pub Actor);

impl<S: Send + Sync> FromRequestParts<S> for CurrentActor {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let actor = actor_from_headers(&parts.headers).map(CurrentActor);
        async move { actor }
    }
}

pub fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, ApiError> {
    let raw_id = headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| ApiError::unauthorized("Missing X-User-Id header"))?
        .to_str()
        .map_err(|_| ApiError::unauthorized("X-User-Id is not valid ASCII"))?;

    let id = Uuid::parse_str(raw_id.trim()).map_err(|_| {
        log::warn!("Invalid UUID in X-User-Id header: {}", raw_id);
        ApiError::unauthorized("X-User-Id must be a UUID")
    })?;

    let role = match headers.get(USER_ROLE_HEADER) {
        None => Role::default(),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|s| s.parse::<Role>().ok())
            .ok_or_else(|| ApiError::unauthorized("X-User-Role must be ADMIN, MEMBER or GUEST"))?,
    };

    log::debug!("Request actor {} ({})", id, role);

    Ok(Actor::new(id, role))
}
