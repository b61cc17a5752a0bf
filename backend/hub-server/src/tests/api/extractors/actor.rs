use crate::CurrentActor;
use crate::api::extractors::actor::actor_from_headers;

use hub_core::Role;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, Request},
};
use uuid::Uuid;

const USER: &str = "12345678-1234-1234-1234-123456789abc";

fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_static(value));
    }
    map
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let request = Request::builder()
        .header("X-User-Id", USER)
        .body(Body::empty())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    let result = CurrentActor::from_request_parts(&mut parts, &()).await;

    let CurrentActor(actor) = result.ok().unwrap();
    assert_eq!(actor.id, Uuid::parse_str(USER).unwrap());
    assert_eq!(actor.role, Role::Member);
}

#[tokio::test]
async fn test_extractor_without_header_is_rejected() {
    let request = Request::builder().body(Body::empty()).unwrap();
    let (mut parts, _) = request.into_parts();

    let result = CurrentActor::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}

#[test]
fn test_role_header_is_case_insensitive() {
    let actor = actor_from_headers(&headers(&[("X-User-Id", USER), ("X-User-Role", "admin")]))
        .unwrap();

    assert_eq!(actor.role, Role::Admin);
}

#[test]
fn test_guest_role_is_parsed() {
    let actor = actor_from_headers(&headers(&[("X-User-Id", USER), ("X-User-Role", "GUEST")]))
        .unwrap();

    assert_eq!(actor.role, Role::Guest);
}

#[test]
fn test_unknown_role_is_unauthorized() {
    let result = actor_from_headers(&headers(&[("X-User-Id", USER), ("X-User-Role", "root")]));

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}

#[test]
fn test_non_uuid_user_id_is_unauthorized() {
    let result = actor_from_headers(&headers(&[("X-User-Id", "desktop-user")]));

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}
