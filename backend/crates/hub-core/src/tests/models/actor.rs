use crate::{Actor, Role};

use std::str::FromStr;

use uuid::Uuid;

#[test]
fn test_role_from_str_accepts_any_case() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str(" Guest ").unwrap(), Role::Guest);
    assert!(Role::from_str("owner").is_err());
}

#[test]
fn test_role_default_is_member() {
    assert_eq!(Role::default(), Role::Member);
}

#[test]
fn test_actor_is_admin() {
    let id = Uuid::new_v4();
    assert!(Actor::admin(id).is_admin());
    assert!(!Actor::member(id).is_admin());
    assert!(!Actor::new(id, Role::Guest).is_admin());
}
