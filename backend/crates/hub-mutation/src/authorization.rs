use crate::{MutationError, Result as MutationErrorResult};

use hub_core::Actor;

/// Reject non-admin actors. Call before touching any state.
#[track_caller]
pub fn require_admin(actor: &Actor, action: &str) -> MutationErrorResult<()> {
    if actor.is_admin() {
        return Ok(());
    }

    Err(MutationError::forbidden(format!(
        "Only admins can {action} (role: {})",
        actor.role
    )))
}
