use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Actor does not own this review")]
pub struct NotOwner;

/// A review may only be changed by the user who wrote it.
pub fn ensure_owner(owner: UserId, actor: UserId) -> Result<(), NotOwner> {
    if owner == actor {
        Ok(())
    } else {
        Err(NotOwner)
    }
}
