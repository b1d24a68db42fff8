//! Effective-UID check run once before anything touches the unit directory.

use nix::unistd::Uid;

use crate::error::RegistrarError;

/// Fails unless the process runs with an effective UID of root.
pub fn require_privilege() -> Result<(), RegistrarError> {
    check_privilege(Uid::effective())
}

fn check_privilege(uid: Uid) -> Result<(), RegistrarError> {
    if uid.is_root() {
        Ok(())
    } else {
        tracing::debug!(uid = uid.as_raw(), "refusing to run without root");
        Err(RegistrarError::NotPrivileged)
    }
}
