//! ACL model errors

use thiserror::Error;

/// Errors from constructing or resolving ACLs
#[derive(Debug, Error)]
pub enum AclError {
    #[error("Unknown canned ACL policy: {0}")]
    UnknownPolicy(String),

    #[error("ACL must contain at least one grant")]
    EmptyGrants,
}
