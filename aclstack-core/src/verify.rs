//! Set-based ACL verification
//!
//! Compares an ACL reported by a service against the ACL it is expected to
//! carry. Comparison is pure and stateless: owners are compared by id, grant
//! sets by symmetric difference. A mismatch is an ordinary outcome, not an
//! error; transport failures belong to whoever fetched the ACL.

use std::fmt;
use tracing::debug;

use crate::acl::{Acl, AclScope, Owner};
use crate::canned::CannedAcl;
use crate::grant::GrantSet;

/// Outcome of comparing an actual ACL against an expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Verified,
    /// The actual ACL is owned by somebody else
    OwnerMismatch { expected: Owner, actual: Owner },
    /// The grant sets differ; both halves of the symmetric difference are
    /// reported for diagnosis
    GrantMismatch {
        expected: GrantSet,
        actual: GrantSet,
        missing: GrantSet,
        unexpected: GrantSet,
    },
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verified => write!(f, "ACL verified"),
            Self::OwnerMismatch { expected, actual } => write!(
                f,
                "owner mismatch: expected {} ({}), got {} ({})",
                expected.id, expected.display_name, actual.id, actual.display_name
            ),
            Self::GrantMismatch {
                expected,
                actual,
                missing,
                unexpected,
            } => write!(
                f,
                "grant mismatch: expected {expected}, actual {actual}, \
                 missing {missing}, unexpected {unexpected}"
            ),
        }
    }
}

/// Verify an actual ACL against an explicitly supplied expected ACL
///
/// Owners must match on both id and display name; grant sets must be equal
/// as sets.
pub fn verify_acl(actual: &Acl, expected: &Acl) -> Verification {
    if actual.owner.id != expected.owner.id
        || actual.owner.display_name != expected.owner.display_name
    {
        return Verification::OwnerMismatch {
            expected: expected.owner.clone(),
            actual: actual.owner.clone(),
        };
    }
    compare_grants(actual, expected)
}

/// Verify an actual ACL against the grants a canned policy must produce
///
/// Owners are compared by id only; the canned template carries no display
/// name of its own.
pub fn verify_canned_acl(
    actual: &Acl,
    policy: CannedAcl,
    owner: &Owner,
    scope: &AclScope,
) -> Verification {
    let expected = policy.to_acl(owner, scope);
    if actual.owner.id != expected.owner.id {
        return Verification::OwnerMismatch {
            expected: expected.owner,
            actual: actual.owner.clone(),
        };
    }
    compare_grants(actual, &expected)
}

fn compare_grants(actual: &Acl, expected: &Acl) -> Verification {
    let missing = expected.grants.difference(&actual.grants);
    let unexpected = actual.grants.difference(&expected.grants);

    if missing.is_empty() && unexpected.is_empty() {
        debug!(owner = %actual.owner.id, grants = %actual.grants, "ACL verified");
        return Verification::Verified;
    }

    Verification::GrantMismatch {
        expected: expected.grants.clone(),
        actual: actual.grants.clone(),
        missing,
        unexpected,
    }
}
