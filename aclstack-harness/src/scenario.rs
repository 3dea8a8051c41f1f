//! Conformance scenarios for bucket ACL behavior
//!
//! Reusable flows that drive an [`AclStore`] through the checks an
//! S3-compatible backend must pass: creating buckets with canned ACLs,
//! replacing ACLs on existing buckets, and verifying the reported grant
//! sets against the canned templates. Buckets get unique names and are
//! deleted when a flow finishes, pass or fail.

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use aclstack_core::{verify_canned_acl, AclScope, CannedAcl, Owner, Verification};

use crate::traits::{AclRequest, AclStore, StoreError};

/// A scenario failure: either the store itself failed, or it answered with
/// an ACL that does not match the applied policy
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("ACL verification failed for bucket {bucket}: {verification}")]
    Verification {
        bucket: String,
        verification: Verification,
    },
}

fn unique_bucket() -> String {
    format!("aclstack-{}", Uuid::new_v4().simple())
}

async fn check_canned(
    store: &dyn AclStore,
    bucket: &str,
    owner: &Owner,
    policy: CannedAcl,
) -> Result<(), ScenarioError> {
    let actual = store.get_bucket_acl(bucket).await?;
    let verification = verify_canned_acl(&actual, policy, owner, &AclScope::Bucket);
    if verification.is_verified() {
        Ok(())
    } else {
        Err(ScenarioError::Verification {
            bucket: bucket.to_string(),
            verification,
        })
    }
}

async fn cleanup(store: &dyn AclStore, bucket: &str) {
    if let Err(err) = store.delete_bucket(bucket).await {
        warn!(bucket = %bucket, error = %err, "unable to clean up bucket");
    }
}

/// Create a fresh bucket with `policy` applied at creation, then verify the
/// reported ACL against the policy's template
pub async fn apply_and_verify(
    store: &dyn AclStore,
    owner: &Owner,
    policy: CannedAcl,
) -> Result<(), ScenarioError> {
    let bucket = unique_bucket();
    info!(bucket = %bucket, policy = %policy, "creating bucket with canned ACL");
    store
        .create_bucket(&bucket, Some(AclRequest::Canned(policy)))
        .await?;

    let outcome = check_canned(store, &bucket, owner, policy).await;
    cleanup(store, &bucket).await;
    outcome
}

/// Create a fresh private bucket, replace its ACL with `policy`, then verify
///
/// The default ACL is checked first: a bucket created without an ACL must
/// report `private`.
pub async fn set_and_verify(
    store: &dyn AclStore,
    owner: &Owner,
    policy: CannedAcl,
) -> Result<(), ScenarioError> {
    let bucket = unique_bucket();
    store.create_bucket(&bucket, None).await?;

    let outcome = async {
        check_canned(store, &bucket, owner, CannedAcl::Private).await?;

        info!(bucket = %bucket, policy = %policy, "setting canned ACL");
        store
            .set_bucket_acl(&bucket, AclRequest::Canned(policy))
            .await?;
        check_canned(store, &bucket, owner, policy).await
    }
    .await;

    cleanup(store, &bucket).await;
    outcome
}

/// Cycle one bucket through every canned policy, verifying after each
pub async fn cycle_all(store: &dyn AclStore, owner: &Owner) -> Result<(), ScenarioError> {
    let bucket = unique_bucket();
    store.create_bucket(&bucket, None).await?;

    let outcome = async {
        for policy in CannedAcl::ALL {
            info!(bucket = %bucket, policy = %policy, "setting canned ACL");
            store
                .set_bucket_acl(&bucket, AclRequest::Canned(policy))
                .await?;
            check_canned(store, &bucket, owner, policy).await?;
        }
        Ok(())
    }
    .await;

    cleanup(store, &bucket).await;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_bucket_names() {
        let a = unique_bucket();
        let b = unique_bucket();
        assert_ne!(a, b);
        // Bucket names must stay within S3's 63-character limit.
        assert!(a.len() <= 63);
        assert!(a.starts_with("aclstack-"));
    }
}
