//! Bucket ACL storage contract

use async_trait::async_trait;
use thiserror::Error;

use aclstack_core::{Acl, CannedAcl};

/// Errors from store operations
///
/// These are transport/service failures and propagate verbatim; whether to
/// retry is the caller's decision.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    #[error("Bucket already exists: {0}")]
    BucketAlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// How an ACL is supplied to a store
///
/// Canned requests name a policy the backend resolves itself; explicit
/// requests carry the full grant list, as a client would via request
/// headers or an XML body.
#[derive(Debug, Clone)]
pub enum AclRequest {
    Canned(CannedAcl),
    Explicit(Acl),
}

/// Abstract bucket ACL backend
///
/// Applying an ACL always replaces the bucket's grant set wholesale; a
/// bucket created without an ACL gets `private`.
#[async_trait]
pub trait AclStore: Send + Sync {
    /// Create a bucket, optionally with an initial ACL
    async fn create_bucket(
        &self,
        bucket: &str,
        acl: Option<AclRequest>,
    ) -> Result<(), StoreError>;

    /// Delete a bucket
    async fn delete_bucket(&self, bucket: &str) -> Result<(), StoreError>;

    /// Check if a bucket exists
    async fn bucket_exists(&self, bucket: &str) -> bool;

    /// Fetch the current ACL for a bucket
    async fn get_bucket_acl(&self, bucket: &str) -> Result<Acl, StoreError>;

    /// Replace the ACL for a bucket
    async fn set_bucket_acl(&self, bucket: &str, acl: AclRequest) -> Result<(), StoreError>;
}
