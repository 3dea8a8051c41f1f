//! In-memory ephemeral ACL store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::info;

use aclstack_core::{Acl, AclScope, CannedAcl, Owner};

use crate::traits::{AclRequest, AclStore, StoreError};

/// Per-bucket state
struct BucketEntry {
    acl: Acl,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

/// Ephemeral (in-memory) ACL backend scoped to a single account
///
/// Every ACL it persists is stamped with the account owner, so the owner
/// field always matches the bucket's true owner no matter what a request
/// carried.
pub struct EphemeralAclStore {
    owner: Owner,
    buckets: DashMap<String, BucketEntry>,
}

impl EphemeralAclStore {
    pub fn new(owner: Owner) -> Self {
        Self {
            owner,
            buckets: DashMap::new(),
        }
    }

    /// The account owner this store serves
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    fn materialize(&self, request: AclRequest) -> Acl {
        match request {
            AclRequest::Canned(policy) => policy.to_acl(&self.owner, &AclScope::Bucket),
            AclRequest::Explicit(acl) => Acl {
                owner: self.owner.clone(),
                grants: acl.grants,
            },
        }
    }
}

#[async_trait]
impl AclStore for EphemeralAclStore {
    async fn create_bucket(
        &self,
        bucket: &str,
        acl: Option<AclRequest>,
    ) -> Result<(), StoreError> {
        if self.buckets.contains_key(bucket) {
            return Err(StoreError::BucketAlreadyExists(bucket.to_string()));
        }

        let acl = self.materialize(acl.unwrap_or(AclRequest::Canned(CannedAcl::Private)));
        info!(bucket = %bucket, "creating bucket");
        self.buckets.insert(
            bucket.to_string(),
            BucketEntry {
                acl,
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<(), StoreError> {
        self.buckets
            .remove(bucket)
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))?;
        info!(bucket = %bucket, "deleted bucket");
        Ok(())
    }

    async fn bucket_exists(&self, bucket: &str) -> bool {
        self.buckets.contains_key(bucket)
    }

    async fn get_bucket_acl(&self, bucket: &str) -> Result<Acl, StoreError> {
        let entry = self
            .buckets
            .get(bucket)
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))?;
        Ok(entry.acl.clone())
    }

    async fn set_bucket_acl(&self, bucket: &str, acl: AclRequest) -> Result<(), StoreError> {
        let mut entry = self
            .buckets
            .get_mut(bucket)
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))?;
        entry.acl = self.materialize(acl);
        Ok(())
    }
}
