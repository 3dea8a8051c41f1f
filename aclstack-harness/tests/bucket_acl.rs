//! Bucket ACL integration suite
//!
//! Drives a store through the canonical bucket ACL flows: buckets created
//! with each canned ACL, ACLs replaced after creation, one bucket cycled
//! through every policy, and explicit ACLs supplied the way a client would
//! via request headers or an XML body.

use async_trait::async_trait;

use aclstack_core::{
    verify_acl, Acl, CannedAcl, Grant, Grantee, GranteeGroup, Owner, Permission,
};
use aclstack_harness::{
    scenario, AclRequest, AclStore, EphemeralAclStore, ScenarioError, StoreError,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aclstack=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn owner() -> Owner {
    Owner::new("91e22a8f6b21c9f3a7ff4d23", "aclstack-admin")
}

fn store() -> EphemeralAclStore {
    init_logging();
    EphemeralAclStore::new(owner())
}

// =============================================================================
// CREATE BUCKET WITH CANNED ACL
// =============================================================================

#[tokio::test]
async fn test_create_bucket_canned_acl_private() {
    let s = store();
    scenario::apply_and_verify(&s, &owner(), CannedAcl::Private)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_bucket_canned_acl_public_read() {
    let s = store();
    scenario::apply_and_verify(&s, &owner(), CannedAcl::PublicRead)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_bucket_canned_acl_public_read_write() {
    let s = store();
    scenario::apply_and_verify(&s, &owner(), CannedAcl::PublicReadWrite)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_bucket_canned_acl_authenticated_read() {
    let s = store();
    scenario::apply_and_verify(&s, &owner(), CannedAcl::AuthenticatedRead)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_bucket_canned_acl_log_delivery_write() {
    let s = store();
    scenario::apply_and_verify(&s, &owner(), CannedAcl::LogDeliveryWrite)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_bucket_canned_acl_bucket_owner_read() {
    // Ignored at bucket scope; the bucket must report the private template.
    let s = store();
    scenario::apply_and_verify(&s, &owner(), CannedAcl::BucketOwnerRead)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_bucket_canned_acl_bucket_owner_full_control() {
    let s = store();
    scenario::apply_and_verify(&s, &owner(), CannedAcl::BucketOwnerFullControl)
        .await
        .unwrap();
}

// =============================================================================
// SET CANNED ACL ON EXISTING BUCKET
// =============================================================================

#[tokio::test]
async fn test_set_bucket_canned_acl_private() {
    let s = store();
    scenario::set_and_verify(&s, &owner(), CannedAcl::Private)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_bucket_canned_acl_public_read() {
    let s = store();
    scenario::set_and_verify(&s, &owner(), CannedAcl::PublicRead)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_bucket_canned_acl_public_read_write() {
    let s = store();
    scenario::set_and_verify(&s, &owner(), CannedAcl::PublicReadWrite)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_bucket_canned_acl_authenticated_read() {
    let s = store();
    scenario::set_and_verify(&s, &owner(), CannedAcl::AuthenticatedRead)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_bucket_canned_acl_log_delivery_write() {
    let s = store();
    scenario::set_and_verify(&s, &owner(), CannedAcl::LogDeliveryWrite)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_bucket_canned_acl_bucket_owner_read() {
    let s = store();
    scenario::set_and_verify(&s, &owner(), CannedAcl::BucketOwnerRead)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_bucket_canned_acl_bucket_owner_full_control() {
    let s = store();
    scenario::set_and_verify(&s, &owner(), CannedAcl::BucketOwnerFullControl)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_bucket_canned_acls_cycle() {
    let s = store();
    scenario::cycle_all(&s, &owner()).await.unwrap();
}

// =============================================================================
// EXPLICIT ACLS
// =============================================================================

#[tokio::test]
async fn test_create_bucket_with_explicit_acl() {
    // The header-grants flow: a bucket created with a custom grant list.
    let s = store();
    let acl = Acl::builder(owner())
        .grant(
            Grantee::group(GranteeGroup::AuthenticatedUsers),
            Permission::ReadAcp,
        )
        .grant(
            Grantee::group(GranteeGroup::AuthenticatedUsers),
            Permission::Write,
        )
        .grant(Grantee::group(GranteeGroup::LogDelivery), Permission::Write)
        .grant(
            Grantee::group(GranteeGroup::AllUsers),
            Permission::FullControl,
        )
        .grant(owner().grantee(), Permission::FullControl)
        .build()
        .unwrap();

    s.create_bucket("explicit-create", Some(AclRequest::Explicit(acl.clone())))
        .await
        .unwrap();

    let actual = s.get_bucket_acl("explicit-create").await.unwrap();
    let verification = verify_acl(&actual, &acl);
    assert!(verification.is_verified(), "{verification}");
}

#[tokio::test]
async fn test_set_bucket_explicit_acl() {
    // The XML-body flow: replace a private bucket's ACL with a custom one.
    let s = store();
    s.create_bucket("explicit-set", None).await.unwrap();

    let acl = Acl::builder(owner())
        .grant(
            Grantee::group(GranteeGroup::LogDelivery),
            Permission::FullControl,
        )
        .grant(Grantee::group(GranteeGroup::AllUsers), Permission::WriteAcp)
        .grant(owner().grantee(), Permission::FullControl)
        .build()
        .unwrap();

    s.set_bucket_acl("explicit-set", AclRequest::Explicit(acl.clone()))
        .await
        .unwrap();

    let actual = s.get_bucket_acl("explicit-set").await.unwrap();
    let verification = verify_acl(&actual, &acl);
    assert!(verification.is_verified(), "{verification}");
}

// =============================================================================
// FAILURE REPORTING
// =============================================================================

/// A store that loses every group grant, the way a buggy backend would
struct GrantDroppingStore {
    inner: EphemeralAclStore,
}

#[async_trait]
impl AclStore for GrantDroppingStore {
    async fn create_bucket(
        &self,
        bucket: &str,
        acl: Option<AclRequest>,
    ) -> Result<(), StoreError> {
        self.inner.create_bucket(bucket, acl).await
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<(), StoreError> {
        self.inner.delete_bucket(bucket).await
    }

    async fn bucket_exists(&self, bucket: &str) -> bool {
        self.inner.bucket_exists(bucket).await
    }

    async fn get_bucket_acl(&self, bucket: &str) -> Result<Acl, StoreError> {
        let acl = self.inner.get_bucket_acl(bucket).await?;
        let grants: Vec<Grant> = acl
            .grants
            .iter()
            .filter(|g| matches!(g.grantee, Grantee::CanonicalUser { .. }))
            .cloned()
            .collect();
        Ok(Acl::new(acl.owner, grants))
    }

    async fn set_bucket_acl(&self, bucket: &str, acl: AclRequest) -> Result<(), StoreError> {
        self.inner.set_bucket_acl(bucket, acl).await
    }
}

#[tokio::test]
async fn test_dropped_grants_fail_verification() {
    let s = GrantDroppingStore { inner: store() };

    let err = scenario::apply_and_verify(&s, &owner(), CannedAcl::PublicRead)
        .await
        .unwrap_err();

    match err {
        ScenarioError::Verification { verification, .. } => {
            let message = verification.to_string();
            assert!(!verification.is_verified());
            assert!(message.contains("missing"), "diagnosis was: {message}");
            assert!(
                message.contains("Group(AllUsers) => READ"),
                "diagnosis was: {message}"
            );
        }
        other => panic!("expected a verification failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_store_errors_propagate() {
    let s = store();

    let result = s.get_bucket_acl("never-created").await;
    assert!(matches!(result, Err(StoreError::BucketNotFound(_))));

    let result = s
        .set_bucket_acl("never-created", AclRequest::Canned(CannedAcl::Private))
        .await;
    assert!(matches!(result, Err(StoreError::BucketNotFound(_))));
}
