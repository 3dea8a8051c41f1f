//! Canned ACL policies
//!
//! S3 offers a set of predefined grant templates, known as canned ACLs,
//! applied by name via the `x-amz-acl` header. Each resolves to a concrete
//! grant set parameterized by the resource owner.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::acl::{Acl, AclScope, Owner};
use crate::error::AclError;
use crate::grant::{Grant, GrantSet, Grantee, GranteeGroup, Permission};

/// Named canned ACL policy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CannedAcl {
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
    BucketOwnerRead,
    BucketOwnerFullControl,
    LogDeliveryWrite,
}

impl CannedAcl {
    /// Every canned policy, in `x-amz-acl` header-name order
    pub const ALL: [CannedAcl; 7] = [
        CannedAcl::Private,
        CannedAcl::PublicRead,
        CannedAcl::PublicReadWrite,
        CannedAcl::AuthenticatedRead,
        CannedAcl::BucketOwnerRead,
        CannedAcl::BucketOwnerFullControl,
        CannedAcl::LogDeliveryWrite,
    ];

    /// The `x-amz-acl` header name for this policy
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::PublicRead => "public-read",
            Self::PublicReadWrite => "public-read-write",
            Self::AuthenticatedRead => "authenticated-read",
            Self::BucketOwnerRead => "bucket-owner-read",
            Self::BucketOwnerFullControl => "bucket-owner-full-control",
            Self::LogDeliveryWrite => "log-delivery-write",
        }
    }

    /// Resolve this policy to the grant set it must produce for `owner`
    ///
    /// The owner always receives FULL_CONTROL. The bucket-owner policies
    /// are ignored when applied to a bucket (S3 documents them as
    /// object-only), so at bucket scope they resolve to the same grants as
    /// `private`.
    pub fn resolve(&self, owner: &Owner, scope: &AclScope) -> GrantSet {
        let mut grants = GrantSet::new();
        grants.insert(Grant::new(owner.grantee(), Permission::FullControl));

        match self {
            Self::Private => {}
            Self::PublicRead => {
                grants.insert(Grant::new(
                    Grantee::group(GranteeGroup::AllUsers),
                    Permission::Read,
                ));
            }
            Self::PublicReadWrite => {
                grants.insert(Grant::new(
                    Grantee::group(GranteeGroup::AllUsers),
                    Permission::Read,
                ));
                grants.insert(Grant::new(
                    Grantee::group(GranteeGroup::AllUsers),
                    Permission::Write,
                ));
            }
            Self::AuthenticatedRead => {
                grants.insert(Grant::new(
                    Grantee::group(GranteeGroup::AuthenticatedUsers),
                    Permission::Read,
                ));
            }
            Self::LogDeliveryWrite => {
                grants.insert(Grant::new(
                    Grantee::group(GranteeGroup::LogDelivery),
                    Permission::Write,
                ));
                grants.insert(Grant::new(
                    Grantee::group(GranteeGroup::LogDelivery),
                    Permission::ReadAcp,
                ));
            }
            Self::BucketOwnerRead => match scope {
                // No effect on buckets
                AclScope::Bucket => {}
                AclScope::Object { bucket_owner } => {
                    grants.insert(Grant::new(bucket_owner.grantee(), Permission::Read));
                }
            },
            Self::BucketOwnerFullControl => match scope {
                // No effect on buckets
                AclScope::Bucket => {}
                AclScope::Object { bucket_owner } => {
                    grants.insert(Grant::new(
                        bucket_owner.grantee(),
                        Permission::FullControl,
                    ));
                }
            },
        }

        debug!(policy = %self, owner = %owner.id, grants = %grants, "resolved canned ACL");
        grants
    }

    /// The full ACL this policy must produce for `owner`
    pub fn to_acl(&self, owner: &Owner, scope: &AclScope) -> Acl {
        Acl {
            owner: owner.clone(),
            grants: self.resolve(owner, scope),
        }
    }
}

impl fmt::Display for CannedAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CannedAcl {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Self::Private),
            "public-read" => Ok(Self::PublicRead),
            "public-read-write" => Ok(Self::PublicReadWrite),
            "authenticated-read" => Ok(Self::AuthenticatedRead),
            "bucket-owner-read" => Ok(Self::BucketOwnerRead),
            "bucket-owner-full-control" => Ok(Self::BucketOwnerFullControl),
            "log-delivery-write" => Ok(Self::LogDeliveryWrite),
            other => Err(AclError::UnknownPolicy(other.to_string())),
        }
    }
}
