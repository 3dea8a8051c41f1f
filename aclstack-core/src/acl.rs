//! Access control lists and their owners
//!
//! An [`Acl`] is an owner plus a [`GrantSet`]. ACLs are computed fresh each
//! time a policy is applied; replacing an ACL replaces its grant set
//! wholesale. The owner must always equal the resource's true owner,
//! whatever grants are present.

use serde::{Deserialize, Serialize};

use crate::error::AclError;
use crate::grant::{Grant, GrantSet, Grantee, Permission};

/// The account that owns a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub display_name: String,
}

impl Owner {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// The owner as a grantee
    pub fn grantee(&self) -> Grantee {
        Grantee::canonical(self.id.clone())
    }
}

/// What a canned policy is being applied to
///
/// The bucket-owner policies only have an effect on objects, where the
/// bucket owner may differ from the object owner, so the object scope
/// carries the bucket owner's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AclScope {
    Bucket,
    Object { bucket_owner: Owner },
}

/// An access control list: a resource owner and the grants on the resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    pub owner: Owner,
    pub grants: GrantSet,
}

impl Acl {
    pub fn new(owner: Owner, grants: impl IntoIterator<Item = Grant>) -> Self {
        Self {
            owner,
            grants: grants.into_iter().collect(),
        }
    }

    /// Start building an explicit ACL for `owner`
    pub fn builder(owner: Owner) -> AclBuilder {
        AclBuilder {
            owner,
            grants: GrantSet::new(),
        }
    }
}

/// Builder for explicit (non-canned) ACLs
///
/// The only validation is that the grant list must not end up empty;
/// duplicate grants collapse via [`GrantSet`].
#[derive(Debug, Clone)]
pub struct AclBuilder {
    owner: Owner,
    grants: GrantSet,
}

impl AclBuilder {
    pub fn grant(mut self, grantee: Grantee, permission: Permission) -> Self {
        self.grants.insert(Grant::new(grantee, permission));
        self
    }

    pub fn build(self) -> Result<Acl, AclError> {
        if self.grants.is_empty() {
            return Err(AclError::EmptyGrants);
        }
        Ok(Acl {
            owner: self.owner,
            grants: self.grants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grant::GranteeGroup;

    fn owner() -> Owner {
        Owner::new("1a2b3c", "admin")
    }

    #[test]
    fn test_builder_collects_grants() {
        let acl = Acl::builder(owner())
            .grant(Grantee::canonical("1a2b3c"), Permission::FullControl)
            .grant(Grantee::group(GranteeGroup::AllUsers), Permission::Read)
            .build()
            .unwrap();

        assert_eq!(acl.owner, owner());
        assert_eq!(acl.grants.len(), 2);
        assert!(acl.grants.contains(&Grant::new(
            Grantee::group(GranteeGroup::AllUsers),
            Permission::Read
        )));
    }

    #[test]
    fn test_builder_rejects_empty_grants() {
        let result = Acl::builder(owner()).build();
        assert!(matches!(result, Err(AclError::EmptyGrants)));
    }

    #[test]
    fn test_builder_collapses_duplicates() {
        let acl = Acl::builder(owner())
            .grant(Grantee::canonical("1a2b3c"), Permission::FullControl)
            .grant(Grantee::canonical("1a2b3c"), Permission::FullControl)
            .build()
            .unwrap();

        assert_eq!(acl.grants.len(), 1);
    }

    #[test]
    fn test_owner_grantee() {
        assert_eq!(owner().grantee(), Grantee::canonical("1a2b3c"));
    }
}
