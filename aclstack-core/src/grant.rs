//! Grants, grantees, and permissions
//!
//! The building blocks of an ACL: who is granted what. A [`GrantSet`] holds
//! grants with set semantics, so duplicates collapse and ordering is never
//! observable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Capability granted on a bucket or object
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Permission {
    Read,
    Write,
    ReadAcp,
    WriteAcp,
    FullControl,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::ReadAcp => "READ_ACP",
            Self::WriteAcp => "WRITE_ACP",
            Self::FullControl => "FULL_CONTROL",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predefined S3 grantee groups
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GranteeGroup {
    AllUsers,
    AuthenticatedUsers,
    LogDelivery,
}

impl GranteeGroup {
    /// The fixed ACS URI identifying this group on the wire
    pub fn uri(&self) -> &'static str {
        match self {
            Self::AllUsers => "http://acs.amazonaws.com/groups/global/AllUsers",
            Self::AuthenticatedUsers => {
                "http://acs.amazonaws.com/groups/global/AuthenticatedUsers"
            }
            Self::LogDelivery => "http://acs.amazonaws.com/groups/s3/LogDelivery",
        }
    }

    /// Resolve a group from its ACS URI
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "http://acs.amazonaws.com/groups/global/AllUsers" => Some(Self::AllUsers),
            "http://acs.amazonaws.com/groups/global/AuthenticatedUsers" => {
                Some(Self::AuthenticatedUsers)
            }
            "http://acs.amazonaws.com/groups/s3/LogDelivery" => Some(Self::LogDelivery),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllUsers => "AllUsers",
            Self::AuthenticatedUsers => "AuthenticatedUsers",
            Self::LogDelivery => "LogDelivery",
        }
    }
}

impl fmt::Display for GranteeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity a permission is granted to
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Grantee {
    /// An account, identified by its canonical id
    CanonicalUser { id: String },
    /// A predefined group
    Group(GranteeGroup),
}

impl Grantee {
    pub fn canonical(id: impl Into<String>) -> Self {
        Self::CanonicalUser { id: id.into() }
    }

    pub fn group(group: GranteeGroup) -> Self {
        Self::Group(group)
    }
}

impl fmt::Display for Grantee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanonicalUser { id } => write!(f, "CanonicalUser({id})"),
            Self::Group(group) => write!(f, "Group({group})"),
        }
    }
}

/// A single (grantee, permission) pair
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Grant {
    pub grantee: Grantee,
    pub permission: Permission,
}

impl Grant {
    pub fn new(grantee: Grantee, permission: Permission) -> Self {
        Self {
            grantee,
            permission,
        }
    }
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.grantee, self.permission)
    }
}

/// A set of grants
///
/// Duplicates collapse on insert and iteration order is fixed by the grant
/// ordering, so two sets built from differently ordered input compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantSet(BTreeSet<Grant>);

impl GrantSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, grant: Grant) -> bool {
        self.0.insert(grant)
    }

    pub fn contains(&self, grant: &Grant) -> bool {
        self.0.contains(grant)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Grant> {
        self.0.iter()
    }

    /// Grants present in `self` but not in `other`
    pub fn difference(&self, other: &GrantSet) -> GrantSet {
        self.0.difference(&other.0).cloned().collect()
    }
}

impl FromIterator<Grant> for GrantSet {
    fn from_iter<I: IntoIterator<Item = Grant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Grant> for GrantSet {
    fn extend<I: IntoIterator<Item = Grant>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for GrantSet {
    type Item = Grant;
    type IntoIter = std::collections::btree_set::IntoIter<Grant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GrantSet {
    type Item = &'a Grant;
    type IntoIter = std::collections::btree_set::Iter<'a, Grant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for GrantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, grant) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{grant}")?;
        }
        write!(f, "}}")
    }
}
