//! S3 bucket ACL model and verifier
//!
//! This crate models S3 access control lists: the grant/grantee data model,
//! the canned-ACL grant tables, and a set-based verifier that compares an
//! ACL reported by a service against the ACL it is expected to carry.

pub mod acl;
pub mod canned;
pub mod error;
pub mod grant;
pub mod verify;

pub use acl::{Acl, AclBuilder, AclScope, Owner};
pub use canned::CannedAcl;
pub use error::AclError;
pub use grant::{Grant, GrantSet, Grantee, GranteeGroup, Permission};
pub use verify::{verify_acl, verify_canned_acl, Verification};
