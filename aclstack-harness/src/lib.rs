//! Storage harness for exercising bucket ACL behavior
//!
//! Provides the seam between the ACL model and an S3-compatible backend:
//! - [`AclStore`]: the bucket-lifecycle and ACL contract a backend implements
//! - [`EphemeralAclStore`]: an in-memory backend used as the test double
//! - [`scenario`]: reusable flows that drive any store through the canonical
//!   canned-ACL checks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use aclstack_core::{CannedAcl, Owner};
//! use aclstack_harness::{scenario, EphemeralAclStore};
//!
//! # async fn example() {
//! let owner = Owner::new("1a2b3c4d", "admin");
//! let store = EphemeralAclStore::new(owner.clone());
//!
//! scenario::apply_and_verify(&store, &owner, CannedAcl::PublicRead)
//!     .await
//!     .unwrap();
//! # }
//! ```

pub mod ephemeral;
pub mod scenario;
pub mod traits;

pub use ephemeral::EphemeralAclStore;
pub use scenario::ScenarioError;
pub use traits::{AclRequest, AclStore, StoreError};
