//! Data model and algorithms for group membership reconciliation
//!
//! This crate holds the pure core of the membership reconciler:
//!
//! - **Value model**: [`MembershipValue`] and its normalization into a
//!   concrete member list
//! - **Enforcement policy**: [`EnforcementMode`] (partial vs comprehensive)
//! - **Merge computation**: [`merge`] and [`canonical`], the deterministic
//!   target-membership algorithm
//! - **Resource declaration**: [`GroupResource`] with its explicit
//!   [`DependencyEdge`]s, and the TOML [`Manifest`] surface
//!
//! Everything here is pure and host-independent; querying or mutating real
//! group membership lives behind the `DirectoryProvider` trait in the
//! `group-provider` crate, and the reconciliation engine that ties the two
//! together lives in `group-sync`.

pub mod error;
pub mod manifest;
pub mod merge;
pub mod mode;
pub mod resource;
pub mod value;

pub use error::{Error, Result};
pub use manifest::Manifest;
pub use merge::{canonical, merge};
pub use mode::EnforcementMode;
pub use resource::{DependencyEdge, DependencyKind, GroupResource};
pub use value::MembershipValue;
