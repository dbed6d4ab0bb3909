//! Directory collaborator interface for group reconciliation
//!
//! Defines the [`DirectoryProvider`] trait the reconciliation engine talks
//! to, the optional capability traits a provider may satisfy
//! ([`MemberValidator`], [`MembershipEquivalence`], [`MemberRenderer`]),
//! and [`InMemoryDirectory`], a map-backed reference implementation.
//!
//! Real providers (local account database, domain directory) implement
//! these traits outside this workspace; nothing in the core depends on any
//! particular host.

pub mod directory;
pub mod error;
pub mod memory;

pub use directory::{DirectoryProvider, MemberRenderer, MemberValidator, MembershipEquivalence};
pub use error::{Error, Result};
pub use memory::InMemoryDirectory;
