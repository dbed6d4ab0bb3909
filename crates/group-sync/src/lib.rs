//! Reconciliation engine for declared group memberships
//!
//! `group-sync` sits above the pure data model (`group-core`) and the
//! host collaborator interface (`group-provider`):
//!
//! ```text
//!      invoking framework
//!             |
//!         group-sync
//!          /      \
//!   group-core  group-provider
//! ```
//!
//! The [`Reconciler`] drives one synchronous pass per group resource:
//! normalize and validity-filter the declaration, check whether current
//! membership already satisfies it, and if not compute the merged target,
//! describe the change, and apply it through the provider.
//!
//! # Example
//!
//! ```
//! use group_core::GroupResource;
//! use group_provider::InMemoryDirectory;
//! use group_sync::{Reconciler, SyncOptions};
//!
//! let directory = InMemoryDirectory::new().with_group("wheel", ["alice"]);
//! let reconciler = Reconciler::new(&directory);
//!
//! let resource = GroupResource::new("wheel").members("alice,bob");
//! let report = reconciler.reconcile(&resource, &SyncOptions::default())?;
//! assert!(report.changed());
//! # Ok::<(), group_sync::Error>(())
//! ```

pub mod error;
pub mod reconciler;
pub mod report;

pub use error::{Error, Result};
pub use reconciler::Reconciler;
pub use report::{ChangeDescription, ReconcileReport, SyncOptions, SyncStatus};
