//! Reconciler implementation
//!
//! The reconciler ties the pure merge computation to a
//! [`DirectoryProvider`]: it filters the declared members through the
//! provider's validator capability, decides whether the group is already
//! in sync, and applies the computed target when it is not.

use group_core::{GroupResource, MembershipValue, canonical, merge};
use group_provider::DirectoryProvider;

use crate::error::Result;
use crate::report::{ChangeDescription, ReconcileReport, SyncOptions, SyncStatus};

/// Engine reconciling declared group resources against a directory.
///
/// Holds no state of its own beyond the provider borrow; distinct group
/// reconciliations are independent and a caller may run them in parallel
/// over the same provider.
pub struct Reconciler<'a> {
    provider: &'a dyn DirectoryProvider,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler over a directory provider.
    pub fn new(provider: &'a dyn DirectoryProvider) -> Self {
        Self { provider }
    }

    /// Declared members after validity filtering.
    ///
    /// When the provider exposes a validator, members it cannot resolve
    /// are dropped here, silently; a partially-invalid declaration is not
    /// an error. The filter applies to declared members only — current
    /// members merged in by partial mode never pass through it.
    pub fn desired_members(&self, resource: &GroupResource) -> Vec<String> {
        let declared = resource.members.normalize();
        let Some(validator) = self.provider.validator() else {
            return declared;
        };

        declared
            .into_iter()
            .filter(|member| {
                let valid = validator.is_valid(member);
                if !valid {
                    tracing::debug!(
                        group = %resource.name,
                        member = %member,
                        "skipping unresolvable member"
                    );
                }
                valid
            })
            .collect()
    }

    /// The membership this group should end up with, given its observed
    /// current value.
    pub fn target(&self, resource: &GroupResource, current: &MembershipValue) -> Vec<String> {
        merge(current, &self.desired_members(resource), resource.enforcement)
    }

    /// Whether current membership already satisfies the declaration.
    ///
    /// Delegates to the provider's equivalence capability when present,
    /// returning its verdict unchanged; otherwise compares the merged
    /// target against the canonical form of the current value.
    pub fn in_sync(&self, resource: &GroupResource, current: &MembershipValue) -> bool {
        let desired = self.desired_members(resource);

        if let Some(equivalence) = self.provider.equivalence() {
            return equivalence.members_equal(&current.normalize(), &desired);
        }

        merge(current, &desired, resource.enforcement) == canonical(current)
    }

    /// Render "is" and "should" text for this group's membership change.
    ///
    /// The "should" side is the same merged target the reconcile pass
    /// applies, so reported text always matches the eventual write. When
    /// the provider has a renderer capability, both sides are delegated to
    /// it; otherwise members are comma-joined and an absent current value
    /// reads as `absent`.
    pub fn describe(
        &self,
        resource: &GroupResource,
        current: &MembershipValue,
    ) -> ChangeDescription {
        let target = self.target(resource, current);

        match self.provider.renderer() {
            Some(renderer) => ChangeDescription {
                current: renderer.render(&current.normalize()),
                desired: renderer.render(&target),
            },
            None => ChangeDescription {
                current: if current.is_absent() {
                    "absent".to_string()
                } else {
                    current.normalize().join(",")
                },
                desired: target.join(","),
            },
        }
    }

    /// Reconcile one group resource.
    ///
    /// Queries current membership, evaluates sync, and applies the merged
    /// target when out of sync (unless `options.dry_run`). "Not in sync"
    /// is a report status, never an error; only provider failures — the
    /// read, or the apply — surface as `Err`.
    pub fn reconcile(
        &self,
        resource: &GroupResource,
        options: &SyncOptions,
    ) -> Result<ReconcileReport> {
        let current = self.provider.current_members(&resource.name)?;

        if self.in_sync(resource, &current) {
            tracing::debug!(group = %resource.name, "membership in sync");
            return Ok(ReconcileReport::in_sync(&resource.name));
        }

        let change = self.describe(resource, &current);
        let target = self.target(resource, &current);

        if options.dry_run {
            tracing::info!(group = %resource.name, change = %change, "[dry-run] would update members");
            return Ok(ReconcileReport {
                group: resource.name.clone(),
                status: SyncStatus::WouldChange,
                change: Some(change),
                applied: None,
            });
        }

        self.provider.apply_members(&resource.name, &target)?;
        tracing::info!(group = %resource.name, change = %change, "updated members");

        Ok(ReconcileReport {
            group: resource.name.clone(),
            status: SyncStatus::Changed,
            change: Some(change),
            applied: Some(target),
        })
    }

    /// Reconcile a set of group resources in declaration order.
    ///
    /// Stops at the first provider failure; reports for resources already
    /// processed are lost with it, so callers wanting partial progress
    /// should reconcile one resource at a time.
    pub fn reconcile_all(
        &self,
        resources: &[GroupResource],
        options: &SyncOptions,
    ) -> Result<Vec<ReconcileReport>> {
        resources
            .iter()
            .map(|resource| self.reconcile(resource, options))
            .collect()
    }
}
