//! Membership merge computation
//!
//! Computes the target membership for a group from its current membership,
//! the declared desired members, and the enforcement mode. The output is
//! always sorted and deduplicated, so repeated computation on the same
//! inputs yields byte-identical sequences and reconciliation is idempotent
//! by construction.

use crate::mode::EnforcementMode;
use crate::value::MembershipValue;

/// Compute the target membership sequence.
///
/// In [`EnforcementMode::Comprehensive`] the candidate set is the desired
/// list alone; in [`EnforcementMode::Partial`] it is the union of current
/// and desired members. Either way the result is deduplicated and sorted
/// lexicographically by the identifier's byte representation.
///
/// `desired` is taken post-normalization (and, in the engine, post
/// validity filtering); `current` is normalized here because it may still
/// carry the absent marker or the delimited-text shape.
pub fn merge(
    current: &MembershipValue,
    desired: &[String],
    mode: EnforcementMode,
) -> Vec<String> {
    let mut target = match mode {
        EnforcementMode::Comprehensive => desired.to_vec(),
        EnforcementMode::Partial => {
            let mut union = current.normalize();
            union.extend(desired.iter().cloned());
            union
        }
    };

    target.sort_unstable();
    target.dedup();
    target
}

/// Normalize a membership value into its canonical comparison form:
/// sorted and deduplicated.
///
/// Equivalent to a partial-mode merge with nothing desired. The default
/// in-sync check compares [`merge`] output against this, so both sides of
/// that comparison carry the same total ordering.
pub fn canonical(value: &MembershipValue) -> Vec<String> {
    merge(value, &[], EnforcementMode::Partial)
}
