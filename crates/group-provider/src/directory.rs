//! DirectoryProvider trait and optional capabilities
//!
//! A [`DirectoryProvider`] is the host-specific collaborator that owns the
//! live group state: it enumerates current members and applies computed
//! membership. Everything else about it is optional. A provider that knows
//! how to validate principals, compare memberships under host-specific
//! equivalence, or pretty-print member lists opts in by overriding the
//! corresponding capability accessor; the reconciliation engine queries
//! each capability once per call and falls back to its default algorithm
//! when the accessor returns `None`.

use group_core::MembershipValue;

use crate::error::Result;

/// Host-specific owner of live group membership.
pub trait DirectoryProvider {
    /// Current membership of `group`.
    ///
    /// Returns [`MembershipValue::Absent`] when the group does not exist or
    /// has no observable membership; that is a normal state, not an error.
    fn current_members(&self, group: &str) -> Result<MembershipValue>;

    /// Replace the membership of `group` with `members`.
    ///
    /// # Errors
    ///
    /// Any failure here is a reconciliation failure for the resource and
    /// must be reported; the engine does not retry.
    fn apply_members(&self, group: &str, members: &[String]) -> Result<()>;

    /// Principal validation capability, if this provider has one.
    fn validator(&self) -> Option<&dyn MemberValidator> {
        None
    }

    /// Host-specific membership equivalence, if this provider has one.
    fn equivalence(&self) -> Option<&dyn MembershipEquivalence> {
        None
    }

    /// Host-specific member rendering, if this provider has one.
    fn renderer(&self) -> Option<&dyn MemberRenderer> {
        None
    }
}

/// Decides whether a member identifier resolves to a real principal on
/// this host. Members that fail the check are dropped from the desired
/// set, silently.
pub trait MemberValidator {
    fn is_valid(&self, member: &str) -> bool;
}

/// Overrides the default in-sync comparison, e.g. for case-insensitive or
/// domain-qualified identifier semantics. The verdict is returned to the
/// caller unchanged.
pub trait MembershipEquivalence {
    fn members_equal(&self, current: &[String], desired: &[String]) -> bool;
}

/// Overrides the default comma-join rendering of member lists in change
/// reports.
pub trait MemberRenderer {
    fn render(&self, members: &[String]) -> String;
}
