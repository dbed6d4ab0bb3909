//! Group resource declaration
//!
//! A [`GroupResource`] is the desired-state declaration for one group: its
//! name, the declared members, and the enforcement mode. It is constructed
//! once per reconciliation pass and never mutated during it.

use serde::{Deserialize, Serialize};

use crate::mode::EnforcementMode;
use crate::value::MembershipValue;

/// Kind of resource a dependency edge points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// The group entity itself must exist before membership is reconciled
    Group,
}

/// An ordering edge for the invoking framework's dependency graph.
///
/// The framework is expected to schedule this resource after the resource
/// the edge names; the core itself has no opinion on scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Kind of the depended-on resource
    pub kind: DependencyKind,
    /// Name of the depended-on resource
    pub name: String,
}

impl DependencyEdge {
    /// Edge pointing at a group resource by name
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            kind: DependencyKind::Group,
            name: name.into(),
        }
    }
}

/// Desired-state declaration for one group's membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupResource {
    /// Name of the target group (the resource's unique key)
    pub name: String,

    /// Enforcement policy; defaults to partial (additive)
    #[serde(default)]
    pub enforcement: EnforcementMode,

    /// Declared members; defaults to the empty list
    #[serde(default)]
    pub members: MembershipValue,
}

impl GroupResource {
    /// Create a declaration for `name` with defaults: partial enforcement,
    /// no declared members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enforcement: EnforcementMode::default(),
            members: MembershipValue::default(),
        }
    }

    /// Set the enforcement mode
    pub fn enforcement(mut self, mode: EnforcementMode) -> Self {
        self.enforcement = mode;
        self
    }

    /// Set the declared members
    pub fn members(mut self, members: impl Into<MembershipValue>) -> Self {
        self.members = members.into();
        self
    }

    /// Ordering edges this resource contributes to the framework's
    /// dependency graph: membership can only be reconciled once the group
    /// itself exists.
    pub fn dependencies(&self) -> Vec<DependencyEdge> {
        vec![DependencyEdge::group(&self.name)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_defaults() {
        let resource = GroupResource::new("wheel");
        assert_eq!(resource.name, "wheel");
        assert_eq!(resource.enforcement, EnforcementMode::Partial);
        assert_eq!(resource.members.normalize(), Vec::<String>::new());
    }

    #[test]
    fn builder_sets_mode_and_members() {
        let resource = GroupResource::new("admins")
            .enforcement(EnforcementMode::Comprehensive)
            .members("alice,bob");
        assert_eq!(resource.enforcement, EnforcementMode::Comprehensive);
        assert_eq!(resource.members.normalize(), vec!["alice", "bob"]);
    }

    #[test]
    fn declares_edge_on_its_own_group() {
        let resource = GroupResource::new("wheel");
        assert_eq!(resource.dependencies(), vec![DependencyEdge::group("wheel")]);
    }

    #[test]
    fn deserializes_with_defaults() {
        let resource: GroupResource = serde_json::from_str(r#"{"name": "wheel"}"#).unwrap();
        assert_eq!(resource, GroupResource::new("wheel"));
    }

    #[test]
    fn deserializes_boolean_enforcement_and_text_members() {
        let resource: GroupResource = serde_json::from_str(
            r#"{"name": "admins", "enforcement": true, "members": "alice,bob"}"#,
        )
        .unwrap();
        assert_eq!(resource.enforcement, EnforcementMode::Comprehensive);
        assert_eq!(resource.members, MembershipValue::from("alice,bob"));
    }
}
