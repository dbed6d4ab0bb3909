//! Membership value model and normalization
//!
//! A declared or observed membership arrives in one of three shapes: a
//! comma-delimited string, a pre-built list, or the absent marker (group not
//! present / no members observed). [`MembershipValue::normalize`] coerces all
//! three into a concrete member list, and is applied at every boundary
//! crossing — ingestion, comparison, and rendering — so the rest of the
//! crate only ever reasons about `Vec<String>`.

use serde::{Deserialize, Serialize};

/// A group membership value in one of its accepted input shapes.
///
/// Deserializes untagged, so a manifest may declare members either as
/// `"alice,bob"` or as `["alice", "bob"]`. Any other shape is a
/// configuration error and fails deserialization outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MembershipValue {
    /// Comma-delimited member identifiers
    Text(String),
    /// Pre-built sequence of member identifiers
    List(Vec<String>),
    /// Group not present, or no membership observed
    Absent,
}

impl MembershipValue {
    /// Coerce this value into a concrete member list.
    ///
    /// - `Absent` becomes the empty sequence.
    /// - `Text` is split on `,`; empty tokens are dropped, token order is
    ///   preserved, and identifiers are otherwise untouched (they are
    ///   opaque — no trimming, no case folding).
    /// - `List` passes through unchanged.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            MembershipValue::Absent => Vec::new(),
            MembershipValue::Text(text) => text
                .split(',')
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
            MembershipValue::List(members) => members.clone(),
        }
    }

    /// Check whether this is the absent marker.
    pub fn is_absent(&self) -> bool {
        matches!(self, MembershipValue::Absent)
    }
}

impl Default for MembershipValue {
    /// Declared membership defaults to the empty list, not absent.
    fn default() -> Self {
        MembershipValue::List(Vec::new())
    }
}

impl From<Vec<String>> for MembershipValue {
    fn from(members: Vec<String>) -> Self {
        MembershipValue::List(members)
    }
}

impl From<&[&str]> for MembershipValue {
    fn from(members: &[&str]) -> Self {
        MembershipValue::List(members.iter().map(|m| m.to_string()).collect())
    }
}

impl From<&str> for MembershipValue {
    fn from(text: &str) -> Self {
        MembershipValue::Text(text.to_string())
    }
}
