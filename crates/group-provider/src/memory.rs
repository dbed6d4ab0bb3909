//! In-memory directory provider
//!
//! A [`DirectoryProvider`] backed by a plain map. Serves as the reference
//! implementation for tests and demos: groups are seeded up front, applies
//! mutate the map, and an optional known-principal set switches on the
//! validator capability.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use group_core::MembershipValue;

use crate::directory::{DirectoryProvider, MemberValidator};
use crate::error::{Error, Result};

/// Map-backed directory provider.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    groups: Mutex<HashMap<String, Vec<String>>>,
    known_principals: Option<HashSet<String>>,
}

impl InMemoryDirectory {
    /// Empty directory: no groups, every principal considered valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a group with its current members.
    pub fn with_group<I, S>(self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock()
            .insert(name.into(), members.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict valid principals to the given set, switching on the
    /// validator capability.
    pub fn with_known_principals<I, S>(mut self, principals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_principals = Some(principals.into_iter().map(Into::into).collect());
        self
    }

    /// Current members of a group, if it exists.
    pub fn members_of(&self, name: &str) -> Option<Vec<String>> {
        self.lock().get(name).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<String>>> {
        // Recover the map on poisoning; membership state stays usable.
        self.groups
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DirectoryProvider for InMemoryDirectory {
    fn current_members(&self, group: &str) -> Result<MembershipValue> {
        Ok(match self.lock().get(group) {
            Some(members) => MembershipValue::List(members.clone()),
            None => MembershipValue::Absent,
        })
    }

    fn apply_members(&self, group: &str, members: &[String]) -> Result<()> {
        let mut groups = self.lock();
        if !groups.contains_key(group) {
            return Err(Error::GroupNotFound {
                name: group.to_string(),
            });
        }
        tracing::debug!(group, count = members.len(), "writing group membership");
        groups.insert(group.to_string(), members.to_vec());
        Ok(())
    }

    fn validator(&self) -> Option<&dyn MemberValidator> {
        self.known_principals
            .as_ref()
            .map(|_| self as &dyn MemberValidator)
    }
}

impl MemberValidator for InMemoryDirectory {
    fn is_valid(&self, member: &str) -> bool {
        match &self.known_principals {
            Some(known) => known.contains(member),
            None => true,
        }
    }
}
