//! Manifest parsing for declared group resources
//!
//! The manifest is the TOML surface through which a calling framework (or a
//! human) declares desired group memberships:
//!
//! ```toml
//! [[group]]
//! name = "wheel"
//! members = ["alice", "bob"]
//! enforcement = "partial"
//!
//! [[group]]
//! name = "admins"
//! members = "alice"
//! enforcement = true          # historical boolean form: comprehensive
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resource::{DependencyEdge, GroupResource};

/// A set of declared group resources parsed from a manifest file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Declared group resources
    #[serde(default, rename = "group")]
    pub groups: Vec<GroupResource>,
}

impl Manifest {
    /// Parse a manifest from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or a declared
    /// value has a shape the data model rejects (malformed input fails
    /// fast rather than being coerced).
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// All ordering edges declared resources contribute to the framework's
    /// dependency graph.
    pub fn dependencies(&self) -> Vec<DependencyEdge> {
        self.groups
            .iter()
            .flat_map(GroupResource::dependencies)
            .collect()
    }
}
