//! Component References
//!
//! A [`ComponentRef`] describes one entry in the component tree of an
//! analyzed project: the project itself, a module, a directory or a single
//! file. References carry up to two identifiers because the server is mid
//! migration from numeric row ids to opaque unique ids; [`ComponentRef::resolved_id`]
//! picks the one the workspace should use.

use serde::{Deserialize, Serialize};

/// Identifier used by the workspace to locate a component.
///
/// Identifiers are opaque server-issued strings, not RFC-4122 UUIDs.
pub type ComponentId = String;

/// Kind of code entity a component points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ComponentKind {
    /// Top-level project
    Project,
    /// Module within a project
    Module,
    /// Directory
    Directory,
    /// Source file
    #[default]
    File,
    /// Unit test file
    UnitTest,
}

/// Reference to a component shown in the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComponentRef {
    /// Unique identifier, present on rows the id migration has reached
    #[serde(default)]
    pub uuid: Option<ComponentId>,
    /// Identifier from the numeric-id era, kept until the migration completes
    #[serde(default)]
    pub legacy_id: Option<ComponentId>,
    /// Display name
    pub name: String,
    /// Entity kind
    #[serde(default)]
    pub kind: ComponentKind,
}

impl ComponentRef {
    /// Identifier the workspace should open this component under.
    ///
    /// `uuid` wins when both identifiers are present. Returns `None` when the
    /// reference carries neither; callers are expected to supply at least one
    /// and this is not validated here.
    pub fn resolved_id(&self) -> Option<&ComponentId> {
        self.uuid.as_ref().or(self.legacy_id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> ComponentRef {
        ComponentRef {
            uuid: None,
            legacy_id: None,
            name: name.to_string(),
            kind: ComponentKind::File,
        }
    }

    #[test]
    fn test_uuid_takes_precedence() {
        let mut component = file("src/main.rs");
        component.uuid = Some("AX12".to_string());
        component.legacy_id = Some("4807".to_string());
        assert_eq!(component.resolved_id(), Some(&"AX12".to_string()));
    }

    #[test]
    fn test_legacy_id_fallback() {
        let mut component = file("src/main.rs");
        component.legacy_id = Some("4807".to_string());
        assert_eq!(component.resolved_id(), Some(&"4807".to_string()));
    }

    #[test]
    fn test_unresolvable_reference() {
        assert_eq!(file("src/main.rs").resolved_id(), None);
    }
}
