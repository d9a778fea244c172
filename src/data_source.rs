//! The collaborator boundary — inputs the hosting panel gathers for us
//!
//! Everything the options core needs from the outside world arrives through
//! [`OptionsDataSource`]: the matched class, naming defaults, the candidate
//! destination source roots, and the package-picker pass-throughs. The core
//! never touches a project model or file system; a host that has already
//! collected these values can hand over a [`FixedDataSource`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The class a matcher is being generated for
///
/// Supplied once and immutable for the panel session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchedClass {
    /// Simple class name (no package qualifier)
    pub name: String,

    /// Whether the class is abstract; abstract classes force an extensible
    /// matcher and get no factory-method article choice
    pub is_abstract: bool,
}

impl MatchedClass {
    pub fn new(name: impl Into<String>, is_abstract: bool) -> Self {
        Self {
            name: name.into(),
            is_abstract,
        }
    }
}

/// How the project index classifies a source root
///
/// Display hint only (icon choice, grouping); the core never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RootKind {
    Main,
    Test,
    Other,
}

/// Opaque identity key for a source root
///
/// Two candidates refer to the same root iff their ids are equal. The
/// default-root membership test compares ids only, never labels or kinds:
/// the collaborators are expected to hand back the same identity, not an
/// equal-looking value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct RootId(pub String);

impl RootId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RootId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A selectable destination source root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceRootCandidate {
    /// Identity key, supplied by the project-indexing collaborator
    pub id: RootId,

    /// Display label (typically a project-relative path)
    pub label: String,

    /// Classification tag for presentation
    pub kind: RootKind,
}

impl SourceRootCandidate {
    pub fn new(id: impl Into<RootId>, label: impl Into<String>, kind: RootKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Read-only supplier of everything the options model is initialized from
///
/// Queried once per panel session. Implementations wrap whatever project
/// model the host has; [`FixedDataSource`] covers hosts (and tests) that
/// already gathered the values.
pub trait OptionsDataSource {
    /// Proposed name for the generated matcher class
    fn default_class_name(&self) -> String;

    /// Whether matchers default to extensible in this project
    fn default_is_extensible(&self) -> bool;

    /// The class being matched
    fn matched_class(&self) -> &MatchedClass;

    /// Candidate destination roots, in display order
    fn candidate_roots(&self) -> &[SourceRootCandidate];

    /// The root to preselect, if it is among the candidates
    fn default_root(&self) -> &RootId;

    /// Destination package proposed to the user
    fn package_name(&self) -> String;

    /// Key under which the package picker stores its recent-entries history;
    /// carried opaquely, never interpreted here
    fn recents_key(&self) -> &str;
}

/// An [`OptionsDataSource`] backed by plain values
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FixedDataSource {
    pub default_class_name: String,
    pub default_is_extensible: bool,
    pub matched_class: MatchedClass,
    pub candidate_roots: Vec<SourceRootCandidate>,
    pub default_root: RootId,
    pub package_name: String,
    pub recents_key: String,
}

impl OptionsDataSource for FixedDataSource {
    fn default_class_name(&self) -> String {
        self.default_class_name.clone()
    }

    fn default_is_extensible(&self) -> bool {
        self.default_is_extensible
    }

    fn matched_class(&self) -> &MatchedClass {
        &self.matched_class
    }

    fn candidate_roots(&self) -> &[SourceRootCandidate] {
        &self.candidate_roots
    }

    fn default_root(&self) -> &RootId {
        &self.default_root
    }

    fn package_name(&self) -> String {
        self.package_name.clone()
    }

    fn recents_key(&self) -> &str {
        &self.recents_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_identity_ignores_label_and_kind() {
        let a = SourceRootCandidate::new("src/main/java", "main", RootKind::Main);
        let b = SourceRootCandidate::new("src/main/java", "renamed", RootKind::Test);
        assert_eq!(a.id, b.id);

        let c = SourceRootCandidate::new("src/test/java", "main", RootKind::Main);
        assert_ne!(a.id, c.id);
    }
}
