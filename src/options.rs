//! The options model — mutable selection state for one panel session
//!
//! [`OptionsModel`] is built once from an [`OptionsDataSource`], mutated in
//! place as the user edits, validated on demand, and read exactly once by
//! the generation step when the user confirms. It holds no widgets and does
//! no I/O; a presentation layer binds controls to the mutators and
//! accessors here.

use crate::article::Article;
use crate::data_source::{MatchedClass, OptionsDataSource, RootId, SourceRootCandidate};
use crate::error::{Error, Result};
use crate::validate::{validate_class_name, ValidationFailure};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Enable/disable state of the superclass field, driven by the extends
/// checkbox.
///
/// `Collapsed` means the field is disabled and its stored text is read as
/// absent; `Expanded` means enabled and editable. Toggling moves between
/// the two states without ever clearing the stored text, so switching off
/// and back on restores what the user had typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuperclassToggle {
    Collapsed,
    Expanded,
}

impl SuperclassToggle {
    pub fn is_expanded(&self) -> bool {
        matches!(self, SuperclassToggle::Expanded)
    }
}

/// Mutable state of the matcher-generator options panel
#[derive(Debug, Clone)]
pub struct OptionsModel {
    matched_class: MatchedClass,
    class_name: String,
    package_name: String,
    recents_key: String,
    extensible: bool,
    article: Option<Article>,
    superclass_toggle: SuperclassToggle,
    superclass_text: String,
    candidates: Vec<SourceRootCandidate>,
    selected_root: usize,
}

impl OptionsModel {
    /// Build the initial model from the host's data source.
    ///
    /// Defaults follow the matched class: an abstract class forces the
    /// extensible flag on (an extensible matcher is almost certainly wanted
    /// for it) and disables the article choice entirely. The default root
    /// is preselected only if its id is among the candidates; otherwise the
    /// first candidate is taken. An empty candidate set is an integration
    /// fault, not something to paper over with a made-up default.
    pub fn from_data_source(data_source: &impl OptionsDataSource) -> Result<Self> {
        let candidates: Vec<SourceRootCandidate> = data_source.candidate_roots().to_vec();
        if candidates.is_empty() {
            return Err(Error::NoCandidateRoots);
        }

        let matched_class = data_source.matched_class().clone();

        let extensible = if matched_class.is_abstract {
            true
        } else {
            data_source.default_is_extensible()
        };

        let article = if matched_class.is_abstract {
            None
        } else {
            Some(Article::for_class_name(&matched_class.name))
        };

        let default_root = data_source.default_root();
        let selected_root = candidates
            .iter()
            .position(|c| &c.id == default_root)
            .unwrap_or(0);

        Ok(Self {
            class_name: data_source.default_class_name(),
            package_name: data_source.package_name(),
            recents_key: data_source.recents_key().to_string(),
            matched_class,
            extensible,
            article,
            superclass_toggle: SuperclassToggle::Collapsed,
            superclass_text: String::new(),
            candidates,
            selected_root,
        })
    }

    // --- user edits ---

    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.class_name = class_name.into();
    }

    pub fn set_package_name(&mut self, package_name: impl Into<String>) {
        self.package_name = package_name.into();
    }

    pub fn set_extensible(&mut self, extensible: bool) {
        self.extensible = extensible;
    }

    /// Change the factory-method article. No-op when the matched class is
    /// abstract, where the choice is inert.
    pub fn set_article(&mut self, article: Article) {
        if !self.matched_class.is_abstract {
            self.article = Some(article);
        }
    }

    /// Toggle the extends checkbox. Only the enabled state of the
    /// superclass field changes; its text is preserved either way.
    pub fn set_extends_superclass(&mut self, extends: bool) {
        self.superclass_toggle = if extends {
            SuperclassToggle::Expanded
        } else {
            SuperclassToggle::Collapsed
        };
    }

    pub fn set_superclass_text(&mut self, text: impl Into<String>) {
        self.superclass_text = text.into();
    }

    /// Select a destination root by id. Returns false (selection unchanged)
    /// if no candidate carries the id.
    pub fn select_root(&mut self, id: &RootId) -> bool {
        match self.candidates.iter().position(|c| &c.id == id) {
            Some(index) => {
                self.selected_root = index;
                true
            }
            None => false,
        }
    }

    /// Select a destination root by display position. Returns false
    /// (selection unchanged) if the index is out of range.
    pub fn select_root_index(&mut self, index: usize) -> bool {
        if index < self.candidates.len() {
            self.selected_root = index;
            true
        } else {
            false
        }
    }

    // --- reads ---

    pub fn matched_class(&self) -> &MatchedClass {
        &self.matched_class
    }

    /// The class-name text as typed, untrimmed. Validation and the final
    /// snapshot trim; anyone else reading this raw value must too.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Package-history key for the package-picker collaborator
    pub fn recents_key(&self) -> &str {
        &self.recents_key
    }

    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    /// The current article selection, or `None` when the matched class is
    /// abstract and no choice is offered
    pub fn article(&self) -> Option<Article> {
        self.article
    }

    /// Whether the presentation layer should offer the article choice
    pub fn article_enabled(&self) -> bool {
        !self.matched_class.is_abstract
    }

    /// Whether the "an" phrasing is selected
    pub fn uses_an(&self) -> bool {
        self.article == Some(Article::An)
    }

    pub fn extends_superclass(&self) -> bool {
        self.superclass_toggle.is_expanded()
    }

    pub fn superclass_toggle(&self) -> SuperclassToggle {
        self.superclass_toggle
    }

    /// Whether the presentation layer should enable the superclass field
    pub fn superclass_enabled(&self) -> bool {
        self.superclass_toggle.is_expanded()
    }

    /// The trimmed superclass name, present only while the extends toggle
    /// is on. While it is off the stored text is retained but read as
    /// absent, not as an empty string. A `Some("")` here means the user
    /// asked for a superclass and left the field blank, which is the
    /// generator's validation problem, not this panel's.
    pub fn super_class_name(&self) -> Option<String> {
        match self.superclass_toggle {
            SuperclassToggle::Expanded => Some(self.superclass_text.trim().to_string()),
            SuperclassToggle::Collapsed => None,
        }
    }

    /// Candidate roots in display order
    pub fn candidate_roots(&self) -> &[SourceRootCandidate] {
        &self.candidates
    }

    pub fn selected_root(&self) -> &SourceRootCandidate {
        &self.candidates[self.selected_root]
    }

    pub fn selected_root_index(&self) -> usize {
        self.selected_root
    }

    /// Check the current state before accepting it, with the host's
    /// identifier rule. Returns at most one failure, pointing at the field
    /// to focus. A pure re-check every time: no partial-failure state is
    /// kept between calls.
    pub fn do_validate(&self, checker: impl Fn(&str) -> bool) -> Option<ValidationFailure> {
        validate_class_name(&self.class_name, checker)
    }

    /// Finalize the state into the snapshot handed to the generator.
    pub fn finish(&self) -> MatcherOptions {
        MatcherOptions {
            class_name: self.class_name.trim().to_string(),
            package_name: self.package_name.clone(),
            root: self.selected_root().clone(),
            extensible: self.extensible,
            uses_an: self.uses_an(),
            super_class_name: self.super_class_name(),
        }
    }
}

/// Finalized options, read exactly once by the generation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(
    title = "Matcher Options",
    description = "Finalized matcher-generation parameters"
)]
pub struct MatcherOptions {
    /// Name of the matcher class to generate (trimmed)
    pub class_name: String,

    /// Destination package
    pub package_name: String,

    /// Destination source root
    pub root: SourceRootCandidate,

    /// Generate an extensible matcher
    pub extensible: bool,

    /// Factory methods read "an X" rather than "a X"
    pub uses_an: bool,

    /// Superclass the matcher extends, absent when none was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_class_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::{FixedDataSource, RootKind};

    fn make_data_source() -> FixedDataSource {
        FixedDataSource {
            default_class_name: "WidgetMatcher".into(),
            default_is_extensible: false,
            matched_class: MatchedClass::new("Widget", false),
            candidate_roots: vec![
                SourceRootCandidate::new("src/main/java", "src/main/java", RootKind::Main),
                SourceRootCandidate::new("src/test/java", "src/test/java", RootKind::Test),
            ],
            default_root: "src/test/java".into(),
            package_name: "com.example.widgets".into(),
            recents_key: "matchgen.package.recents".into(),
        }
    }

    #[test]
    fn test_initial_defaults() {
        let model = OptionsModel::from_data_source(&make_data_source()).unwrap();
        assert_eq!(model.class_name(), "WidgetMatcher");
        assert_eq!(model.package_name(), "com.example.widgets");
        assert!(!model.is_extensible());
        assert!(!model.extends_superclass());
        assert_eq!(model.super_class_name(), None);
        assert_eq!(model.selected_root().id, "src/test/java".into());
    }

    #[test]
    fn test_article_defaults_from_matched_class_name() {
        let mut ds = make_data_source();
        let model = OptionsModel::from_data_source(&ds).unwrap();
        assert_eq!(model.article(), Some(Article::A));
        assert!(!model.uses_an());

        ds.matched_class = MatchedClass::new("Order", false);
        let model = OptionsModel::from_data_source(&ds).unwrap();
        assert_eq!(model.article(), Some(Article::An));
        assert!(model.uses_an());
    }

    #[test]
    fn test_abstract_class_forces_extensible_and_disables_article() {
        let mut ds = make_data_source();
        ds.matched_class = MatchedClass::new("AbstractWidget", true);
        ds.default_is_extensible = false;

        let mut model = OptionsModel::from_data_source(&ds).unwrap();
        assert!(model.is_extensible());
        assert_eq!(model.article(), None);
        assert!(!model.article_enabled());
        assert!(!model.uses_an());

        // The choice is inert, not merely defaulted
        model.set_article(Article::An);
        assert_eq!(model.article(), None);
    }

    #[test]
    fn test_unknown_default_root_falls_back_to_first() {
        let mut ds = make_data_source();
        ds.default_root = "generated".into();
        let model = OptionsModel::from_data_source(&ds).unwrap();
        assert_eq!(model.selected_root_index(), 0);
        assert_eq!(model.selected_root().id, "src/main/java".into());
    }

    #[test]
    fn test_no_candidate_roots_is_an_error() {
        let mut ds = make_data_source();
        ds.candidate_roots.clear();
        let err = OptionsModel::from_data_source(&ds).unwrap_err();
        assert!(matches!(err, Error::NoCandidateRoots));
    }

    #[test]
    fn test_superclass_text_survives_toggling() {
        let mut model = OptionsModel::from_data_source(&make_data_source()).unwrap();

        model.set_extends_superclass(true);
        model.set_superclass_text("com.example.Base");
        assert_eq!(model.super_class_name().as_deref(), Some("com.example.Base"));

        model.set_extends_superclass(false);
        assert_eq!(model.super_class_name(), None);
        assert!(!model.superclass_enabled());

        model.set_extends_superclass(true);
        assert_eq!(model.super_class_name().as_deref(), Some("com.example.Base"));
    }

    #[test]
    fn test_superclass_name_is_trimmed_on_read() {
        let mut model = OptionsModel::from_data_source(&make_data_source()).unwrap();
        model.set_extends_superclass(true);
        model.set_superclass_text("  com.example.Base  ");
        assert_eq!(model.super_class_name().as_deref(), Some("com.example.Base"));
    }

    #[test]
    fn test_select_root_rejects_unknown_ids() {
        let mut model = OptionsModel::from_data_source(&make_data_source()).unwrap();
        let before = model.selected_root_index();
        assert!(!model.select_root(&"nowhere".into()));
        assert_eq!(model.selected_root_index(), before);
        assert!(!model.select_root_index(99));
        assert_eq!(model.selected_root_index(), before);

        assert!(model.select_root(&"src/main/java".into()));
        assert_eq!(model.selected_root_index(), 0);
    }

    #[test]
    fn test_snapshots_compare_by_value() {
        let mut model = OptionsModel::from_data_source(&make_data_source()).unwrap();
        model.set_class_name("WidgetMatcher");

        // Finishing twice from unchanged state yields equal snapshots
        assert_eq!(model.finish(), model.finish());

        let before = model.finish();
        model.set_extensible(true);
        assert_ne!(before, model.finish());

        // Snapshot equality covers the selected root
        model.set_extensible(false);
        model.select_root_index(0);
        assert_ne!(before, model.finish());
        assert_ne!(before.root, model.finish().root);
    }

    #[test]
    fn test_finish_trims_class_name() {
        let mut model = OptionsModel::from_data_source(&make_data_source()).unwrap();
        model.set_class_name("  SpacedMatcher  ");
        let options = model.finish();
        assert_eq!(options.class_name, "SpacedMatcher");
        assert_eq!(options.super_class_name, None);
        assert!(!options.extensible);
    }
}
