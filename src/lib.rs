// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # Matchgen — matcher-generation options core
//!
//! The presentation-independent core of a "generate matcher class" panel:
//! given a previously selected class, collect the parameters needed to
//! generate a companion matcher (class name, destination package and
//! source root, an optional superclass, an "extensible" flag) and
//! validate the proposed class name before generation proceeds.
//!
//! The crate knows nothing about widgets, project models, or file systems.
//! Hosts supply an [`OptionsDataSource`]; the core turns it into an
//! [`OptionsModel`], applies user edits, validates on demand, and produces
//! a [`MatcherOptions`] snapshot for the generator.
//!
//! ## Quick Start
//!
//! ```rust
//! use matchgen::{
//!     identifier::is_java_identifier, FixedDataSource, MatchedClass, OptionsModel, RootKind,
//!     SourceRootCandidate,
//! };
//!
//! let data_source = FixedDataSource {
//!     default_class_name: "WidgetMatcher".into(),
//!     default_is_extensible: false,
//!     matched_class: MatchedClass::new("Widget", false),
//!     candidate_roots: vec![SourceRootCandidate::new(
//!         "src/test/java",
//!         "src/test/java",
//!         RootKind::Test,
//!     )],
//!     default_root: "src/test/java".into(),
//!     package_name: "com.example.widgets".into(),
//!     recents_key: "matchgen.package.recents".into(),
//! };
//!
//! let mut model = OptionsModel::from_data_source(&data_source)?;
//! model.set_class_name("WidgetMatcher");
//! model.set_extends_superclass(true);
//! model.set_superclass_text("com.example.BaseMatcher");
//!
//! assert!(model.do_validate(is_java_identifier).is_none());
//! let options = model.finish();
//! assert_eq!(options.super_class_name.as_deref(), Some("com.example.BaseMatcher"));
//! # Ok::<(), matchgen::Error>(())
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! OptionsDataSource ──► OptionsModel::from_data_source
//!                              │
//!            user edits ──► mutators (set_class_name, toggles, ...)
//!                              │
//!                         do_validate ──► Option<ValidationFailure>
//!                              │
//!                           finish ──► MatcherOptions (to generator)
//! ```
//!
//! Everything is single-threaded and synchronous: each operation runs in
//! direct response to a user action or the one-time initialization, and
//! the model is discarded when the panel closes.

pub mod article;
pub mod data_source;
pub mod error;
pub mod identifier;
pub mod options;
pub mod validate;

// Re-exports
pub use article::Article;
pub use data_source::{
    FixedDataSource, MatchedClass, OptionsDataSource, RootId, RootKind, SourceRootCandidate,
};
pub use error::{Error, Result};
pub use options::{MatcherOptions, OptionsModel, SuperclassToggle};
pub use validate::{validate_class_name, OptionsField, ValidationErrorKind, ValidationFailure};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
