//! Indefinite article selection for factory method prefixes
//!
//! Generated matchers expose fluent factory methods named `a<Class>` or
//! `an<Class>`. The choice between the two phrasings is made here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The indefinite article used as a factory method prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    A,
    An,
}

impl Article {
    /// Pick the article for a class name by its first letter.
    ///
    /// Returns [`Article::An`] iff the first character, lower-cased, is one
    /// of `a e i o u`, else [`Article::A`]. This is a first-letter check,
    /// not phonetics: "Union" gets "an" even though "a Union" reads better.
    /// Callers guarantee a non-empty name (a matched class always has one);
    /// an empty string falls back to [`Article::A`].
    ///
    /// # Examples
    /// ```
    /// use matchgen::Article;
    /// assert_eq!(Article::for_class_name("Apple"), Article::An);
    /// assert_eq!(Article::for_class_name("Banana"), Article::A);
    /// ```
    pub fn for_class_name(class_name: &str) -> Article {
        let has_vowel_sound = class_name
            .chars()
            .next()
            .map(|c| "aeiou".contains(c.to_ascii_lowercase()))
            .unwrap_or(false);

        if has_vowel_sound {
            Article::An
        } else {
            Article::A
        }
    }

    /// The article as it appears in the factory method prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::A => "a",
            Article::An => "an",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
