//! Part-of-speech categories.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};

/// Part-of-speech tag partitioning synsets.
///
/// Serialized with the short tags used for thesaurus file stems
/// (`adj`, `adv`, `noun`, `verb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "adj")]
    Adjective,
    #[serde(rename = "adv")]
    Adverb,
    #[serde(rename = "noun")]
    Noun,
    #[serde(rename = "verb")]
    Verb,
}

impl Category {
    /// All categories in their canonical order.
    pub const ALL: [Category; 4] = [
        Category::Adjective,
        Category::Adverb,
        Category::Noun,
        Category::Verb,
    ];

    /// Short tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Adjective => "adj",
            Category::Adverb => "adv",
            Category::Noun => "noun",
            Category::Verb => "verb",
        }
    }

    /// Infer the category from a source file stem, e.g. `resources/adj.xml`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                LadderError::invalid_config(format!(
                    "Cannot infer category from path '{}'",
                    path.display()
                ))
            })?;
        stem.parse()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "adj" | "adjective" => Ok(Category::Adjective),
            "adv" | "adverb" => Ok(Category::Adverb),
            "noun" => Ok(Category::Noun),
            "verb" => Ok(Category::Verb),
            other => Err(LadderError::invalid_config(format!(
                "Unknown part-of-speech category '{other}'"
            ))),
        }
    }
}
