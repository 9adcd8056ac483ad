//! Synset records as produced by a source.

use serde::{Deserialize, Serialize};

/// One disambiguated sense: interchangeable terms, their antonyms and an
/// optional definition.
///
/// The part-of-speech category is not part of the record; it belongs to the
/// source that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRecord {
    /// Interchangeable words of this sense.
    #[serde(default)]
    pub terms: Vec<String>,
    /// Antonym words.
    #[serde(default)]
    pub antonyms: Vec<String>,
    /// Canonical definition, if any.
    #[serde(default)]
    pub definition: Option<String>,
}

impl SynsetRecord {
    /// Create a record from terms only.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SynsetRecord {
            terms: terms.into_iter().map(Into::into).collect(),
            antonyms: Vec::new(),
            definition: None,
        }
    }

    /// Set the antonyms.
    pub fn with_antonyms<I, S>(mut self, antonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.antonyms = antonyms.into_iter().map(Into::into).collect();
        self
    }

    /// Set the definition.
    pub fn with_definition<S: Into<String>>(mut self, definition: S) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Trim every string, drop empty ones and duplicates, and clear a blank
    /// definition.
    pub fn normalized(&self) -> SynsetRecord {
        SynsetRecord {
            terms: clean_words(&self.terms),
            antonyms: clean_words(&self.antonyms),
            definition: self
                .definition
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        }
    }

    /// True when the record has no usable terms.
    pub fn is_empty(&self) -> bool {
        self.terms.iter().all(|t| t.trim().is_empty())
    }
}

fn clean_words(words: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let word = word.trim();
        if !word.is_empty() && !cleaned.iter().any(|w| w == word) {
            cleaned.push(word.to_string());
        }
    }
    cleaned
}
