//! JSON synset files.
//!
//! The file holds an array whose elements are either full records or bare
//! synonym groups:
//!
//! ```json
//! [
//!   {"terms": ["hot", "warm"], "antonyms": ["cold"], "definition": "high in temperature"},
//!   ["warm", "mild", "cool"]
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LadderError, Result};
use crate::lexicon::{Category, SynsetRecord};
use crate::source::SynsetSource;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSynset {
    Group(Vec<String>),
    Record(SynsetRecord),
}

impl From<RawSynset> for SynsetRecord {
    fn from(raw: RawSynset) -> Self {
        match raw {
            RawSynset::Group(terms) => SynsetRecord::new(terms),
            RawSynset::Record(record) => record,
        }
    }
}

/// A per-category JSON synset file.
#[derive(Debug, Clone)]
pub struct JsonSynsetSource {
    path: PathBuf,
    category: Category,
}

impl JsonSynsetSource {
    /// Create a source with an explicit category.
    pub fn new<P: Into<PathBuf>>(path: P, category: Category) -> Self {
        JsonSynsetSource {
            path: path.into(),
            category,
        }
    }

    /// Create a source whose category is the file stem (`noun.json`, ...).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Ok(Self::new(path, Category::from_path(path)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SynsetSource for JsonSynsetSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn category(&self) -> Category {
        self.category
    }

    fn read_records(&self) -> Result<Vec<SynsetRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            LadderError::source_unreadable(
                self.name(),
                format!("Failed to read synset file: {e}"),
            )
        })?;
        parse_records(&content).map_err(|e| {
            LadderError::source_unreadable(
                self.name(),
                format!("Failed to parse synset JSON: {e}"),
            )
        })
    }
}

/// Parse a JSON array of records and synonym groups.
pub fn parse_records(content: &str) -> Result<Vec<SynsetRecord>> {
    let raw: Vec<RawSynset> = serde_json::from_str(content)?;
    Ok(raw.into_iter().map(SynsetRecord::from).collect())
}
