//! Configuration for building and querying the thesaurus.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};
use crate::ladder::PathFinderConfig;
use crate::lexicon::Category;
use crate::source::{JsonSynsetSource, SynsetSource, XmlSynsetSource};

/// File format of a synset source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Xml,
    Json,
}

impl SourceFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "xml" => Some(SourceFormat::Xml),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }
}

/// One synset source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the source file.
    pub path: PathBuf,
    /// Category of every record; defaults to the file stem.
    #[serde(default)]
    pub category: Option<Category>,
    /// File format; defaults to the file extension.
    #[serde(default)]
    pub format: Option<SourceFormat>,
}

impl SourceConfig {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        SourceConfig {
            path: path.into(),
            category: None,
            format: None,
        }
    }

    /// Category after applying the file stem fallback.
    pub fn resolved_category(&self) -> Result<Category> {
        match self.category {
            Some(category) => Ok(category),
            None => Category::from_path(&self.path),
        }
    }

    /// Format after applying the extension fallback.
    pub fn resolved_format(&self) -> Result<SourceFormat> {
        self.format
            .or_else(|| SourceFormat::from_path(&self.path))
            .ok_or_else(|| {
                LadderError::invalid_config(format!(
                    "Cannot infer source format of '{}'",
                    self.path.display()
                ))
            })
    }

    /// Open the source. The file itself is not read until the build.
    pub fn open(&self) -> Result<Box<dyn SynsetSource>> {
        let category = self.resolved_category()?;
        Ok(match self.resolved_format()? {
            SourceFormat::Xml => Box::new(XmlSynsetSource::new(&self.path, category)),
            SourceFormat::Json => Box::new(JsonSynsetSource::new(&self.path, category)),
        })
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Synset sources, one per category.
    pub sources: Vec<SourceConfig>,
    /// Where the merged graph is saved and loaded.
    pub snapshot_path: PathBuf,
    /// Build sources in parallel.
    pub parallel_build: bool,
    /// Path finder settings.
    pub path_finder: PathFinderConfig,
}

impl Default for LadderConfig {
    fn default() -> Self {
        LadderConfig {
            sources: ["adj", "adv", "noun", "verb"]
                .iter()
                .map(|stem| SourceConfig::new(format!("resources/thesaurus/{stem}.xml")))
                .collect(),
            snapshot_path: PathBuf::from("word_info.json"),
            parallel_build: false,
            path_finder: PathFinderConfig::default(),
        }
    }
}

impl LadderConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LadderError::invalid_config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: LadderConfig = serde_json::from_str(&content).map_err(|e| {
            LadderError::invalid_config(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every source resolves to a category and format.
    pub fn validate(&self) -> Result<()> {
        if self.path_finder.max_visited == Some(0) {
            return Err(LadderError::invalid_config(
                "path_finder.max_visited must be greater than zero",
            ));
        }
        for source in &self.sources {
            source.resolved_category()?;
            source.resolved_format()?;
        }
        Ok(())
    }

    /// Open every configured source.
    pub fn open_sources(&self) -> Result<Vec<Box<dyn SynsetSource>>> {
        self.sources.iter().map(SourceConfig::open).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LadderConfig::default();
        assert_eq!(config.sources.len(), 4);
        assert_eq!(config.snapshot_path, PathBuf::from("word_info.json"));
        assert!(!config.parallel_build);
        assert_eq!(config.path_finder.max_visited, None);
        config.validate().unwrap();

        let sources = config.open_sources().unwrap();
        let categories: Vec<Category> = sources.iter().map(|s| s.category()).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_load_from_file_with_partial_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "sources": [
                    {{"path": "data/colors.json", "category": "adj"}},
                    {{"path": "data/verb.xml"}}
                ],
                "path_finder": {{"max_visited": 1000}}
            }}"#
        )
        .unwrap();

        let config = LadderConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.snapshot_path, PathBuf::from("word_info.json"));
        assert_eq!(config.path_finder.max_visited, Some(1000));
        assert_eq!(
            config.sources[0].resolved_format().unwrap(),
            SourceFormat::Json
        );
        assert_eq!(
            config.sources[1].resolved_category().unwrap(),
            Category::Verb
        );
    }

    #[test]
    fn test_unresolvable_source_is_rejected() {
        let config = LadderConfig {
            sources: vec![SourceConfig::new("data/misc.txt")],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LadderError::InvalidConfig(_))
        ));
    }
}
