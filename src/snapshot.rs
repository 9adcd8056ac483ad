//! JSON snapshots of a merged lexical graph.
//!
//! The snapshot is keyed by word, then category tag, then field name, each
//! field an array of strings:
//!
//! ```json
//! {
//!   "warm": {
//!     "adj": {
//!       "synonyms": ["cool", "hot", "mild"],
//!       "antonyms": [],
//!       "definitions": ["moderately hot"]
//!     }
//!   }
//! }
//! ```
//!
//! Older snapshots that name the last field `definition` load as well.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::error::{LadderError, Result};
use crate::lexicon::LexicalGraph;
use crate::source::{BuildReport, SynsetSource, build_from_sources};

/// Write `graph` to `path` as pretty-printed JSON, replacing any existing
/// snapshot atomically.
pub fn save<P: AsRef<Path>>(graph: &LexicalGraph, path: P) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Written next to the target and renamed over it, so the snapshot is
    // either complete or untouched.
    let mut file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, graph)?;
        writer.flush()?;
    }
    file.persist(path).map_err(|e| e.error)?;

    info!("Saved snapshot of {} words to {}", graph.len(), path.display());
    Ok(())
}

/// Load a graph from a snapshot.
///
/// Words listed as their own synonym lose that entry, then empty category
/// entries and words left without any are dropped, so the loaded graph holds
/// the same invariants as a freshly built one.
pub fn load<P: AsRef<Path>>(path: P) -> Result<LexicalGraph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut graph: LexicalGraph = serde_json::from_reader(BufReader::new(file))?;

    let pruned = graph.prune_empty();
    info!(
        "Loaded snapshot of {} words from {} ({} empty entries dropped)",
        graph.len(),
        path.display(),
        pruned
    );
    Ok(graph)
}

/// Options for [`load_or_build`].
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Rebuild even when a snapshot exists.
    pub force: bool,
    /// Build sources on the rayon pool.
    pub parallel: bool,
}

/// Where the graph returned by [`load_or_build`] came from.
#[derive(Debug)]
pub enum GraphOrigin {
    Loaded,
    Built(BuildReport),
}

/// Load the snapshot at `path`, or build it from `sources` and save it when
/// it does not exist (or `options.force` is set).
///
/// Building fails with [`LadderError::NoUsableSources`] when no source could
/// be read; nothing is written in that case.
pub fn load_or_build<P: AsRef<Path>>(
    path: P,
    sources: &[Box<dyn SynsetSource>],
    options: &BuildOptions,
) -> Result<(LexicalGraph, GraphOrigin)> {
    let path = path.as_ref();
    if path.exists() && !options.force {
        return Ok((load(path)?, GraphOrigin::Loaded));
    }

    let mut report = build_from_sources(sources, options.parallel);
    if report.usable_sources() == 0 {
        let names: Vec<String> = report.sources.iter().map(|s| s.name.clone()).collect();
        return Err(LadderError::NoUsableSources(if names.is_empty() {
            "no sources configured".to_string()
        } else {
            names.join(", ")
        }));
    }

    save(&report.graph, path)?;
    let graph = std::mem::take(&mut report.graph);
    Ok((graph, GraphOrigin::Built(report)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Category, SynsetRecord, build};
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("word_info.json");

        let graph = build(
            vec![SynsetRecord::new(["hot", "warm"]).with_antonyms(["cold"])],
            Category::Adjective,
        );
        save(&graph, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(graph, loaded);
    }

    #[test]
    fn test_load_prunes_empty_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("word_info.json");
        fs::write(
            &path,
            r#"{"hot": {"adj": {"synonyms": ["warm"]}, "noun": {}}, "void": {"verb": {}}}"#,
        )
        .unwrap();

        let graph = load(&path).unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.senses("hot").unwrap().len(), 1);
    }

    #[test]
    fn test_load_drops_self_synonyms() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("word_info.json");
        fs::write(
            &path,
            r#"{"a": {"adj": {"synonyms": ["a", "b"]}}, "b": {"adj": {"synonyms": ["a"]}}}"#,
        )
        .unwrap();

        let graph = load(&path).unwrap();
        let synonyms = &graph.senses("a").unwrap().get(Category::Adjective).unwrap().synonyms;
        assert!(!synonyms.contains("a"));
        assert!(synonyms.contains("b"));
    }

    #[test]
    fn test_save_replaces_snapshot_whole() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("word_info.json");
        let graph = build(vec![SynsetRecord::new(["hot", "warm"])], Category::Adjective);

        save(&graph, &path).unwrap();
        save(&graph, &path).unwrap();
        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(load(&path).unwrap(), graph);
    }

    #[test]
    fn test_failed_save_leaves_no_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        // A directory in the way makes the final rename fail.
        let path = temp_dir.path().join("word_info.json");
        fs::create_dir(&path).unwrap();
        let graph = build(vec![SynsetRecord::new(["hot", "warm"])], Category::Adjective);

        assert!(save(&graph, &path).is_err());
        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(path.is_dir());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            load(temp_dir.path().join("absent.json")),
            Err(LadderError::Io(_))
        ));
    }

    #[test]
    fn test_load_or_build_without_sources_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("word_info.json");

        let result = load_or_build(&path, &[], &BuildOptions::default());
        assert!(matches!(result, Err(LadderError::NoUsableSources(_))));
        assert!(!path.exists());
    }
}
