//! Synset sources and the multi-source build.
//!
//! A source yields the synset records of exactly one part-of-speech
//! category. Building from several sources turns each into a partial graph
//! and merges them. A source that cannot be read or parsed is logged and
//! contributes nothing; it never aborts the build.

pub mod json;
pub mod xml;

use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::{Category, LexicalGraph, LexicalGraphBuilder, SynsetRecord, merge_all};

pub use json::JsonSynsetSource;
pub use xml::XmlSynsetSource;

/// A provider of synset records for one category.
pub trait SynsetSource: Send + Sync {
    /// Human-readable identifier, used in logs and reports.
    fn name(&self) -> String;

    /// Category every record of this source belongs to.
    fn category(&self) -> Category;

    /// Read every record. Failure means the whole source is unusable.
    fn read_records(&self) -> Result<Vec<SynsetRecord>>;
}

/// What happened to one source during a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub name: String,
    pub category: Category,
    pub records: usize,
    pub skipped_records: usize,
    pub words: usize,
    pub error: Option<String>,
}

impl SourceReport {
    /// True when the source was read successfully.
    pub fn is_usable(&self) -> bool {
        self.error.is_none()
    }
}

/// Merged graph plus per-source reports.
#[derive(Debug)]
pub struct BuildReport {
    pub graph: LexicalGraph,
    pub sources: Vec<SourceReport>,
    pub duration_ms: u64,
}

impl BuildReport {
    /// Number of sources that loaded.
    pub fn usable_sources(&self) -> usize {
        self.sources.iter().filter(|s| s.is_usable()).count()
    }
}

/// Build the partial graph of one source.
///
/// An unreadable source yields an empty graph and a report carrying the
/// error.
pub fn build_partial(source: &dyn SynsetSource) -> (LexicalGraph, SourceReport) {
    let name = source.name();
    let category = source.category();

    match source.read_records() {
        Ok(records) => {
            let mut builder = LexicalGraphBuilder::new(category);
            builder.add_records(&records);
            let records = builder.records_added();
            let skipped_records = builder.records_skipped();
            let graph = builder.finish();
            debug!("Source {name} ({category}): {records} records, {} words", graph.len());
            let report = SourceReport {
                name,
                category,
                records,
                skipped_records,
                words: graph.len(),
                error: None,
            };
            (graph, report)
        }
        Err(e) => {
            warn!("Skipping source {name} ({category}): {e}");
            let report = SourceReport {
                name,
                category,
                records: 0,
                skipped_records: 0,
                words: 0,
                error: Some(e.to_string()),
            };
            (LexicalGraph::new(), report)
        }
    }
}

/// Build every source and merge the results.
///
/// With `parallel`, sources are read and built on the rayon pool; they share
/// no state until the merge, which always runs on the calling thread in
/// source order.
pub fn build_from_sources(sources: &[Box<dyn SynsetSource>], parallel: bool) -> BuildReport {
    let start_time = Instant::now();

    let partials: Vec<(LexicalGraph, SourceReport)> = if parallel {
        sources.par_iter().map(|s| build_partial(s.as_ref())).collect()
    } else {
        sources.iter().map(|s| build_partial(s.as_ref())).collect()
    };

    let (graphs, reports): (Vec<_>, Vec<_>) = partials.into_iter().unzip();
    let graph = merge_all(graphs);
    let duration_ms = start_time.elapsed().as_millis() as u64;

    info!(
        "Built lexical graph: {} words from {}/{} sources in {} ms",
        graph.len(),
        reports.iter().filter(|r| r.is_usable()).count(),
        reports.len(),
        duration_ms
    );

    BuildReport {
        graph,
        sources: reports,
        duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LadderError;

    struct FixedSource {
        category: Category,
        records: Vec<SynsetRecord>,
    }

    impl SynsetSource for FixedSource {
        fn name(&self) -> String {
            format!("fixed-{}", self.category)
        }

        fn category(&self) -> Category {
            self.category
        }

        fn read_records(&self) -> Result<Vec<SynsetRecord>> {
            Ok(self.records.clone())
        }
    }

    struct BrokenSource;

    impl SynsetSource for BrokenSource {
        fn name(&self) -> String {
            "broken".to_string()
        }

        fn category(&self) -> Category {
            Category::Noun
        }

        fn read_records(&self) -> Result<Vec<SynsetRecord>> {
            Err(LadderError::source_unreadable("broken", "truncated document"))
        }
    }

    fn sources() -> Vec<Box<dyn SynsetSource>> {
        vec![
            Box::new(FixedSource {
                category: Category::Adjective,
                records: vec![SynsetRecord::new(["hot", "warm"])],
            }),
            Box::new(BrokenSource),
            Box::new(FixedSource {
                category: Category::Verb,
                records: vec![SynsetRecord::new(["warm", "heat"]), SynsetRecord::new([""])],
            }),
        ]
    }

    #[test]
    fn test_broken_source_degrades_to_empty() {
        let report = build_from_sources(&sources(), false);

        assert_eq!(report.sources.len(), 3);
        assert_eq!(report.usable_sources(), 2);
        assert!(report.sources[1].error.is_some());
        assert_eq!(report.sources[2].skipped_records, 1);

        assert_eq!(report.graph.len(), 3);
        assert_eq!(report.graph.senses("warm").unwrap().len(), 2);
    }

    #[test]
    fn test_parallel_build_matches_serial() {
        let serial = build_from_sources(&sources(), false);
        let parallel = build_from_sources(&sources(), true);
        assert_eq!(serial.graph, parallel.graph);
    }
}
