//! Ladder queries and their outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};
use crate::ladder::path_finder::{PathFinder, PathFinderConfig, WordPath};
use crate::lexicon::LexicalGraph;

/// A validated request for a ladder between two different words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderQuery {
    start: String,
    end: String,
}

impl LadderQuery {
    /// Validate a query. Words are trimmed; empty words and identical
    /// start and end words are rejected.
    pub fn new<S: AsRef<str>, E: AsRef<str>>(start: S, end: E) -> Result<Self> {
        let start = start.as_ref().trim();
        let end = end.as_ref().trim();

        if start.is_empty() || end.is_empty() {
            return Err(LadderError::invalid_query(
                "start and end words must not be empty",
            ));
        }
        if start == end {
            return Err(LadderError::invalid_query(format!(
                "start and end are the same word '{start}'"
            )));
        }

        Ok(LadderQuery {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// The three answers a ladder query can have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LadderOutcome {
    Found { path: WordPath },
    NoPath { start: String, end: String },
    UnknownWord { word: String },
}

impl LadderOutcome {
    /// Sort a search result into an outcome. Errors other than an unknown
    /// word or a missing path are passed through.
    pub fn from_result(result: Result<WordPath>) -> Result<Self> {
        match result {
            Ok(path) => Ok(LadderOutcome::Found { path }),
            Err(LadderError::NoPathFound { start, end }) => Ok(LadderOutcome::NoPath { start, end }),
            Err(LadderError::WordUnknown(word)) => Ok(LadderOutcome::UnknownWord { word }),
            Err(e) => Err(e),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LadderOutcome::Found { .. })
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&WordPath> {
        match self {
            LadderOutcome::Found { path } => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for LadderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LadderOutcome::Found { path } => write!(f, "{path} ({} hops)", path.hops()),
            LadderOutcome::NoPath { start, end } => {
                write!(f, "No path found from '{start}' to '{end}'")
            }
            LadderOutcome::UnknownWord { word } => {
                write!(f, "Word '{word}' not found in the thesaurus")
            }
        }
    }
}

/// Run a validated query against a graph.
pub fn find_ladder(
    graph: &LexicalGraph,
    query: &LadderQuery,
    config: &PathFinderConfig,
) -> Result<WordPath> {
    PathFinder::with_config(graph, config.clone()).find_path(query.start(), query.end())
}

/// Validate two words, search, and sort the result into an outcome.
///
/// Invalid queries are returned as errors, never as an outcome.
pub fn answer(
    graph: &LexicalGraph,
    start: &str,
    end: &str,
    config: &PathFinderConfig,
) -> Result<LadderOutcome> {
    let query = LadderQuery::new(start, end)?;
    LadderOutcome::from_result(find_ladder(graph, &query, config))
}
