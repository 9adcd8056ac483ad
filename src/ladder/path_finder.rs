//! Breadth-first shortest synonym paths.

use std::collections::VecDeque;
use std::fmt;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};
use crate::lexicon::LexicalGraph;

/// Configuration for path finding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathFinderConfig {
    /// Abort once more than this many words have been discovered.
    /// `None` searches until the frontier is exhausted.
    #[serde(default)]
    pub max_visited: Option<usize>,
}

/// A chain of words where each word is a synonym of the one before it.
///
/// Never empty: a path holds at least its start word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordPath {
    words: Vec<String>,
}

impl TryFrom<Vec<String>> for WordPath {
    type Error = LadderError;

    fn try_from(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(LadderError::other("a word path holds at least one word"));
        }
        Ok(WordPath { words })
    }
}

impl From<WordPath> for Vec<String> {
    fn from(path: WordPath) -> Self {
        path.words
    }
}

impl WordPath {
    /// Words from start to end.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of synonym hops.
    pub fn hops(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    pub fn start(&self) -> &str {
        &self.words[0]
    }

    pub fn end(&self) -> &str {
        &self.words[self.words.len() - 1]
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" -> "))
    }
}

/// Finds shortest synonym paths in a [`LexicalGraph`].
///
/// A word `a` leads to `b` when `b` is in `a`'s synonym set under any
/// category. Neighbors are derived from the graph as each word is expanded;
/// nothing is precomputed. The stored relation is followed as is, so an
/// asymmetric entry in the data yields a one-way edge.
#[derive(Debug, Clone)]
pub struct PathFinder<'a> {
    graph: &'a LexicalGraph,
    config: PathFinderConfig,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder with the default configuration.
    pub fn new(graph: &'a LexicalGraph) -> Self {
        Self::with_config(graph, PathFinderConfig::default())
    }

    /// Create a path finder with a specific configuration.
    pub fn with_config(graph: &'a LexicalGraph, config: PathFinderConfig) -> Self {
        PathFinder { graph, config }
    }

    /// Find a path with the fewest hops from `start` to `end`.
    ///
    /// Fails with [`LadderError::WordUnknown`] when either word is missing
    /// from the graph (start is checked first) and with
    /// [`LadderError::NoPathFound`] when `end` is unreachable. When
    /// `start == end` the path is the single word.
    pub fn find_path(&self, start: &str, end: &str) -> Result<WordPath> {
        let start_key = self
            .graph
            .key(start)
            .ok_or_else(|| LadderError::word_unknown(start))?;
        let end_key = self
            .graph
            .key(end)
            .ok_or_else(|| LadderError::word_unknown(end))?;

        // word -> the word that discovered it; the start has none
        let mut visited: AHashMap<&'a str, Option<&'a str>> = AHashMap::new();
        let mut frontier: VecDeque<&'a str> = VecDeque::new();
        visited.insert(start_key, None);
        frontier.push_back(start_key);

        while let Some(word) = frontier.pop_front() {
            if word == end_key {
                return Ok(build_path(end_key, &visited));
            }

            for neighbor in self.graph.neighbors(word) {
                if visited.contains_key(neighbor) {
                    continue;
                }
                // The first discovery of `end` is already a shortest path.
                if neighbor == end_key {
                    visited.insert(neighbor, Some(word));
                    debug!("Path {start} -> {end} found after visiting {} words", visited.len());
                    return Ok(build_path(end_key, &visited));
                }
                if let Some(limit) = self.config.max_visited
                    && visited.len() >= limit
                {
                    return Err(LadderError::SearchLimitExceeded(limit));
                }
                visited.insert(neighbor, Some(word));
                frontier.push_back(neighbor);
            }
        }

        debug!("No path {start} -> {end}; {} words reachable", visited.len());
        Err(LadderError::no_path(start, end))
    }
}

fn build_path(end: &str, visited: &AHashMap<&str, Option<&str>>) -> WordPath {
    let mut words = vec![end.to_string()];
    let mut current = end;
    while let Some(&Some(parent)) = visited.get(current) {
        words.push(parent.to_string());
        current = parent;
    }
    words.reverse();
    WordPath { words }
}

/// Find a shortest path with the default configuration.
pub fn find_path(graph: &LexicalGraph, start: &str, end: &str) -> Result<WordPath> {
    PathFinder::new(graph).find_path(start, end)
}
