//! Merging partial lexical graphs.
//!
//! Each level of the graph has its own [`Merge`] implementation: words are
//! inserted or merged by senses, senses are inserted or merged by category,
//! and category data is unioned set by set. All three are set unions, so
//! merging is associative, commutative in content and idempotent.

use std::collections::btree_map;
use std::collections::hash_map;

use crate::lexicon::graph::{LexicalGraph, SynsetData, WordSenses};

/// Union another value of the same level into `self`.
pub trait Merge {
    fn merge(&mut self, other: Self);
}

impl Merge for SynsetData {
    fn merge(&mut self, other: Self) {
        self.synonyms.extend(other.synonyms);
        self.antonyms.extend(other.antonyms);
        self.definitions.extend(other.definitions);
    }
}

impl Merge for WordSenses {
    fn merge(&mut self, other: Self) {
        let categories = self.categories_mut();
        for (category, data) in other.into_categories() {
            match categories.entry(category) {
                btree_map::Entry::Occupied(mut entry) => entry.get_mut().merge(data),
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(data);
                }
            }
        }
    }
}

impl Merge for LexicalGraph {
    fn merge(&mut self, other: Self) {
        let words = self.words_mut();
        for (word, senses) in other.into_words() {
            match words.entry(word) {
                hash_map::Entry::Occupied(mut entry) => entry.get_mut().merge(senses),
                hash_map::Entry::Vacant(entry) => {
                    entry.insert(senses);
                }
            }
        }
    }
}

/// Merge `source` into `target` and return the target.
pub fn merge(mut target: LexicalGraph, source: LexicalGraph) -> LexicalGraph {
    target.merge(source);
    target
}

/// Fold any number of partial graphs into one.
pub fn merge_all<I>(graphs: I) -> LexicalGraph
where
    I: IntoIterator<Item = LexicalGraph>,
{
    graphs.into_iter().fold(LexicalGraph::new(), merge)
}
