//! The multi-layer lexical graph.
//!
//! Three typed levels: [`LexicalGraph`] maps a word to its [`WordSenses`],
//! which map a [`Category`] to the [`SynsetData`] of that word in that
//! category. Edges are never stored on their own; the synonym sets are the
//! edge set and [`LexicalGraph::neighbors`] derives a word's neighborhood on
//! demand.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::lexicon::category::Category;

/// Synonyms, antonyms and definitions of one word in one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetData {
    /// Every other term of any synset containing the word. Never contains
    /// the word itself.
    #[serde(default)]
    pub synonyms: BTreeSet<String>,
    /// Antonyms of every synset containing the word.
    #[serde(default)]
    pub antonyms: BTreeSet<String>,
    /// Definitions of every synset containing the word.
    #[serde(default, alias = "definition")]
    pub definitions: BTreeSet<String>,
}

impl SynsetData {
    /// True when all three sets are empty.
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty() && self.antonyms.is_empty() && self.definitions.is_empty()
    }
}

/// Per-category data of a single word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordSenses {
    categories: BTreeMap<Category, SynsetData>,
}

impl WordSenses {
    /// Create senses holding a single category.
    pub fn single(category: Category, data: SynsetData) -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(category, data);
        WordSenses { categories }
    }

    /// Data for one category.
    pub fn get(&self, category: Category) -> Option<&SynsetData> {
        self.categories.get(&category)
    }

    /// Iterate categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &SynsetData)> {
        self.categories.iter().map(|(c, d)| (*c, d))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub(crate) fn categories_mut(&mut self) -> &mut BTreeMap<Category, SynsetData> {
        &mut self.categories
    }

    pub(crate) fn into_categories(self) -> BTreeMap<Category, SynsetData> {
        self.categories
    }

    /// Drop `word` from its own synonym sets, then drop categories whose
    /// data is empty. Returns the number of categories removed.
    fn prune_empty(&mut self, word: &str) -> usize {
        let before = self.categories.len();
        self.categories.retain(|_, data| {
            data.synonyms.remove(word);
            !data.is_empty()
        });
        before - self.categories.len()
    }
}

/// Word → category → synonyms/antonyms/definitions.
///
/// Keys are case-sensitive as received. The graph is built once (or loaded
/// from a snapshot) and only read while answering queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LexicalGraph {
    words: HashMap<String, WordSenses>,
}

impl LexicalGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        LexicalGraph {
            words: HashMap::new(),
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if a word is present.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// All senses of a word.
    pub fn senses(&self, word: &str) -> Option<&WordSenses> {
        self.words.get(word)
    }

    /// The graph's own copy of `word`, borrowed for as long as the graph.
    pub fn key(&self, word: &str) -> Option<&str> {
        self.words.get_key_value(word).map(|(k, _)| k.as_str())
    }

    /// Iterate words and their senses in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordSenses)> {
        self.words.iter().map(|(w, s)| (w.as_str(), s))
    }

    /// Words one synonym hop away from `word`, across every category.
    ///
    /// The union is computed on each call; nothing is cached. The relation is
    /// the stored one and is not symmetrized.
    pub fn neighbors(&self, word: &str) -> BTreeSet<&str> {
        let mut neighbors = BTreeSet::new();
        if let Some(senses) = self.words.get(word) {
            for (_, data) in senses.iter() {
                neighbors.extend(data.synonyms.iter().map(String::as_str));
            }
        }
        neighbors
    }

    /// Number of stored synonym edges, counted per category.
    pub fn synonym_edge_count(&self) -> usize {
        self.words
            .values()
            .flat_map(|senses| senses.iter())
            .map(|(_, data)| data.synonyms.len())
            .sum()
    }

    /// Number of words having an entry in each category.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for senses in self.words.values() {
            for (category, _) in senses.iter() {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Remove self-synonyms, then empty category entries and words left
    /// without any. Returns the number of words removed.
    pub fn prune_empty(&mut self) -> usize {
        let before = self.words.len();
        self.words.retain(|word, senses| {
            senses.prune_empty(word);
            !senses.is_empty()
        });
        before - self.words.len()
    }

    pub(crate) fn words_mut(&mut self) -> &mut HashMap<String, WordSenses> {
        &mut self.words
    }

    pub(crate) fn into_words(self) -> HashMap<String, WordSenses> {
        self.words
    }
}
