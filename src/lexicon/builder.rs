//! Partial lexical graph construction for one category.

use log::debug;

use crate::lexicon::category::Category;
use crate::lexicon::graph::{LexicalGraph, SynsetData, WordSenses};
use crate::lexicon::merge::Merge;
use crate::lexicon::synset::SynsetRecord;

/// Accumulates synset records of a single category into a partial graph.
///
/// For every term of a record, the other terms become its synonyms, the
/// record's antonyms its antonyms and the definition one of its definitions.
/// A word is never its own synonym. Records may arrive in any order and may
/// repeat; the result is the same.
#[derive(Debug)]
pub struct LexicalGraphBuilder {
    category: Category,
    graph: LexicalGraph,
    records_added: usize,
    records_skipped: usize,
}

impl LexicalGraphBuilder {
    /// Create a builder for `category`.
    pub fn new(category: Category) -> Self {
        LexicalGraphBuilder {
            category,
            graph: LexicalGraph::new(),
            records_added: 0,
            records_skipped: 0,
        }
    }

    /// Category this builder tags every entry with.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Add one record.
    pub fn add_record(&mut self, record: &SynsetRecord) {
        let record = record.normalized();
        if record.is_empty() {
            self.records_skipped += 1;
            return;
        }

        for word in &record.terms {
            let data = SynsetData {
                synonyms: record
                    .terms
                    .iter()
                    .filter(|other| *other != word)
                    .cloned()
                    .collect(),
                antonyms: record.antonyms.iter().cloned().collect(),
                definitions: record.definition.iter().cloned().collect(),
            };

            // A lone term with nothing attached carries no information.
            if data.is_empty() {
                continue;
            }

            let senses = WordSenses::single(self.category, data);
            match self.graph.words_mut().get_mut(word.as_str()) {
                Some(existing) => existing.merge(senses),
                None => {
                    self.graph.words_mut().insert(word.clone(), senses);
                }
            }
        }
        self.records_added += 1;
    }

    /// Add every record of an iterator.
    pub fn add_records<'r, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'r SynsetRecord>,
    {
        for record in records {
            self.add_record(record);
        }
    }

    /// Number of records that contributed terms.
    pub fn records_added(&self) -> usize {
        self.records_added
    }

    /// Number of records dropped for having no terms.
    pub fn records_skipped(&self) -> usize {
        self.records_skipped
    }

    /// Finish and return the partial graph.
    pub fn finish(self) -> LexicalGraph {
        debug!(
            "Built {} graph: {} records, {} skipped, {} words",
            self.category,
            self.records_added,
            self.records_skipped,
            self.graph.len()
        );
        self.graph
    }
}

/// Build a partial graph from the records of one category.
pub fn build<I>(records: I, category: Category) -> LexicalGraph
where
    I: IntoIterator<Item = SynsetRecord>,
{
    let mut builder = LexicalGraphBuilder::new(category);
    for record in records {
        builder.add_record(&record);
    }
    builder.finish()
}
