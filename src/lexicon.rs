//! Lexical graph model, construction and merging.
//!
//! A thesaurus arrives as synset records split by part of speech. Each
//! category is built into a partial [`LexicalGraph`] by the
//! [`LexicalGraphBuilder`], and the partial graphs are then combined with
//! [`merge`] into one graph holding, for every word, its synonyms, antonyms
//! and definitions per category.
//!
//! # Examples
//!
//! ```
//! use wordladder::lexicon::{Category, SynsetRecord, build, merge};
//!
//! let adjectives = build(vec![SynsetRecord::new(["hot", "warm"])], Category::Adjective);
//! let verbs = build(vec![SynsetRecord::new(["warm", "heat"])], Category::Verb);
//! let graph = merge(adjectives, verbs);
//!
//! assert_eq!(graph.senses("warm").unwrap().len(), 2);
//! ```

pub mod builder;
pub mod category;
pub mod graph;
pub mod merge;
pub mod synset;

pub use builder::{LexicalGraphBuilder, build};
pub use category::Category;
pub use graph::{LexicalGraph, SynsetData, WordSenses};
pub use merge::{Merge, merge, merge_all};
pub use synset::SynsetRecord;
