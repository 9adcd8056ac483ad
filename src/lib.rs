//! # wordladder
//!
//! A thesaurus graph and a breadth-first "word ladder" search over it.
//!
//! ## Features
//!
//! - Per-category synset sources in XML or JSON
//! - Lexical graph merged across adjectives, adverbs, nouns and verbs
//! - Shortest synonym chains between two words
//! - JSON snapshots of the merged graph

pub mod cli;
pub mod config;
pub mod error;
pub mod ladder;
pub mod lexicon;
pub mod snapshot;
pub mod source;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
