//! Word ladders: shortest chains of synonym hops between two words.
//!
//! The search runs breadth-first over the synonym relation of a
//! [`LexicalGraph`](crate::lexicon::LexicalGraph), with every part-of-speech
//! layer flattened into one relation at traversal time.
//!
//! # Examples
//!
//! ```
//! use wordladder::ladder::{PathFinderConfig, answer};
//! use wordladder::lexicon::{Category, SynsetRecord, build};
//!
//! let graph = build(
//!     vec![
//!         SynsetRecord::new(["hot", "warm"]),
//!         SynsetRecord::new(["warm", "mild", "cool"]),
//!     ],
//!     Category::Adjective,
//! );
//!
//! let outcome = answer(&graph, "hot", "cool", &PathFinderConfig::default()).unwrap();
//! assert_eq!(outcome.to_string(), "hot -> warm -> cool (2 hops)");
//! ```

pub mod path_finder;
pub mod query;

pub use path_finder::{PathFinder, PathFinderConfig, WordPath, find_path};
pub use query::{LadderOutcome, LadderQuery, answer, find_ladder};
