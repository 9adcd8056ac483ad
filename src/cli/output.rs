//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LadderArgs, OutputFormat};
use crate::error::Result;
use crate::ladder::LadderOutcome;
use crate::lexicon::{Category, WordSenses};
use crate::source::SourceReport;

/// Result structure for snapshot builds.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResult {
    pub snapshot: String,
    pub words: usize,
    pub synonym_edges: usize,
    pub sources: Vec<SourceReport>,
    pub duration_ms: u64,
}

/// Result structure for ladder queries. `start` and `end` are the words as
/// given; the outcome carries the trimmed ones.
#[derive(Debug, Serialize, Deserialize)]
pub struct LadderResult {
    pub start: String,
    pub end: String,
    pub outcome: LadderOutcome,
    pub duration_ms: u64,
}

/// One category of a looked-up word.
#[derive(Debug, Serialize, Deserialize)]
pub struct SenseEntry {
    pub category: Category,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub definitions: Vec<String>,
}

/// Result structure for word lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub found: bool,
    pub senses: Vec<SenseEntry>,
}

impl LookupResult {
    /// Flatten a word's senses for display.
    pub fn new(word: &str, senses: Option<&WordSenses>) -> Self {
        let senses: Vec<SenseEntry> = senses
            .map(|senses| {
                senses
                    .iter()
                    .map(|(category, data)| SenseEntry {
                        category,
                        synonyms: data.synonyms.iter().cloned().collect(),
                        antonyms: data.antonyms.iter().cloned().collect(),
                        definitions: data.definitions.iter().cloned().collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        LookupResult {
            word: word.to_string(),
            found: !senses.is_empty(),
            senses,
        }
    }
}

/// Thesaurus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ThesaurusStats {
    pub snapshot: String,
    pub words: usize,
    pub synonym_edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<Category, usize>>,
}

/// Human-readable rendering of a result.
pub trait HumanOutput: Serialize {
    /// Print the result. Defaults to one `key: value` line per field.
    fn print_human(&self) -> Result<()> {
        let value = serde_json::to_value(self)?;
        output_generic_human(&value);
        Ok(())
    }
}

impl HumanOutput for BuildResult {
    fn print_human(&self) -> Result<()> {
        println!("Snapshot: {}", self.snapshot);
        println!("Words: {}", self.words);
        println!("Synonym edges: {}", self.synonym_edges);
        println!("Duration: {} ms", self.duration_ms);
        println!();
        println!("Sources:");
        for source in &self.sources {
            match &source.error {
                None => println!(
                    "  {} ({}): {} records, {} skipped, {} words",
                    source.name, source.category, source.records, source.skipped_records, source.words
                ),
                Some(error) => println!("  {} ({}): skipped: {}", source.name, source.category, error),
            }
        }
        Ok(())
    }
}

impl HumanOutput for LadderResult {
    fn print_human(&self) -> Result<()> {
        println!("{}", self.outcome);
        Ok(())
    }
}

impl HumanOutput for LookupResult {
    fn print_human(&self) -> Result<()> {
        if !self.found {
            println!("Word '{}' not found in the thesaurus.", self.word);
            return Ok(());
        }
        for sense in &self.senses {
            println!("{} ({}):", self.word, sense.category);
            println!("\tSynonyms: {}", sense.synonyms.join(", "));
            println!("\tAntonyms: {}", sense.antonyms.join(", "));
            println!("\tDefinitions: {}", sense.definitions.join("; "));
        }
        Ok(())
    }
}

impl HumanOutput for ThesaurusStats {}

/// Output a result in the specified format.
pub fn output_result<T: HumanOutput>(message: &str, result: &T, args: &LadderArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &LadderArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human()
}

fn output_generic_human(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
}

fn output_json<T: Serialize>(result: &T, args: &LadderArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        serde_json::Value::Object(obj) => {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{k}={}", format_value(v)))
                .collect();
            items.join(", ")
        }
    }
}
