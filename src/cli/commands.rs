//! Command implementations for the wordladder CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{LadderConfig, SourceConfig};
use crate::error::{LadderError, Result};
use crate::ladder::{LadderOutcome, PathFinderConfig, answer};
use crate::lexicon::LexicalGraph;
use crate::snapshot::{self, BuildOptions, GraphOrigin};

/// Execute a CLI command.
pub fn execute_command(args: LadderArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Build(build_args) => build_snapshot(build_args.clone(), config, &args),
        Command::Ladder(ladder_args) => find_word_ladder(ladder_args.clone(), &config, &args),
        Command::Lookup(lookup_args) => lookup_word(lookup_args.clone(), &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &config, &args),
        Command::Interactive(interactive_args) => {
            run_interactive(interactive_args.clone(), &config, &args)
        }
    }
}

/// Resolve the configuration file and command line overrides.
fn load_config(args: &LadderArgs) -> Result<LadderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            LadderConfig::load_from_file(path)?
        }
        None => LadderConfig::default(),
    };
    if let Some(snapshot) = &args.snapshot {
        config.snapshot_path = snapshot.clone();
    }
    Ok(config)
}

/// Load the snapshot, building it first when it does not exist yet.
fn open_graph(config: &LadderConfig) -> Result<LexicalGraph> {
    let sources = config.open_sources()?;
    let options = BuildOptions {
        force: false,
        parallel: config.parallel_build,
    };
    let (graph, origin) = snapshot::load_or_build(&config.snapshot_path, &sources, &options)?;
    if let GraphOrigin::Built(report) = origin {
        info!(
            "Built snapshot {} from {}/{} sources",
            config.snapshot_path.display(),
            report.usable_sources(),
            report.sources.len()
        );
    }
    Ok(graph)
}

fn path_finder_config(config: &LadderConfig, max_visited: Option<usize>) -> PathFinderConfig {
    let mut path_finder = config.path_finder.clone();
    if max_visited.is_some() {
        path_finder.max_visited = max_visited;
    }
    path_finder
}

/// Build the snapshot from sources.
fn build_snapshot(args: BuildArgs, mut config: LadderConfig, cli_args: &LadderArgs) -> Result<()> {
    if !args.sources.is_empty() {
        config.sources = args.sources.iter().map(SourceConfig::new).collect();
        config.validate()?;
    }

    if config.snapshot_path.exists() && !args.force {
        return Err(LadderError::InvalidOperation(format!(
            "Snapshot {} already exists. Use --force to overwrite.",
            config.snapshot_path.display()
        )));
    }

    if cli_args.verbosity() > 1 {
        println!("Building snapshot: {}", config.snapshot_path.display());
    }

    let sources = config.open_sources()?;
    let options = BuildOptions {
        force: true,
        parallel: args.parallel || config.parallel_build,
    };
    let (graph, origin) = snapshot::load_or_build(&config.snapshot_path, &sources, &options)?;
    let GraphOrigin::Built(report) = origin else {
        return Err(LadderError::other("snapshot was loaded instead of rebuilt"));
    };

    output_result(
        "Snapshot built successfully",
        &BuildResult {
            snapshot: config.snapshot_path.display().to_string(),
            words: graph.len(),
            synonym_edges: graph.synonym_edge_count(),
            sources: report.sources,
            duration_ms: report.duration_ms,
        },
        cli_args,
    )
}

/// Find a ladder between two words.
fn find_word_ladder(
    args: LadderQueryArgs,
    config: &LadderConfig,
    cli_args: &LadderArgs,
) -> Result<()> {
    let graph = open_graph(config)?;
    let path_finder = path_finder_config(config, args.max_visited);

    let start_time = Instant::now();
    let outcome = answer(&graph, &args.start, &args.end, &path_finder)?;
    let duration = start_time.elapsed();

    output_result(
        "Ladder search finished",
        &LadderResult {
            start: args.start,
            end: args.end,
            outcome,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Show everything known about a word.
fn lookup_word(args: LookupArgs, config: &LadderConfig, cli_args: &LadderArgs) -> Result<()> {
    let graph = open_graph(config)?;
    let word = args.word.trim();
    output_result(
        "Lookup finished",
        &LookupResult::new(word, graph.senses(word)),
        cli_args,
    )
}

/// Show thesaurus statistics.
fn show_stats(args: StatsArgs, config: &LadderConfig, cli_args: &LadderArgs) -> Result<()> {
    let graph = open_graph(config)?;
    output_result(
        "Thesaurus statistics",
        &ThesaurusStats {
            snapshot: config.snapshot_path.display().to_string(),
            words: graph.len(),
            synonym_edges: graph.synonym_edge_count(),
            categories: args.detailed.then(|| graph.category_counts()),
        },
        cli_args,
    )
}

/// Prompt for word pairs on the terminal.
fn run_interactive(
    args: InteractiveArgs,
    config: &LadderConfig,
    cli_args: &LadderArgs,
) -> Result<()> {
    let graph = open_graph(config)?;
    let path_finder = path_finder_config(config, args.max_visited);
    let json = matches!(cli_args.output_format, OutputFormat::Json);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let queries = run_prompt(&graph, &path_finder, stdin.lock(), stdout.lock(), json)?;
    debug!("Interactive session answered {queries} queries");
    Ok(())
}

/// Read start/end word pairs from `input` until end of input or an empty
/// start word, writing one answer per pair to `output`.
///
/// Invalid queries are reported and the prompt continues. In JSON mode no
/// prompts are written and every output line is a JSON object. Returns the
/// number of pairs answered.
pub fn run_prompt<R: BufRead, W: Write>(
    graph: &LexicalGraph,
    config: &PathFinderConfig,
    mut input: R,
    mut output: W,
    json: bool,
) -> Result<usize> {
    let prompt = |text: &'static str| (!json).then_some(text);
    let mut answered = 0;
    loop {
        let Some(start) = prompt_line(&mut input, &mut output, prompt("Start word (empty to quit): "))?
        else {
            break;
        };
        if start.is_empty() {
            break;
        }
        let Some(end) = prompt_line(&mut input, &mut output, prompt("End word: "))? else {
            break;
        };

        match answer(graph, &start, &end, config) {
            Ok(outcome) => {
                write_outcome(&mut output, &outcome, json)?;
                answered += 1;
            }
            Err(LadderError::InvalidQuery(msg)) if json => {
                writeln!(output, "{}", serde_json::json!({ "error": msg }))?
            }
            Err(LadderError::InvalidQuery(msg)) => writeln!(output, "Invalid query: {msg}")?,
            Err(e) => return Err(e),
        }
    }
    Ok(answered)
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: Option<&str>,
) -> Result<Option<String>> {
    if let Some(prompt) = prompt {
        write!(output, "{prompt}")?;
        output.flush()?;
    }

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_outcome<W: Write>(output: &mut W, outcome: &LadderOutcome, json: bool) -> Result<()> {
    if json {
        writeln!(output, "{}", serde_json::to_string(outcome)?)?;
    } else {
        writeln!(output, "{outcome}")?;
    }
    Ok(())
}
