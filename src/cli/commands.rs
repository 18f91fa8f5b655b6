//! Command implementations for the autocorrect CLI.

use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::{Corrector, FrequencyTable};

/// Execute a CLI command.
pub fn execute_command(args: AutocorrectArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args, &args),
        Command::Candidates(candidates_args) => show_candidates(candidates_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Build the frequency table once from the corpus file.
fn load_table(corpus: &Path) -> Result<FrequencyTable> {
    let start_time = Instant::now();
    let table = FrequencyTable::load_from_file(corpus)?;

    if table.is_empty() {
        warn!("corpus {} contains no words", corpus.display());
    }
    info!(
        "frequency table ready in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(table)
}

/// Correct each word against the corpus.
fn correct_words(args: &CorrectArgs, cli_args: &AutocorrectArgs) -> Result<()> {
    let table = load_table(&args.corpus)?;
    let corrector = Corrector::with_config(&table, cli_args.corrector_config()?)?;

    let words: Vec<String> = if args.keep_case {
        args.words.clone()
    } else {
        args.words.iter().map(|w| w.to_lowercase()).collect()
    };

    let corrections = corrector.correct_all(&words)?;

    output_result(
        &format!("Corrected {} word(s)", corrections.len()),
        &CorrectionReport { corrections },
        cli_args,
    )
}

/// List the winning tier and its ranked candidates for one word.
fn show_candidates(args: &CandidatesArgs, cli_args: &AutocorrectArgs) -> Result<()> {
    let table = load_table(&args.corpus)?;
    let corrector = Corrector::with_config(&table, cli_args.corrector_config()?)?;

    let word = args.word.to_lowercase();
    let candidates = corrector.candidates(&word);
    let mut ranked = corrector.rank(&candidates)?;
    let total_candidates = ranked.len();
    ranked.truncate(args.limit);

    output_result(
        &format!("Candidates for '{word}'"),
        &CandidateReport {
            word,
            tier: candidates.tier,
            total_candidates,
            candidates: ranked,
        },
        cli_args,
    )
}

/// Summarize the corpus frequency table.
fn show_stats(args: &StatsArgs, cli_args: &AutocorrectArgs) -> Result<()> {
    let table = load_table(&args.corpus)?;

    let top_words = table
        .most_frequent(args.top)
        .into_iter()
        .map(|(word, count)| {
            Ok(WordFrequency {
                word: word.to_string(),
                count,
                probability: table.probability(word)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Corpus statistics",
        &CorpusStats {
            corpus: args.corpus.to_string_lossy().to_string(),
            distinct_words: table.len(),
            total_words: table.total_count(),
            top_words,
        },
        cli_args,
    )
}
