//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{AutocorrectArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::{Correction, RankedCandidate, Tier};

/// Rendering of a command result for people rather than programs.
pub trait HumanOutput {
    /// Render the result as lines of text.
    fn human_lines(&self) -> Vec<String>;
}

/// Result structure for the `correct` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub corrections: Vec<Correction>,
}

/// Result structure for the `candidates` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateReport {
    pub word: String,
    pub tier: Tier,
    pub total_candidates: usize,
    pub candidates: Vec<RankedCandidate>,
}

/// A word and its frequency, as listed by the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
    pub probability: f64,
}

/// Result structure for the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub corpus: String,
    pub distinct_words: usize,
    pub total_words: u64,
    pub top_words: Vec<WordFrequency>,
}

impl HumanOutput for CorrectionReport {
    fn human_lines(&self) -> Vec<String> {
        self.corrections
            .iter()
            .map(|c| {
                if c.is_changed() {
                    format!(
                        "{} -> {} ({}, p={:.6})",
                        c.original, c.corrected, c.tier, c.probability
                    )
                } else {
                    format!("{} ({})", c.original, c.tier)
                }
            })
            .collect()
    }
}

impl HumanOutput for CandidateReport {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{}: {} tier, {} candidate(s)",
            self.word, self.tier, self.total_candidates
        )];
        for (i, candidate) in self.candidates.iter().enumerate() {
            lines.push(format!(
                "{:>3}. {:<20} count={:<8} p={:.6}",
                i + 1,
                candidate.word,
                candidate.count,
                candidate.probability
            ));
        }
        lines
    }
}

impl HumanOutput for CorpusStats {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Corpus: {}", self.corpus),
            format!("Distinct words: {}", self.distinct_words),
            format!("Total words: {}", self.total_words),
        ];
        if !self.top_words.is_empty() {
            lines.push(String::new());
            lines.push("Most frequent words:".to_string());
            for entry in &self.top_words {
                lines.push(format!(
                    "  {:<20} {:>10} {:.6}",
                    entry.word, entry.count, entry.probability
                ));
            }
        }
        lines
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &AutocorrectArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: HumanOutput>(message: &str, result: &T, args: &AutocorrectArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines() {
        println!("{line}");
    }
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &AutocorrectArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
