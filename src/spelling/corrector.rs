//! Frequency-ranked spelling corrector.
//!
//! Candidates are looked up in strict tier order: the word itself, then its
//! one-edit neighbors, then its two-edit neighbors, and finally the word
//! unchanged. A closer tier always wins over a farther one regardless of
//! frequency; probability only ranks candidates within the winning tier.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};
use crate::spelling::dictionary::FrequencyTable;
use crate::spelling::edits::{edits1, edits2};

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Farthest tier searched, as an edit distance from 0 to 2.
    ///
    /// Two-edit enumeration is the expensive path; lowering this caps the
    /// latency of a correction for words with no close match.
    pub max_distance: usize,
}

impl CorrectorConfig {
    /// Largest edit distance the corrector can search.
    pub const MAX_SUPPORTED_DISTANCE: usize = 2;

    /// Check that every field is within its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.max_distance > Self::MAX_SUPPORTED_DISTANCE {
            return Err(AutocorrectError::invalid_config(format!(
                "max_distance must be at most {}, got {}",
                Self::MAX_SUPPORTED_DISTANCE,
                self.max_distance
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_distance: Self::MAX_SUPPORTED_DISTANCE,
        }
    }
}

/// The fallback level a candidate set was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// The word itself is known.
    Exact,
    /// Known words one edit away.
    OneEdit,
    /// Known words two edits away.
    TwoEdits,
    /// Nothing known within reach; the word passes through unchanged.
    Unknown,
}

impl Tier {
    /// Edit distance of the tier, `None` for the pass-through tier.
    pub fn distance(self) -> Option<usize> {
        match self {
            Tier::Exact => Some(0),
            Tier::OneEdit => Some(1),
            Tier::TwoEdits => Some(2),
            Tier::Unknown => None,
        }
    }

    /// Short name used in output.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Exact => "exact",
            Tier::OneEdit => "one_edit",
            Tier::TwoEdits => "two_edits",
            Tier::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Candidate corrections together with the tier they came from.
///
/// Words are kept in a sorted set so listings are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidates {
    /// Tier the words were drawn from.
    pub tier: Tier,
    /// Candidate words; never empty.
    pub words: BTreeSet<String>,
}

impl Candidates {
    fn single(tier: Tier, word: &str) -> Self {
        Candidates {
            tier,
            words: BTreeSet::from([word.to_string()]),
        }
    }
}

/// A candidate with its frequency data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// The candidate word.
    pub word: String,
    /// Occurrence count in the frequency table.
    pub count: u64,
    /// `count / total_count`.
    pub probability: f64,
}

/// Detailed result of correcting one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// The input word.
    pub original: String,
    /// The chosen correction (the input itself when nothing better is known).
    pub corrected: String,
    /// Tier the correction came from.
    pub tier: Tier,
    /// Probability of the chosen correction.
    pub probability: f64,
    /// All candidates of the winning tier, best first.
    pub candidates: Vec<RankedCandidate>,
}

impl Correction {
    /// Whether the correction differs from the input.
    pub fn is_changed(&self) -> bool {
        self.original != self.corrected
    }
}

/// Spelling corrector over a borrowed, read-only frequency table.
///
/// The corrector holds no mutable state, so one instance can serve
/// concurrent requests.
///
/// # Examples
///
/// ```
/// use autocorrect::spelling::{Corrector, FrequencyTable};
///
/// let table = FrequencyTable::from_corpus("spelling spelling spelling is hard").unwrap();
/// let corrector = Corrector::new(&table);
/// assert_eq!(corrector.correction("speling").unwrap(), "spelling");
/// ```
#[derive(Debug, Clone)]
pub struct Corrector<'a> {
    table: &'a FrequencyTable,
    config: CorrectorConfig,
}

impl<'a> Corrector<'a> {
    /// Create a corrector with the default configuration.
    pub fn new(table: &'a FrequencyTable) -> Self {
        Corrector {
            table,
            config: CorrectorConfig::default(),
        }
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(table: &'a FrequencyTable, config: CorrectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Corrector { table, config })
    }

    /// The frequency table this corrector reads from.
    pub fn table(&self) -> &'a FrequencyTable {
        self.table
    }

    /// The active configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// The subset of `words` present in the table.
    pub fn known<I>(&self, words: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = String>,
    {
        words
            .into_iter()
            .filter(|word| self.table.contains(word))
            .collect()
    }

    /// Candidate corrections for `word`, from the first non-empty tier.
    ///
    /// Tiers are evaluated in order and later tiers are not generated at all
    /// once an earlier one has produced a known word. The input is used as
    /// given; callers should lowercase it first since the table only holds
    /// lowercase tokens.
    pub fn candidates(&self, word: &str) -> Candidates {
        if self.table.contains(word) {
            return Candidates::single(Tier::Exact, word);
        }

        if self.config.max_distance >= 1 {
            let words = self.known(edits1(word));
            if !words.is_empty() {
                return Candidates {
                    tier: Tier::OneEdit,
                    words,
                };
            }
        }

        if self.config.max_distance >= 2 {
            let words = self.known(edits2(word));
            if !words.is_empty() {
                return Candidates {
                    tier: Tier::TwoEdits,
                    words,
                };
            }
        }

        Candidates::single(Tier::Unknown, word)
    }

    /// Rank candidates by probability, highest first.
    ///
    /// Equal probabilities are ordered lexicographically, so the first entry
    /// is the lexicographically smallest of the most probable words.
    pub fn rank(&self, candidates: &Candidates) -> Result<Vec<RankedCandidate>> {
        let mut ranked = candidates
            .words
            .iter()
            .map(|word| {
                Ok(RankedCandidate {
                    word: word.clone(),
                    count: self.table.count(word),
                    probability: self.table.probability(word)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        ranked.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.word.cmp(&b.word))
        });

        Ok(ranked)
    }

    /// The most probable correction of `word`.
    ///
    /// Returns `word` unchanged when no known word is within reach.
    ///
    /// # Errors
    ///
    /// Returns [`AutocorrectError::DegenerateModel`] when the table is empty.
    pub fn correction(&self, word: &str) -> Result<String> {
        Ok(self.correct(word)?.corrected)
    }

    /// Correct `word` and report how the correction was chosen.
    pub fn correct(&self, word: &str) -> Result<Correction> {
        let candidates = self.candidates(word);
        let ranked = self.rank(&candidates)?;

        let best = ranked.first().ok_or_else(|| {
            AutocorrectError::other(format!("no candidates produced for '{word}'"))
        })?;

        debug!(
            "'{}' -> '{}' ({} tier, {} candidates)",
            word,
            best.word,
            candidates.tier,
            ranked.len()
        );
        trace!("ranked candidates for '{word}': {ranked:?}");

        Ok(Correction {
            original: word.to_string(),
            corrected: best.word.clone(),
            tier: candidates.tier,
            probability: best.probability,
            candidates: ranked,
        })
    }

    /// Correct many words in parallel.
    ///
    /// Each word is corrected independently; results follow input order.
    pub fn correct_all<S>(&self, words: &[S]) -> Result<Vec<Correction>>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.correct(word.as_ref()))
            .collect()
    }
}
