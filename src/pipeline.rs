// End-to-end run: read input, split sentences, count occurrences, render the
// concordance, write output. The CLI stays thin; everything testable is here.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::concordance::Concordance;
use crate::splitter::{clean_word, SentenceSplitter};

/// Run configuration assembled by the CLI and passed into the entry point.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input text file
    pub input: PathBuf,
    /// Output concordance file
    pub output: PathBuf,
    /// Optional JSON run report path
    pub stats_out: Option<PathBuf>,
}

/// Summary of a completed run.
#[derive(Debug, Serialize)]
pub struct RunStats {
    pub input: String,
    pub output: String,
    pub sentences: usize,
    pub distinct_words: usize,
    pub total_occurrences: usize,
}

/// Build a concordance from padded sentences.
///
/// For each sentence (1-based index), the whitespace tokens are deduplicated
/// in first-occurrence order. Each distinct raw token is counted by
/// non-overlapping whole-word matches of `" token "` against the padded
/// sentence, case-sensitive and before cleaning; the cleaned token is then
/// recorded once per match. Two raw spellings that clean to the same word
/// ("Test" and "test.") land in the same entry through separate calls.
pub fn build_concordance(sentences: &[String]) -> Concordance {
    let mut concordance = Concordance::new();
    for (i, sentence) in sentences.iter().enumerate() {
        let index = i + 1;
        let mut seen: Vec<&str> = Vec::new();
        for token in sentence.split_whitespace() {
            if seen.contains(&token) {
                continue;
            }
            seen.push(token);
            let needle = format!(" {token} ");
            let count = sentence.matches(&needle).count();
            if count > 0 {
                concordance.add_occurrences(&clean_word(token), &vec![index; count]);
            }
        }
    }
    concordance
}

/// Execute a full run: file in, concordance out.
pub fn run(config: &RunConfig) -> Result<RunStats> {
    let text = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read input file {}", config.input.display()))?;

    let splitter = SentenceSplitter::new()?;
    let sentences = splitter.split(&text)?;
    info!("Split input into {} sentences", sentences.len());

    let concordance = build_concordance(&sentences);
    info!(
        "Accumulated {} distinct words, {} occurrences",
        concordance.len(),
        concordance.total_occurrences()
    );

    fs::write(&config.output, concordance.render())
        .with_context(|| format!("failed to write output file {}", config.output.display()))?;

    let stats = RunStats {
        input: config.input.display().to_string(),
        output: config.output.display().to_string(),
        sentences: sentences.len(),
        distinct_words: concordance.len(),
        total_occurrences: concordance.total_occurrences(),
    };

    if let Some(stats_path) = &config.stats_out {
        let report = serde_json::to_string_pretty(&stats)?;
        fs::write(stats_path, report)
            .with_context(|| format!("failed to write stats file {}", stats_path.display()))?;
        info!("Wrote run stats to {}", stats_path.display());
    }

    Ok(stats)
}
