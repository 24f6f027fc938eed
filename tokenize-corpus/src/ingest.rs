use std::io::BufRead;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::counter::WordCounter;
use crate::error::LexiconError;
use crate::sentence::Sentence;
use crate::tokenizer::Tokenize;

const LEFT_TO_RIGHT_MARK: char = '\u{200E}';
const RIGHT_TO_LEFT_MARK: char = '\u{200F}';

/// Sentences longer than this (in chars, after cleanup) go to the skip log.
pub const MAX_SENTENCE_CHARS: usize = 100;

#[derive(Debug, Default)]
pub struct IngestStats {
    pub accepted: usize,
    pub skipped: usize,
}

/// Read `<id><TAB><sentence>` lines, tokenize each sentence, and feed the
/// word counter. Accepted sentences go to `sentences_path`, overlong ones
/// to `skipped_path`; every sentence is counted either way.
///
/// A line without a tab or without a decimal id aborts the run. Rows
/// written before the bad line are flushed and stay intact.
pub fn ingest_sentences(
    reader: impl BufRead,
    sentences_path: &Path,
    skipped_path: &Path,
    tokenizer: &dyn Tokenize,
    counter: &mut WordCounter,
) -> anyhow::Result<IngestStats> {
    let mut sentences = csv::Writer::from_path(sentences_path)?;
    let mut skipped = csv::Writer::from_path(skipped_path)?;
    sentences.write_record(["tatoeba_id", "text", "tokens"])?;
    skipped.write_record(["tatoeba_id", "text", "reason_for_exclusion"])?;

    let result = ingest_lines(reader, &mut sentences, &mut skipped, tokenizer, counter);

    // Flush even when a line was malformed; rows already written must
    // stay intact.
    sentences.flush()?;
    skipped.flush()?;
    result
}

fn ingest_lines(
    reader: impl BufRead,
    sentences: &mut csv::Writer<std::fs::File>,
    skipped: &mut csv::Writer<std::fs::File>,
    tokenizer: &dyn Tokenize,
    counter: &mut WordCounter,
) -> anyhow::Result<IngestStats> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} sentences ({per_sec})")
            .unwrap(),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut stats = IngestStats::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // Tatoeba exports sometimes lead with a byte-order mark
        let line = line.strip_prefix('\u{feff}').unwrap_or(&line);

        let (id, text) = parse_line(line, index + 1)?;
        let text = strip_directional_marks(text).trim();

        let sentence = Sentence {
            id: Some(id),
            text: text.to_owned(),
            tokens: tokenizer.tokenize(text),
        };
        counter.update(&sentence.tokens);

        // Every sentence feeds the word count, but the sentence output only
        // keeps ones of readable length.
        if sentence.text.chars().count() <= MAX_SENTENCE_CHARS {
            sentences.write_record(sentence.row()?)?;
            stats.accepted += 1;
        } else {
            skipped.write_record([
                id.to_string().as_str(),
                sentence.text.as_str(),
                "too long",
            ])?;
            stats.skipped += 1;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(stats)
}

fn parse_line(line: &str, number: usize) -> Result<(u64, &str), LexiconError> {
    let (id, text) = line
        .split_once('\t')
        .ok_or(LexiconError::MalformedLine { line: number })?;
    let id = id
        .parse()
        .map_err(|_| LexiconError::MalformedLine { line: number })?;
    Ok((id, text))
}

/// Remove a single leading/trailing directional mark of each kind.
fn strip_directional_marks(text: &str) -> &str {
    let text = text.strip_prefix(LEFT_TO_RIGHT_MARK).unwrap_or(text);
    let text = text.strip_suffix(LEFT_TO_RIGHT_MARK).unwrap_or(text);
    let text = text.strip_prefix(RIGHT_TO_LEFT_MARK).unwrap_or(text);
    text.strip_suffix(RIGHT_TO_LEFT_MARK).unwrap_or(text)
}
