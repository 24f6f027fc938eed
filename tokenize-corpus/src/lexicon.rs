use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use language_utils::Language;

use crate::counter::WordCounter;
use crate::error::LexiconError;

/// Integer frequency rank: `floor(0.5 - log2(count / max_count))`.
///
/// Equivalent to rounding `-log2(count / max_count)` half up. The word(s)
/// at `max_count` land in class 0; counts are at least 1, so the ratio is
/// never zero.
pub fn frequency_class(count: u32, max_count: u32) -> u32 {
    (0.5 - (f64::from(count) / f64::from(max_count)).log2()).floor() as u32
}

/// Rank the counted words and write the lexicon.
///
/// Takes the counter built by the ingestion pass; non-words are deleted and
/// logged to `nonwords_path` (one raw token per line, most frequent first),
/// then the survivors are written to `words_path` as
/// `word,frequency,frequency_class` rows in descending-frequency order.
pub fn write_lexicon(
    mut counter: WordCounter,
    language: Language,
    words_path: &Path,
    nonwords_path: &Path,
) -> anyhow::Result<()> {
    drop_nonwords(&mut counter, language, nonwords_path)?;

    let ranked = counter.most_common();
    let Some(&(_, max_count)) = ranked.first() else {
        return Err(LexiconError::EmptyLexicon.into());
    };

    let mut writer = csv::Writer::from_path(words_path)?;
    writer.write_record(["word", "frequency", "frequency_class"])?;
    for (word, count) in ranked {
        let class = frequency_class(count, max_count);
        writer.write_record([word, count.to_string().as_str(), class.to_string().as_str()])?;
    }
    writer.flush()?;

    Ok(())
}

/// Delete every token the language does not classify as a word, logging
/// each one in the order it was encountered.
fn drop_nonwords(
    counter: &mut WordCounter,
    language: Language,
    nonwords_path: &Path,
) -> anyhow::Result<()> {
    let nonwords: Vec<String> = counter
        .most_common()
        .into_iter()
        .filter(|(token, _)| !language.is_word(token))
        .map(|(token, _)| token.to_owned())
        .collect();

    let mut log = BufWriter::new(File::create(nonwords_path)?);
    for token in &nonwords {
        writeln!(log, "{token}")?;
        counter.delete(token);
    }
    log.flush()?;

    log::debug!("dropped {} non-word tokens", nonwords.len());
    Ok(())
}
