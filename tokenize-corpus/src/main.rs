use anyhow::Context;
use clap::Parser;
use language_utils::Language;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use tokenize_corpus::counter::WordCounter;
use tokenize_corpus::error::LexiconError;
use tokenize_corpus::ingest::ingest_sentences;
use tokenize_corpus::lexicon::write_lexicon;
use tokenize_corpus::tokenizer::tokenizer_for;

/// Tokenize a sentence corpus and build its word-frequency lexicon
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// ISO 639-3 language code (fra, eng, spa, ...)
    language: String,

    /// Input file of `<id><TAB><sentence>` lines (default: stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let language = Language::from_iso_639_3(&args.language)
        .ok_or_else(|| LexiconError::UnknownLanguage(args.language.clone()))?;
    log::info!("building {language} [{}] lexicon", language.bcp47());

    if args.output.is_file() {
        anyhow::bail!("{} is a file", args.output.display());
    }
    std::fs::create_dir_all(&args.output).context("Failed to create output directory")?;

    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    let tokenizer = tokenizer_for(language);
    let mut counter = WordCounter::new();

    println!("Tokenizing {language} sentences...");
    let stats = ingest_sentences(
        reader,
        &args.output.join("sentences.csv"),
        &args.output.join("skipped.csv"),
        tokenizer.as_ref(),
        &mut counter,
    )?;
    println!(
        "Wrote {} sentences ({} skipped), {} distinct tokens",
        stats.accepted,
        stats.skipped,
        counter.len()
    );

    write_lexicon(
        counter,
        language,
        &args.output.join("words.csv"),
        &args.output.join("nonwords.txt"),
    )?;
    println!("Lexicon written to {}", args.output.join("words.csv").display());

    Ok(())
}
