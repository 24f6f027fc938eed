use language_utils::Language;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a sentence into an ordered sequence of token and whitespace
/// pieces. Concatenating the pieces must reproduce the input exactly;
/// nothing else is assumed about the segmentation.
pub trait Tokenize {
    fn tokenize(&self, sentence: &str) -> Vec<String>;
}

/// Tokenizer based on Unicode word boundaries (UAX #29). Punctuation and
/// whitespace runs come out as their own pieces; nothing in the input is
/// dropped, so concatenation always reproduces the sentence.
pub struct SegmentTokenizer;

impl Tokenize for SegmentTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .map(str::to_owned)
            .collect()
    }
}

/// Pick the tokenizer for a language. Every supported language currently
/// segments on Unicode word boundaries; a language needing its own
/// segmenter plugs in here without touching any call site.
pub fn tokenizer_for(_language: Language) -> Box<dyn Tokenize> {
    Box::new(SegmentTokenizer)
}
