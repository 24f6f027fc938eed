#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("unsupported language: {0}")]
    UnknownLanguage(String),

    #[error("line {line}: expected `<id><TAB><sentence>`")]
    MalformedLine { line: usize },

    #[error("every counted token was rejected as a non-word")]
    EmptyLexicon,
}
