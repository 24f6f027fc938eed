//! Supported languages: ISO codes, display metadata, and the per-language
//! alphabet/symbol sets used to decide whether a token is a real word.

/// A language with a sentence corpus we can build a lexicon from.
///
/// Variants are ordered by ISO 639-3 code.
#[derive(
    Copy,
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
pub enum Language {
    Catalan,
    Danish,
    German,
    Greek,
    English,
    Esperanto,
    Finnish,
    French,
    Croatian,
    Italian,
    Lithuanian,
    Macedonian,
    Dutch,
    NorwegianBokmal,
    Polish,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tagalog,
    TokiPona,
    Ukrainian,
}

pub const LANGUAGES: &[Language] = &[
    Language::Catalan,
    Language::Danish,
    Language::German,
    Language::Greek,
    Language::English,
    Language::Esperanto,
    Language::Finnish,
    Language::French,
    Language::Croatian,
    Language::Italian,
    Language::Lithuanian,
    Language::Macedonian,
    Language::Dutch,
    Language::NorwegianBokmal,
    Language::Polish,
    Language::Portuguese,
    Language::Romanian,
    Language::Russian,
    Language::Spanish,
    Language::Swedish,
    Language::Tagalog,
    Language::TokiPona,
    Language::Ukrainian,
];

impl Language {
    /// Look up a language by its ISO 639-3 code.
    pub fn from_iso_639_3(code: &str) -> Option<Language> {
        LANGUAGES
            .iter()
            .copied()
            .find(|language| language.iso_639_3() == code)
    }

    pub fn iso_639_3(&self) -> &'static str {
        match self {
            Language::Catalan => "cat",
            Language::Danish => "dan",
            Language::German => "deu",
            Language::Greek => "ell",
            Language::English => "eng",
            Language::Esperanto => "epo",
            Language::Finnish => "fin",
            Language::French => "fra",
            Language::Croatian => "hrv",
            Language::Italian => "ita",
            Language::Lithuanian => "lit",
            Language::Macedonian => "mkd",
            Language::Dutch => "nld",
            Language::NorwegianBokmal => "nob",
            Language::Polish => "pol",
            Language::Portuguese => "por",
            Language::Romanian => "ron",
            Language::Russian => "rus",
            Language::Spanish => "spa",
            Language::Swedish => "swe",
            Language::Tagalog => "tgl",
            Language::TokiPona => "tok",
            Language::Ukrainian => "ukr",
        }
    }

    /// BCP 47 tag, suitable for an html `lang` attribute.
    ///
    /// Subtag source: <https://www.iana.org/assignments/language-subtag-registry/>
    pub fn bcp47(&self) -> &'static str {
        match self {
            Language::Catalan => "ca",
            Language::Danish => "da",
            Language::German => "de",
            Language::Greek => "el",
            Language::English => "en",
            Language::Esperanto => "eo",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::Croatian => "hr",
            Language::Italian => "it",
            Language::Lithuanian => "lt",
            Language::Macedonian => "mk",
            Language::Dutch => "nl",
            Language::NorwegianBokmal => "nb",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swedish => "sv",
            Language::Tagalog => "tl",
            Language::TokiPona => "tok",
            Language::Ukrainian => "uk",
        }
    }

    /// Characters that may start a word and are acceptable anywhere in one.
    ///
    /// Alphabets are lowercase-only, so capitalized tokens never classify
    /// as words.
    pub fn alphabet(&self) -> &'static str {
        match self {
            Language::Catalan => "abcdefghijlmnopqrstuvxyzàéèíïóòúüçkw",
            Language::Danish => "abcdefghijklmnopqrstuvwxyzæøå",
            Language::German => "abcdefghijklmnopqrstuvwxyzäéöüß",
            Language::Greek => "αβγδεζηθικλμνξοπρσςτυφχψω",
            Language::English => "abcdefghijklmnopqrstuvwxyz",
            Language::Esperanto => "abcĉdefgĝhĥijĵklmnoprsŝtuŭvz",
            Language::Finnish => "abcdefghijklmnopqrstuvwxyzåäöšž",
            Language::French => "abcdefghijklmnopqrstuvwxyzàâæçéèêëîïôœùûüÿ",
            Language::Croatian => "abcčćdđefghijklmnoprsštuvzž",
            Language::Italian => "abcdefghilmnopqrstuvzàèéìíîòóùú",
            Language::Lithuanian => "aąbcčdeęėfghiįyjklmnoprsštuųūvzž",
            Language::Macedonian => "абвгдѓежзѕијклљмнњопрстќуфхцчџшѐѝč",
            Language::Dutch => "abcdefghijklmnopqrstuvwxyzĳäëïöüáéíóú",
            Language::NorwegianBokmal => "abcdefghijklmnopqrstuvwxyzæøå",
            Language::Polish => "aąbcćdeęfghijklłmnńoópqrsśtuvwxyzźż",
            Language::Portuguese => "abcdefghijklmnopqrstuvwxyzáâãàçéêíóôõú",
            Language::Romanian => "aăâbcdefghiîjklmnopqrsştţuvwxyz",
            Language::Russian => "бвгджзклмнпрстфхцчшщаеёиоуыэюяйьъ",
            Language::Spanish => "abcdefghijklmnñopqrstuvwxyzáéíóúü",
            Language::Swedish => "abcdefghijklmnopqrstuvwxyzåäöáüè",
            Language::Tagalog => "abcdefghijklmnñopqrstuvwxyzáàâéèêëíìîóòôúùû'",
            Language::TokiPona => "aeijklmnopstuw",
            Language::Ukrainian => "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя'",
        }
    }

    /// Characters acceptable inside a word but not as its first character.
    pub fn symbols(&self) -> &'static str {
        match self {
            Language::Catalan => "-'0123456789",
            Language::German => "-.'0123456789",
            Language::Greek => ",",
            Language::English => "-.'0123456789",
            Language::Esperanto => "-0123456789",
            Language::Macedonian => "'",
            // Space included because strings like "EE. UU." get tokenized
            // as one word.
            Language::Spanish => "-.'0123456789 ",
            Language::Tagalog => "-.0123456789",
            _ => "",
        }
    }

    /// Heuristic word classifier: a token is a word iff it is non-empty,
    /// starts with an alphabet character, and contains only alphabet or
    /// symbol characters.
    pub fn is_word(&self, token: &str) -> bool {
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        let alphabet = self.alphabet();
        if !alphabet.contains(first) {
            return false;
        }
        let symbols = self.symbols();
        chars.all(|c| alphabet.contains(c) || symbols.contains(c))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::Catalan => "Catalan",
            Language::Danish => "Danish",
            Language::German => "German",
            Language::Greek => "Greek",
            Language::English => "English",
            Language::Esperanto => "Esperanto",
            Language::Finnish => "Finnish",
            Language::French => "French",
            Language::Croatian => "Croatian",
            Language::Italian => "Italian",
            Language::Lithuanian => "Lithuanian",
            Language::Macedonian => "Macedonian",
            Language::Dutch => "Dutch",
            Language::NorwegianBokmal => "Norwegian Bokmål",
            Language::Polish => "Polish",
            Language::Portuguese => "Portuguese",
            Language::Romanian => "Romanian",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Swedish => "Swedish",
            Language::Tagalog => "Tagalog",
            Language::TokiPona => "toki pona",
            Language::Ukrainian => "Ukrainian",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_words() {
        assert!(Language::English.is_word("hello"));
        assert!(Language::English.is_word("it's"));
        assert!(Language::English.is_word("well-known"));
        assert!(Language::English.is_word("mr."));
    }

    #[test]
    fn test_empty_token_is_not_a_word() {
        assert!(!Language::English.is_word(""));
        assert!(!Language::TokiPona.is_word(""));
    }

    #[test]
    fn test_first_character_must_be_alphabetic() {
        // Symbols are only acceptable after the first character
        assert!(!Language::English.is_word("-dash"));
        assert!(!Language::English.is_word("'quote"));
        assert!(!Language::English.is_word("3rd"));
        assert!(Language::English.is_word("a-b"));
    }

    #[test]
    fn test_capitalized_tokens_are_not_words() {
        // Alphabets are lowercase-only
        assert!(!Language::English.is_word("Hello"));
        assert!(!Language::German.is_word("Haus"));
        assert!(Language::German.is_word("haus"));
    }

    #[test]
    fn test_language_without_symbols() {
        // Danish has an empty symbol set, so digits and hyphens disqualify
        assert!(Language::Danish.is_word("hygge"));
        assert!(!Language::Danish.is_word("a-b"));
        assert!(!Language::Danish.is_word("a1"));
    }

    #[test]
    fn test_spanish_abbreviations_with_spaces() {
        // "EE. UU."-style abbreviations arrive as a single token; Spanish
        // accepts an internal space but still requires a letter up front
        assert!(Language::Spanish.is_word("ee. uu."));
        assert!(!Language::Spanish.is_word(" ee. uu."));
        assert!(!Language::English.is_word("ee. uu."));
    }

    #[test]
    fn test_non_latin_scripts() {
        assert!(Language::Russian.is_word("привет"));
        assert!(!Language::Russian.is_word("privet"));
        assert!(Language::Greek.is_word("λογος"));
        assert!(Language::Ukrainian.is_word("мова"));
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(Language::from_iso_639_3("fra"), Some(Language::French));
        assert_eq!(Language::from_iso_639_3("tok"), Some(Language::TokiPona));
        assert_eq!(Language::from_iso_639_3("xyz"), None);
        assert_eq!(Language::from_iso_639_3(""), None);
    }

    #[test]
    fn test_codes_are_consistent() {
        for language in LANGUAGES {
            assert_eq!(
                Language::from_iso_639_3(language.iso_639_3()),
                Some(*language)
            );
            assert!(!language.bcp47().is_empty());
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Language::German.to_string(), "German");
        assert_eq!(Language::NorwegianBokmal.to_string(), "Norwegian Bokmål");
        assert_eq!(Language::TokiPona.to_string(), "toki pona");
    }
}
