use std::hash::{Hash, Hasher};

/// One ingested sentence with its token sequence.
///
/// `id` is present for corpora sourced from Tatoeba and absent for ad-hoc
/// ones. Records are built once per input line, written out, and dropped.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub id: Option<u64>,
    pub text: String,
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Project the record into a CSV row. The token sequence is encoded as
    /// a JSON array so order and empty strings survive the round trip.
    pub fn row(&self) -> anyhow::Result<Vec<String>> {
        let tokens = serde_json::to_string(&self.tokens)?;
        Ok(match self.id {
            Some(id) => vec![id.to_string(), self.text.clone(), tokens],
            None => vec![self.text.clone(), tokens],
        })
    }
}

// Two records with identical text are interchangeable for counting and
// deduplication, whatever their ids or tokenization.
impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Sentence {}

impl Hash for Sentence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}
