use indexmap::IndexMap;
use std::cmp::Reverse;

/// Multiset of word tokens, enumerable in descending-count order.
///
/// The map keeps first-insertion order, which is what makes the tie rule in
/// `most_common` deterministic across runs.
#[derive(Debug, Default)]
pub struct WordCounter {
    counts: IndexMap<String, u32>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-increment from a tokenizer's output. The tokenizer interleaves
    /// token and whitespace pieces; only the tokens are counted.
    pub fn update<I, S>(&mut self, pieces: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for piece in pieces {
            let piece = piece.as_ref();
            if piece.trim().is_empty() {
                continue;
            }
            *self.counts.entry(piece.to_owned()).or_insert(0) += 1;
        }
    }

    /// Remove a word entirely. The relative order of the remaining entries
    /// is preserved.
    pub fn delete(&mut self, word: &str) {
        self.counts.shift_remove(word);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries ordered by descending count; equal counts keep their
    /// first-insertion order (the sort is stable).
    pub fn most_common(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_by_key(|&(_, count)| Reverse(count));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_counts_tokens() {
        let mut counter = WordCounter::new();
        counter.update(["Hello", " ", "world", "."]);
        counter.update(["Hello", " ", "again", "."]);
        assert_eq!(
            counter.most_common(),
            vec![("Hello", 2), (".", 2), ("world", 1), ("again", 1)]
        );
    }

    #[test]
    fn test_whitespace_pieces_are_not_counted() {
        let mut counter = WordCounter::new();
        counter.update(["a", " ", "\t", "  ", "", "b"]);
        assert_eq!(counter.len(), 2);
        // Tokens with internal spaces still count
        counter.update(["ee. uu."]);
        assert_eq!(counter.len(), 3);
    }

    #[test]
    fn test_ties_keep_first_insertion_order() {
        let mut counter = WordCounter::new();
        counter.update(["b", "a", "c", "a"]);
        let order = counter.most_common();
        assert_eq!(order, vec![("a", 2), ("b", 1), ("c", 1)]);
        // Enumeration is idempotent: no silent reshuffling of equal counts
        assert_eq!(counter.most_common(), order);
    }

    #[test]
    fn test_delete_leaves_no_ghost_entry() {
        let mut counter = WordCounter::new();
        counter.update(["a", "b", "b"]);
        counter.delete("b");
        assert_eq!(counter.most_common(), vec![("a", 1)]);
        // A deleted word starts over from one
        counter.update(["b"]);
        assert_eq!(counter.most_common(), vec![("a", 1), ("b", 1)]);
    }

    #[test]
    fn test_delete_preserves_remaining_order() {
        let mut counter = WordCounter::new();
        counter.update(["x", "y", "z"]);
        counter.delete("x");
        assert_eq!(counter.most_common(), vec![("y", 1), ("z", 1)]);
    }
}
