//! Word frequency counting.

use crate::data::table::CountTable;

/// Count whitespace-delimited tokens in `text`, case-insensitively.
///
/// Tokens are maximal runs of non-whitespace; any attached punctuation stays
/// part of the token, so `go` and `go!` are distinct keys. Each token is
/// lowercased before lookup and first-seen order is preserved.
///
/// # Example
///
/// ```rust
/// use dramatislib::data::count_words;
///
/// let table = count_words("The the THE end");
/// assert_eq!(table.get("the"), Some(3));
/// assert_eq!(table.get("end"), Some(1));
/// ```
pub fn count_words(text: &str) -> CountTable {
    let mut table = CountTable::new();
    for token in text.split_whitespace() {
        table.record(token.to_lowercase());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_counting() {
        let table = count_words("The the THE");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("the"), Some(3));
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let table = count_words("go go! go");
        assert_eq!(table.get("go"), Some(2));
        assert_eq!(table.get("go!"), Some(1));
    }

    #[test]
    fn test_total_equals_token_count() {
        let text = "one two\tthree\nfour  five one";
        let table = count_words(text);
        assert_eq!(table.total(), text.split_whitespace().count() as u64);
    }

    #[test]
    fn test_tie_resolves_to_first_inserted() {
        let table = count_words("a b a b c");
        assert_eq!(table.get("a"), Some(2));
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.get("c"), Some(1));
        assert_eq!(table.max_entry().unwrap().key, "a");
    }

    #[test]
    fn test_idempotent_over_same_content() {
        let text = "Out, out, brief candle!";
        assert_eq!(count_words(text), count_words(text));
    }

    #[test]
    fn test_empty_input() {
        assert!(count_words("").is_empty());
        assert!(count_words(" \t\n ").is_empty());
    }
}
