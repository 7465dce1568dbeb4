//! Speaking-character detection.
//!
//! Script-like text marks a speaking part with an ALL-CAPS label ending in a
//! period at the start of a line ("HAMLET. To be or not to be"). The label
//! rule is deliberately an explicit character-class check rather than a
//! regex: every character before the first period must be an ASCII uppercase
//! letter or a space.

use crate::data::table::CountTable;

/// Count speaker labels per line of `text`.
///
/// Each line is trimmed, then the prefix before the first period is tested
/// with [`speaker_label`]; matches accumulate in first-seen order.
///
/// # Example
///
/// ```rust
/// use dramatislib::data::count_characters;
///
/// let table = count_characters("HAMLET. To be\nHamlet. not a label\nHAMLET. or not");
/// assert_eq!(table.get("HAMLET"), Some(2));
/// assert_eq!(table.len(), 1);
/// ```
pub fn count_characters(text: &str) -> CountTable {
    let mut table = CountTable::new();
    for line in text.lines() {
        if let Some(name) = speaker_label(line) {
            table.record(name);
        }
    }
    table
}

/// Extract the speaker label from one line, if it has one.
///
/// A label exists when the trimmed line contains a period at index > 0 and
/// everything before that period is ASCII uppercase letters and spaces only.
/// Lowercase letters, digits, or punctuation anywhere in the prefix
/// disqualify the line. The returned label is trimmed.
pub fn speaker_label(line: &str) -> Option<&str> {
    let line = line.trim();
    let period = line.find('.')?;
    if period == 0 {
        return None;
    }
    let prefix = &line[..period];
    if !prefix.chars().all(|c| c.is_ascii_uppercase() || c == ' ') {
        return None;
    }
    let name = prefix.trim();
    if name.is_empty() {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps_label_accepted() {
        assert_eq!(speaker_label("HAMLET. To be or not to be"), Some("HAMLET"));
    }

    #[test]
    fn test_label_with_spaces_accepted() {
        assert_eq!(
            speaker_label("ROMEO AND JULIET. text"),
            Some("ROMEO AND JULIET")
        );
    }

    #[test]
    fn test_mixed_case_rejected() {
        assert_eq!(speaker_label("Hamlet. To be or not to be"), None);
    }

    #[test]
    fn test_leading_period_rejected() {
        assert_eq!(speaker_label(". leading period"), None);
    }

    #[test]
    fn test_no_period_rejected() {
        assert_eq!(speaker_label("HAMLET enters, brooding"), None);
    }

    #[test]
    fn test_digits_in_prefix_rejected() {
        assert_eq!(speaker_label("ACT 2. The castle"), None);
    }

    #[test]
    fn test_punctuation_in_prefix_rejected() {
        assert_eq!(speaker_label("HAMLET'S GHOST. Mark me"), None);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(speaker_label("   HORATIO. Hail to your lordship!  "), Some("HORATIO"));
    }

    #[test]
    fn test_lone_label_line() {
        assert_eq!(speaker_label("STOP."), Some("STOP"));
    }

    #[test]
    fn test_counts_accumulate_in_first_seen_order() {
        let text = "\
BERNARDO. Who's there?
FRANCISCO. Nay, answer me
BERNARDO. Long live the king!
stage direction. ignored
FRANCISCO. Bernardo?
BERNARDO. He
";
        let table = count_characters(text);
        let entries: Vec<(&str, u64)> = table.iter().collect();
        assert_eq!(entries, [("BERNARDO", 3), ("FRANCISCO", 2)]);
    }

    #[test]
    fn test_no_matches_yields_empty_table() {
        let table = count_characters("just prose, no speakers here.\nanother line");
        assert!(table.is_empty());
    }
}
