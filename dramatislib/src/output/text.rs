//! Plain-text report rendering.
//!
//! The layout is fixed: every section, count line, and placeholder renders
//! regardless of how much data there is, so the output shape is identical
//! for a full play, an empty file, and an unreadable path. Tests depend on
//! that stability.

use crate::output::report::Report;
use crate::query::NamedCount;

/// Section separator between the two analyses.
const SEPARATOR: &str = "========================================";

impl Report {
    /// Render the report as the combined text blob.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("--- Word Frequency Analysis ---\n");
        if self.source_available {
            out.push_str(&format!("Processing complete for: {}\n", self.path));
        } else {
            out.push_str(&format!("Source unavailable: {}\n", self.path));
        }
        out.push_str(&format!("Number of unique words: {}\n", self.words.unique));
        for entry in &self.words.entries {
            out.push_str(&format!("{}\t{}\n", entry.count, entry.key));
        }
        match &self.words.max {
            Some(max) => out.push_str(&format!(
                "The word that occurs most often and its count are: {} {}\n",
                max.key, max.count
            )),
            None => out.push_str("Could not determine the most frequent word.\n"),
        }

        out.push_str(&format!("\n{SEPARATOR}\n\n"));

        out.push_str("--- Character Speaking Parts Analysis ---\n");
        out.push_str(&format!(
            "Total unique character names found: {}\n",
            self.characters.unique
        ));
        out.push_str(&format!(
            "Main characters (speaking >= {} times):\n",
            self.characters.threshold
        ));
        push_selection(&mut out, &self.characters.main, "(None found above threshold)");
        out.push_str(&format!(
            "Characters with speaking parts between {} and {}:\n",
            self.characters.range_low, self.characters.range_high
        ));
        push_selection(&mut out, &self.characters.in_range, "(None found in this range)");

        out
    }
}

/// Append one `NAME: count` line per selected entry, or the placeholder when
/// the selection is empty.
fn push_selection(out: &mut String, selection: &[NamedCount], placeholder: &str) {
    if selection.is_empty() {
        out.push_str(placeholder);
        out.push('\n');
        return;
    }
    for named in selection {
        out.push_str(&format!("{}: {}\n", named.name, named.count));
    }
}
