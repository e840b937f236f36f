//! Paragraph classification heuristics.
//!
//! Listing items carry their secondary fields in undifferentiated `<p>`
//! elements; the only signal is the text itself. Each paragraph is
//! classified by exactly one rule, in priority order: byline, date shape,
//! then prose. A `"By ..."` paragraph is never also treated as a date or
//! description, even when it would match those patterns too.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal prefix marking an author paragraph.
const BYLINE_PREFIX: &str = "By ";

/// Date shape: word characters, whitespace, digits, comma, whitespace,
/// four digits — e.g. "May 2, 2023". The raw matched text is stored, not
/// a re-parsed form.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+\s+\d+,\s+\d{4}").expect("date shape pattern is valid"));

/// How a single paragraph classifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphKind {
    /// Author list parsed from a `"By ..."` paragraph
    Byline(Vec<String>),
    /// Raw matched date text
    Date(String),
    /// Anything else; a description candidate
    Prose,
}

/// Classify one paragraph's trimmed text.
#[must_use]
pub fn classify_paragraph(text: &str) -> ParagraphKind {
    if let Some(rest) = text.strip_prefix(BYLINE_PREFIX) {
        return ParagraphKind::Byline(split_authors(rest));
    }
    if let Some(found) = DATE_SHAPE.find(text) {
        return ParagraphKind::Date(found.as_str().to_string());
    }
    ParagraphKind::Prose
}

/// Split a byline (already stripped of the `"By "` prefix) into author
/// names: comma-separated, each trimmed, empties dropped.
#[must_use]
pub fn split_authors(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Secondary fields accumulated over an item's paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphFields {
    pub authors: Vec<String>,
    pub date: String,
    pub description: String,
}

impl ParagraphFields {
    /// Fold a sequence of paragraph texts into field values.
    ///
    /// Authors and date take assignment semantics (a later byline or date
    /// paragraph replaces an earlier one); the description keeps the
    /// longest prose paragraph, with ties going to the first seen.
    #[must_use]
    pub fn collect<I>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut fields = Self::default();
        for text in paragraphs {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            match classify_paragraph(text) {
                ParagraphKind::Byline(authors) => fields.authors = authors,
                ParagraphKind::Date(date) => fields.date = date,
                ParagraphKind::Prose => {
                    if text.len() > fields.description.len() {
                        fields.description = text.to_string();
                    }
                }
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byline_splits_on_commas_and_trims() {
        let kind = classify_paragraph("By Jane Doe, John Smith");
        assert_eq!(
            kind,
            ParagraphKind::Byline(vec!["Jane Doe".to_string(), "John Smith".to_string()])
        );
    }

    #[test]
    fn byline_single_author() {
        let kind = classify_paragraph("By Jane Doe");
        assert_eq!(kind, ParagraphKind::Byline(vec!["Jane Doe".to_string()]));
    }

    #[test]
    fn date_shape_matches_and_keeps_raw_text() {
        let kind = classify_paragraph("May 2, 2023");
        assert_eq!(kind, ParagraphKind::Date("May 2, 2023".to_string()));
    }

    #[test]
    fn date_embedded_in_longer_text_keeps_only_the_match() {
        let kind = classify_paragraph("Published May 2, 2023 in the library");
        assert_eq!(kind, ParagraphKind::Date("May 2, 2023".to_string()));
    }

    #[test]
    fn byline_wins_over_date_shape() {
        // A byline that happens to contain a date-shaped substring is
        // still a byline; rule order is the tie-break.
        let kind = classify_paragraph("By Jane Doe, May 2, 2023");
        assert!(matches!(kind, ParagraphKind::Byline(_)));
    }

    #[test]
    fn plain_text_is_prose() {
        assert_eq!(
            classify_paragraph("A supply chain unravels in week one."),
            ParagraphKind::Prose
        );
    }

    #[test]
    fn longest_prose_paragraph_becomes_description() {
        let short = "x".repeat(40);
        let long = "y".repeat(80);
        let fields = ParagraphFields::collect(vec![short.clone(), long.clone()]);
        assert_eq!(fields.description, long);

        // Reversed order: the long one still wins
        let fields = ParagraphFields::collect(vec![long.clone(), short]);
        assert_eq!(fields.description, long);
    }

    #[test]
    fn description_tie_keeps_first_seen() {
        let first = "a".repeat(50);
        let second = "b".repeat(50);
        let fields = ParagraphFields::collect(vec![first.clone(), second]);
        assert_eq!(fields.description, first);
    }

    #[test]
    fn date_paragraph_is_never_the_description() {
        let fields = ParagraphFields::collect(vec!["May 2, 2023".to_string()]);
        assert_eq!(fields.date, "May 2, 2023");
        assert!(fields.description.is_empty());
    }

    #[test]
    fn no_paragraphs_yields_empty_fields() {
        let fields = ParagraphFields::collect(Vec::<String>::new());
        assert!(fields.authors.is_empty());
        assert!(fields.date.is_empty());
        assert!(fields.description.is_empty());
    }

    #[test]
    fn later_byline_replaces_earlier() {
        let fields = ParagraphFields::collect(vec![
            "By Jane Doe".to_string(),
            "By John Smith".to_string(),
        ]);
        assert_eq!(fields.authors, vec!["John Smith".to_string()]);
    }

    #[test]
    fn empty_author_tokens_are_dropped() {
        assert_eq!(
            split_authors("Jane Doe, , John Smith,"),
            vec!["Jane Doe".to_string(), "John Smith".to_string()]
        );
    }
}
