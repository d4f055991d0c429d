//! Filename heuristics for document categorization
//!
//! The upload page infers a category from the filename before handing the
//! record to the store; the store itself never guesses.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::DocumentCategory;

lazy_static! {
    /// Keyword patterns checked in order; first match wins.
    static ref CATEGORY_PATTERNS: Vec<(DocumentCategory, Regex)> = vec![
        (
            DocumentCategory::Identity,
            Regex::new(r"(?i)passport|birth|license|green.?card|i-?94|naturali[sz]ation").unwrap(),
        ),
        (
            DocumentCategory::Relationship,
            Regex::new(r"(?i)marriage|spouse|wedding|divorce|relationship").unwrap(),
        ),
        (
            DocumentCategory::Employment,
            Regex::new(r"(?i)employment|offer|paystub|pay.?slip|w-?2|i-?129|job").unwrap(),
        ),
        (
            DocumentCategory::Financial,
            Regex::new(r"(?i)bank|tax|i-?864|statement|financial|1040").unwrap(),
        ),
        (
            DocumentCategory::Medical,
            Regex::new(r"(?i)medical|vaccin|i-?693|immuni[sz]ation|exam").unwrap(),
        ),
        (
            DocumentCategory::Travel,
            Regex::new(r"(?i)travel|itinerary|flight|ticket|boarding").unwrap(),
        ),
    ];
}

/// Infer a document category from its filename. Returns `None` when no
/// keyword matches, leaving the choice to the user.
pub fn infer_category(filename: &str) -> Option<DocumentCategory> {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(filename))
        .map(|(category, _)| *category)
}
