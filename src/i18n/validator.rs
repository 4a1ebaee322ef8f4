//! Catalog quality validation.
//!
//! Checks that catalog entries are usable: English present, Dutch present,
//! and both languages using the same `{placeholder}` names so parameter
//! substitution behaves identically whichever language is active.

use crate::i18n::catalog::{TranslationEntry, TranslationKey};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make an entry unusable
    pub errors: Vec<String>,

    /// Problems that degrade output but are handled by fallback
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate the built-in catalog.
    pub fn validate_catalog() -> ValidationReport {
        Self::validate_entries(
            TranslationKey::ALL
                .iter()
                .map(|key| (key.as_str(), key.entry())),
        )
    }

    /// Validate an arbitrary set of `(key, entry)` pairs.
    pub fn validate_entries<'a, I>(entries: I) -> ValidationReport
    where
        I: IntoIterator<Item = (&'a str, TranslationEntry)>,
    {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();

        for (key, entry) in entries {
            if !seen.insert(key) {
                report.errors.push(format!("Duplicate key '{}'", key));
            }
            report.merge(Self::validate_entry(key, &entry));
        }

        report
    }

    /// Validate a single entry.
    pub fn validate_entry(key: &str, entry: &TranslationEntry) -> ValidationReport {
        let mut report = ValidationReport::new();

        if entry.en.trim().is_empty() {
            report
                .errors
                .push(format!("'{}' has no English string", key));
        }

        match entry.nl {
            None => report
                .warnings
                .push(format!("'{}' has no Dutch string, English will be shown", key)),
            Some(nl) if nl.trim().is_empty() => report
                .warnings
                .push(format!("'{}' has an empty Dutch string, English will be shown", key)),
            Some(nl) => {
                let en_placeholders = Self::extract_placeholders(entry.en);
                let nl_placeholders = Self::extract_placeholders(nl);
                if en_placeholders != nl_placeholders {
                    report.warnings.push(format!(
                        "Placeholder mismatch for '{}': English has {:?}, Dutch has {:?}",
                        key, en_placeholders, nl_placeholders
                    ));
                }
            }
        }

        report
    }

    /// Extract the distinct `{name}` placeholder names from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("valid placeholder regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
