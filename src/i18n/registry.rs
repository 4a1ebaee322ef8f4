//! Language registry: the set of languages the application can display.
//!
//! The registry is immutable and initialised lazily with `OnceLock`. It holds
//! only static metadata; the *active* language is owned by a
//! [`TranslationService`](crate::i18n::TranslationService) instance.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "nl")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Dutch")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Nederlands")
    pub native_name: &'static str,

    /// Whether this is the fallback language every catalog entry must provide
    pub is_canonical: bool,

    /// Whether this language is offered to users
    pub enabled: bool,
}

/// Registry of supported languages.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the shared registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in display order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The fallback language every catalog entry provides.
    ///
    /// # Panics
    /// Panics unless exactly one language is marked canonical. The table is
    /// static, so a violation is a programming error.
    pub fn canonical(&self) -> &LanguageConfig {
        let mut canonical = self.languages.iter().filter(|lang| lang.is_canonical);
        match (canonical.next(), canonical.next()) {
            (Some(lang), None) => lang,
            (None, _) => panic!("No canonical language found in registry"),
            (Some(_), Some(_)) => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Match a loosely written language tag against the enabled languages.
    ///
    /// Case and surrounding whitespace are ignored and a region subtag is
    /// dropped, so `" NL "`, `"nl-NL"` and `"nl_BE"` all match Dutch.
    pub fn match_tag(&self, tag: &str) -> Option<&LanguageConfig> {
        let normalized = tag.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next()?;
        if primary.is_empty() {
            return None;
        }
        self.list_enabled()
            .into_iter()
            .find(|lang| lang.code == primary)
    }
}

/// English (canonical) and Dutch.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "nl",
            name: "Dutch",
            native_name: "Nederlands",
            is_canonical: false,
            enabled: true,
        },
    ]
}
