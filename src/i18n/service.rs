//! Translation service: active language plus catalog lookup.
//!
//! One service instance is built at application start and shared by
//! reference. The active language is changed only through
//! [`TranslationService::set_language`]; every lookup reads it.
//!
//! Lookups never fail. A missing key renders as the key itself, a missing
//! Dutch string renders as English, and role/status labels without an entry
//! render as the raw value they were given.

use crate::i18n::catalog::{Resolution, TranslationEntry, TranslationKey};
use crate::i18n::document::{DocumentHost, NoopDocument};
use crate::i18n::metrics::TranslationMetrics;
use crate::i18n::params::{interpolate, TranslationParams};
use crate::i18n::preference::{MemoryPreferenceStore, PreferenceStore};
use crate::i18n::Language;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Resolve the language to start with.
///
/// Priority: the persisted preference, then `configured_default`, then the
/// canonical language. The persisted value must be an exact supported code
/// (`"en"`, `"nl"`); anything else counts as not set. The configured default
/// is parsed leniently, so `nl-NL` is accepted there. Reads only.
pub fn initialize_language(
    store: &dyn PreferenceStore,
    configured_default: Option<&str>,
) -> Language {
    let persisted = store.load();
    if let Some(language) = persisted
        .as_deref()
        .and_then(|code| Language::from_code(code).ok())
    {
        return language;
    }
    if let Some(code) = persisted {
        debug!("Ignoring unsupported persisted language '{}'", code);
    }

    configured_default
        .and_then(Language::parse)
        .unwrap_or_else(Language::canonical)
}

/// Label for a backend role value such as `"Therapist"`.
///
/// Falls back to `role` unchanged when there is no `role.*` entry.
pub fn role_translation(role: &str, language: Language) -> String {
    label_translation("role", role, language).unwrap_or_else(|| role.to_string())
}

/// Label for a backend status value such as `"COMPLETED"`.
///
/// Falls back to `status` unchanged when there is no `status.*` entry.
pub fn status_translation(status: &str, language: Language) -> String {
    label_translation("status", status, language).unwrap_or_else(|| status.to_string())
}

fn label_translation(prefix: &str, value: &str, language: Language) -> Option<String> {
    let key = format!("{}.{}", prefix, value.to_lowercase());
    match TranslationKey::from_key(&key)?.entry().resolve(language) {
        Resolution::Exact(text) | Resolution::Fallback(text) => Some(text.to_string()),
        Resolution::Missing => None,
    }
}

pub struct TranslationService {
    active: RwLock<Language>,
    store: Arc<dyn PreferenceStore>,
    document: Arc<dyn DocumentHost>,
    metrics: TranslationMetrics,
}

impl TranslationService {
    /// Build a service whose initial language comes from
    /// [`initialize_language`].
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        document: Arc<dyn DocumentHost>,
        configured_default: Option<&str>,
    ) -> Self {
        let language = initialize_language(store.as_ref(), configured_default);
        debug!("Initial language: {}", language);
        Self {
            active: RwLock::new(language),
            store,
            document,
            metrics: TranslationMetrics::new(),
        }
    }

    /// A service with no persistence and no document, fixed to start in
    /// `language`.
    pub fn detached(language: Language) -> Self {
        Self::new(
            Arc::new(MemoryPreferenceStore::new()),
            Arc::new(NoopDocument),
            Some(language.code()),
        )
    }

    /// The current active language.
    pub fn language(&self) -> Language {
        *self
            .active
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Switch the active language.
    ///
    /// Persists the choice and updates the host document. Persistence
    /// failures are logged and otherwise ignored; this always succeeds.
    pub fn set_language(&self, language: Language) {
        {
            let mut active = self
                .active
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *active = language;
        }

        if let Err(e) = self.store.save(language.code()) {
            warn!("Failed to persist language preference '{}': {:#}", language, e);
        }

        self.document.set_root_language(language.code());
        if !self.document.update_language_meta(language.code()) {
            debug!("No language meta tag to update");
        }
    }

    /// Translate a catalog key in the active language.
    pub fn t(&self, key: TranslationKey) -> String {
        self.translate(key, None)
    }

    /// Translate a catalog key, substituting `params`.
    pub fn translate(&self, key: TranslationKey, params: Option<&TranslationParams>) -> String {
        self.render(key.as_str(), key.entry(), params)
    }

    /// Translate a key given as a string, e.g. one built at runtime.
    ///
    /// Unknown keys log a warning and are returned verbatim.
    pub fn translate_str(&self, key: &str, params: Option<&TranslationParams>) -> String {
        match TranslationKey::from_key(key) {
            Some(known) => self.render(known.as_str(), known.entry(), params),
            None => {
                self.metrics.record_lookup();
                self.metrics.record_missing_key();
                warn!("Translation key not found: {}", key);
                key.to_string()
            }
        }
    }

    /// Role label in the active language.
    pub fn role_label(&self, role: &str) -> String {
        self.label("role", role)
    }

    /// Status label in the active language.
    pub fn status_label(&self, status: &str) -> String {
        self.label("status", status)
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    fn label(&self, prefix: &str, value: &str) -> String {
        self.metrics.record_lookup();
        match label_translation(prefix, value, self.language()) {
            Some(text) => text,
            None => {
                self.metrics.record_raw_label_fallback();
                debug!("No {} label for '{}'", prefix, value);
                value.to_string()
            }
        }
    }

    fn render(
        &self,
        key: &str,
        entry: TranslationEntry,
        params: Option<&TranslationParams>,
    ) -> String {
        self.metrics.record_lookup();
        let language = self.language();

        let template = match entry.resolve(language) {
            Resolution::Exact(text) => text,
            Resolution::Fallback(text) => {
                self.metrics.record_language_fallback();
                debug!("No {} string for '{}', using English", language, key);
                text
            }
            Resolution::Missing => {
                self.metrics.record_missing_key();
                warn!("Translation for '{}' has no usable string", key);
                return key.to_string();
            }
        };

        match params {
            Some(params) if !params.is_empty() => interpolate(template, params),
            _ => template.to_string(),
        }
    }
}
