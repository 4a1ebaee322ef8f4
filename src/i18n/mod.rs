//! Internationalization (i18n) for the PraktijkEPD interface.
//!
//! All user-facing strings are looked up here, in English or Dutch.
//!
//! # Architecture
//!
//! - `registry`: supported languages and their metadata
//! - `language`: validated `Language` type
//! - `catalog`: compile-time `TranslationKey` enum and per-language strings
//! - `params`: `{placeholder}` parameters and substitution
//! - `preference`: persisted language choice
//! - `document`: host document updates on language change
//! - `service`: `TranslationService`, the injected owner of the active language
//! - `validator`: catalog quality checks
//! - `metrics`: lookup counters per service
//!
//! # Example
//!
//! ```rust,ignore
//! use praktijk_epd::i18n::{Language, TranslationKey, TranslationParams, TranslationService};
//!
//! let i18n = TranslationService::detached(Language::DUTCH);
//! let params = TranslationParams::positional([8]);
//! assert_eq!(
//!     i18n.translate(TranslationKey::ValidationMinLength, Some(&params)),
//!     "Minimale lengte is 8 karakters"
//! );
//! ```

mod catalog;
mod document;
mod language;
mod metrics;
mod params;
mod preference;
mod registry;
mod service;
mod validator;

pub use catalog::{Resolution, TranslationEntry, TranslationKey};
pub use document::{DocumentHost, InMemoryDocument, NoopDocument};
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use params::{interpolate, TranslationParams};
pub use preference::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, LANGUAGE_PREFERENCE_KEY,
};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use service::{initialize_language, role_translation, status_translation, TranslationService};
pub use validator::{CatalogValidator, ValidationReport};
