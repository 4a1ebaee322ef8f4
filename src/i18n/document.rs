//! Host document side effects of a language change.
//!
//! When the language changes, the root element's `lang` attribute is set and
//! a `<meta name="language">` tag is updated if the document has one. Both
//! are fire-and-forget.

use std::sync::Mutex;

pub trait DocumentHost: Send + Sync {
    /// Set the root element's language attribute.
    fn set_root_language(&self, code: &str);

    /// Update the language meta tag. Returns `false` when there is none.
    fn update_language_meta(&self, code: &str) -> bool;
}

/// Host without a document.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDocument;

impl DocumentHost for NoopDocument {
    fn set_root_language(&self, _code: &str) {}

    fn update_language_meta(&self, _code: &str) -> bool {
        false
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct DocumentState {
    root_lang: Option<String>,
    meta_language: Option<String>,
    has_meta: bool,
}

/// Document model kept in memory, for headless rendering and tests.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    state: Mutex<DocumentState>,
}

impl InMemoryDocument {
    /// A document without a language meta tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document that has a `<meta name="language">` tag.
    pub fn with_language_meta(content: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(DocumentState {
                root_lang: None,
                meta_language: Some(content.into()),
                has_meta: true,
            }),
        }
    }

    fn snapshot(&self) -> DocumentState {
        self.state
            .lock()
            .map(|state| state.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn root_language(&self) -> Option<String> {
        self.snapshot().root_lang
    }

    pub fn meta_language(&self) -> Option<String> {
        self.snapshot().meta_language
    }
}

impl DocumentHost for InMemoryDocument {
    fn set_root_language(&self, code: &str) {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.root_lang = Some(code.to_string());
    }

    fn update_language_meta(&self, code: &str) -> bool {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !state.has_meta {
            return false;
        }
        state.meta_language = Some(code.to_string());
        true
    }
}
