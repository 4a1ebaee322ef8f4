//! Placeholder parameters and `{name}` substitution.

use std::fmt::Display;

/// Ordered placeholder values for a translation.
///
/// Names are matched literally against `{name}` tokens. Positional values use
/// their index as the name, so `{0}` is filled by the first positional value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationParams {
    values: Vec<(String, String)>,
}

impl TranslationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named value. Any `Display` value is accepted, so numbers and
    /// strings can be mixed.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.values.push((name.into(), value.to_string()));
        self
    }

    /// Build parameters named `"0"`, `"1"`, ... from a list of values.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let values = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value.to_string()))
            .collect();
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Replace every `{name}` in `template` with its value.
///
/// Replacement is applied pair by pair in insertion order and is global for
/// each pair. Placeholders without a value stay in the output verbatim.
pub fn interpolate(template: &str, params: &TranslationParams) -> String {
    let mut output = template.to_string();
    for (name, value) in params.iter() {
        let token = format!("{{{}}}", name);
        if output.contains(&token) {
            output = output.replace(&token, value);
        }
    }
    output
}
