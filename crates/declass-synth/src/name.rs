//! Decorator name classification.
//!
//! Legacy markers arrive as plain strings. They are resolved into a
//! [`DecoratorName`] once, when the descriptor is built, so the engine matches
//! on a closed set of categories instead of comparing strings.

use serde::Serialize;

use crate::options::SynthesisOptions;

/// A decorator name tagged with the rule that synthesizes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "category", content = "name", rename_all = "camelCase")]
pub enum DecoratorName {
    /// `@className`, `@attribute`: argument list from `prop_list`
    Binding(String),
    /// `@action`, `@off`: always bare
    Marker(String),
    /// `@computed(...)` and everything else: call-style plus modifiers
    CallExpression(String),
}

impl DecoratorName {
    /// Classify a raw token. Empty tokens resolve to nothing.
    pub fn classify(raw: &str, options: &SynthesisOptions) -> Option<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }
        let name = name.to_string();
        Some(if options.is_binding(&name) {
            Self::Binding(name)
        } else if options.is_marker(&name) {
            Self::Marker(name)
        } else {
            Self::CallExpression(name)
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Binding(name) | Self::Marker(name) | Self::CallExpression(name) => name,
        }
    }
}

#[cfg(test)]
#[path = "../tests/name.rs"]
mod tests;
