//! Synthesis configuration.
//!
//! The defaults reproduce the fixed tables of the Ember class codemod:
//! `className`/`attribute` are bindings, `action`/`off`/`unobserves` are bare
//! markers, and `tagName`/`classNames` become class decorators. Drivers that
//! target other decorator libraries can override any table from JSON:
//!
//! ```json
//! { "markerDecorators": ["action", "off", "unobserves", "dropTask"] }
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// Identifier used by Rule C when no marker name is given.
pub const DEFAULT_MARKER: &str = "action";

/// Name tables consulted when raw decorator tokens are classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthesisOptions {
    /// Names that project a property list onto the element (Rule D)
    pub binding_decorators: FxHashSet<String>,
    /// Names emitted as bare identifier decorators (Rule C)
    pub marker_decorators: FxHashSet<String>,
    /// Class-body properties turned into class decorators (Rule A)
    pub class_decorator_props: FxHashSet<String>,
    /// Identifier-style decorator marking a converted class
    pub classic_decorator: String,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            binding_decorators: names(&["className", "attribute"]),
            marker_decorators: names(&[DEFAULT_MARKER, "off", "unobserves"]),
            class_decorator_props: names(&["tagName", "classNames"]),
            classic_decorator: "classic".to_string(),
        }
    }
}

impl SynthesisOptions {
    /// Parse options from JSON; missing tables keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_binding_decorator(mut self, name: impl Into<String>) -> Self {
        self.binding_decorators.insert(name.into());
        self
    }

    pub fn with_marker_decorator(mut self, name: impl Into<String>) -> Self {
        self.marker_decorators.insert(name.into());
        self
    }

    pub fn is_binding(&self, name: &str) -> bool {
        self.binding_decorators.contains(name)
    }

    pub fn is_marker(&self, name: &str) -> bool {
        self.marker_decorators.contains(name)
    }

    pub fn is_class_decorator_prop(&self, name: &str) -> bool {
        self.class_decorator_props.contains(name)
    }
}

fn names(list: &[&str]) -> FxHashSet<String> {
    list.iter().map(|name| (*name).to_string()).collect()
}

#[cfg(test)]
#[path = "../tests/options.rs"]
mod tests;
