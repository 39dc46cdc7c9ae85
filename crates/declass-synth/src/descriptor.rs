//! Member descriptors
//!
//! A [`MemberDescriptor`] is the parser's summary of one legacy class member.
//! For a definition like
//!
//! ```javascript
//! fullName: computed('firstName', 'lastName', function () { ... }).readOnly()
//! ```
//!
//! the descriptor holds the name `computed`, the three call arguments, the
//! fact that the last one is a function, and one `readOnly` modifier.

use declass_ir::Expr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DescriptorError;
use crate::name::DecoratorName;
use crate::options::SynthesisOptions;

/// A chained modifier call such as `.readOnly()` or `.meta({ type: 'x' })`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub property: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub args: Vec<Expr>,
}

impl Modifier {
    pub fn new(property: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            property: property.into(),
            args,
        }
    }

    /// A modifier called with no arguments: `.readOnly()`
    pub fn bare(property: impl Into<String>) -> Self {
        Self::new(property, Vec::new())
    }
}

/// A raw class-body property such as `tagName: 'span'` or
/// `classNames: ['a', 'b']`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassLevelProperty {
    pub name: String,
    pub value: Expr,
}

impl ClassLevelProperty {
    pub fn new(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One legacy instance member slated for conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberDescriptor {
    /// Decorators to apply, outermost first
    pub decorator_names: Vec<DecoratorName>,
    /// Arguments of the legacy call-style definition
    pub call_expr_args: Vec<Expr>,
    /// The last call argument is the member's implementation
    pub has_non_literal_arg: bool,
    /// `volatile().readOnly()` computed property; receives no decorators
    pub is_volatile_read_only: bool,
    /// Chained modifier calls, in source order
    pub modifiers: Vec<Modifier>,
    /// Target properties of a class-name or attribute binding
    pub prop_list: Option<Vec<String>>,
}

impl MemberDescriptor {
    pub fn new(decorator_names: Vec<DecoratorName>) -> Self {
        Self {
            decorator_names,
            ..Self::default()
        }
    }

    /// Build a descriptor from raw name tokens, dropping the ones that do not
    /// resolve to a decorator.
    pub fn from_raw_names<I, S>(names: I, options: &SynthesisOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let decorator_names = names
            .into_iter()
            .filter_map(|raw| {
                let resolved = DecoratorName::classify(raw.as_ref(), options);
                if resolved.is_none() {
                    tracing::debug!(raw = raw.as_ref(), "dropping unresolvable decorator name");
                }
                resolved
            })
            .collect();
        Self::new(decorator_names)
    }

    /// Set the call arguments and derive `has_non_literal_arg` from the last one.
    pub fn with_call_args(mut self, args: Vec<Expr>) -> Self {
        self.has_non_literal_arg = args.last().is_some_and(|last| !last.is_literal());
        self.call_expr_args = args;
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_prop_list<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prop_list = Some(props.into_iter().map(Into::into).collect());
        self
    }

    pub fn volatile_read_only(mut self) -> Self {
        self.is_volatile_read_only = true;
        self
    }

    /// Call arguments that become decorator arguments: everything except a
    /// trailing implementation.
    pub fn decorator_args(&self) -> &[Expr] {
        if self.has_non_literal_arg {
            let keep = self.call_expr_args.len().saturating_sub(1);
            &self.call_expr_args[..keep]
        } else {
            &self.call_expr_args
        }
    }

    /// The trailing implementation the writer re-attaches as the member body.
    pub fn member_body(&self) -> Option<&Expr> {
        if self.has_non_literal_arg {
            self.call_expr_args.last()
        } else {
            None
        }
    }

    /// Decode a descriptor document, classifying its name tokens with `options`.
    ///
    /// ```json
    /// {
    ///   "decoratorNames": ["computed"],
    ///   "callExprArgs": [{ "kind": "stringLiteral", "value": "a" }],
    ///   "modifiers": [{ "property": "readOnly" }]
    /// }
    /// ```
    pub fn from_json(json: &str, options: &SynthesisOptions) -> Result<Self, DescriptorError> {
        let raw: RawMemberDescriptor = serde_json::from_str(json)?;
        raw.resolve(options)
    }
}

/// Wire shape of a descriptor, before name classification.
///
/// Drivers often write `null` for fields they have nothing for; it reads the
/// same as an absent field.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMemberDescriptor {
    #[serde(deserialize_with = "null_as_default")]
    decorator_names: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    call_expr_args: Vec<Expr>,
    #[serde(default, deserialize_with = "null_as_default")]
    has_non_literal_arg: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    is_volatile_read_only: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    modifiers: Vec<Modifier>,
    #[serde(default)]
    prop_list: Option<Vec<String>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawMemberDescriptor {
    fn resolve(self, options: &SynthesisOptions) -> Result<MemberDescriptor, DescriptorError> {
        if let Some(index) = self
            .modifiers
            .iter()
            .position(|modifier| modifier.property.trim().is_empty())
        {
            return Err(DescriptorError::EmptyModifier { index });
        }

        let names = self.decorator_names.into_iter().flatten();
        let mut descriptor = MemberDescriptor::from_raw_names(names, options);
        descriptor.call_expr_args = self.call_expr_args;
        descriptor.has_non_literal_arg = self.has_non_literal_arg;
        descriptor.is_volatile_read_only = self.is_volatile_read_only;
        descriptor.modifiers = self.modifiers;
        descriptor.prop_list = self.prop_list;
        Ok(descriptor)
    }
}

#[cfg(test)]
#[path = "../tests/descriptor.rs"]
mod tests;
