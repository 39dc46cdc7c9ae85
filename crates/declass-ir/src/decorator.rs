//! Decorator Specifications
//!
//! [`DecoratorSpec`] is what the synthesizer produces for each decorator it
//! decides to emit. A spec is either identifier-style (`@action`) or
//! call-style (`@computed('a')`, `@tracked()`); a call with zero arguments is
//! distinct from a bare identifier.
//!
//! [`DecoratorList`] and [`Decorated`] form the writer boundary: a member
//! either carries a non-empty list of decorators or none at all. There is no
//! way to attach an empty list.

use serde::{Deserialize, Serialize};

use crate::expr::Expr;

/// A decorator to be rendered immediately before a class or class member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoratorSpec {
    pub name: String,
    /// `None` for identifier-style, `Some` (possibly empty) for call-style
    pub arguments: Option<Vec<Expr>>,
}

impl DecoratorSpec {
    /// Identifier-style decorator: `@name`
    pub fn identifier(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    /// Call-style decorator: `@name(args)`
    pub fn call(name: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            arguments: Some(arguments),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn is_call_style(&self) -> bool {
        self.arguments.is_some()
    }

    /// Positional arguments; empty for identifier-style decorators.
    pub fn arguments(&self) -> &[Expr] {
        self.arguments.as_deref().unwrap_or_default()
    }
}

/// A non-empty, ordered list of decorators.
///
/// Order is application order as authored: the first entry is the outermost
/// decorator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecoratorList(Vec<DecoratorSpec>);

impl DecoratorList {
    /// Wrap `decorators`, or return `None` when there are none.
    pub fn new(decorators: Vec<DecoratorSpec>) -> Option<Self> {
        if decorators.is_empty() {
            None
        } else {
            Some(Self(decorators))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The outermost decorator.
    pub fn first(&self) -> &DecoratorSpec {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[DecoratorSpec] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecoratorSpec> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<DecoratorSpec> {
        self.0
    }
}

impl IntoIterator for DecoratorList {
    type Item = DecoratorSpec;
    type IntoIter = std::vec::IntoIter<DecoratorSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecoratorList {
    type Item = &'a DecoratorSpec;
    type IntoIter = std::slice::Iter<'a, DecoratorSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A writer-side member (or class) together with the decorators to render
/// before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorated<T> {
    pub member: T,
    /// `None` means the member is emitted with no decorator syntax at all
    pub decorators: Option<DecoratorList>,
}

impl<T> Decorated<T> {
    /// A member with no decorators.
    pub const fn bare(member: T) -> Self {
        Self {
            member,
            decorators: None,
        }
    }

    pub const fn is_decorated(&self) -> bool {
        self.decorators.is_some()
    }

    /// Decorators in application order; empty when undecorated.
    pub fn decorators(&self) -> &[DecoratorSpec] {
        self.decorators
            .as_ref()
            .map(DecoratorList::as_slice)
            .unwrap_or_default()
    }

    pub fn into_parts(self) -> (T, Option<DecoratorList>) {
        (self.member, self.decorators)
    }
}

#[cfg(test)]
#[path = "../tests/decorator.rs"]
mod tests;
