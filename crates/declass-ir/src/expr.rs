//! Argument Expressions
//!
//! Expressions captured from a legacy member definition, such as the
//! dependent keys and getter function in `computed('a', 'b', function () {})`.
//! The synthesizer never inspects their content beyond [`Expr::is_literal`]
//! and the array check of class-level properties; every other shape is passed
//! through to the writer untouched.
//!
//! # Interchange
//!
//! Expressions serialize as internally tagged objects:
//!
//! ```json
//! { "kind": "stringLiteral", "value": "a" }
//! { "kind": "functionExpr", "name": null, "params": [], "body": "{ return 1; }" }
//! ```

use serde::{Deserialize, Serialize};

/// An expression handed to the synthesizer as an opaque decorator argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Expr {
    // =========================================================================
    // Literals
    // =========================================================================
    /// String literal: `"hello"`
    StringLiteral { value: String },

    /// Numeric literal: `42`, `3.14`, kept as written
    NumericLiteral { value: String },

    /// Boolean literal: `true`, `false`
    BooleanLiteral { value: bool },

    /// Null literal: `null`
    NullLiteral,

    /// Template literal without substitutions: `` `hello` ``
    TemplateLiteral { quasi: String },

    // =========================================================================
    // Identifiers and expressions
    // =========================================================================
    /// Identifier: `foo`, `undefined`
    Identifier { name: String },

    /// Array literal: `[a, b, c]`
    ArrayLiteral { elements: Vec<Self> },

    /// Object literal: `{ key: value }`
    ObjectLiteral { properties: Vec<ObjectProperty> },

    /// Call expression: `callee(args)`
    CallExpr {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },

    /// Property access: `object.property`
    PropertyAccess { object: Box<Self>, property: String },

    // =========================================================================
    // Functions
    // =========================================================================
    /// Function expression. `body` is the verbatim block source, braces included.
    FunctionExpr {
        name: Option<String>,
        params: Vec<String>,
        body: String,
    },

    /// Arrow function. `body` is the verbatim body source (block or expression).
    ArrowFunction { params: Vec<String>, body: String },

    // =========================================================================
    // Special
    // =========================================================================
    /// Verbatim source text (escape hatch for shapes the IR does not model)
    Raw { text: String },
}

/// Property in an object literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub key: PropertyKey,
    pub value: Expr,
}

/// Object property key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropertyKey {
    Identifier { name: String },
    StringLiteral { value: String },
    Computed { expr: Box<Expr> },
}

impl Expr {
    /// Whether this expression is a literal value.
    ///
    /// A trailing non-literal argument of a legacy call-style definition is the
    /// member's implementation, not a decorator argument.
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::StringLiteral { .. }
                | Self::NumericLiteral { .. }
                | Self::BooleanLiteral { .. }
                | Self::NullLiteral
                | Self::TemplateLiteral { .. }
        )
    }

    /// Elements of an array literal, or `None` for any other shape.
    pub fn array_elements(&self) -> Option<&[Self]> {
        match self {
            Self::ArrayLiteral { elements } => Some(elements.as_slice()),
            _ => None,
        }
    }
}

// =========================================================================
// Builder helpers for expression construction
// =========================================================================

impl Expr {
    /// Create an identifier
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral {
            value: value.into(),
        }
    }

    /// Create a numeric literal
    pub fn number(value: impl Into<String>) -> Self {
        Self::NumericLiteral {
            value: value.into(),
        }
    }

    /// Create a boolean literal
    pub const fn boolean(value: bool) -> Self {
        Self::BooleanLiteral { value }
    }

    /// Create `null`
    pub const fn null() -> Self {
        Self::NullLiteral
    }

    /// Create an array literal
    pub const fn array(elements: Vec<Self>) -> Self {
        Self::ArrayLiteral { elements }
    }

    /// Create an object literal
    pub const fn object(properties: Vec<ObjectProperty>) -> Self {
        Self::ObjectLiteral { properties }
    }

    /// Create a call expression
    pub fn call(callee: Self, arguments: Vec<Self>) -> Self {
        Self::CallExpr {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Create a property access
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create an anonymous function expression
    pub fn func(params: Vec<String>, body: impl Into<String>) -> Self {
        Self::FunctionExpr {
            name: None,
            params,
            body: body.into(),
        }
    }

    /// Create an arrow function
    pub fn arrow(params: Vec<String>, body: impl Into<String>) -> Self {
        Self::ArrowFunction {
            params,
            body: body.into(),
        }
    }

    /// Create a raw source node
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw { text: text.into() }
    }
}

impl ObjectProperty {
    /// Create a property with identifier key: `{ key: value }`
    pub fn init(key: impl Into<String>, value: Expr) -> Self {
        Self {
            key: PropertyKey::Identifier { name: key.into() },
            value,
        }
    }

    /// Create a property with string literal key: `{ "key": value }`
    pub fn init_string(key: impl Into<String>, value: Expr) -> Self {
        Self {
            key: PropertyKey::StringLiteral { value: key.into() },
            value,
        }
    }
}

#[cfg(test)]
#[path = "../tests/expr.rs"]
mod tests;
