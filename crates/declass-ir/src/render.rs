//! Single-line rendering of expressions and decorators.
//!
//! Used by tracing output and tests to show what the synthesizer produced.
//! Layout decisions (line width, quote style, indentation) belong to the
//! writer that owns the real syntax tree; this renderer always emits one line
//! per decorator with double-quoted strings.

use std::fmt;

use crate::decorator::{DecoratorList, DecoratorSpec};
use crate::expr::{Expr, ObjectProperty, PropertyKey};

/// Accumulates rendered source text.
#[derive(Debug, Default)]
pub struct Renderer {
    output: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a single expression to a string.
    pub fn expr_to_string(expr: &Expr) -> String {
        let mut renderer = Self::new();
        renderer.emit_expr(expr);
        renderer.output
    }

    /// Render a single decorator, `@` included.
    pub fn decorator_to_string(decorator: &DecoratorSpec) -> String {
        let mut renderer = Self::new();
        renderer.emit_decorator(decorator);
        renderer.output
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn emit_decorator(&mut self, decorator: &DecoratorSpec) {
        self.output.push('@');
        self.output.push_str(&decorator.name);
        if let Some(arguments) = &decorator.arguments {
            self.emit_arguments(arguments);
        }
    }

    /// Emit decorators one per line, outermost first.
    pub fn emit_decorator_list(&mut self, decorators: &DecoratorList) {
        for (i, decorator) in decorators.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.emit_decorator(decorator);
        }
    }

    pub fn emit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::StringLiteral { value } => self.emit_string_literal(value),
            Expr::NumericLiteral { value } => self.output.push_str(value),
            Expr::BooleanLiteral { value } => {
                self.output.push_str(if *value { "true" } else { "false" });
            }
            Expr::NullLiteral => self.output.push_str("null"),
            Expr::TemplateLiteral { quasi } => {
                self.output.push('`');
                self.output.push_str(quasi);
                self.output.push('`');
            }
            Expr::Identifier { name } => self.output.push_str(name),
            Expr::ArrayLiteral { elements } => {
                self.output.push('[');
                self.emit_comma_list(elements);
                self.output.push(']');
            }
            Expr::ObjectLiteral { properties } => self.emit_object(properties),
            Expr::CallExpr { callee, arguments } => {
                self.emit_expr(callee);
                self.emit_arguments(arguments);
            }
            Expr::PropertyAccess { object, property } => {
                self.emit_expr(object);
                self.output.push('.');
                self.output.push_str(property);
            }
            Expr::FunctionExpr { name, params, body } => {
                self.output.push_str("function ");
                if let Some(name) = name {
                    self.output.push_str(name);
                }
                self.output.push('(');
                self.output.push_str(&params.join(", "));
                self.output.push_str(") ");
                self.output.push_str(body);
            }
            Expr::ArrowFunction { params, body } => {
                self.output.push('(');
                self.output.push_str(&params.join(", "));
                self.output.push_str(") => ");
                self.output.push_str(body);
            }
            Expr::Raw { text } => self.output.push_str(text),
        }
    }

    fn emit_arguments(&mut self, arguments: &[Expr]) {
        self.output.push('(');
        self.emit_comma_list(arguments);
        self.output.push(')');
    }

    fn emit_comma_list(&mut self, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.emit_expr(expr);
        }
    }

    fn emit_object(&mut self, properties: &[ObjectProperty]) {
        if properties.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push_str("{ ");
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            match &property.key {
                PropertyKey::Identifier { name } => self.output.push_str(name),
                PropertyKey::StringLiteral { value } => self.emit_string_literal(value),
                PropertyKey::Computed { expr } => {
                    self.output.push('[');
                    self.emit_expr(expr);
                    self.output.push(']');
                }
            }
            self.output.push_str(": ");
            self.emit_expr(&property.value);
        }
        self.output.push_str(" }");
    }

    fn emit_string_literal(&mut self, value: &str) {
        self.output.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if c.is_control() => {
                    self.output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::expr_to_string(self))
    }
}

impl fmt::Display for DecoratorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::decorator_to_string(self))
    }
}

impl fmt::Display for DecoratorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut renderer = Renderer::new();
        renderer.emit_decorator_list(self);
        f.write_str(&renderer.finish())
    }
}

#[cfg(test)]
#[path = "../tests/render.rs"]
mod tests;
