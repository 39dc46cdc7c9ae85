//! Expression and decorator IR for the declass decorator synthesizer.
//!
//! This crate provides the types shared between the synthesis engine and the
//! drivers around it:
//! - Opaque argument expressions (`Expr`, `ObjectProperty`, `PropertyKey`)
//! - The synthesis output unit (`DecoratorSpec`)
//! - The writer boundary (`DecoratorList`, `Decorated`)
//! - Single-line rendering for logs and tests (`Renderer`)

// Expressions captured from legacy definitions
pub mod expr;
pub use expr::{Expr, ObjectProperty, PropertyKey};

// Decorator specifications and the writer boundary
pub mod decorator;
pub use decorator::{Decorated, DecoratorList, DecoratorSpec};

// Display support
pub mod render;
pub use render::Renderer;
