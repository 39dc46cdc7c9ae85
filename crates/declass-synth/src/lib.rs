//! Decorator synthesis for legacy class members.
//!
//! Given a [`MemberDescriptor`] built by an upstream parser, the engine decides
//! which decorators replace the member's implicit framework conventions:
//!
//! - Rule A, [`create_class_decorator`]: class-level properties such as
//!   `tagName` become call-style class decorators.
//! - Rule B, [`create_call_expression_decorators`]: computed properties and
//!   wrapped methods become a call-style decorator followed by one decorator
//!   per chained modifier.
//! - Rule C, [`create_identifier_decorators`]: bare markers like `@action`.
//! - Rule D, [`create_binding_decorators`]: class-name and attribute bindings.
//!
//! [`create_instance_prop_decorators`] dispatches each of a member's
//! [`DecoratorName`]s to its rule, and [`with_decorators`] attaches the result
//! at the writer boundary.
//!
//! Every function here is pure and total. Nothing is mutated, nothing fails;
//! names that cannot be classified simply contribute no decorator.

pub mod options;
pub use options::{DEFAULT_MARKER, SynthesisOptions};

pub mod name;
pub use name::DecoratorName;

pub mod descriptor;
pub use descriptor::{ClassLevelProperty, MemberDescriptor, Modifier};

pub mod error;
pub use error::DescriptorError;

pub mod rules;
pub use rules::{
    create_binding_decorators, create_call_expression_decorators, create_class_decorator,
    create_identifier_decorators,
};

pub mod dispatch;
pub use dispatch::create_instance_prop_decorators;

pub mod class_decorators;
pub use class_decorators::{create_class_decorators, create_classic_decorator};

pub mod compose;
pub use compose::with_decorators;
