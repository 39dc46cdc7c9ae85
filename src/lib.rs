//! declass: decorator synthesis for legacy class members.
//!
//! The engine lives in [`declass_synth`] and its data types in
//! [`declass_ir`]; this crate re-exports both and adds tracing setup for
//! drivers embedding the synthesizer.

pub use declass_ir as ir;
pub use declass_synth as synth;

pub use declass_ir::{Decorated, DecoratorList, DecoratorSpec, Expr};
pub use declass_synth::{
    ClassLevelProperty, DecoratorName, DescriptorError, MemberDescriptor, Modifier,
    SynthesisOptions, create_class_decorators, create_classic_decorator,
    create_instance_prop_decorators, with_decorators,
};

pub mod tracing_config;
