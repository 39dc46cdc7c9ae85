//! Synthesis rules
//!
//! One function per decorator category. Each returns the decorators for a
//! single name, in the order they must be stacked on the member.
//!
//! ```javascript
//! // legacy
//! fullName: computed('firstName', 'lastName', function () {}).readOnly(),
//! isActive: false,          // classNameBindings: ['isActive:is-active']
//! save() {},                // inside `actions: {}`
//!
//! // synthesized
//! @computed('firstName', 'lastName')
//! @readOnly
//! @className('is-active')
//! @action
//! ```

use declass_ir::{DecoratorSpec, Expr};

use crate::descriptor::{ClassLevelProperty, MemberDescriptor};
use crate::options::DEFAULT_MARKER;

/// Rule A: class decorator from a class-body property.
///
/// An array value is spread into positional arguments
/// (`classNames: ['a', 'b']` becomes `@classNames('a', 'b')`); any other value
/// is the sole argument.
pub fn create_class_decorator(decorator_name: &str, prop: &ClassLevelProperty) -> DecoratorSpec {
    let arguments = match prop.value.array_elements() {
        Some(elements) => elements.to_vec(),
        None => vec![prop.value.clone()],
    };
    DecoratorSpec::call(decorator_name, arguments)
}

/// Rule B: decorators for computed properties and wrapped methods.
///
/// Emits `@name(args)` followed by one decorator per modifier. A trailing
/// implementation argument is left out; the writer turns it into the member
/// body. Volatile read-only members get nothing.
pub fn create_call_expression_decorators(
    decorator_name: &str,
    member: &MemberDescriptor,
) -> Vec<DecoratorSpec> {
    if member.is_volatile_read_only {
        tracing::debug!(
            decorator = decorator_name,
            "volatile read-only member left undecorated"
        );
        return Vec::new();
    }

    let mut decorators = Vec::with_capacity(1 + member.modifiers.len());
    decorators.push(DecoratorSpec::call(
        decorator_name,
        member.decorator_args().to_vec(),
    ));

    for modifier in &member.modifiers {
        if modifier.args.is_empty() {
            decorators.push(DecoratorSpec::identifier(&modifier.property));
        } else {
            decorators.push(DecoratorSpec::call(&modifier.property, modifier.args.clone()));
        }
    }
    decorators
}

/// Rule C: a bare identifier decorator, `@action` when no name is given.
pub fn create_identifier_decorators(identifier: Option<&str>) -> Vec<DecoratorSpec> {
    vec![DecoratorSpec::identifier(identifier.unwrap_or(DEFAULT_MARKER))]
}

/// Rule D: decorators for `classNameBindings` and `attributeBindings` entries.
///
/// With a non-empty `prop_list` the names become string arguments
/// (`@attribute('data-id')`); otherwise the binding applies to the member as a
/// whole and the decorator is bare.
pub fn create_binding_decorators(
    decorator_name: &str,
    member: &MemberDescriptor,
) -> Vec<DecoratorSpec> {
    match member.prop_list.as_deref() {
        Some(props) if !props.is_empty() => {
            let arguments = props.iter().map(|prop| Expr::string(prop.as_str())).collect();
            vec![DecoratorSpec::call(decorator_name, arguments)]
        }
        _ => vec![DecoratorSpec::identifier(decorator_name)],
    }
}

#[cfg(test)]
#[path = "../tests/rules.rs"]
mod tests;
