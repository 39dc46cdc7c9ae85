//! Per-member dispatch over decorator categories.

use declass_ir::DecoratorSpec;

use crate::descriptor::MemberDescriptor;
use crate::name::DecoratorName;
use crate::rules::{
    create_binding_decorators, create_call_expression_decorators, create_identifier_decorators,
};

/// All decorators for one instance member, in `decorator_names` order.
///
/// Each name contributes the output of its category's rule; empty or
/// whitespace-only names contribute nothing. A volatile read-only member gets no decorators from
/// any rule, and neither does a member with no usable names.
#[tracing::instrument(level = "trace", skip(member), fields(name_count = member.decorator_names.len()))]
pub fn create_instance_prop_decorators(member: &MemberDescriptor) -> Vec<DecoratorSpec> {
    if member.is_volatile_read_only {
        tracing::debug!("volatile read-only member left undecorated");
        return Vec::new();
    }

    let mut decorators = Vec::new();

    for decorator_name in &member.decorator_names {
        let name = decorator_name.as_str().trim();
        if name.is_empty() {
            continue;
        }

        let produced = match decorator_name {
            DecoratorName::Binding(_) => create_binding_decorators(name, member),
            DecoratorName::Marker(_) => create_identifier_decorators(Some(name)),
            DecoratorName::CallExpression(_) => create_call_expression_decorators(name, member),
        };

        for decorator in &produced {
            tracing::trace!(%decorator, "synthesized decorator");
        }
        decorators.extend(produced);
    }

    decorators
}

#[cfg(test)]
#[path = "../tests/dispatch.rs"]
mod tests;
