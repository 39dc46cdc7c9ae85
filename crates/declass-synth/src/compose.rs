//! Attaching synthesized decorators at the writer boundary.

use declass_ir::{Decorated, DecoratorList, DecoratorSpec};

/// Attach `decorators` to `to`.
///
/// An empty sequence leaves `to` untouched, so a suppressed member is written
/// without any decorator syntax and an already-decorated one keeps what it had.
pub fn with_decorators<T>(mut to: Decorated<T>, decorators: Vec<DecoratorSpec>) -> Decorated<T> {
    if let Some(list) = DecoratorList::new(decorators) {
        to.decorators = Some(list);
    }
    to
}

#[cfg(test)]
#[path = "../tests/compose.rs"]
mod tests;
