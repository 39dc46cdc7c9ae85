//! Whole-class decorators.
//!
//! ```javascript
//! // legacy
//! export default Component.extend({
//!   tagName: 'span',
//!   classNames: ['badge', 'badge-primary'],
//! });
//!
//! // synthesized
//! @classic
//! @tagName('span')
//! @classNames('badge', 'badge-primary')
//! export default class Badge extends Component {}
//! ```

use declass_ir::DecoratorSpec;

use crate::descriptor::ClassLevelProperty;
use crate::options::SynthesisOptions;
use crate::rules::create_class_decorator;

/// Apply Rule A to every class-decorator property, in property order.
///
/// Properties not listed in `options.class_decorator_props` stay in the class
/// body and produce nothing here.
pub fn create_class_decorators(
    props: &[ClassLevelProperty],
    options: &SynthesisOptions,
) -> Vec<DecoratorSpec> {
    props
        .iter()
        .filter(|prop| options.is_class_decorator_prop(&prop.name))
        .map(|prop| create_class_decorator(&prop.name, prop))
        .collect()
}

/// The identifier-style marker placed on every converted class.
pub fn create_classic_decorator(options: &SynthesisOptions) -> DecoratorSpec {
    DecoratorSpec::identifier(options.classic_decorator.as_str())
}

#[cfg(test)]
#[path = "../tests/class_decorators.rs"]
mod tests;
