use super::*;
use crate::descriptor::Modifier;
use crate::options::SynthesisOptions;
use declass_ir::Expr;

fn member(names: &[&str]) -> MemberDescriptor {
    MemberDescriptor::from_raw_names(names, &SynthesisOptions::default())
}

#[test]
fn test_computed_with_read_only() {
    let member = member(&["computed"])
        .with_call_args(vec![
            Expr::string("a"),
            Expr::string("b"),
            Expr::func(vec![], "{}"),
        ])
        .with_modifier(Modifier::bare("readOnly"));

    assert_eq!(
        create_instance_prop_decorators(&member),
        vec![
            DecoratorSpec::call("computed", vec![Expr::string("a"), Expr::string("b")]),
            DecoratorSpec::identifier("readOnly"),
        ]
    );
}

#[test]
fn test_action_marker() {
    assert_eq!(
        create_instance_prop_decorators(&member(&["action"])),
        vec![DecoratorSpec::identifier("action")]
    );
}

#[test]
fn test_marker_ignores_call_args_and_modifiers() {
    let member = member(&["off"])
        .with_call_args(vec![Expr::string("didInsertElement")])
        .with_modifier(Modifier::bare("readOnly"));
    assert_eq!(
        create_instance_prop_decorators(&member),
        vec![DecoratorSpec::identifier("off")]
    );
}

#[test]
fn test_class_name_binding() {
    assert_eq!(
        create_instance_prop_decorators(&member(&["className"]).with_prop_list(Vec::<String>::new())),
        vec![DecoratorSpec::identifier("className")]
    );
    assert_eq!(
        create_instance_prop_decorators(&member(&["className"]).with_prop_list(["is-active"])),
        vec![DecoratorSpec::call("className", vec![Expr::string("is-active")])]
    );
}

#[test]
fn test_stacked_names_keep_declared_order() {
    let member = member(&["attribute", "computed", "unobserves"])
        .with_prop_list(["data-id"])
        .with_call_args(vec![Expr::string("id")])
        .with_modifier(Modifier::bare("readOnly"));

    let names: Vec<String> = create_instance_prop_decorators(&member)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        names,
        [
            "@attribute(\"data-id\")",
            "@computed(\"id\")",
            "@readOnly",
            "@unobserves",
        ]
    );
}

#[test]
fn test_empty_names_contribute_nothing() {
    let member = MemberDescriptor::new(vec![
        DecoratorName::CallExpression(String::new()),
        DecoratorName::Marker(String::new()),
        DecoratorName::Marker("  ".to_string()),
        DecoratorName::CallExpression("\t".to_string()),
        DecoratorName::Binding(" \n".to_string()),
    ]);
    assert!(create_instance_prop_decorators(&member).is_empty());
    assert!(create_instance_prop_decorators(&MemberDescriptor::default()).is_empty());
}

#[test]
fn test_padded_names_render_trimmed() {
    let member = MemberDescriptor::new(vec![
        DecoratorName::Marker(" off ".to_string()),
        DecoratorName::CallExpression("\tcomputed".to_string()),
    ])
    .with_call_args(vec![Expr::string("a")]);
    assert_eq!(
        create_instance_prop_decorators(&member),
        vec![
            DecoratorSpec::identifier("off"),
            DecoratorSpec::call("computed", vec![Expr::string("a")]),
        ]
    );
}

#[test]
fn test_volatile_read_only_suppresses_every_rule() {
    let member = member(&["className", "computed", "action"])
        .with_prop_list(["is-active"])
        .with_call_args(vec![Expr::string("a")])
        .with_modifier(Modifier::bare("readOnly"))
        .volatile_read_only();
    assert!(create_instance_prop_decorators(&member).is_empty());
}
