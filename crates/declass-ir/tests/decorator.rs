use super::*;

#[test]
fn test_identifier_vs_empty_call() {
    let bare = DecoratorSpec::identifier("action");
    let called = DecoratorSpec::call("tracked", vec![]);

    assert!(!bare.is_call_style());
    assert!(called.is_call_style());
    assert!(bare.arguments().is_empty());
    assert!(called.arguments().is_empty());
    assert_ne!(bare, DecoratorSpec::call("action", vec![]));
}

#[test]
fn test_call_arguments_in_order() {
    let spec = DecoratorSpec::call("computed", vec![Expr::string("a"), Expr::string("b")]);
    assert_eq!(spec.name(), "computed");
    assert_eq!(spec.arguments(), &[Expr::string("a"), Expr::string("b")]);
}

#[test]
fn test_decorator_list_rejects_empty() {
    assert!(DecoratorList::new(vec![]).is_none());

    let list = DecoratorList::new(vec![
        DecoratorSpec::call("computed", vec![]),
        DecoratorSpec::identifier("readOnly"),
    ])
    .expect("non-empty list");
    assert_eq!(list.len(), 2);
    assert_eq!(list.first().name(), "computed");
    let names: Vec<&str> = list.iter().map(DecoratorSpec::name).collect();
    assert_eq!(names, ["computed", "readOnly"]);
}

#[test]
fn test_decorated_bare_member() {
    let member = Decorated::bare("fullName");
    assert!(!member.is_decorated());
    assert!(member.decorators().is_empty());
    assert_eq!(member.into_parts(), ("fullName", None));
}

#[test]
fn test_serialize_spec_shapes() {
    let bare = serde_json::to_value(DecoratorSpec::identifier("action")).expect("serializable");
    assert_eq!(bare, serde_json::json!({ "name": "action", "arguments": null }));

    let called = serde_json::to_value(DecoratorSpec::call("tracked", vec![])).expect("serializable");
    assert_eq!(called, serde_json::json!({ "name": "tracked", "arguments": [] }));
}
