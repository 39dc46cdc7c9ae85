use super::*;

#[test]
fn test_default_tables() {
    let options = SynthesisOptions::default();
    assert!(options.is_binding("className"));
    assert!(options.is_binding("attribute"));
    assert!(options.is_marker("action"));
    assert!(options.is_marker("off"));
    assert!(options.is_marker("unobserves"));
    assert!(!options.is_marker("computed"));
    assert!(options.is_class_decorator_prop("tagName"));
    assert!(options.is_class_decorator_prop("classNames"));
    assert!(!options.is_class_decorator_prop("layout"));
    assert_eq!(options.classic_decorator, "classic");
}

#[test]
fn test_partial_json_keeps_defaults() {
    let options = SynthesisOptions::from_json(r#"{ "markerDecorators": ["dropTask"] }"#)
        .expect("valid options");
    assert!(options.is_marker("dropTask"));
    assert!(!options.is_marker("action"));
    assert!(options.is_binding("className"));
    assert_eq!(options.classic_decorator, "classic");
}

#[test]
fn test_malformed_json() {
    let result = SynthesisOptions::from_json(r#"{ "markerDecorators": "action" }"#);
    assert!(matches!(result, Err(DescriptorError::Json(_))));
}

#[test]
fn test_builder_extends_tables() {
    let options = SynthesisOptions::default()
        .with_binding_decorator("style")
        .with_marker_decorator("restartableTask");
    assert!(options.is_binding("style"));
    assert!(options.is_marker("restartableTask"));
    assert!(options.is_binding("className"));
}
