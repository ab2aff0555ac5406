use pretty_assertions::assert_eq;
use tailmerge_core::{
    apply_override, classes, load_rules_from_json, merge, ClassValue, Merger, RuleSet,
};

fn tokens(class: &str) -> Vec<&str> {
    class.split_whitespace().collect()
}

#[test]
fn test_icon_component_override() {
    // 典型的图标根节点：基础 class 加调用方传入的 className
    let base = "inline-block h-6 w-6 shrink-0 fill-current text-gray-500";
    let result = apply_override(base, Some("h-4 w-4 text-blue-600"));

    assert_eq!(result, "inline-block shrink-0 fill-current h-4 w-4 text-blue-600");
}

#[test]
fn test_precedence_scenario() {
    let result = apply_override("text-red-500 p-2", Some("text-blue-500"));
    let result = tokens(&result);

    assert!(result.contains(&"text-blue-500"));
    assert!(result.contains(&"p-2"));
    assert!(!result.contains(&"text-red-500"));
}

#[test]
fn test_axis_scenario() {
    let result = apply_override("px-2 py-2", Some("px-4"));
    let result = tokens(&result);

    assert!(result.contains(&"px-4"));
    assert!(result.contains(&"py-2"));
    assert!(!result.contains(&"px-2"));
}

#[test]
fn test_nested_and_falsy_scenarios() {
    assert_eq!(merge!("a b", classes!["c", false, "d"]), "a b c d");
    assert_eq!(merge!(None::<&str>, false, "", "a"), "a");
    assert_eq!(merge!("a a b"), "a b");
    assert_eq!(merge!(), "");
}

#[test]
fn test_idempotence() {
    let inputs = [
        ("text-red-500 p-2 hover:p-4", "text-blue-500 p-3"),
        ("flex flex-col gap-2 rounded-md", "block rounded-lg gap-x-4"),
        ("a b a", "c b"),
    ];

    for (a, b) in inputs {
        let once = merge!(a, b);
        let twice = merge!(once.as_str());
        assert_eq!(twice, once);
    }
}

#[test]
fn test_determinism() {
    let value = classes!["p-2 m-1", classes!["text-sm", ("font-bold", true)], "p-4"];
    let first = merge(std::slice::from_ref(&value));
    let second = merge(std::slice::from_ref(&value));
    assert_eq!(first, second);
    assert_eq!(first, "m-1 text-sm font-bold p-4");
}

#[test]
fn test_inputs_not_mutated() {
    let values = vec![ClassValue::from("p-2 p-2"), ClassValue::from("p-4")];
    let snapshot = values.clone();
    let _ = merge(&values);
    assert_eq!(values, snapshot);
}

#[test]
fn test_non_conflicting_tokens_survive() {
    let base = "flex items-center p-2 rounded";
    let override_classes = "text-sm shadow hover:bg-gray-100";
    let result = apply_override(base, Some(override_classes));

    for token in tokens(base).into_iter().chain(tokens(override_classes)) {
        assert!(result.contains(token), "missing {} in {}", token, result);
    }
}

#[test]
fn test_override_keeps_sibling_properties() {
    let cases = [
        ("ring-2 ring-inset", "ring-blue-500", "ring-2 ring-inset ring-blue-500"),
        ("space-x-4 space-x-reverse", "", "space-x-4 space-x-reverse"),
        ("border-spacing-2", "border-gray-300", "border-spacing-2 border-gray-300"),
        ("bg-red-500", "bg-[url(/a.svg)]", "bg-red-500 bg-[url(/a.svg)]"),
        ("bg-red-500", "bg-opacity-50", "bg-red-500 bg-opacity-50"),
        ("text-red-500", "text-opacity-50", "text-red-500 text-opacity-50"),
    ];

    for (base, override_classes, expected) in cases {
        assert_eq!(apply_override(base, Some(override_classes)), expected);
    }
}

#[test]
fn test_json_class_values() {
    let value: ClassValue = serde_json::from_str(
        r#"["btn p-2", null, false, 3, {"p-4": true, "hidden": false}, ["text-sm", [""]]]"#,
    )
    .expect("Failed to parse class value");

    assert_eq!(merge(&[value]), "btn p-4 text-sm");
}

#[test]
fn test_custom_rules_from_json() {
    let json = r#"{
        "rules": [
            { "prefix": "icon", "value": { "kind": "keywords", "values": ["xs", "sm", "md", "lg"] }, "group": "icon-size" }
        ]
    }"#;

    let custom = load_rules_from_json(json).expect("Failed to load rules");
    let merger = Merger::with_rules(custom);

    assert_eq!(
        merger.apply_override("icon-md text-gray-500", Some("icon-lg text-white")),
        "icon-lg text-white"
    );
}

#[test]
fn test_empty_rule_set_only_dedupes() {
    let merger = Merger::new(RuleSet::empty());
    assert_eq!(merger.apply_override("p-2 a", Some("p-4 a")), "p-2 p-4 a");
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let override_classes = format!("p-{}", i);
                apply_override("p-1 m-2", Some(&override_classes))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().expect("merge thread panicked");
        assert_eq!(result, format!("m-2 p-{}", i));
    }
}
