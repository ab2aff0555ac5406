use tailmerge_tw_parse::{parse_class, ParseError};
use serde::Deserialize;

#[derive(Deserialize)]
struct ShapeCase {
    class: String,
    utility: String,
    #[serde(default)]
    modifiers: Vec<String>,
    #[serde(default)]
    negative: bool,
    #[serde(default)]
    important: bool,
    #[serde(default)]
    postfix: Option<String>,
}

const CASES: &str = r#"[
    { "class": "p-4", "utility": "p-4" },
    { "class": "text-red-500", "utility": "text-red-500" },
    { "class": "hover:bg-blue-500", "utility": "bg-blue-500", "modifiers": ["hover"] },
    { "class": "md:hover:bg-blue-500/50!", "utility": "bg-blue-500", "modifiers": ["md", "hover"], "important": true, "postfix": "50" },
    { "class": "!font-bold", "utility": "font-bold", "important": true },
    { "class": "lg:-translate-x-1/2", "utility": "translate-x-1", "modifiers": ["lg"], "negative": true, "postfix": "2" },
    { "class": "dark:[&>svg]:fill-current", "utility": "fill-current", "modifiers": ["dark", "[&>svg]"] },
    { "class": "stroke-[1.5]", "utility": "stroke-[1.5]" },
    { "class": "bg-[url(/icons/a.svg)]", "utility": "bg-[url(/icons/a.svg)]" },
    { "class": "w-(--icon-size)", "utility": "w-(--icon-size)" },
    { "class": "data-[state=open]:rotate-180", "utility": "rotate-180", "modifiers": ["data-[state=open]"] }
]"#;

#[test]
fn test_class_shapes() {
    let cases: Vec<ShapeCase> = serde_json::from_str(CASES).expect("Failed to parse cases");

    let mut failed = Vec::new();

    for case in &cases {
        match parse_class(&case.class) {
            Ok(parsed) => {
                let modifiers: Vec<String> =
                    parsed.modifiers.iter().map(|m| m.to_string()).collect();
                if parsed.utility != case.utility
                    || modifiers != case.modifiers
                    || parsed.negative != case.negative
                    || parsed.important != case.important
                    || parsed.postfix != case.postfix
                {
                    failed.push(format!("  ✗ {}: got {:?}", case.class, parsed));
                }
            }
            Err(err) => failed.push(format!("  ✗ {}: parse error - {}", case.class, err)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nFailed to parse {} classes:", failed.len());
        for msg in &failed {
            eprintln!("{}", msg);
        }
        panic!("{} classes parsed incorrectly", failed.len());
    }
}

#[test]
fn test_malformed_classes_are_errors() {
    let cases = vec![
        ("", ParseError::EmptyInput),
        ("w-[13px", ParseError::UnmatchedBracket),
        ("hover:", ParseError::MissingUtility),
        (":p-4", ParseError::EmptyModifier),
    ];

    for (class, expected) in cases {
        assert_eq!(parse_class(class), Err(expected), "class: {:?}", class);
    }
}

#[test]
fn test_parsed_class_serializes() {
    let parsed = parse_class("md:p-4!").unwrap();
    let json = serde_json::to_value(&parsed).unwrap();

    assert_eq!(json["utility"], "p-4");
    assert_eq!(json["important"], true);
    assert_eq!(json["modifiers"][0]["Responsive"], "md");
}
