//! 运行：`wasm-pack test --node crates/wasm`

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use tailmerge_wasm::{apply_override, merge, Merger};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn toggles(entries: &[(&str, bool)]) -> JsValue {
    let object = Object::new();
    for (class, enabled) in entries {
        Reflect::set(&object, &JsValue::from_str(class), &JsValue::from_bool(*enabled))
            .unwrap();
    }
    object.into()
}

#[wasm_bindgen_test]
fn test_merge_array() {
    let values = Array::new();
    values.push(&JsValue::from_str("text-red-500 p-2"));
    values.push(&JsValue::FALSE);
    values.push(&JsValue::from_str("text-blue-500"));

    assert_eq!(merge(values.into()), "p-2 text-blue-500");
}

#[wasm_bindgen_test]
fn test_merge_arguments_as_one_array() {
    // merge(['a b', ['c', false, 'd']])
    let nested = Array::new();
    nested.push(&JsValue::from_str("c"));
    nested.push(&JsValue::FALSE);
    nested.push(&JsValue::from_str("d"));

    let values = Array::new();
    values.push(&JsValue::from_str("a b"));
    values.push(&nested);

    assert_eq!(merge(values.into()), "a b c d");
}

#[wasm_bindgen_test]
fn test_merge_single_string() {
    assert_eq!(merge(JsValue::from_str("a a b")), "a b");
}

#[wasm_bindgen_test]
fn test_merge_falsy() {
    assert_eq!(merge(JsValue::UNDEFINED), "");
    assert_eq!(merge(JsValue::NULL), "");
    assert_eq!(merge(JsValue::FALSE), "");
}

#[wasm_bindgen_test]
fn test_merge_toggle_object() {
    let values = Array::new();
    values.push(&JsValue::from_str("block p-2"));
    values.push(&toggles(&[("p-4", true), ("hidden", false)]));

    assert_eq!(merge(values.into()), "block p-4");
    assert_eq!(merge(toggles(&[("flex", true), ("grid", true)])), "grid");
}

#[wasm_bindgen_test]
fn test_merge_ignores_unsupported_values() {
    let values = Array::new();
    values.push(&JsValue::from_str("a"));
    values.push(&js_sys::Function::new_no_args("return 1").into());
    values.push(&JsValue::from_f64(3.0));

    assert_eq!(merge(values.into()), "a");
}

#[wasm_bindgen_test]
fn test_apply_override() {
    assert_eq!(apply_override("px-2 py-2", Some("px-4".to_string())), "py-2 px-4");
    assert_eq!(apply_override("a a b", None), "a b");
}

#[wasm_bindgen_test]
fn test_custom_merger() {
    let rules = JsValue::from_str(
        r#"{ "rules": [{ "prefix": "icon", "value": { "kind": "keywords", "values": ["sm", "lg"] }, "group": "icon-size" }] }"#,
    );
    let Ok(merger) = Merger::new(rules) else {
        panic!("valid rules were rejected");
    };

    assert_eq!(merger.apply_override("icon-sm", Some("icon-lg".to_string())), "icon-lg");

    let values = Array::new();
    values.push(&JsValue::from_str("icon-sm p-2"));
    values.push(&toggles(&[("icon-lg", true)]));
    assert_eq!(merger.merge(values.into()), "p-2 icon-lg");
}

#[wasm_bindgen_test]
fn test_custom_merger_rejects_invalid_rules() {
    assert!(Merger::new(JsValue::from_str("not json")).is_err());
}
