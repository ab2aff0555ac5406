use js_sys::Array;
use wasm_bindgen::prelude::*;

use tailmerge_core::{load_rules_from_json, ClassValue, Merger as CoreMerger, RuleSet};

// ── JS 值转换 ────────────────────────────────────────────────

/// 把任意 JS 值转换为 class value
///
/// 数组逐个元素转换：serde 无法描述的值（函数、Symbol）只丢弃自身，
/// 不影响同一数组中的其他元素。
fn to_class_value(value: JsValue) -> ClassValue {
    if value.is_undefined() || value.is_null() {
        return ClassValue::Omitted;
    }
    if let Some(class) = value.as_string() {
        return ClassValue::Str(class);
    }
    if Array::is_array(&value) {
        return ClassValue::List(Array::from(&value).iter().map(to_class_value).collect());
    }
    // `{ [class]: boolean }` 对象、数字、布尔值
    serde_wasm_bindgen::from_value(value).unwrap_or_default()
}

fn parse_rules(rules: JsValue) -> Result<RuleSet, JsError> {
    if rules.is_undefined() || rules.is_null() {
        return Ok(RuleSet::empty());
    }

    if let Some(json) = rules.as_string() {
        return load_rules_from_json(&json)
            .map_err(|e| JsError::new(&format!("Invalid rules: {}", e)));
    }

    let rules: RuleSet = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsError::new(&format!("Invalid rules: {}", e)))?;
    rules
        .validate()
        .map_err(|e| JsError::new(&format!("Invalid rules: {}", e)))?;
    Ok(rules)
}

// ── WASM 导出 ─────────────────────────────────────────────────

/// 安装 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 使用内置规则合并 class
///
/// wasm-bindgen 导出的函数只接受固定个数的参数，多出的实参会被 JS 直接丢弃，
/// 因此 Rust 侧的可变参数 `merge(a, b, ...)` 在 JS 中写成**一个数组**：
///
/// ```js
/// merge(['a b', ['c', false, 'd']]) // "a b c d"
/// merge('p-2 p-4')                  // "p-4"
/// ```
///
/// @param values - class value：字符串、数组、`{ [class]: boolean }` 对象或假值
/// @returns 合并后的 class 字符串
#[wasm_bindgen(js_name = "merge")]
pub fn merge(values: JsValue) -> String {
    tailmerge_core::merge(&[to_class_value(values)])
}

/// 将覆盖 class 应用到基础 class 之上
///
/// @param base     - 组件自身的 class
/// @param override - 调用方传入的 class，可省略
#[wasm_bindgen(js_name = "applyOverride")]
pub fn apply_override(base: &str, override_classes: Option<String>) -> String {
    tailmerge_core::apply_override(base, override_classes.as_deref())
}

/// 在内置规则之上叠加自定义规则的 merger
#[wasm_bindgen]
pub struct Merger {
    inner: CoreMerger,
}

#[wasm_bindgen]
impl Merger {
    /// @param rules - `{ standalone, rules }` 对象或 JSON 字符串，可省略
    #[wasm_bindgen(constructor)]
    pub fn new(rules: JsValue) -> Result<Merger, JsError> {
        let custom = parse_rules(rules)?;
        Ok(Merger {
            inner: CoreMerger::with_rules(custom),
        })
    }

    /// 与导出的 `merge` 相同：多个 class value 放在一个数组里传入
    pub fn merge(&self, values: JsValue) -> String {
        self.inner.merge(&[to_class_value(values)])
    }

    #[wasm_bindgen(js_name = "applyOverride")]
    pub fn apply_override(&self, base: &str, override_classes: Option<String>) -> String {
        self.inner.apply_override(base, override_classes.as_deref())
    }
}
