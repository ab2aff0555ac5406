use crate::error::RuleSetError;
use crate::rules::RuleSet;

/// 从 JSON 加载规则表
///
/// JSON 格式：
/// ```json
/// {
///   "standalone": { "icon-spin": "icon-animation" },
///   "rules": [
///     { "prefix": "icon", "value": { "kind": "keywords", "values": ["sm", "md", "lg"] }, "group": "icon-size" },
///     { "prefix": "icon", "group": "icon-color" }
///   ]
/// }
/// ```
///
/// `value` 缺省为 `{ "kind": "any" }`。返回前会先校验。
/// 通过 [`RuleSet::extend`] 叠加到内置规则表之上。
pub fn load_rules_from_json(json_str: &str) -> Result<RuleSet, RuleSetError> {
    let rules: RuleSet = serde_json::from_str(json_str)?;
    rules.validate()?;

    log::debug!(
        "loaded rule set: {} standalone classes, {} prefix rules",
        rules.standalone.len(),
        rules.rules.len()
    );

    Ok(rules)
}
