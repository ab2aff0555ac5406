use crate::types::ClassValue;

/// 将 class value 展开为有序的 token 列表
///
/// 规则：
/// - 字符串按空白切分
/// - 列表深度优先、从左到右展开
/// - 开关表按插入顺序输出启用的键
/// - 省略值不输出任何内容
///
/// token 借用自 `values`，此处不做去重。
pub fn normalize_classes(values: &[ClassValue]) -> Vec<&str> {
    let mut tokens = Vec::new();
    for value in values {
        collect_tokens(value, &mut tokens);
    }
    tokens
}

fn collect_tokens<'a>(value: &'a ClassValue, tokens: &mut Vec<&'a str>) {
    match value {
        ClassValue::Str(s) => tokens.extend(s.split_whitespace()),
        ClassValue::Omitted => {}
        ClassValue::List(items) => {
            for item in items {
                collect_tokens(item, tokens);
            }
        }
        ClassValue::Toggles(toggles) => {
            for (name, _) in toggles.iter().filter(|(_, enabled)| **enabled) {
                tokens.extend(name.split_whitespace());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_normalize_splits_whitespace() {
        let values = vec![ClassValue::from("  a\tb\n c  ")];
        assert_eq!(normalize_classes(&values), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_drops_omitted() {
        let values = vec![
            ClassValue::from(None::<&str>),
            ClassValue::from(false),
            ClassValue::from(""),
            ClassValue::from("a"),
        ];
        assert_eq!(normalize_classes(&values), vec!["a"]);
    }

    #[test]
    fn test_normalize_nested_depth_first() {
        let values = vec![
            ClassValue::from("a"),
            ClassValue::List(vec![
                ClassValue::from("b"),
                ClassValue::List(vec![ClassValue::from("c d"), ClassValue::Omitted]),
                ClassValue::from("e"),
            ]),
            ClassValue::from("f"),
        ];
        assert_eq!(normalize_classes(&values), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_normalize_toggles_keep_insertion_order() {
        let mut toggles = IndexMap::new();
        toggles.insert("z", true);
        toggles.insert("hidden", false);
        toggles.insert("a b", true);

        let values = vec![ClassValue::from(toggles)];
        assert_eq!(normalize_classes(&values), vec!["z", "a", "b"]);
    }

    #[test]
    fn test_normalize_keeps_duplicates() {
        let values = vec![ClassValue::from("a a"), ClassValue::from("a")];
        assert_eq!(normalize_classes(&values), vec!["a", "a", "a"]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_classes(&[]).is_empty());
    }
}
