use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;

/// class 列表中的单个输入项
///
/// 字符串、列表、开关表以外的值一律视为 [`ClassValue::Omitted`]，不产生任何 class。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassValue {
    /// 一个或多个以空白分隔的 token
    Str(String),
    /// 假值或不支持的输入
    #[default]
    Omitted,
    /// 嵌套值，从左到右展开
    List(Vec<ClassValue>),
    /// 开关表：值为 true 的键才会输出
    Toggles(IndexMap<String, bool>),
}

impl ClassValue {
    pub fn is_omitted(&self) -> bool {
        matches!(self, ClassValue::Omitted)
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Str(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Str(s)
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::Str(s.clone())
    }
}

/// `true` 本身不携带类名，因此两个布尔值都视为省略
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::Omitted
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ClassValue::Omitted)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// `("active", is_active)` 形式的条件 class
impl<S: Into<String>> From<(S, bool)> for ClassValue {
    fn from((name, enabled): (S, bool)) -> Self {
        if enabled {
            ClassValue::Str(name.into())
        } else {
            ClassValue::Omitted
        }
    }
}

impl<S: Into<String>> From<IndexMap<S, bool>> for ClassValue {
    fn from(map: IndexMap<S, bool>) -> Self {
        ClassValue::Toggles(map.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<S: Into<String>> From<BTreeMap<S, bool>> for ClassValue {
    fn from(map: BTreeMap<S, bool>) -> Self {
        ClassValue::Toggles(map.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ── 反序列化 ─────────────────────────────────────────────────

/// 接受任意自描述的值。不支持的形状转为 `Omitted` 而不是报错，
/// 与 JS 中拼接 class 列表的行为一致。
impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ClassValueVisitor)
    }
}

struct ClassValueVisitor;

impl<'de> Visitor<'de> for ClassValueVisitor {
    type Value = ClassValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a class string, list, or map of class toggles")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ClassValue, E> {
        Ok(ClassValue::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ClassValue, E> {
        Ok(ClassValue::Str(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<ClassValue, E> {
        Ok(ClassValue::Omitted)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<ClassValue, E> {
        Ok(ClassValue::Omitted)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<ClassValue, E> {
        Ok(ClassValue::Omitted)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<ClassValue, E> {
        Ok(ClassValue::Omitted)
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<ClassValue, E> {
        Ok(ClassValue::Omitted)
    }

    fn visit_unit<E: de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Omitted)
    }

    fn visit_none<E: de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Omitted)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ClassValue, D::Error> {
        ClassValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ClassValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<ClassValue>()? {
            items.push(item);
        }
        Ok(ClassValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ClassValue, A::Error> {
        let mut toggles = IndexMap::new();
        while let Some((key, Truthy(enabled))) = map.next_entry::<String, Truthy>()? {
            toggles.insert(key, enabled);
        }
        Ok(ClassValue::Toggles(toggles))
    }
}

/// 开关表中值的 JS 真值语义
struct Truthy(bool);

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TruthyVisitor)
    }
}

struct TruthyVisitor;

impl<'de> Visitor<'de> for TruthyVisitor {
    type Value = Truthy;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Truthy, E> {
        Ok(Truthy(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Truthy, E> {
        Ok(Truthy(v != 0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Truthy, E> {
        Ok(Truthy(v != 0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Truthy, E> {
        Ok(Truthy(v != 0.0 && !v.is_nan()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Truthy, E> {
        Ok(Truthy(!v.is_empty()))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Truthy, E> {
        Ok(Truthy(!v.is_empty()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Truthy, E> {
        Ok(Truthy(false))
    }

    fn visit_none<E: de::Error>(self) -> Result<Truthy, E> {
        Ok(Truthy(false))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Truthy, D::Error> {
        Truthy::deserialize(deserializer)
    }

    // 数组和对象恒为真
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Truthy, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Truthy(true))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Truthy, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Truthy(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(ClassValue::from("p-4"), ClassValue::Str("p-4".to_string()));
        assert_eq!(ClassValue::from(false), ClassValue::Omitted);
        assert_eq!(ClassValue::from(true), ClassValue::Omitted);
        assert_eq!(ClassValue::from(None::<&str>), ClassValue::Omitted);
        assert_eq!(ClassValue::from(Some("a")), ClassValue::Str("a".to_string()));
        assert_eq!(ClassValue::from(("active", false)), ClassValue::Omitted);
        assert_eq!(
            ClassValue::from(["a", "b"]),
            ClassValue::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_deserialize_json_shapes() {
        let value: ClassValue =
            serde_json::from_str(r#"["a b", null, false, 0, ["c"], {"d": true, "e": 0, "f": "yes"}]"#)
                .unwrap();

        let mut toggles = IndexMap::new();
        toggles.insert("d".to_string(), true);
        toggles.insert("e".to_string(), false);
        toggles.insert("f".to_string(), true);

        assert_eq!(
            value,
            ClassValue::List(vec![
                ClassValue::Str("a b".to_string()),
                ClassValue::Omitted,
                ClassValue::Omitted,
                ClassValue::Omitted,
                ClassValue::List(vec![ClassValue::Str("c".to_string())]),
                ClassValue::Toggles(toggles),
            ])
        );
    }

    #[test]
    fn test_deserialize_nested_truthy_values() {
        let value: ClassValue = serde_json::from_str(r#"{"a": [], "b": {}, "c": null, "d": ""}"#).unwrap();

        let ClassValue::Toggles(toggles) = value else {
            panic!("Expected toggles");
        };
        assert_eq!(toggles.get("a"), Some(&true));
        assert_eq!(toggles.get("b"), Some(&true));
        assert_eq!(toggles.get("c"), Some(&false));
        assert_eq!(toggles.get("d"), Some(&false));
    }
}
