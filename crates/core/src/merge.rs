use crate::error::RuleSetError;
use crate::loader::load_rules_from_json;
use crate::normalize::normalize_classes;
use crate::resolve::resolve_conflicts;
use crate::rules::RuleSet;
use crate::types::ClassValue;
use std::sync::OnceLock;

/// 绑定一张规则表的 class 合并器
///
/// 调用之间不保存状态，可在线程间自由共享同一实例。
#[derive(Debug, Clone, Default)]
pub struct Merger {
    rules: RuleSet,
}

impl Merger {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// 内置规则表，叠加 `custom`
    pub fn with_rules(custom: RuleSet) -> Self {
        Self::new(RuleSet::default().extend(custom))
    }

    /// 内置规则表，叠加 JSON 规则表
    pub fn from_json(json_str: &str) -> Result<Self, RuleSetError> {
        load_rules_from_json(json_str).map(Self::with_rules)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// 展开、解决冲突，再用单个空格拼接保留的 token
    pub fn merge(&self, values: &[ClassValue]) -> String {
        self.merge_tokens(&normalize_classes(values))
    }

    /// 合并已展开的 token 列表
    pub fn merge_tokens(&self, tokens: &[&str]) -> String {
        resolve_conflicts(tokens, &self.rules).join(" ")
    }

    /// 等价于合并 `[base, override_classes]`
    pub fn apply_override(&self, base: &str, override_classes: Option<&str>) -> String {
        let tokens: Vec<&str> = base
            .split_whitespace()
            .chain(override_classes.into_iter().flat_map(str::split_whitespace))
            .collect();
        self.merge_tokens(&tokens)
    }
}

fn default_merger() -> &'static Merger {
    static DEFAULT: OnceLock<Merger> = OnceLock::new();
    DEFAULT.get_or_init(Merger::default)
}

/// 使用内置规则表合并 class value
///
/// ```
/// use tailmerge_core::{merge, ClassValue};
///
/// let merged = merge(&[ClassValue::from("p-2 text-red-500"), ClassValue::from("p-4")]);
/// assert_eq!(merged, "text-red-500 p-4");
/// ```
pub fn merge(values: &[ClassValue]) -> String {
    default_merger().merge(values)
}

/// 将调用方传入的 class 覆盖到组件自身的 class 之上
///
/// ```
/// use tailmerge_core::apply_override;
///
/// assert_eq!(apply_override("px-2 py-2", Some("px-4")), "py-2 px-4");
/// assert_eq!(apply_override("a a b", None), "a b");
/// ```
pub fn apply_override(base: &str, override_classes: Option<&str>) -> String {
    default_merger().apply_override(base, override_classes)
}

/// 可变参数版本的 [`merge`]：每个参数都经过 `ClassValue::from` 转换
///
/// ```
/// use tailmerge_core::{classes, merge};
///
/// let is_active = false;
/// assert_eq!(merge!("a b", classes!["c", is_active, "d"]), "a b c d");
/// assert_eq!(merge!(), "");
/// ```
#[macro_export]
macro_rules! merge {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::merge::merge(&[$($crate::ClassValue::from($value)),+])
    };
}

/// 用不同类型的元素构造嵌套的 [`ClassValue::List`]
#[macro_export]
macro_rules! classes {
    ($($value:expr),* $(,)?) => {
        $crate::ClassValue::List(::std::vec![$($crate::ClassValue::from($value)),*])
    };
}
