//! 声明式的 token → 分组映射表
//!
//! [`RuleSet`] 是纯数据：独立类名的精确匹配表（`block`、`italic`）
//! 加上有序的前缀规则列表（`p-*`、`text-*`）。
//! 新增分类只需修改规则表，冲突解析逻辑保持不变。

use crate::error::RuleSetError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tailmerge_tw_parse::ArbitraryValue;

/// `prefix-` 之后允许的值形状
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValueMatcher {
    /// 任意非空值
    #[default]
    Any,
    /// 没有值：utility 恰好等于前缀（`border`、`grow`）
    Bare,
    /// 固定关键字之一（`lg`、`center`）
    Keywords { values: Vec<String> },
    /// 非负数字（`2`、`0.5`）
    Number,
    /// 整数分数（`1/2`）
    Fraction,
    /// 任意 `[...]` 或 `(...)` 值
    Arbitrary,
    /// 内容为 CSS 长度的任意值（`[13px]`、`[length:var(--x)]`）
    ArbitraryLength,
    /// 内容为无单位数字的任意值（`[1.5]`）
    ArbitraryNumber,
    /// 内容为图片的任意值（`[url(/a.svg)]`、`[image:var(--x)]`）
    ArbitraryImage,
    /// 任一内部 matcher 匹配即匹配
    AnyOf { of: Vec<ValueMatcher> },
}

impl ValueMatcher {
    /// utility 与前缀完全相同时 `value` 为 `None`
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (ValueMatcher::Bare, None) => true,
            (ValueMatcher::AnyOf { of }, value) => of.iter().any(|m| m.matches(value)),
            (_, None) => false,
            (ValueMatcher::Bare, Some(_)) => false,
            (ValueMatcher::Any, Some(v)) => !v.is_empty(),
            (ValueMatcher::Keywords { values }, Some(v)) => values.iter().any(|k| k == v),
            (ValueMatcher::Number, Some(v)) => is_number(v),
            (ValueMatcher::Fraction, Some(v)) => is_fraction(v),
            (ValueMatcher::Arbitrary, Some(v)) => ArbitraryValue::parse(v).is_some(),
            (ValueMatcher::ArbitraryLength, Some(v)) => {
                ArbitraryValue::parse(v).is_some_and(|arb| arb.is_length())
            }
            (ValueMatcher::ArbitraryNumber, Some(v)) => ArbitraryValue::parse(v)
                .is_some_and(|arb| arb.label.as_deref() == Some("number") || is_number(&arb.content)),
            (ValueMatcher::ArbitraryImage, Some(v)) => {
                ArbitraryValue::parse(v).is_some_and(|arb| arb.is_image())
            }
        }
    }

    pub fn keywords<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueMatcher::Keywords {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    fn validate(&self) -> Result<(), &'static str> {
        match self {
            ValueMatcher::Keywords { values } => {
                if values.is_empty() {
                    return Err("keyword list is empty");
                }
                if values.iter().any(|k| k.is_empty()) {
                    return Err("keyword list contains an empty keyword");
                }
                Ok(())
            }
            ValueMatcher::AnyOf { of } => {
                if of.is_empty() {
                    return Err("any-of matcher has no alternatives");
                }
                of.iter().try_for_each(ValueMatcher::validate)
            }
            _ => Ok(()),
        }
    }
}

fn is_number(v: &str) -> bool {
    v.bytes().any(|b| b.is_ascii_digit())
        && v.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && v.parse::<f64>().is_ok()
}

fn is_fraction(v: &str) -> bool {
    let is_int = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    v.split_once('/')
        .is_some_and(|(num, den)| is_int(num) && is_int(den))
}

/// `prefix` 或 `prefix-<value>` → `group`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRule {
    pub prefix: String,
    #[serde(default)]
    pub value: ValueMatcher,
    pub group: String,
}

impl GroupRule {
    pub fn new(prefix: impl Into<String>, value: ValueMatcher, group: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            value,
            group: group.into(),
        }
    }

    /// `utility`（已去掉修饰符和标记）是否属于该规则
    pub fn matches(&self, utility: &str) -> bool {
        let Some(rest) = utility.strip_prefix(self.prefix.as_str()) else {
            return false;
        };

        if rest.is_empty() {
            return self.value.matches(None);
        }

        match rest.strip_prefix('-') {
            Some(value) if !value.is_empty() => self.value.matches(Some(value)),
            _ => false,
        }
    }
}

/// 分类规则表
///
/// 查找顺序：先精确匹配 `standalone`，再按声明顺序匹配 `rules`。
/// 第一个匹配的规则生效，因此更具体的前缀必须放在前面
/// （`border-t` 在 `border` 之前）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub standalone: IndexMap<String, String>,
    #[serde(default)]
    pub rules: Vec<GroupRule>,
}

impl RuleSet {
    /// 空规则表：只有字面相同的 token 才冲突
    pub fn empty() -> Self {
        Self {
            standalone: IndexMap::new(),
            rules: Vec::new(),
        }
    }

    pub fn with_rule(
        mut self,
        prefix: impl Into<String>,
        value: ValueMatcher,
        group: impl Into<String>,
    ) -> Self {
        self.rules.push(GroupRule::new(prefix, value, group));
        self
    }

    pub fn with_standalone(mut self, class: impl Into<String>, group: impl Into<String>) -> Self {
        self.standalone.insert(class.into(), group.into());
        self
    }

    /// 把 `other` 叠加到 `self` 之上
    ///
    /// `other` 的独立类名覆盖同名条目，其前缀规则优先于已有规则匹配。
    pub fn extend(mut self, other: RuleSet) -> Self {
        self.standalone.extend(other.standalone);

        let mut rules = other.rules;
        rules.append(&mut self.rules);
        self.rules = rules;
        self
    }

    /// 裸 utility（不含修饰符、`!` 和前导 `-`）所属的分组
    pub fn classify(&self, utility: &str) -> Option<&str> {
        if let Some(group) = self.standalone.get(utility) {
            return Some(group.as_str());
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(utility))
            .map(|rule| rule.group.as_str())
    }

    pub fn len(&self) -> usize {
        self.standalone.len() + self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standalone.is_empty() && self.rules.is_empty()
    }

    /// 拒绝永远无法匹配、或会把无关 token 归为一组的条目
    pub fn validate(&self) -> Result<(), RuleSetError> {
        for (class, group) in &self.standalone {
            let reason = if class.is_empty() {
                Some("class is empty")
            } else if class.contains(char::is_whitespace) {
                Some("class contains whitespace")
            } else if group.is_empty() {
                Some("group is empty")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(RuleSetError::InvalidStandalone {
                    class: class.clone(),
                    reason,
                });
            }
        }

        for (index, rule) in self.rules.iter().enumerate() {
            let invalid = |reason| RuleSetError::InvalidRule {
                index,
                prefix: rule.prefix.clone(),
                reason,
            };

            if rule.prefix.is_empty() {
                return Err(invalid("prefix is empty"));
            }
            if rule.group.is_empty() {
                return Err(invalid("group is empty"));
            }
            rule.value.validate().map_err(invalid)?;
        }

        Ok(())
    }
}
