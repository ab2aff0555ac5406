use serde::{Deserialize, Serialize};

/// 单个 utility class 的结构化表示
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedClass {
    /// 按源码顺序排列的修饰符（`md:hover:` → `[md, hover]`）
    pub modifiers: Vec<Modifier>,

    /// 重要性标记，`!p-4` 或 `p-4!`
    pub important: bool,

    /// 负值标记（`-m-4`）
    pub negative: bool,

    /// 去掉修饰符、标记和后缀后的主体（`bg-red-500`）
    pub utility: String,

    /// 最后一个顶层 `/` 之后的文本（`bg-red-500/50` 中的 `50`）
    pub postfix: Option<String>,
}

/// 修饰符类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// 响应式断点和容器查询 (sm, md, @lg, max-md)
    Responsive(String),

    /// 伪类 (hover, focus, first, aria-*)
    PseudoClass(String),

    /// 伪元素 (before, after, placeholder)
    PseudoElement(String),

    /// 环境/状态变体 (dark, group-hover, peer-focus, print)
    State(String),

    /// 任意选择器变体（`[&>*]`），位置有意义
    Arbitrary(String),

    /// 其他，例如插件自定义的变体
    Custom(String),
}

/// 任意值：`[...]` 或 v4 的 `(...)` 变量引用
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArbitraryValue {
    /// 含分隔符的原始值
    pub raw: String,

    /// 可选的类型标签（`[length:var(--gap)]` 中的 `length`）
    pub label: Option<String>,

    /// 去掉分隔符和标签后的值
    pub content: String,
}

impl ParsedClass {
    pub fn new(utility: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            important: false,
            negative: false,
            utility: utility.into(),
            postfix: None,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = Some(postfix.into());
        self
    }

    /// 重新拼上后缀的主体（`w-1/2`）
    pub fn utility_with_postfix(&self) -> Option<String> {
        self.postfix
            .as_ref()
            .map(|postfix| format!("{}/{}", self.utility, postfix))
    }

    /// 用于冲突检测的规范化修饰符键
    ///
    /// 普通修饰符与顺序无关（`hover:focus:` == `focus:hover:`），
    /// 因此位置敏感修饰符之间的每一段都会排序；
    /// 位置敏感修饰符（见 [`Modifier::is_positional`]）保持原位。
    ///
    /// ```
    /// use tailmerge_tw_parse::parse_class;
    ///
    /// let a = parse_class("hover:focus:p-4").unwrap();
    /// let b = parse_class("focus:hover:p-2").unwrap();
    /// assert_eq!(a.modifier_key(), b.modifier_key());
    /// ```
    pub fn modifier_key(&self) -> String {
        if self.modifiers.is_empty() {
            return String::new();
        }

        let mut ordered: Vec<String> = Vec::with_capacity(self.modifiers.len());
        let mut section: Vec<String> = Vec::new();

        for modifier in &self.modifiers {
            if modifier.is_positional() {
                section.sort();
                ordered.append(&mut section);
                ordered.push(modifier.to_string());
            } else {
                section.push(modifier.to_string());
            }
        }
        section.sort();
        ordered.append(&mut section);

        let mut key = ordered.join(":");
        key.push(':');
        key
    }

    /// 规范化的类名字符串（v4 尾部 `!` 形式）
    pub fn to_normalized_string(&self) -> String {
        let mut result = String::new();

        for modifier in &self.modifiers {
            result.push_str(&modifier.to_string());
            result.push(':');
        }

        if self.negative {
            result.push('-');
        }

        result.push_str(&self.utility);

        if let Some(postfix) = &self.postfix {
            result.push('/');
            result.push_str(postfix);
        }

        if self.important {
            result.push('!');
        }

        result
    }
}

impl Modifier {
    pub fn is_responsive(&self) -> bool {
        matches!(self, Modifier::Responsive(_))
    }

    pub fn is_pseudo_class(&self) -> bool {
        matches!(self, Modifier::PseudoClass(_))
    }

    pub fn is_arbitrary(&self) -> bool {
        matches!(self, Modifier::Arbitrary(_))
    }

    /// 顺序会改变生成选择器的修饰符
    ///
    /// `hover:before:` 作用于悬停元素的伪元素，而 `before:hover:` 要求伪元素本身被悬停。
    /// 任意选择器和 `*`/`**` 子元素变体同理。
    pub fn is_positional(&self) -> bool {
        match self {
            Modifier::Arbitrary(_) | Modifier::PseudoElement(_) => true,
            Modifier::PseudoClass(s) => s == "*" || s == "**",
            Modifier::Responsive(_) | Modifier::State(_) | Modifier::Custom(_) => false,
        }
    }

    /// 根据文本推断修饰符类型
    pub fn from_str(s: &str) -> Self {
        if s.starts_with('[') {
            return Modifier::Arbitrary(s.to_string());
        }

        if matches!(
            s,
            "sm" | "md" | "lg" | "xl" | "2xl" | "max-sm" | "max-md" | "max-lg" | "max-xl" | "max-2xl"
        ) || ((s.starts_with("min-") || s.starts_with("max-")) && s.contains('['))
            || s.starts_with('@')
        {
            return Modifier::Responsive(s.to_string());
        }

        if s.starts_with("aria-")
            || ((s.starts_with("has-")
                || s.starts_with("not-")
                || s.starts_with("nth-")
                || s.starts_with("data-"))
                && s.contains('['))
        {
            return Modifier::PseudoClass(s.to_string());
        }

        if matches!(
            s,
            "hover"
                | "focus"
                | "active"
                | "visited"
                | "target"
                | "focus-within"
                | "focus-visible"
                | "disabled"
                | "enabled"
                | "checked"
                | "indeterminate"
                | "required"
                | "invalid"
                | "placeholder-shown"
                | "read-only"
                | "empty"
                | "first"
                | "last"
                | "only"
                | "odd"
                | "even"
                | "open"
                | "*"
                | "**"
        ) {
            return Modifier::PseudoClass(s.to_string());
        }

        if matches!(
            s,
            "before"
                | "after"
                | "placeholder"
                | "file"
                | "marker"
                | "selection"
                | "first-line"
                | "first-letter"
                | "backdrop"
        ) {
            return Modifier::PseudoElement(s.to_string());
        }

        if s.starts_with("group-")
            || s.starts_with("peer-")
            || matches!(
                s,
                "dark"
                    | "light"
                    | "motion-safe"
                    | "motion-reduce"
                    | "contrast-more"
                    | "contrast-less"
                    | "portrait"
                    | "landscape"
                    | "print"
                    | "forced-colors"
                    | "rtl"
                    | "ltr"
            )
        {
            return Modifier::State(s.to_string());
        }

        Modifier::Custom(s.to_string())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Modifier::Responsive(s)
            | Modifier::PseudoClass(s)
            | Modifier::PseudoElement(s)
            | Modifier::State(s)
            | Modifier::Arbitrary(s)
            | Modifier::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl ArbitraryValue {
    /// 解析 `[13px]`、`[length:var(--x)]` 或 `(--my-width)` 这样的值
    ///
    /// 未被成对分隔符完整包裹时返回 `None`。
    pub fn parse(raw: &str) -> Option<Self> {
        let inner = raw
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .or_else(|| raw.strip_prefix('(').and_then(|s| s.strip_suffix(')')))?;

        if inner.is_empty() {
            return None;
        }

        // `--var` 引用只有在类型标签之后才可能出现 `:`
        let (label, content) = match inner.split_once(':') {
            Some((label, content))
                if !label.is_empty()
                    && !label.starts_with("--")
                    && label.chars().all(|c| c.is_ascii_lowercase() || c == '-') =>
            {
                (Some(label.to_string()), content.to_string())
            }
            _ => (None, inner.to_string()),
        };

        Some(Self {
            raw: raw.to_string(),
            label,
            content,
        })
    }

    /// 内容是否为 CSS 图片（`url(...)`、渐变、`image-set(...)`）
    pub fn is_image(&self) -> bool {
        if let Some(label) = &self.label {
            return matches!(label.as_str(), "image" | "url");
        }

        let content = self.content.as_str();
        content.starts_with("url(")
            || content.starts_with("image(")
            || content.starts_with("image-set(")
            || content.starts_with("cross-fade(")
            || content.contains("gradient(")
    }

    /// 内容是否为 CSS 长度（`13px`、`2.5rem`、`calc(...)`）
    pub fn is_length(&self) -> bool {
        if let Some(label) = &self.label {
            return matches!(label.as_str(), "length" | "size" | "percentage");
        }

        let content = self.content.as_str();
        if content == "0" || content.starts_with("calc(") || content.starts_with("min(")
            || content.starts_with("max(") || content.starts_with("clamp(")
        {
            return true;
        }

        let number_end = content
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(content.len());
        if number_end == 0 {
            return false;
        }

        let unit = &content[number_end..];
        matches!(
            unit,
            "px" | "rem" | "em" | "%" | "vh" | "vw" | "dvh" | "dvw" | "svh" | "lvh" | "ch" | "ex"
                | "pt" | "pc" | "in" | "cm" | "mm" | "cqw" | "cqh"
        )
    }
}
