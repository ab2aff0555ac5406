use crate::types::{Modifier, ParsedClass};

/// 把 utility class 拆解为结构化的各个部分
///
/// 支持的格式：
/// - 简单类：`p-4`, `bg-red-500`, `flex`
/// - 修饰符：`hover:bg-blue-500`, `md:hover:p-4`, `[&>*]:p-2`
/// - 负值：`-m-4`, `md:-top-1`
/// - 任意值：`w-[13px]`, `bg-[url(a:b)]`, `w-(--my-width)`
/// - 后缀：`bg-blue-500/50`, `w-1/2`, `text-lg/7`
/// - 重要性：`p-4!`（v4）和 `!p-4`（v3）
///
/// # 示例
///
/// ```
/// use tailmerge_tw_parse::parse_class;
///
/// let parsed = parse_class("md:hover:bg-blue-500/50!").unwrap();
/// assert_eq!(parsed.modifiers.len(), 2);
/// assert_eq!(parsed.utility, "bg-blue-500");
/// assert_eq!(parsed.postfix, Some("50".to_string()));
/// assert!(parsed.important);
/// ```
pub fn parse_class(input: &str) -> Result<ParsedClass, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parser = Parser::new(input);
    parser.parse()
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    EmptyInput,
    UnmatchedBracket,
    EmptyModifier,
    MissingUtility,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Empty input"),
            ParseError::UnmatchedBracket => write!(f, "Unmatched bracket in class"),
            ParseError::EmptyModifier => write!(f, "Empty variant modifier"),
            ParseError::MissingUtility => write!(f, "Missing utility after modifiers"),
        }
    }
}

impl std::error::Error for ParseError {}

struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input }
    }

    fn parse(&self) -> Result<ParsedClass, ParseError> {
        // 1. 解析修饰符：除最后一段外的所有顶层 `:` 分段
        let segments = split_top_level(self.input, ':')?;
        let Some((base, modifier_parts)) = segments.split_last() else {
            return Err(ParseError::MissingUtility);
        };

        let modifiers = modifier_parts
            .iter()
            .map(|part| {
                if part.is_empty() {
                    Err(ParseError::EmptyModifier)
                } else {
                    Ok(Modifier::from_str(part))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        // 2. 解析重要性（`!` 可在任意一侧）
        let (body, important) = if let Some(rest) = base.strip_prefix('!') {
            (rest, true)
        } else if let Some(rest) = base.strip_suffix('!') {
            (rest, true)
        } else {
            (*base, false)
        };

        // 3. 解析负值标记
        let (body, negative) = match body.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (body, false),
        };

        // 4. 解析后缀（最后一个顶层 `/` 之后）
        let (utility, postfix) = match last_top_level(body, '/') {
            Some(pos) if pos > 0 && pos + 1 < body.len() => {
                (&body[..pos], Some(body[pos + 1..].to_string()))
            }
            _ => (body, None),
        };

        if utility.is_empty() {
            return Err(ParseError::MissingUtility);
        }

        Ok(ParsedClass {
            modifiers,
            important,
            negative,
            utility: utility.to_string(),
            postfix,
        })
    }
}

/// 按 `sep` 切分，忽略 `[...]` 和 `(...)` 内部的分隔符
fn split_top_level(input: &str, sep: char) -> Result<Vec<&str>, ParseError> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, ch) in input.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => {
                depth = depth.checked_sub(1).ok_or(ParseError::UnmatchedBracket)?;
            }
            c if c == sep && depth == 0 => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::UnmatchedBracket);
    }

    parts.push(&input[start..]);
    Ok(parts)
}

/// 括号外最后一个 `needle` 的字节偏移
fn last_top_level(input: &str, needle: char) -> Option<usize> {
    let mut depth: usize = 0;
    let mut found = None;

    for (i, ch) in input.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            c if c == needle && depth == 0 => found = Some(i),
            _ => {}
        }
    }

    found
}
