use crate::rules::RuleSet;
use indexmap::map::Entry;
use indexmap::IndexMap;
use tailmerge_tw_parse::parse_class;

/// token 参与冲突比较的键
///
/// 已分类的 token 在 `(variants, important, group)` 内互相覆盖，
/// 其余 token 只与完全相同的字面量冲突。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConflictKey<'r, 't> {
    Group {
        variants: String,
        important: bool,
        group: &'r str,
    },
    Literal(&'t str),
}

/// 计算单个 token 的冲突键
pub fn conflict_key<'r, 't>(rules: &'r RuleSet, token: &'t str) -> ConflictKey<'r, 't> {
    let Ok(parsed) = parse_class(token) else {
        return ConflictKey::Literal(token);
    };

    // `text-lg/7` 按 `text-lg` 分类；`w-1/2` 回退到带后缀的完整形式
    let group = rules.classify(&parsed.utility).or_else(|| {
        parsed
            .utility_with_postfix()
            .and_then(|full| rules.classify(&full))
    });

    match group {
        Some(group) => ConflictKey::Group {
            variants: parsed.modifier_key(),
            important: parsed.important,
            group,
        },
        None => ConflictKey::Literal(token),
    }
}

/// 丢弃所有被后续 token 覆盖的 token
///
/// 每个冲突键只保留最后一个 token，保留下来的 token 按最后一次出现的位置排序。
pub fn resolve_conflicts<'t>(tokens: &[&'t str], rules: &RuleSet) -> Vec<&'t str> {
    let mut survivors: IndexMap<ConflictKey<'_, 't>, &'t str> =
        IndexMap::with_capacity(tokens.len());

    // 倒序遍历：每个键第一次插入的就是胜者
    for &token in tokens.iter().rev() {
        match survivors.entry(conflict_key(rules, token)) {
            Entry::Occupied(winner) => {
                log::trace!(
                    "discarding `{}`: overridden by `{}` ({:?})",
                    token,
                    winner.get(),
                    winner.key()
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(token);
            }
        }
    }

    survivors.into_values().rev().collect()
}
