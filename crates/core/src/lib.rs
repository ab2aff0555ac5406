//! 原子化 class 列表的冲突合并
//!
//! class value 依次经过三个阶段：
//! 1. [`normalize`]：把字符串、列表、开关表展开为 token
//! 2. [`resolve`]：同一分组中被后者覆盖的 token 全部丢弃
//! 3. [`merge`]：把保留下来的 token 拼回 class 字符串
//!
//! ```
//! use tailmerge_core::apply_override;
//!
//! let class = apply_override("text-red-500 p-2", Some("text-blue-500"));
//! assert_eq!(class, "p-2 text-blue-500");
//! ```

pub mod defaults;
pub mod error;
pub mod loader;
pub mod merge;
pub mod normalize;
pub mod resolve;
pub mod rules;
pub mod types;

// 重新导出常用类型
pub use error::RuleSetError;
pub use loader::load_rules_from_json;
pub use merge::{apply_override, merge, Merger};
pub use normalize::normalize_classes;
pub use resolve::{conflict_key, resolve_conflicts, ConflictKey};
pub use rules::{GroupRule, RuleSet, ValueMatcher};
pub use types::ClassValue;
