use thiserror::Error;

/// 规则表配置错误
///
/// 合并本身不会失败，只有加载或校验自定义规则表时才会出现。
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("invalid rule set JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid rule #{index} (prefix `{prefix}`): {reason}")]
    InvalidRule {
        index: usize,
        prefix: String,
        reason: &'static str,
    },

    #[error("invalid standalone class `{class}`: {reason}")]
    InvalidStandalone { class: String, reason: &'static str },
}
