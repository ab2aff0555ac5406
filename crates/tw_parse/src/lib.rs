pub mod parser;
pub mod types;

// 重新导出主要类型
pub use parser::{parse_class, ParseError};
pub use types::{ArbitraryValue, Modifier, ParsedClass};
