//! 工具模块：提供通用工具函数
pub mod code_formatter;
pub mod preview;

pub use self::code_formatter::CodeFormatter;
pub use self::preview::preview_compact;
