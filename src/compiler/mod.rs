//! 编译模块：将规则目录编译为可执行的正则
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledRule, RuleRegistry};
pub use self::compiler::RuleCompiler;
