//! 规则模块：负责规则目录、说明表、数据模型定义
pub mod model;
pub mod catalog;
pub mod description;

// 导出核心接口
pub use self::model::{Category, DescriptionRecord, Finding, RuleDef};
pub use self::catalog::RULE_CATALOG;
pub use self::description::DescriptionResolver;
