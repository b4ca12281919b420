//! 规则数据模型定义
//! 仅存储规则数据与检测结果，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 算法分类（封闭集合，声明顺序即评估顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "array algorithms")]
    Array,
    #[serde(rename = "string algorithms")]
    String,
    #[serde(rename = "dynamic programming")]
    DynamicProgramming,
    #[serde(rename = "tree algorithms")]
    Tree,
    #[serde(rename = "graph algorithms")]
    Graph,
    #[serde(rename = "sorting algorithms")]
    Sorting,
    #[serde(rename = "search algorithms")]
    Search,
    #[serde(rename = "data structures")]
    DataStructure,
    #[serde(rename = "cryptography algorithms")]
    Cryptography,
}

impl Category {
    /// 全部分类，按评估顺序排列
    pub const ALL: [Category; 9] = [
        Category::Array,
        Category::String,
        Category::DynamicProgramming,
        Category::Tree,
        Category::Graph,
        Category::Sorting,
        Category::Search,
        Category::DataStructure,
        Category::Cryptography,
    ];

    /// 展示名称（与序列化名称一致）
    pub fn label(&self) -> &'static str {
        match self {
            Category::Array => "array algorithms",
            Category::String => "string algorithms",
            Category::DynamicProgramming => "dynamic programming",
            Category::Tree => "tree algorithms",
            Category::Graph => "graph algorithms",
            Category::Sorting => "sorting algorithms",
            Category::Search => "search algorithms",
            Category::DataStructure => "data structures",
            Category::Cryptography => "cryptography algorithms",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 规则定义（未编译的原始规则）
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// 全局唯一的规则ID（描述表以此为键）
    pub id: &'static str,
    pub category: Category,
    pub display_name: &'static str,
    /// 原始正则，编译时统一开启忽略大小写
    pub pattern: &'static str,
}

impl RuleDef {
    pub const fn new(
        id: &'static str,
        category: Category,
        display_name: &'static str,
        pattern: &'static str,
    ) -> Self {
        Self {
            id,
            category,
            display_name,
            pattern,
        }
    }
}

/// 算法说明记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionRecord {
    #[serde(rename = "description")]
    pub summary: String,
    pub complexity: String,
    #[serde(rename = "optimization")]
    pub optimization_hint: String,
}

impl DescriptionRecord {
    pub fn new(summary: &str, complexity: &str, optimization_hint: &str) -> Self {
        Self {
            summary: summary.to_string(),
            complexity: complexity.to_string(),
            optimization_hint: optimization_hint.to_string(),
        }
    }
}

/// 单条检测结果
/// 序列化格式：{ category, name, code, description: { description, complexity, optimization } }
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    pub name: String,
    #[serde(rename = "code")]
    pub snippet: String,
    pub description: DescriptionRecord,
}

// ======== 为 Finding 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.name)
    }
}
