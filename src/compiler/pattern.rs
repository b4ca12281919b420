//! 编译后规则模型
//! 正则编译后的结构，进程内只读共享

use regex::Regex;

use crate::rule::{Category, RuleDef};

/// 编译后的单条规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub id: &'static str,
    pub category: Category,
    pub display_name: &'static str,
    pub regex: Regex,
}

impl CompiledRule {
    pub fn new(def: &RuleDef, regex: Regex) -> Self {
        Self {
            id: def.id,
            category: def.category,
            display_name: def.display_name,
            regex,
        }
    }
}

/// 编译后的规则库
/// 规则按分类评估顺序排列，同一分类内保持目录顺序
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<CompiledRule>,
}

impl RuleRegistry {
    pub(crate) fn from_rules(rules: Vec<CompiledRule>) -> Self {
        Self { rules }
    }

    /// 全部规则（评估顺序）
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// 按ID查找规则
    pub fn get(&self, id: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// 指定分类下的规则
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CompiledRule> + '_ {
        self.rules.iter().filter(move |rule| rule.category == category)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
