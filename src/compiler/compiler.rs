//! 规则编译器核心
//! 仅负责将规则目录编译为可执行的正则，并在启动期完成校验

use std::collections::{HashMap, HashSet};
use std::time::Instant;
use regex::RegexBuilder;
use tracing::debug;

use super::pattern::{CompiledRule, RuleRegistry};
use crate::rule::{Category, RuleDef};
use crate::error::{AlgoResult, AlgoScanError};

/// 单条规则编译后的程序大小上限
const RULE_SIZE_LIMIT: usize = 4 << 20;
/// 单条规则惰性DFA缓存上限
const RULE_DFA_SIZE_LIMIT: usize = 2 << 20;

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译规则目录
    /// 失败条件：ID重复、正则为空、正则语法错误或超出大小上限
    pub fn compile(catalog: &[RuleDef]) -> AlgoResult<RuleRegistry> {
        let start = Instant::now();
        let mut seen_ids = HashSet::with_capacity(catalog.len());
        let mut compiled = Vec::with_capacity(catalog.len());

        for def in catalog {
            if !seen_ids.insert(def.id) {
                return Err(AlgoScanError::DuplicateRuleId(def.id.to_string()));
            }
            compiled.push(Self::compile_rule(def)?);
        }

        // 按分类评估顺序稳定排序，同分类内保持目录顺序
        compiled.sort_by_key(|rule| rule.category);

        let mut compile_stats: HashMap<Category, usize> = HashMap::new();
        for rule in &compiled {
            *compile_stats.entry(rule.category).or_default() += 1;
        }

        debug!("✅ 规则编译完成，总耗时{:?}，规则数{}", start.elapsed(), compiled.len());
        for category in Category::ALL {
            debug!(
                "📊 编译统计：{} {}条",
                category,
                compile_stats.get(&category).copied().unwrap_or(0)
            );
        }

        Ok(RuleRegistry::from_rules(compiled))
    }

    /// 编译单条规则（统一忽略大小写，限制程序体积）
    fn compile_rule(def: &RuleDef) -> AlgoResult<CompiledRule> {
        if def.pattern.trim().is_empty() {
            return Err(AlgoScanError::EmptyRule(def.id.to_string()));
        }

        let regex = RegexBuilder::new(def.pattern)
            .case_insensitive(true)
            .size_limit(RULE_SIZE_LIMIT)
            .dfa_size_limit(RULE_DFA_SIZE_LIMIT)
            .build()?;

        Ok(CompiledRule::new(def, regex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RULE_CATALOG;

    #[test]
    fn test_builtin_catalog_compiles() {
        let registry = RuleCompiler::compile(RULE_CATALOG).unwrap();
        assert_eq!(registry.len(), RULE_CATALOG.len());
        for category in Category::ALL {
            assert!(registry.by_category(category).count() > 0, "分类无规则：{}", category);
        }
    }

    #[test]
    fn test_registry_is_ordered_by_category() {
        let registry = RuleCompiler::compile(RULE_CATALOG).unwrap();
        let categories: Vec<Category> = registry.rules().iter().map(|rule| rule.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(registry.rules()[0].id, "two_pointers");
    }

    #[test]
    fn test_duplicate_rule_id_rejected() {
        let catalog = [
            RuleDef::new("dup", Category::Sorting, "a", r"foo"),
            RuleDef::new("dup", Category::Search, "b", r"bar"),
        ];
        let err = RuleCompiler::compile(&catalog).unwrap_err();
        assert!(matches!(err, AlgoScanError::DuplicateRuleId(id) if id == "dup"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let catalog = [RuleDef::new("broken", Category::Sorting, "broken", r"function\s+(")];
        let err = RuleCompiler::compile(&catalog).unwrap_err();
        assert!(matches!(err, AlgoScanError::RegexCompileError(_)));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let catalog = [RuleDef::new("empty", Category::Sorting, "empty", "  ")];
        let err = RuleCompiler::compile(&catalog).unwrap_err();
        assert!(matches!(err, AlgoScanError::EmptyRule(_)));
    }

    #[test]
    fn test_rules_are_case_insensitive() {
        let registry = RuleCompiler::compile(RULE_CATALOG).unwrap();
        let rule = registry.get("quick_sort").unwrap();
        assert!(rule.regex.is_match("FUNCTION QUICKSORT(a) { let PIVOT = a[0]; }"));
    }
}
