//! 片段分类器：对单个片段评估全部规则，抽取并格式化匹配代码
use std::sync::Arc;
use tracing::debug;

use crate::compiler::{CompiledRule, RuleRegistry};
use crate::extractor::FragmentGuard;
use crate::rule::{DescriptionResolver, Finding};
use crate::utils::{preview_compact, CodeFormatter};

/// 日志中匹配内容的预览长度
const LOG_PREVIEW_LEN: usize = 80;

/// 片段分类器
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: Arc<RuleRegistry>,
    max_fragment_len: usize,
}

impl Classifier {
    pub fn new(registry: Arc<RuleRegistry>, max_fragment_len: usize) -> Self {
        Self {
            registry,
            max_fragment_len,
        }
    }

    /// 分类单个片段
    /// 规则之间互不排斥：每条规则独立评估，命中即产出一条结果
    pub fn classify(&self, fragment: &str) -> Vec<Finding> {
        let guard = FragmentGuard::new(self.max_fragment_len);
        let Some(text) = guard.guard(fragment) else {
            return Vec::new();
        };

        self.registry
            .rules()
            .iter()
            .filter_map(|rule| Self::match_rule(rule, text))
            .collect()
    }

    /// 单条规则匹配：取最左匹配区间 -> 格式化 -> 查询说明
    fn match_rule(rule: &CompiledRule, text: &str) -> Option<Finding> {
        let matched = rule.regex.find(text)?;
        let snippet = CodeFormatter::format(matched.as_str());
        if snippet.is_empty() {
            return None;
        }

        debug!(
            "[{}]匹配成功 | 规则: {} | 区间: {}..{} | 内容: {}",
            rule.category,
            rule.id,
            matched.start(),
            matched.end(),
            preview_compact(matched.as_str(), LOG_PREVIEW_LEN)
        );

        Some(Finding {
            category: rule.category,
            name: rule.display_name.to_string(),
            snippet,
            description: DescriptionResolver::resolve(rule.id).clone(),
        })
    }
}
