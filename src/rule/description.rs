//! 算法说明查询
//! 规则ID -> 说明记录的固定映射表，未登记的ID统一回退到默认记录

use std::collections::HashMap;
use once_cell::sync::Lazy;

use super::model::DescriptionRecord;

/// 说明表（规则ID为键，与规则目录共用同一套ID）
static DESCRIPTION_TABLE: Lazy<HashMap<&'static str, DescriptionRecord>> = Lazy::new(|| {
    let entries = [
        (
            "quick_sort",
            "An efficient comparison sort built on divide and conquer",
            "O(n log n) average",
            "Pick the pivot with median-of-three to avoid the quadratic worst case",
        ),
        (
            "binary_search",
            "Locates a target value inside a sorted array by halving the range",
            "O(log n)",
            "Interpolation search can narrow the range faster on uniform data",
        ),
        (
            "md5",
            "A simplified implementation of the MD5 message digest",
            "O(n)",
            "Precomputed lookup tables speed up the round function",
        ),
        (
            "depth_first_search",
            "Depth-first traversal of a graph",
            "O(V + E)",
            "An explicit stack instead of recursion bounds the call depth",
        ),
        (
            "floyd_warshall",
            "Finds shortest paths between every pair of vertices in a weighted graph",
            "O(V³)",
            "Blocked matrix updates improve cache behaviour",
        ),
        (
            "two_pointers",
            "Walks an array or string with two indices moving toward each other",
            "O(n)",
            "Tighten the pointer movement rules to skip redundant comparisons",
        ),
        (
            "sliding_window",
            "Maintains a window that slides across an array or string",
            "O(n)",
            "Grow and shrink the window greedily instead of recomputing it",
        ),
        (
            "dp",
            "Solves a problem by combining solutions of overlapping subproblems",
            "varies by problem",
            "Rolling arrays compress the table to reduce memory",
        ),
        (
            "kmp",
            "Linear-time string matching with a failure table",
            "O(m + n)",
            "Build the next array incrementally to avoid recomputation",
        ),
    ];

    entries
        .into_iter()
        .map(|(id, summary, complexity, hint)| {
            (id, DescriptionRecord::new(summary, complexity, hint))
        })
        .collect()
});

/// 未登记规则的默认说明
static DEFAULT_DESCRIPTION: Lazy<DescriptionRecord> = Lazy::new(|| {
    DescriptionRecord::new("to be documented", "to be analyzed", "to be documented")
});

/// 说明查询器
pub struct DescriptionResolver;

impl DescriptionResolver {
    /// 查询规则说明，永不失败：未登记的ID返回默认记录
    pub fn resolve(rule_id: &str) -> &'static DescriptionRecord {
        DESCRIPTION_TABLE
            .get(rule_id)
            .unwrap_or_else(Self::default_record)
    }

    /// 默认说明记录
    pub fn default_record() -> &'static DescriptionRecord {
        &DEFAULT_DESCRIPTION
    }

    /// 是否存在登记的说明
    pub fn is_registered(rule_id: &str) -> bool {
        DESCRIPTION_TABLE.contains_key(rule_id)
    }
}
