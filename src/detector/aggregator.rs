//! 检测结果聚合
//! 按片段顺序、规则评估顺序追加结果，不做去重；分组视图按首次出现顺序生成

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::rule::{Category, Finding};

/// 一次扫描的完整结果
/// 序列化为扁平的结果列表，分组仅是展示侧的派生视图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResult {
    findings: Vec<Finding>,
}

/// 分组中的单条结果，index 为其在扁平列表中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedFinding<'a> {
    pub index: usize,
    pub finding: &'a Finding,
}

/// 按分类分组的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<GroupedFinding<'a>>,
}

impl ScanResult {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// 扁平结果列表
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// 按稳定序号取回完整记录
    pub fn get(&self, index: usize) -> Option<&Finding> {
        self.findings.get(index)
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// 分组视图：分类按首次出现顺序，组内保持原顺序
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for (index, finding) in self.findings.iter().enumerate() {
            let item = GroupedFinding { index, finding };
            match groups.iter_mut().find(|group| group.category == finding.category) {
                Some(group) => group.items.push(item),
                None => groups.push(CategoryGroup {
                    category: finding.category,
                    items: vec![item],
                }),
            }
        }
        groups
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.findings.iter().map(|finding| finding.to_string()).collect();
        write!(f, "检测结果: [{}]", names.join(", "))
    }
}

/// 结果聚合器（单次扫描内有效）
#[derive(Debug, Default)]
pub struct Aggregator {
    findings: Vec<Finding>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个片段产出的全部结果
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn finish(self) -> ScanResult {
        ScanResult::new(self.findings)
    }
}
