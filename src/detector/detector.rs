//! 检测器核心：遍历片段、逐片段分类并聚合结果
use std::sync::Arc;
use tracing::{debug, info};

use super::aggregator::{Aggregator, ScanResult};
use super::classifier::Classifier;
use super::global::{default_registry, get_global_detector};
use crate::compiler::RuleRegistry;
use crate::config::ScanConfig;
use crate::error::AlgoResult;
use crate::extractor::FragmentSource;

/// 算法检测器
#[derive(Debug, Clone)]
pub struct AlgorithmDetector {
    classifier: Classifier,
    config: ScanConfig,
}

impl AlgorithmDetector {
    /// 创建检测器（共享全局内置规则库）
    pub fn new(config: ScanConfig) -> AlgoResult<Self> {
        let registry = default_registry()?;
        Ok(Self::with_registry(registry, config))
    }

    /// 使用指定规则库创建检测器
    pub fn with_registry(registry: Arc<RuleRegistry>, config: ScanConfig) -> Self {
        let classifier = Classifier::new(registry, config.max_fragment_len);
        Self { classifier, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// 核心检测接口：按片段顺序分类，结果按片段顺序、规则顺序拼接
    pub fn scan<I>(&self, fragments: I) -> ScanResult
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut aggregator = Aggregator::new();
        let mut fragment_count = 0usize;

        for fragment in fragments {
            let findings = self.classifier.classify(fragment.as_ref());
            debug!("片段#{} 命中{}条规则", fragment_count, findings.len());
            aggregator.extend(findings);
            fragment_count += 1;
        }

        let result = aggregator.finish();
        if self.config.verbose {
            info!("{}", result);
        }
        info!(
            "扫描完成：片段{}个，检测结果{}条，分类{}个",
            fragment_count,
            result.len(),
            result.groups().len()
        );
        result
    }

    /// 从片段来源收集后扫描
    pub async fn scan_source<S>(&self, source: &S) -> AlgoResult<ScanResult>
    where
        S: FragmentSource + Sync,
    {
        let fragments = source.provide_fragments().await?;
        Ok(self.scan(fragments.iter()))
    }
}

/// 简化接口：使用全局检测器扫描片段
pub fn detect_algorithms<I>(fragments: I) -> AlgoResult<ScanResult>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let detector = get_global_detector()?;
    Ok(detector.scan(fragments))
}

/// 简化接口：使用全局检测器扫描片段来源
pub async fn detect_algorithms_from_source<S>(source: &S) -> AlgoResult<ScanResult>
where
    S: FragmentSource + Sync,
{
    let detector = get_global_detector()?;
    detector.scan_source(source).await
}
