//! 全局单例管理：内置规则库与全局检测器
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::info;

use super::detector::AlgorithmDetector;
use crate::compiler::{RuleCompiler, RuleRegistry};
use crate::config::{ConfigManager, ScanConfig};
use crate::error::{AlgoResult, AlgoScanError};
use crate::rule::RULE_CATALOG;

/// 内置规则库（进程内只编译一次）
static DEFAULT_REGISTRY: OnceCell<Arc<RuleRegistry>> = OnceCell::new();

/// 全局检测器实例
static GLOBAL_DETECTOR: OnceCell<AlgorithmDetector> = OnceCell::new();

/// 获取内置规则库，首次调用时编译
pub fn default_registry() -> AlgoResult<Arc<RuleRegistry>> {
    DEFAULT_REGISTRY
        .get_or_try_init(|| {
            let registry = RuleCompiler::compile(RULE_CATALOG)?;
            info!("内置规则库编译完成：{}条规则", registry.len());
            Ok(Arc::new(registry))
        })
        .cloned()
}

/// 初始化全局检测器（默认配置）
pub fn init_algoscan() -> AlgoResult<()> {
    init_algoscan_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局检测器，重复初始化时保留首次配置
pub fn init_algoscan_with_config(config: ScanConfig) -> AlgoResult<()> {
    GLOBAL_DETECTOR.get_or_try_init(|| AlgorithmDetector::new(config))?;
    Ok(())
}

/// 获取全局检测器
pub(crate) fn get_global_detector() -> AlgoResult<&'static AlgorithmDetector> {
    GLOBAL_DETECTOR.get().ok_or(AlgoScanError::DetectorNotInitialized)
}
