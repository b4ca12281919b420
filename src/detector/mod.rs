//! 检测模块：片段分类与结果聚合
pub mod global;
pub mod classifier;
pub mod aggregator;
pub mod detector;

// 导出核心接口
pub use self::global::{default_registry, init_algoscan, init_algoscan_with_config};
pub use self::classifier::Classifier;
pub use self::aggregator::{Aggregator, CategoryGroup, GroupedFinding, ScanResult};
pub use self::detector::{AlgorithmDetector, detect_algorithms, detect_algorithms_from_source};
