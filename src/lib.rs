//! rsalgoscan - 网页源码算法与数据结构启发式识别工具

// 导出全局错误类型
pub use self::error::{AlgoScanError, AlgoResult};

// 导出配置模块
pub use self::config::{ScanConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    Category, DescriptionRecord, Finding, RuleDef, RULE_CATALOG, DescriptionResolver
};

// 导出提取模块核心接口
pub use self::extractor::{
    Fragment, FragmentOrigin, FragmentSource, StaticFragments, HtmlExtractor, PageSource
};

// 导出工具模块核心接口
pub use self::utils::CodeFormatter;

// 导出编译模块核心接口
pub use self::compiler::{CompiledRule, RuleRegistry, RuleCompiler};

// 导出检测模块核心接口（含全局检测器的简化接口）
pub use self::detector::{
    AlgorithmDetector,
    Classifier,
    ScanResult,
    CategoryGroup,
    GroupedFinding,
    default_registry,
    init_algoscan,
    init_algoscan_with_config,
    detect_algorithms,
    detect_algorithms_from_source,
};

// 导出结果交付模块
pub use self::transport::{CurrentResults, Message, ResultsStore, ResultsSubscription};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod extractor;
pub mod utils;
pub mod compiler;
pub mod detector;
pub mod transport;
