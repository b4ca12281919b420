//! 全局配置管理,存储所有可配置项

/// 扫描配置
#[derive(Debug, Clone)]
pub struct ScanConfig {
    // 单个片段最大长度（字节），超出部分在匹配前截断
    pub max_fragment_len: usize,
    // 是否拉取外部脚本（script src）
    pub fetch_external_scripts: bool,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 是否启用详细日志
    pub verbose: bool,
}

impl ScanConfig {
    /// 默认片段长度上限（512KB）
    pub const DEFAULT_MAX_FRAGMENT_LEN: usize = 512 * 1024;
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_fragment_len: Self::DEFAULT_MAX_FRAGMENT_LEN,
            fetch_external_scripts: true,
            http_timeout: 30,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> ScanConfig {
        ScanConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ScanConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_fragment_len(mut self, len: usize) -> Self {
        self.config.max_fragment_len = len;
        self
    }

    pub fn fetch_external_scripts(mut self, fetch: bool) -> Self {
        self.config.fetch_external_scripts = fetch;
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> ScanConfig {
        self.config
    }
}
