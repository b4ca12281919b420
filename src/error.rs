//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum AlgoScanError {
    // 规则相关错误
    #[error("规则ID重复：{0}")]
    DuplicateRuleId(String),
    #[error("规则为空：{0}")]
    EmptyRule(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 检测器相关错误
    #[error("检测器未初始化")]
    DetectorNotInitialized,

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 基础错误
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
}

// 全局Result类型
pub type AlgoResult<T> = Result<T, AlgoScanError>;
