//! 代码片段格式化工具
//! 轻量级排版：折叠空白后在花括号与分号处重新断行，不改变代码语义

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static OPEN_BRACE_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{ ").unwrap());
static CLOSE_BRACE_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\} ").unwrap());
static SEMICOLON_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"; ").unwrap());
static OPEN_BRACE_TIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\S)").unwrap());
static CLOSE_BRACE_TIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\S)\}").unwrap());

/// 代码格式化工具
pub struct CodeFormatter;

impl CodeFormatter {
    /// 格式化匹配到的代码片段
    ///
    /// 步骤（顺序固定）：
    /// 1. 去除首尾空白，连续空白折叠为单个空格
    /// 2. `{ ` 后断行缩进，`} ` 后断行，`; ` 后断行缩进
    /// 3. 紧贴内容的 `{` / `}` 补一个空格
    pub fn format(code: &str) -> String {
        let collapsed = WHITESPACE_RUN.replace_all(code.trim(), " ");
        let step = OPEN_BRACE_SPACE.replace_all(&collapsed, "{\n  ");
        let step = CLOSE_BRACE_SPACE.replace_all(&step, "}\n");
        let step = SEMICOLON_SPACE.replace_all(&step, ";\n  ");
        let step = OPEN_BRACE_TIGHT.replace_all(&step, "{ ${1}");
        CLOSE_BRACE_TIGHT.replace_all(&step, "${1} }").into_owned()
    }
}
