//! 扫描片段模型与片段来源接口

use std::future::Future;

use crate::error::AlgoResult;

/// 片段来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentOrigin {
    /// 内联 `<script>` 内容
    Inline,
    /// 外部脚本（已拉取），保存解析后的URL
    External(String),
    /// 代码块元素（pre/code 等）的文本内容
    CodeBlock,
}

/// 扫描片段：一段待分类的源码文本，分类完成即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub origin: FragmentOrigin,
}

impl Fragment {
    pub fn new(text: impl Into<String>, origin: FragmentOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    pub fn inline(text: impl Into<String>) -> Self {
        Self::new(text, FragmentOrigin::Inline)
    }

    pub fn code_block(text: impl Into<String>) -> Self {
        Self::new(text, FragmentOrigin::CodeBlock)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// 片段来源接口：在一次扫描前收集全部片段
/// 实现方负责容忍单个外部资源的失败，不得因此中断整体收集
pub trait FragmentSource {
    fn provide_fragments(&self) -> impl Future<Output = AlgoResult<Vec<Fragment>>> + Send;
}

/// 预先准备好的片段集合
#[derive(Debug, Clone, Default)]
pub struct StaticFragments {
    fragments: Vec<Fragment>,
}

impl StaticFragments {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }
}

impl FragmentSource for StaticFragments {
    async fn provide_fragments(&self) -> AlgoResult<Vec<Fragment>> {
        Ok(self.fragments.clone())
    }
}
