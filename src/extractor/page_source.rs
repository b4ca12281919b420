//! 页面片段来源
//! HTML -> 片段列表：脚本（内联与外部按文档顺序交错）在前，代码块在后

use tracing::debug;
use url::Url;

use super::fetcher::ScriptFetcher;
use super::fragment::{Fragment, FragmentOrigin, FragmentSource};
use super::html_extractor::{HtmlExtractor, ScriptEntry};
use crate::config::ScanConfig;
use crate::error::AlgoResult;

/// 页面片段来源
#[derive(Debug, Clone)]
pub struct PageSource {
    html: String,
    base_url: Option<Url>,
    config: ScanConfig,
}

impl PageSource {
    pub fn new(html: impl Into<String>, base_url: Option<Url>, config: ScanConfig) -> Self {
        Self {
            html: html.into(),
            base_url,
            config,
        }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// 收集页面全部片段
    pub async fn collect(&self) -> AlgoResult<Vec<Fragment>> {
        let page = HtmlExtractor::extract(&self.html);
        debug!(
            "页面提取完成：脚本{}个（外部{}个），代码块{}个",
            page.scripts.len(),
            page.script_srcs().len(),
            page.code_blocks.len()
        );

        // 外部脚本并发拉取，完成后按原位置回填
        let fetched = if self.config.fetch_external_scripts {
            let srcs = page
                .scripts
                .iter()
                .enumerate()
                .filter_map(|(position, entry)| match entry {
                    ScriptEntry::External(src) => Some((position, src.clone())),
                    ScriptEntry::Inline(_) => None,
                })
                .collect::<Vec<_>>();

            if srcs.is_empty() {
                Vec::new()
            } else {
                let fetcher = ScriptFetcher::new(self.config.http_timeout)?;
                fetcher.fetch_all(self.base_url.as_ref(), srcs).await
            }
        } else {
            Vec::new()
        };
        let mut fetched = fetched.into_iter().peekable();

        let mut fragments = Vec::with_capacity(page.scripts.len() + page.code_blocks.len());
        for (position, entry) in page.scripts.into_iter().enumerate() {
            match entry {
                ScriptEntry::Inline(text) => fragments.push(Fragment::inline(text)),
                ScriptEntry::External(_) => {
                    if let Some((_, url, text)) = fetched.next_if(|(p, _, _)| *p == position) {
                        fragments.push(Fragment::new(text, FragmentOrigin::External(url)));
                    }
                }
            }
        }
        fragments.extend(page.code_blocks.into_iter().map(Fragment::code_block));

        Ok(fragments)
    }
}

impl FragmentSource for PageSource {
    async fn provide_fragments(&self) -> AlgoResult<Vec<Fragment>> {
        self.collect().await
    }
}
