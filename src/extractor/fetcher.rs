//! 外部脚本拉取
//! 每个 script src 独立并发拉取，单个失败/超时只丢弃该片段

use std::time::Duration;
use reqwest::Client;
use tokio::task::JoinSet;
use tracing::{debug, warn};
use url::Url;

use crate::error::AlgoResult;

/// 外部脚本拉取器
#[derive(Debug, Clone)]
pub struct ScriptFetcher {
    client: Client,
}

impl ScriptFetcher {
    /// 创建拉取器（timeout 单位：秒，作用于每个请求）
    pub fn new(timeout: u64) -> AlgoResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;
        Ok(Self { client })
    }

    /// 解析脚本地址（相对地址需要页面地址作为基准）
    pub fn resolve(base_url: Option<&Url>, src: &str) -> AlgoResult<Url> {
        match base_url {
            Some(base) => Ok(base.join(src)?),
            None => Ok(Url::parse(src)?),
        }
    }

    /// 拉取单个脚本文本
    pub async fn fetch(&self, url: Url) -> AlgoResult<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// 并发拉取全部脚本，等待所有请求结束后返回
    /// 入参：(序号, src) 列表；出参：(序号, 解析后URL, 文本)，按序号升序
    pub async fn fetch_all(
        &self,
        base_url: Option<&Url>,
        srcs: Vec<(usize, String)>,
    ) -> Vec<(usize, String, String)> {
        let mut set = JoinSet::new();

        for (position, src) in srcs {
            let url = match Self::resolve(base_url, &src) {
                Ok(url) => url,
                Err(e) => {
                    warn!("无法解析外部脚本地址：{}，错误：{}", src, e);
                    continue;
                }
            };

            let fetcher = self.clone();
            set.spawn(async move {
                let url_str = url.to_string();
                let result = fetcher.fetch(url).await;
                (position, url_str, result)
            });
        }

        let mut fetched = Vec::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((position, url, Ok(text))) => {
                    debug!("外部脚本拉取成功：{}，{} 字节", url, text.len());
                    fetched.push((position, url, text));
                }
                Ok((_, url, Err(e))) => {
                    warn!("无法加载外部脚本：{}，错误：{}", url, e);
                }
                Err(e) => {
                    warn!("外部脚本拉取任务异常：{}", e);
                }
            }
        }

        fetched.sort_by_key(|(position, _, _)| *position);
        fetched
    }
}
