//! 结果交换的消息格式
//! 以 `type` 字段区分消息类型，结果列表沿用扁平的序列化形态

use serde::{Deserialize, Serialize};

use crate::detector::ScanResult;

/// 消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    /// 扫描方上报一次新的扫描结果
    AlgorithmsDetected { algorithms: ScanResult },
    /// 状态持有方向订阅者推送的最新结果（仅出站）
    UpdateAlgorithms { algorithms: ScanResult },
    /// 拉取当前结果
    GetAlgorithms,
}

/// `GET_ALGORITHMS` 的应答，尚无扫描结果时为 null
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentResults {
    pub algorithms: Option<ScanResult>,
}
