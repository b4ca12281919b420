//! 结果状态持有方
//! 保存最近一次扫描结果，支持推送（订阅）与拉取两种交付方式

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use super::message::{CurrentResults, Message};
use crate::detector::ScanResult;

/// 结果存储：唯一的状态持有方，新结果整体替换旧结果
#[derive(Debug, Clone)]
pub struct ResultsStore {
    sender: Arc<watch::Sender<Option<Arc<ScanResult>>>>,
}

impl Default for ResultsStore {
    fn default() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发布新结果并通知全部订阅者
    pub fn publish(&self, result: ScanResult) -> Arc<ScanResult> {
        let result = Arc::new(result);
        self.sender.send_replace(Some(Arc::clone(&result)));
        debug!(
            "结果已更新：{}条，订阅者{}个",
            result.len(),
            self.sender.receiver_count()
        );
        result
    }

    /// 拉取当前结果，尚未发布过时为 None
    pub fn current(&self) -> Option<Arc<ScanResult>> {
        self.sender.borrow().clone()
    }

    /// 订阅后续发布（订阅前的结果需通过 current 拉取）
    pub fn subscribe(&self) -> ResultsSubscription {
        ResultsSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// 处理入站消息，仅 `GET_ALGORITHMS` 产生应答
    pub fn handle(&self, message: Message) -> Option<CurrentResults> {
        match message {
            Message::AlgorithmsDetected { algorithms } => {
                self.publish(algorithms);
                None
            }
            Message::GetAlgorithms => Some(CurrentResults {
                algorithms: self.current().map(|result| (*result).clone()),
            }),
            Message::UpdateAlgorithms { .. } => {
                debug!("忽略入站的 UPDATE_ALGORITHMS 消息");
                None
            }
        }
    }
}

/// 结果订阅：只保证交付最新结果，订阅方处理不及时会跳过中间结果
#[derive(Debug)]
pub struct ResultsSubscription {
    receiver: watch::Receiver<Option<Arc<ScanResult>>>,
}

impl ResultsSubscription {
    /// 等待下一次发布；状态持有方全部释放后返回 None
    pub async fn next(&mut self) -> Option<Arc<ScanResult>> {
        loop {
            self.receiver.changed().await.ok()?;
            if let Some(result) = self.receiver.borrow_and_update().clone() {
                return Some(result);
            }
        }
    }

    /// 以出站消息的形式等待下一次发布
    pub async fn next_message(&mut self) -> Option<Message> {
        let result = self.next().await?;
        Some(Message::UpdateAlgorithms {
            algorithms: (*result).clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Category, DescriptionRecord, Finding};
    use std::time::Duration;

    fn result_of(names: &[&str]) -> ScanResult {
        ScanResult::new(
            names
                .iter()
                .map(|name| Finding {
                    category: Category::Sorting,
                    name: name.to_string(),
                    snippet: format!("function {}() {{ }}", name),
                    description: DescriptionRecord::new("d", "c", "o"),
                })
                .collect(),
        )
    }

    #[test]
    fn test_current_is_none_before_publish() {
        let store = ResultsStore::new();
        assert!(store.current().is_none());
        assert_eq!(
            store.handle(Message::GetAlgorithms),
            Some(CurrentResults { algorithms: None })
        );
    }

    #[test]
    fn test_publish_replaces_previous_result() {
        let store = ResultsStore::new();
        store.publish(result_of(&["quick sort"]));
        store.publish(result_of(&["bubble sort", "merge sort"]));

        let current = store.current().unwrap();
        assert_eq!(current.len(), 2);
        assert_eq!(current.findings()[0].name, "bubble sort");
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_result() {
        let store = ResultsStore::new();
        let mut subscription = store.subscribe();

        let publisher = store.clone();
        tokio::spawn(async move {
            publisher.publish(result_of(&["heap sort"]));
        });

        let received = tokio::time::timeout(Duration::from_secs(5), subscription.next())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(received.findings()[0].name, "heap sort");
    }

    #[tokio::test]
    async fn test_detected_message_pushes_update() {
        let store = ResultsStore::new();
        let mut subscription = store.subscribe();

        let reply = store.handle(Message::AlgorithmsDetected {
            algorithms: result_of(&["quick sort"]),
        });
        assert!(reply.is_none());

        let pushed = subscription.next_message().await.unwrap();
        assert_eq!(
            pushed,
            Message::UpdateAlgorithms {
                algorithms: result_of(&["quick sort"])
            }
        );

        let pulled = store.handle(Message::GetAlgorithms).unwrap();
        assert_eq!(pulled.algorithms, Some(result_of(&["quick sort"])));
    }

    #[tokio::test]
    async fn test_inbound_update_is_ignored() {
        let store = ResultsStore::new();
        let reply = store.handle(Message::UpdateAlgorithms {
            algorithms: result_of(&["quick sort"]),
        });
        assert!(reply.is_none());
        assert!(store.current().is_none());
    }

    #[tokio::test]
    async fn test_subscription_ends_when_store_dropped() {
        let store = ResultsStore::new();
        let mut subscription = store.subscribe();
        drop(store);
        assert!(subscription.next().await.is_none());
    }
}
