//! 结果交付模块：最近一次扫描结果的推送与拉取
pub mod message;
pub mod store;

pub use self::message::{CurrentResults, Message};
pub use self::store::{ResultsStore, ResultsSubscription};
