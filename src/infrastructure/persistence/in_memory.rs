//! 进程内消息关联缓存
//!
//! 每个机器人会话构造一份，同时注入入站解码路径（写）和门面（读）。
//! 进程生命周期内不淘汰，容量上界由外部使用方负责。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::model::MessageRecord;
use crate::domain::repository::MessageStore;
use crate::error::{IiroseError, IiroseResult};

/// 基于内存哈希表的消息关联缓存
#[derive(Default)]
pub struct InMemoryMessageStore {
    inner: Arc<RwLock<HashMap<String, MessageRecord>>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn record(&self, message: MessageRecord) -> IiroseResult<()> {
        let mut guard = self.inner.write().await;
        guard.insert(message.message_id.clone(), message);
        Ok(())
    }

    async fn lookup(&self, message_id: &str) -> IiroseResult<MessageRecord> {
        let guard = self.inner.read().await;
        guard
            .get(message_id)
            .cloned()
            .ok_or_else(|| IiroseError::MessageNotFound(message_id.to_string()))
    }
}
