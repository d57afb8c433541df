//! 端口定义
//!
//! 门面与基础设施之间的 trait 边界，全部以 trait 对象注入使用。

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::model::{ChannelTarget, Fragment, MessageRecord, SendOptions};
use crate::error::IiroseResult;

/// 消息关联缓存接口（需要作为 trait 对象使用，保留 async-trait）
///
/// 写入方是外部入站解码路径，读取方是机器人门面；
/// 单次 `record` / `lookup` 调用必须原子可见，不同标识之间无顺序约束。
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// 记录一条入站消息，按记录自身的 `message_id` 键入，后写覆盖先写
    async fn record(&self, message: MessageRecord) -> IiroseResult<()>;

    /// 按消息标识取回最近一次观测值；不存在时返回 `MessageNotFound`
    async fn lookup(&self, message_id: &str) -> IiroseResult<MessageRecord>;
}

/// 套接字抽象接口
///
/// 由外部连接层提供：在一条已建立、已认证的连接上把一段字节作为
/// 单个帧发出。连接生命周期（重连、心跳、鉴权）不在本层。
/// 并发写入的串行化由实现方负责。
#[async_trait]
pub trait FrameSink: Send + Sync {
    /// 发送一个完整帧，不等待协议应答
    async fn send(&self, frame: Bytes) -> IiroseResult<()>;
}

/// 消息内容编码接口
///
/// 外部协作者：把通用富文本内容渲染为一条或多条协议指令文本
/// （可能需要解析图床 / 音乐链接，因此异步）。
#[async_trait]
pub trait MessageEncoder: Send + Sync {
    /// 渲染内容；返回的每条指令文本对应一次物理发送
    async fn encode(
        &self,
        target: &ChannelTarget,
        content: &Fragment,
        options: Option<&SendOptions>,
    ) -> IiroseResult<Vec<String>>;
}
