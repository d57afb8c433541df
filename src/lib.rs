//! IIROSE 协议适配器
//!
//! 把通用的跨平台机器人抽象（账号、群组、频道、消息、管理动作）
//! 桥接到 IIROSE 的文本线协议：
//!
//! - 指令编码：把语义动作序列化为冒号分隔的协议指令文本
//! - 帧传输：按字节长度选择原始帧或带标记的 gzip 压缩帧
//! - 消息关联：缓存入站消息标识到最近观测值的映射
//! - 机器人门面：把通用操作映射到上述原语
//!
//! 连接生命周期（重连、心跳、握手）与富文本渲染由外部协作者负责，
//! 本 crate 只在 trait 边界消费它们。

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interface;
pub mod service;

pub use config::BotConfig;
pub use domain::model::{
    ChannelTarget, Fragment, Guild, MessageRecord, MessageSegment, SendOptions, UserProfile,
};
pub use domain::repository::{FrameSink, MessageEncoder, MessageStore};
pub use error::{IiroseError, IiroseResult};
pub use infrastructure::persistence::InMemoryMessageStore;
pub use infrastructure::transport::FrameTransport;
pub use interface::ChatBot;
pub use service::wire::{ApplicationContext, initialize};
pub use service::{IiroseBot, PLATFORM};
