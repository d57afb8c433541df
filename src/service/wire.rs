//! 依赖装配模块
//!
//! 按依赖顺序构建一个机器人会话的全部组件，外部只需提供
//! 已建立的套接字抽象与消息编码器。

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::BotConfig;
use crate::domain::repository::{FrameSink, MessageEncoder, MessageStore};
use crate::infrastructure::persistence::InMemoryMessageStore;
use crate::infrastructure::transport::FrameTransport;
use crate::service::IiroseBot;

/// 应用上下文 - 包含一个会话内所有已初始化的组件
pub struct ApplicationContext {
    /// 机器人门面
    pub bot: Arc<IiroseBot>,
    /// 消息关联缓存（入站解码路径持有同一份引用写入）
    pub store: Arc<dyn MessageStore>,
}

/// 构建应用上下文
///
/// # 参数
/// * `config` - 机器人静态配置
/// * `sink` - 外部连接层提供的套接字抽象
/// * `encoder` - 外部消息编码器
///
/// # 返回
/// * `ApplicationContext` - 构建好的应用上下文
pub fn initialize(
    config: BotConfig,
    sink: Arc<dyn FrameSink>,
    encoder: Arc<dyn MessageEncoder>,
) -> Result<ApplicationContext> {
    // 1. 校验静态配置
    config
        .validate()
        .context("invalid bot configuration")?;
    let config = Arc::new(config);

    // 2. 创建消息关联缓存（显式所有权，入站解码与门面共享同一实例）
    let store: Arc<dyn MessageStore> = Arc::new(InMemoryMessageStore::new());

    // 3. 创建帧传输层
    let transport = FrameTransport::new(sink);

    // 4. 构建机器人门面
    let bot = Arc::new(IiroseBot::new(
        config,
        transport,
        store.clone(),
        encoder,
    ));

    Ok(ApplicationContext { bot, store })
}
