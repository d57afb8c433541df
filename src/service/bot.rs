//! 机器人门面
//!
//! 把通用机器人操作翻译为协议原语：选择指令编码器、调用帧传输、
//! 读取消息关联缓存，并把结果整形回通用抽象期望的类型。
//! 门面自身在调用之间无状态，会话状态（连接、鉴权）全部在外部连接层。

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use ulid::Ulid;

use crate::config::BotConfig;
use crate::domain::model::{
    ChannelTarget, Fragment, Guild, MessageRecord, SendOptions, UserProfile,
};
use crate::domain::repository::{MessageEncoder, MessageStore};
use crate::error::IiroseResult;
use crate::infrastructure::codec;
use crate::infrastructure::transport::FrameTransport;
use crate::interface::ChatBot;

/// 平台标识
pub const PLATFORM: &str = "iirose";

/// 房间在通用抽象中的显示名
const ROOM_DISPLAY_NAME: &str = "IIROSE 群聊";

/// IIROSE 机器人门面
pub struct IiroseBot {
    config: Arc<BotConfig>,
    transport: FrameTransport,
    store: Arc<dyn MessageStore>,
    encoder: Arc<dyn MessageEncoder>,
}

impl IiroseBot {
    pub fn new(
        config: Arc<BotConfig>,
        transport: FrameTransport,
        store: Arc<dyn MessageStore>,
        encoder: Arc<dyn MessageEncoder>,
    ) -> Self {
        Self {
            config,
            transport,
            store,
            encoder,
        }
    }

    /// 静态配置的引用
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// 编码内容并逐条发送，为每条物理指令生成一个消息标识
    async fn dispatch(
        &self,
        target: ChannelTarget,
        content: &Fragment,
        options: Option<&SendOptions>,
    ) -> IiroseResult<Vec<String>> {
        let commands = self.encoder.encode(&target, content, options).await?;

        let mut message_ids = Vec::with_capacity(commands.len());
        for command in &commands {
            self.transport.transmit(command).await?;
            message_ids.push(Ulid::new().to_string());
        }

        debug!(
            target = %target,
            segments = message_ids.len(),
            "message dispatched"
        );
        Ok(message_ids)
    }
}

#[async_trait]
impl ChatBot for IiroseBot {
    async fn send_message(
        &self,
        channel_id: &str,
        content: &Fragment,
        guild_id: Option<&str>,
        options: Option<&SendOptions>,
    ) -> IiroseResult<Vec<String>> {
        let target = ChannelTarget::room(channel_id, guild_id.unwrap_or_default());
        self.dispatch(target, content, options).await
    }

    async fn send_private_message(
        &self,
        channel_id: &str,
        content: &Fragment,
        options: Option<&SendOptions>,
    ) -> IiroseResult<Vec<String>> {
        let target = ChannelTarget::private(channel_id);
        self.dispatch(target, content, options).await
    }

    async fn get_self(&self) -> IiroseResult<UserProfile> {
        Ok(UserProfile {
            user_id: self.config.user_id.clone(),
            username: self.config.username.clone(),
        })
    }

    async fn get_guild_list(&self) -> IiroseResult<Vec<Guild>> {
        Ok(vec![Guild {
            guild_id: self.config.room_id.clone(),
            guild_name: ROOM_DISPLAY_NAME.to_string(),
        }])
    }

    async fn get_message(
        &self,
        _channel_id: &str,
        message_id: &str,
    ) -> IiroseResult<MessageRecord> {
        self.store.lookup(message_id).await
    }

    async fn kick_guild_member(
        &self,
        guild_id: &str,
        user_name: &str,
        _permanent: Option<bool>,
    ) -> IiroseResult<()> {
        // 踢出指令没有永久字段，permanent 不上线
        self.transport.transmit(&codec::kick(user_name)).await?;
        info!(%guild_id, %user_name, "kick command transmitted");
        Ok(())
    }

    async fn mute_guild_member(
        &self,
        guild_id: &str,
        user_name: &str,
        duration_ms: u64,
        reason: Option<&str>,
    ) -> IiroseResult<()> {
        let duration = codec::mute_duration_field(duration_ms);
        self.transport
            .transmit(&codec::mute(codec::SCOPE_ALL, user_name, &duration, reason))
            .await?;
        info!(%guild_id, %user_name, %duration, "mute command transmitted");
        Ok(())
    }
}
