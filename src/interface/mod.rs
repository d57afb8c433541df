//! 通用机器人契约
//!
//! 跨平台机器人抽象要求的操作集合。门面以组合方式实现该 trait，
//! 而不是继承某个基类，协议细节因此与通用抽象解耦、可独立测试。
//! 标识一律是不透明字符串，内容是外部编码器才会解释的富文本片段。

use async_trait::async_trait;

use crate::domain::model::{Fragment, Guild, MessageRecord, SendOptions, UserProfile};
use crate::error::IiroseResult;

/// 通用机器人操作接口（需要作为 trait 对象使用，保留 async-trait）
#[async_trait]
pub trait ChatBot: Send + Sync {
    /// 向频道发送消息，返回按发送顺序排列的消息标识（内容分段时每段一个）
    async fn send_message(
        &self,
        channel_id: &str,
        content: &Fragment,
        guild_id: Option<&str>,
        options: Option<&SendOptions>,
    ) -> IiroseResult<Vec<String>>;

    /// 发送私聊消息（目标键改写为私聊形式，不涉及群组）
    async fn send_private_message(
        &self,
        channel_id: &str,
        content: &Fragment,
        options: Option<&SendOptions>,
    ) -> IiroseResult<Vec<String>>;

    /// 返回静态配置的机器人身份，不做网络往返
    async fn get_self(&self) -> IiroseResult<UserProfile>;

    /// 返回机器人所在群组列表；本适配器是单房间模型，恒为一个元素
    async fn get_guild_list(&self) -> IiroseResult<Vec<Guild>>;

    /// 按标识取回最近一次观测到的消息；未观测过则返回 `MessageNotFound`
    async fn get_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> IiroseResult<MessageRecord>;

    /// 将成员踢出群组
    ///
    /// `permanent` 仅为接口兼容保留：已知的踢出指令不携带永久字段，
    /// 该标记不会编码上线。
    async fn kick_guild_member(
        &self,
        guild_id: &str,
        user_name: &str,
        permanent: Option<bool>,
    ) -> IiroseResult<()>;

    /// 禁言群组成员；时长折算超过 99 999 秒时编码为永久禁言
    async fn mute_guild_member(
        &self,
        guild_id: &str,
        user_name: &str,
        duration_ms: u64,
        reason: Option<&str>,
    ) -> IiroseResult<()>;
}
