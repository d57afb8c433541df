//! 边界模型定义
//!
//! 通用机器人抽象与协议层之间交换的数据形状：消息记录、静态身份、
//! 群组描述、发送目标键以及富文本内容片段。

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 入站消息记录
///
/// 由外部入站解码路径在每次观测到消息事件时写入关联缓存；
/// 同一标识后写覆盖先写，缓存只保留最近一次观测值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// 平台分配的消息标识
    pub message_id: String,
    /// 消息所在频道
    pub channel_id: String,
    /// 发送者标识
    pub user_id: String,
    /// 发送者用户名
    pub username: String,
    /// 消息文本内容
    pub content: String,
    /// 观测时间戳
    pub timestamp: DateTime<Utc>,
}

/// 机器人静态身份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// 用户标识
    pub user_id: String,
    /// 用户名
    pub username: String,
}

/// 群组（房间）描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    /// 群组标识
    pub guild_id: String,
    /// 群组显示名
    pub guild_name: String,
}

/// 发送目标键值对象
///
/// 协议以一个字符串键定位发送目标：房间消息为 `<channel_id>:<guild_id>`，
/// 私聊消息为 `private:<channel_id>`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelTarget {
    /// 房间内频道目标
    Room {
        /// 频道标识
        channel_id: String,
        /// 群组标识（允许为空）
        guild_id: String,
    },
    /// 私聊目标
    Private {
        /// 对端频道标识
        channel_id: String,
    },
}

impl ChannelTarget {
    /// 构造房间目标
    pub fn room(channel_id: impl Into<String>, guild_id: impl Into<String>) -> Self {
        Self::Room {
            channel_id: channel_id.into(),
            guild_id: guild_id.into(),
        }
    }

    /// 构造私聊目标
    pub fn private(channel_id: impl Into<String>) -> Self {
        Self::Private {
            channel_id: channel_id.into(),
        }
    }

    /// 协议层使用的目标键
    pub fn key(&self) -> String {
        match self {
            Self::Room {
                channel_id,
                guild_id,
            } => format!("{channel_id}:{guild_id}"),
            Self::Private { channel_id } => format!("private:{channel_id}"),
        }
    }
}

impl fmt::Display for ChannelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 富文本内容片段
pub type Fragment = Vec<MessageSegment>;

/// 富文本内容的单个片段
///
/// 渲染为协议指令文本是外部消息编码器的职责，本层只定义形状。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageSegment {
    /// 纯文本
    Text {
        /// 文本内容
        text: String,
    },
    /// 图片
    Image {
        /// 图片地址
        url: String,
    },
    /// 音频（音乐分享）
    Audio {
        /// 音频地址
        url: String,
    },
}

/// 发送选项
///
/// 原样透传给消息编码器，门面不解释其中内容。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// 被回复消息的标识
    pub reply_message_id: Option<String>,
}
