//! 机器人静态配置模块
//!
//! 连接握手由外部连接层负责，本层只消费一份校验过的静态配置：
//! 机器人身份、初始房间，以及透传给消息编码器的媒体接口地址。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::{IiroseError, IiroseResult};

fn default_pic_link() -> String {
    "https://f.iirose.com/lib/php/system/file_upload.php".to_string()
}

fn default_pic_back_link() -> String {
    "http://r.iirose.com/[data]".to_string()
}

fn default_music_link() -> String {
    "https://api.xiaobaibk.com/api/music.163/?id=[musicid]".to_string()
}

/// 机器人静态配置
///
/// 身份字段在构造后不再变化；`get_self` / `get_guild_list` 直接返回
/// 这里的值，不做任何网络往返。
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// BOT 用户名
    pub username: String,
    /// BOT 的唯一标识
    pub user_id: String,
    /// BOT 密码的 32 位 md5（由外部握手层使用）
    pub password_md5: String,
    /// BOT 的初始房间地址
    pub room_id: String,
    /// 图床接口
    #[serde(default = "default_pic_link")]
    pub pic_link: String,
    /// 图床返回 url（data 为接口返回的 data）
    #[serde(default = "default_pic_back_link")]
    pub pic_back_link: String,
    /// 网易云音乐解析接口
    #[serde(default = "default_music_link")]
    pub music_link: String,
}

impl BotConfig {
    /// 从 TOML 配置文件加载
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// 校验必填字段非空
    pub fn validate(&self) -> IiroseResult<()> {
        let required = [
            ("username", &self.username),
            ("user_id", &self.user_id),
            ("password_md5", &self.password_md5),
            ("room_id", &self.room_id),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(IiroseError::Config(format!(
                    "required field is empty: {field}"
                )));
            }
        }
        Ok(())
    }
}
