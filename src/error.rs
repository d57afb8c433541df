//! 适配器错误类型定义

use thiserror::Error;

/// IIROSE 适配器错误类型
#[derive(Debug, Error)]
pub enum IiroseError {
    /// 消息未找到
    #[error("Message not found: {0}")]
    MessageNotFound(String),

    /// 帧发送失败
    #[error("Frame transmission failed: {0}")]
    Transmission(String),

    /// 帧压缩失败
    #[error("Frame compression failed: {0}")]
    Compression(String),

    /// 消息内容编码失败
    #[error("Message encoding failed: {0}")]
    Encode(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 其他错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// IIROSE 适配器结果类型
pub type IiroseResult<T> = Result<T, IiroseError>;
