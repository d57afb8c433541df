//! 帧传输模块
//!
//! 把编码完成的指令文本装配为线上帧并交给套接字抽象发送。
//! 帧有两种形态：
//!
//! - 原始帧：指令文本的 UTF-8 字节，不加修饰；
//! - 压缩帧：1 字节标记 `1`，后接指令文本的 gzip 压缩字节。
//!
//! 形态选择只取决于指令文本的原始字节长度：超过 256 字节才压缩，
//! 接收端靠首字节标记区分两种帧。本层逐次调用即发即弃，不重试，
//! 发送失败原样上抛；并发写入的串行化由套接字实现负责。

use std::io::Write;
use std::sync::Arc;

use bytes::Bytes;
use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::debug;

use crate::domain::repository::FrameSink;
use crate::error::{IiroseError, IiroseResult};

/// 压缩阈值（字节）；超过该长度的指令才压缩，等于不压缩
pub const COMPRESSION_THRESHOLD: usize = 256;

/// 压缩帧的首字节标记
pub const COMPRESSED_MARKER: u8 = 1;

/// 把指令文本装配为单个帧
///
/// 纯函数：字节长度 ≤ 256 时返回原始 UTF-8 字节；否则返回
/// `[1] || gzip(指令文本)`。
pub fn encode_frame(command: &str) -> IiroseResult<Bytes> {
    let raw = command.as_bytes();
    if raw.len() <= COMPRESSION_THRESHOLD {
        return Ok(Bytes::copy_from_slice(raw));
    }

    let mut framed = Vec::with_capacity(raw.len() / 2 + 1);
    framed.push(COMPRESSED_MARKER);
    {
        let mut encoder = GzEncoder::new(&mut framed, Compression::default());
        encoder
            .write_all(raw)
            .map_err(|e| IiroseError::Compression(format!("gzip write failed: {e}")))?;
        encoder
            .finish()
            .map_err(|e| IiroseError::Compression(format!("gzip finish failed: {e}")))?;
    }
    Ok(Bytes::from(framed))
}

/// 帧传输器
///
/// 持有注入的套接字抽象；对每条指令完成 编码 → 发送 两步，
/// 不等待协议层应答。
pub struct FrameTransport {
    sink: Arc<dyn FrameSink>,
}

impl FrameTransport {
    /// 用已建立的套接字抽象构造传输器
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        Self { sink }
    }

    /// 装配并发送一条指令
    pub async fn transmit(&self, command: &str) -> IiroseResult<()> {
        let compressed = command.len() > COMPRESSION_THRESHOLD;
        let frame = encode_frame(command)?;
        debug!(
            command_len = command.len(),
            frame_len = frame.len(),
            compressed,
            "transmitting frame"
        );
        self.sink.send(frame).await
    }
}
