//! 端到端装配测试
//!
//! 用内存套接字和纯文本编码器把整个会话装配起来，
//! 验证 发送 → 落帧 → 入站记录 → 取回 的完整链路。

use std::io::Read;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use flate2::read::GzDecoder;
use tokio::sync::Mutex;

use iirose_adapter::infrastructure::transport::{COMPRESSED_MARKER, COMPRESSION_THRESHOLD};
use iirose_adapter::{
    BotConfig, ChannelTarget, ChatBot, Fragment, FrameSink, IiroseError, IiroseResult,
    MessageEncoder, MessageRecord, MessageSegment, MessageStore, SendOptions, initialize,
};

/// 把每个帧收进内存的套接字替身
#[derive(Default)]
struct RecordingSink {
    frames: Mutex<Vec<Bytes>>,
}

#[async_trait]
impl FrameSink for RecordingSink {
    async fn send(&self, frame: Bytes) -> IiroseResult<()> {
        self.frames.lock().await.push(frame);
        Ok(())
    }
}

/// 把文本片段直接拼成指令文本的编码器替身
struct PlainTextEncoder;

#[async_trait]
impl MessageEncoder for PlainTextEncoder {
    async fn encode(
        &self,
        target: &ChannelTarget,
        content: &Fragment,
        _options: Option<&SendOptions>,
    ) -> IiroseResult<Vec<String>> {
        Ok(content
            .iter()
            .filter_map(|segment| match segment {
                MessageSegment::Text { text } => Some(format!("{}#{text}", target.key())),
                _ => None,
            })
            .collect())
    }
}

fn test_config() -> BotConfig {
    toml::from_str(
        r#"
            username = "bot"
            user_id = "5201314"
            password_md5 = "0123456789abcdef0123456789abcdef"
            room_id = "6b4f8b"
        "#,
    )
    .unwrap()
}

fn text(content: &str) -> Fragment {
    vec![MessageSegment::Text {
        text: content.to_string(),
    }]
}

#[tokio::test]
async fn test_full_send_and_correlate_flow() {
    let _ = tracing_subscriber::fmt::try_init();

    let sink = Arc::new(RecordingSink::default());
    let context = initialize(test_config(), sink.clone(), Arc::new(PlainTextEncoder)).unwrap();

    // 身份与群组直接来自静态配置
    let profile = context.bot.get_self().await.unwrap();
    assert_eq!(profile.user_id, "5201314");
    let guilds = context.bot.get_guild_list().await.unwrap();
    assert_eq!(guilds.len(), 1);
    assert_eq!(guilds[0].guild_id, "6b4f8b");

    // 发送一条短消息：原始帧，无压缩标记
    let ids = context
        .bot
        .send_message("chat01", &text("hello"), Some("6b4f8b"), None)
        .await
        .unwrap();
    assert_eq!(ids.len(), 1);

    let frames = sink.frames.lock().await;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].as_ref(), "chat01:6b4f8b#hello".as_bytes());
    drop(frames);

    // 入站解码路径写入缓存后，门面可以按标识取回
    context
        .store
        .record(MessageRecord {
            message_id: "m1".to_string(),
            channel_id: "6b4f8b".to_string(),
            user_id: "42".to_string(),
            username: "someone".to_string(),
            content: "observed".to_string(),
            timestamp: Utc::now(),
        })
        .await
        .unwrap();
    let message = context.bot.get_message("6b4f8b", "m1").await.unwrap();
    assert_eq!(message.content, "observed");

    // 未观测过的标识原样失败
    let err = context.bot.get_message("6b4f8b", "m404").await.unwrap_err();
    assert!(matches!(err, IiroseError::MessageNotFound(_)));
}

#[tokio::test]
async fn test_long_message_is_compressed_on_the_wire() {
    let sink = Arc::new(RecordingSink::default());
    let context = initialize(test_config(), sink.clone(), Arc::new(PlainTextEncoder)).unwrap();

    let long_text = "长消息内容 ".repeat(40);
    context
        .bot
        .send_message("chat01", &text(&long_text), Some("6b4f8b"), None)
        .await
        .unwrap();

    let frames = sink.frames.lock().await;
    assert_eq!(frames.len(), 1);
    let frame = &frames[0];
    assert!(frame.len() > 1);
    assert_eq!(frame[0], COMPRESSED_MARKER);

    // 解压后与编码器产出的指令文本逐字一致
    let mut decoder = GzDecoder::new(&frame[1..]);
    let mut restored = String::new();
    decoder.read_to_string(&mut restored).unwrap();
    assert_eq!(restored, format!("chat01:6b4f8b#{long_text}"));
    assert!(restored.len() > COMPRESSION_THRESHOLD);
}

#[tokio::test]
async fn test_moderation_commands_reach_the_wire() {
    let sink = Arc::new(RecordingSink::default());
    let context = initialize(test_config(), sink.clone(), Arc::new(PlainTextEncoder)).unwrap();

    context
        .bot
        .kick_guild_member("6b4f8b", "troublemaker", None)
        .await
        .unwrap();
    context
        .bot
        .mute_guild_member("6b4f8b", "spammer", 60_000, Some("flooding"))
        .await
        .unwrap();

    let frames = sink.frames.lock().await;
    let texts: Vec<String> = frames
        .iter()
        .map(|frame| String::from_utf8(frame.to_vec()).unwrap())
        .collect();
    assert_eq!(texts, vec!["m-:troublemaker", "m!:all:spammer:60:flooding"]);
}

#[tokio::test]
async fn test_initialize_rejects_invalid_config() {
    let mut config = test_config();
    config.username.clear();

    let result = initialize(
        config,
        Arc::new(RecordingSink::default()),
        Arc::new(PlainTextEncoder),
    );
    assert!(result.is_err());
}
