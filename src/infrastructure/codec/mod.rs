//! 管理指令编码模块
//!
//! 把语义化的管理动作序列化为协议的冒号分隔指令文本。
//! 编码器全部是纯函数：不做 I/O，不压缩，不发送——那些是帧传输层的职责。
//! 每种指令的字段顺序与数量固定，接收端会拒绝字段数不符的指令。
//!
//! 自由文本字段（如禁言理由）中出现分隔符时协议未定义转义规则，
//! 这里原样透传，不自行发明转义方案。

/// 指令字段分隔符
pub const FIELD_DELIMITER: char = ':';

/// 永久禁言哨兵值（协议保留字段值，接收端特殊解释）
pub const PERMANENT_SENTINEL: &str = "&";

/// 时长字段可表示的最大秒数，超过即视为永久
pub const MAX_MUTE_SECONDS: u64 = 99_999;

/// 禁言作用域：全域
pub const SCOPE_ALL: &str = "all";

/// 踢出指令操作码
const KICK_TAG: &str = "m-";

/// 禁言指令操作码
const MUTE_TAG: &str = "m!";

/// 编码踢出指令：`<kick-tag>:<user_name>`
pub fn kick(user_name: &str) -> String {
    format!("{KICK_TAG}{FIELD_DELIMITER}{user_name}")
}

/// 编码禁言指令：`<mute-tag>:<scope>:<user_name>:<duration>:<reason>`
///
/// `duration` 已经是协议字段文本（整秒数或永久哨兵），见
/// [`mute_duration_field`]；未提供理由时末尾字段为空。
pub fn mute(scope: &str, user_name: &str, duration: &str, reason: Option<&str>) -> String {
    let reason = reason.unwrap_or("");
    format!(
        "{MUTE_TAG}{FIELD_DELIMITER}{scope}{FIELD_DELIMITER}{user_name}{FIELD_DELIMITER}{duration}{FIELD_DELIMITER}{reason}"
    )
}

/// 把毫秒时长转换为禁言指令的时长字段
///
/// 整秒数的十进制文本；当请求时长折算后超过 99 999 秒（约 27.8 小时）
/// 时，字段替换为永久哨兵 `&`。
pub fn mute_duration_field(duration_ms: u64) -> String {
    if duration_ms > MAX_MUTE_SECONDS * 1000 {
        PERMANENT_SENTINEL.to_string()
    } else {
        (duration_ms / 1000).to_string()
    }
}
