//! 基础设施层：指令编码、帧传输与缓存实现

pub mod codec;
pub mod persistence;
pub mod transport;
