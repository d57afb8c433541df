//! 消息关联缓存实现

pub mod in_memory;

pub use in_memory::InMemoryMessageStore;
