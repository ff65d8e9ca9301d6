//! pglog 核心模块
//!
//! 本模块包含 pglog 的核心功能组件，包括事件定义与 tracing 转发层。

pub mod event;
pub mod layer;

// 重新导出核心类型
pub use event::LogEvent;
pub use layer::PostgresLayer;
