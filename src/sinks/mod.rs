//! pglog Sinks 模块
//!
//! 提供日志输出目标的实现，目前仅包含 PostgreSQL。

pub mod postgres;

// 重新导出主要类型
pub use postgres::PostgresSink;
