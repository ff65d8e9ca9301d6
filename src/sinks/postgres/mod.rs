//! PostgreSQL Sink 模块
//!
//! 此模块提供了将日志逐条写入 PostgreSQL 的功能。

pub mod schema;
pub mod sink;

pub use sink::PostgresSink;
