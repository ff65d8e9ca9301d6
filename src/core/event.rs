//! pglog 事件定义
//!
//! 此模块定义了写入数据库行所需的记录结构：创建时间、级别标签与消息。

use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use tracing::Level;

/// 数据库行时间戳格式（本地时间，秒级精度）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 单条日志记录
///
/// 消息原样保留，不做任何格式化或插值；插值是日志框架的职责。
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    /// 记录创建时间（本地时间）
    pub timestamp: DateTime<Local>,
    /// 级别标签，如 "INFO"、"WARN"
    pub level: String,
    /// 原始消息内容
    pub message: String,
}

impl LogEvent {
    /// 由 tracing 级别创建记录，时间戳取当前本地时间
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level: level.to_string(),
            message: message.into(),
        }
    }

    /// 由任意级别标签创建记录
    ///
    /// 标签不限于 tracing 的五个级别名，"WARNING"、"CRITICAL" 等
    /// 外部标签原样透传。
    pub fn with_label(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level: level.into(),
            message: message.into(),
        }
    }

    /// 获取按秒截断的本地时间，用于数据库写入
    pub fn db_timestamp(&self) -> NaiveDateTime {
        let naive = self.timestamp.naive_local();
        naive.with_nanosecond(0).unwrap_or(naive)
    }

    /// 获取格式化的时间戳字符串，格式 "%Y-%m-%d %H:%M:%S"
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
