//! Postgres 转发层
//!
//! 将 tracing 事件同步转发到 PostgresSink。发送阻塞事件产生方，
//! 直至数据库确认提交或返回错误。

use std::sync::Arc;

use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::config::PostgresSinkConfig;
use crate::core::event::LogEvent;
use crate::error::Result;
use crate::sinks::postgres::PostgresSink;

/// 将 tracing 事件写入 PostgreSQL 的 Layer
#[derive(Debug)]
pub struct PostgresLayer {
    sink: Arc<PostgresSink>,
}

impl PostgresLayer {
    /// 根据配置创建 Layer，连接在此建立
    pub fn new(config: PostgresSinkConfig) -> Result<Self> {
        Ok(Self {
            sink: Arc::new(PostgresSink::new(config)?),
        })
    }

    /// 使用已有的 sink 创建 Layer
    pub fn with_sink(sink: Arc<PostgresSink>) -> Self {
        Self { sink }
    }

    /// 获取底层 sink 的句柄
    ///
    /// 应用停机时通过该句柄调用 close 释放连接。
    pub fn sink(&self) -> Arc<PostgresSink> {
        Arc::clone(&self.sink)
    }
}

impl<S> Layer<S> for PostgresLayer
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let message = extract_message(event);
        let log_event = LogEvent::new(*event.metadata().level(), message);

        // on_event 无法向被插桩的调用方返回错误，发送失败只能在此上报
        if let Err(e) = self.sink.emit(&log_event) {
            eprintln!("Failed to send event to postgres sink: {}", e);
        }
    }
}

/// 提取事件的 message 字段
fn extract_message(event: &Event<'_>) -> String {
    struct MessageExtractor<'a> {
        message: &'a mut String,
    }

    impl<'a> tracing::field::Visit for MessageExtractor<'a> {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                *self.message = format!("{:?}", value);
            }
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                *self.message = value.to_string();
            }
        }
    }

    let mut message = String::new();
    let mut extractor = MessageExtractor {
        message: &mut message,
    };
    event.record(&mut extractor);

    message
}
