//! 主机信息获取模块
//!
//! 提供主机网络名称的获取，结果在进程生命周期内缓存。

use once_cell::sync::Lazy;

static HOSTNAME: Lazy<String> = Lazy::new(|| {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string())
});

/// 获取当前主机的网络名称
///
/// 获取失败时返回 "unknown"。
pub fn hostname() -> &'static str {
    HOSTNAME.as_str()
}
