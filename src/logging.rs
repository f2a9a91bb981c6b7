// ==========================================
// 饲养箱装备规划引擎 - 日志系统初始化
// ==========================================
// 输出: stderr (stdout 只留给方案 JSON)
// 级别: RUST_LOG, 缺省 info
// 格式: 配置项 log_format (pretty | json)
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Pretty,
    /// 单行 JSON, 供上游采集
    Json,
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 初始化进程日志; 返回是否由本次调用安装订阅者
///
/// # 示例
/// ```no_run
/// use enclosure_planner::logging::{self, LogFormat};
/// logging::init(LogFormat::Pretty);
/// ```
pub fn init(format: LogFormat) -> bool {
    let builder = fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Pretty => builder.with_target(true).with_line_number(true).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed(result, "process")
}

/// 测试日志 (debug 级别, 写入测试捕获输出); 重复调用安全
pub fn init_test() -> bool {
    let result = fmt()
        .with_env_filter(env_filter("debug"))
        .with_test_writer()
        .try_init();
    installed(result, "test")
}

// 已有订阅者 (嵌入宿主或先前调用) 时沿用之, 并经由该订阅者记录
fn installed<E: std::fmt::Display>(result: Result<(), E>, scope: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!(scope = scope, error = %e, "日志订阅者已存在, 沿用现有订阅者");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_wire_names() {
        assert_eq!(serde_json::to_string(&LogFormat::Json).unwrap(), "\"json\"");
        assert_eq!(
            serde_json::from_str::<LogFormat>("\"pretty\"").unwrap(),
            LogFormat::Pretty
        );
    }

    #[test]
    fn test_second_init_keeps_existing_subscriber() {
        init_test();
        assert!(!init_test());
        assert!(!init(LogFormat::Json));
        assert!(!init(LogFormat::Pretty));
    }
}
