//! zhnum Core
//!
//! 把文本中的中文数字（小写、大写、军用读法、全角数字）转换为阿拉伯数字

#![warn(rust_2018_idioms)]

pub mod numeral;
pub mod config;
pub mod error;

// Re-export key types
pub use error::{NumeralError, NumeralResult};
pub use numeral::{
    classify, is_arabic_digit, is_chinese_numeral, is_numeral_or_separator, parse_numeral,
    to_arabic_string, NumeralValue, Symbol, TextScanner,
};
pub use config::ZhnumConfig;

/// 初始化日志系统
///
/// 生产模式: 静默运行
/// 调试模式 (--features debug-logs): 级别由 ZHNUM_LOG 环境变量控制，默认 warn
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("ZHNUM_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 已经初始化过时 try_init 返回错误，忽略即可
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
