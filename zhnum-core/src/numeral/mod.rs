//! 中文数字转换模块
//!
//! 符号表 → 数字串解析 → 文本扫描，数据单向流动

pub mod symbols;
pub mod value;
pub mod parser;
pub mod scanner;
pub mod config;

// 导出核心类型
pub use symbols::{
    classify, is_arabic_digit, is_chinese_numeral, is_numeral_or_separator, Symbol,
};
pub use value::NumeralValue;
pub use parser::{parse_numeral, NumeralParser};
pub use scanner::{to_arabic_string, NumeralChange, ScanResult, TextScanner};
pub use config::{ScanMode, ScannerConfig};
