use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumeralError {
    // 字符分类错误
    #[error("Invalid input: expected exactly one character, got {chars} in {input:?}")]
    InvalidInput { input: String, chars: usize },

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config serialize error: {0}")]
    ConfigSerialize(String),

    #[error("Config directory unavailable")]
    ConfigDirUnavailable,

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NumeralError {
    /// 构造单字符前置条件错误
    pub fn invalid_input(input: &str) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            chars: input.chars().count(),
        }
    }
}

pub type NumeralResult<T> = Result<T, NumeralError>;
