use thiserror::Error;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum Error {
    /// 命令行参数错误
    #[error("invalid integer `{token}` for {role}")]
    Config { token: String, role: &'static str },

    /// 参数个数或形式错误
    #[error("usage: {0}")]
    Usage(String),

    #[error("Hostname: {0}")]
    Hostname(String),

    /// 指标采集失败，`op` 为失败的采集操作名
    #[error("{op}: {message}")]
    Metrics { op: &'static str, message: String },

    #[error("write: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn metrics(op: &'static str, message: impl Into<String>) -> Self {
        Self::Metrics {
            op,
            message: message.into(),
        }
    }

    /// 失败的采集操作名（仅指标错误）
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Self::Metrics { op, .. } => Some(op),
            _ => None,
        }
    }
}

/// 统一结果类型
pub type Result<T> = std::result::Result<T, Error>;
