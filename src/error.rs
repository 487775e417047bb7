use std::path::PathBuf;

use thiserror::Error;

/// modlist 的错误类型
///
/// 只在启动阶段和终端循环中出现，状态机本身不会失败。
#[derive(Debug, Error)]
pub enum ModlistError {
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot determine the user {0} directory")]
    MissingDir(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModlistError>;
