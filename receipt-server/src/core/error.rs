use thiserror::Error;

use crate::db::repository::RepoError;

/// 服务器启动/运行期错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("存储不可用: {0}")]
    Store(#[from] RepoError),

    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 核心层的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
