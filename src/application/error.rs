//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::book::BookValidationError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i64 },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // 存储层约束冲突属于客户端数据错误
            RepositoryError::Constraint(msg) => Self::ValidationError(msg),
            RepositoryError::DatabaseError(msg) => Self::RepositoryError(msg),
        }
    }
}

impl From<BookValidationError> for ApplicationError {
    fn from(err: BookValidationError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
