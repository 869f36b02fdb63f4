//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// 图书记录（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
}

/// 新建图书记录（id 由存储引擎分配）
#[derive(Debug, Clone)]
pub struct NewBookRecord {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
}

/// Book Repository Port
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 插入图书，返回带已分配 id 的记录
    async fn insert(&self, book: &NewBookRecord) -> Result<BookRecord, RepositoryError>;

    /// 根据 id 查找图书
    async fn find_by_id(&self, id: i64) -> Result<Option<BookRecord>, RepositoryError>;

    /// 获取所有图书（按 id 升序）
    async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError>;

    /// 整体更新图书；返回 false 表示 id 不存在
    async fn update(&self, book: &BookRecord) -> Result<bool, RepositoryError>;

    /// 删除图书；返回 false 表示 id 不存在
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
