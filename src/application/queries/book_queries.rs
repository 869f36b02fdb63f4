//! Book Queries

/// 获取单本图书
#[derive(Debug, Clone)]
pub struct GetBook {
    pub id: i64,
}

/// 列出所有图书
#[derive(Debug, Clone)]
pub struct ListBooks;
