//! Book Commands

use crate::domain::book::BookPatch;

/// 创建图书命令
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
}

/// 更新图书命令（部分更新，只有补丁中提供的字段会被修改）
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub id: i64,
    pub patch: BookPatch,
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub id: i64,
}
