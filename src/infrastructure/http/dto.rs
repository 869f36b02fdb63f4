//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::BookView;
use crate::domain::book::{Book, BookPatch};

// ============================================================================
// Requests
// ============================================================================

/// 创建图书请求：四个字段全部必填，未知字段拒绝
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
}

/// 更新图书请求：可变字段的显式允许列表
///
/// 所有字段可选（None 表示不修改）；未知字段在反序列化阶段拒绝，
/// 不会被静默应用
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
}

impl From<UpdateBookRequest> for BookPatch {
    fn from(request: UpdateBookRequest) -> Self {
        BookPatch {
            title: request.title,
            author: request.author,
            isbn: request.isbn,
            published_year: request.published_year,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// 图书响应（固定字段映射，无包装）
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            published_year: book.published_year,
        }
    }
}

impl From<BookView> for BookResponse {
    fn from(view: BookView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            author: view.author,
            isbn: view.isbn,
            published_year: view.published_year,
        }
    }
}
