//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookRecord, BookRepositoryPort};
use crate::application::queries::{GetBook, ListBooks};

// ============================================================================
// Read model
// ============================================================================

/// 图书读模型
#[derive(Debug, Clone)]
pub struct BookView {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
}

impl From<BookRecord> for BookView {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            author: record.author,
            isbn: record.isbn,
            published_year: record.published_year,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<BookView, ApplicationError> {
        let book = self
            .book_repo
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.id))?;

        Ok(BookView::from(book))
    }
}

/// ListBooks Handler
pub struct ListBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, _query: ListBooks) -> Result<Vec<BookView>, ApplicationError> {
        let books = self.book_repo.find_all().await?;

        Ok(books.into_iter().map(BookView::from).collect())
    }
}
