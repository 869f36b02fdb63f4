//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, UpdateBook};
use crate::application::error::ApplicationError;
use crate::application::ports::{BookRecord, BookRepositoryPort, NewBookRecord};
use crate::domain::book::{Book, BookDraft};

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 校验草稿后持久化，id 由存储引擎分配
    pub async fn handle(&self, command: CreateBook) -> Result<Book, ApplicationError> {
        let draft = BookDraft::new(
            command.title,
            command.author,
            command.isbn,
            command.published_year,
        )?;

        let record = self
            .book_repo
            .insert(&NewBookRecord {
                title: draft.title,
                author: draft.author,
                isbn: draft.isbn,
                published_year: draft.published_year,
            })
            .await?;

        tracing::info!(book_id = record.id, title = %record.title, "Book created");

        Ok(Book {
            id: record.id,
            title: record.title,
            author: record.author,
            isbn: record.isbn,
            published_year: record.published_year,
        })
    }
}

// ============================================================================
// UpdateBook
// ============================================================================

/// UpdateBook Handler - 部分更新
pub struct UpdateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl UpdateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 读取现有记录，应用补丁并写回
    pub async fn handle(&self, command: UpdateBook) -> Result<Book, ApplicationError> {
        let record = self
            .book_repo
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", command.id))?;

        let mut book = Book {
            id: record.id,
            title: record.title,
            author: record.author,
            isbn: record.isbn,
            published_year: record.published_year,
        };
        book.apply(&command.patch)?;

        let updated = self
            .book_repo
            .update(&BookRecord {
                id: book.id,
                title: book.title.clone(),
                author: book.author.clone(),
                isbn: book.isbn.clone(),
                published_year: book.published_year,
            })
            .await?;

        // 读取和写回之间记录可能已被并发删除
        if !updated {
            return Err(ApplicationError::not_found("Book", command.id));
        }

        tracing::info!(book_id = book.id, "Book updated");

        Ok(book)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 永久删除；重复删除返回 NotFound
    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        let deleted = self.book_repo.delete(command.id).await?;

        if !deleted {
            return Err(ApplicationError::not_found("Book", command.id));
        }

        tracing::info!(book_id = command.id, "Book deleted");

        Ok(())
    }
}
