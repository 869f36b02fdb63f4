//! SQLite Book Repository

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{BookRecord, BookRepositoryPort, NewBookRecord, RepositoryError};

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    isbn: String,
    published_year: i64,
}

impl From<BookRow> for BookRecord {
    fn from(row: BookRow) -> Self {
        BookRecord {
            id: row.id,
            title: row.title,
            author: row.author,
            isbn: row.isbn,
            published_year: row.published_year as i32,
        }
    }
}

/// 将 sqlx 错误归类：列约束冲突与其他数据库错误分开上报
fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if !matches!(db_err.kind(), ErrorKind::Other) {
            return RepositoryError::Constraint(db_err.message().to_string());
        }
    }
    RepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn insert(&self, book: &NewBookRecord) -> Result<BookRecord, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, isbn, published_year)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.published_year as i64)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(BookRecord {
            id: result.last_insert_rowid(),
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            published_year: book.published_year,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BookRecord>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(
            "SELECT id, title, author, isbn, published_year FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(row.map(BookRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            "SELECT id, title, author, isbn, published_year FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(rows.into_iter().map(BookRecord::from).collect())
    }

    async fn update(&self, book: &BookRecord) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author = ?, isbn = ?, published_year = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.published_year as i64)
        .bind(book.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(result.rows_affected() > 0)
    }
}
