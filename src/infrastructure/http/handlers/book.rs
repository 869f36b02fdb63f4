//! Book HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateBook, DeleteBook, GetBook, ListBooks, UpdateBook};
use crate::infrastructure::http::dto::{BookResponse, CreateBookRequest, UpdateBookRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET / - 列出所有图书
///
/// 无过滤、排序、分页；空存储返回空数组
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = state.list_books_handler.handle(ListBooks).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// POST / - 创建图书
///
/// 返回带已分配 id 的完整记录，201 Created
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let Json(request) = payload?;

    let book = state
        .create_book_handler
        .handle(CreateBook {
            title: request.title,
            author: request.author,
            isbn: request.isbn,
            published_year: request.published_year,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// GET /{id} - 获取图书
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.get_book_handler.handle(GetBook { id }).await?;

    Ok(Json(BookResponse::from(book)))
}

/// PUT /{id} - 部分更新图书
///
/// 只有请求体中提供的字段会被修改
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Json(request) = payload?;

    let book = state
        .update_book_handler
        .handle(UpdateBook {
            id,
            patch: request.into(),
        })
        .await?;

    Ok(Json(BookResponse::from(book)))
}

/// DELETE /{id} - 删除图书
///
/// 成功返回 204 空响应体
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delete_book_handler.handle(DeleteBook { id }).await?;

    Ok(StatusCode::NO_CONTENT)
}
