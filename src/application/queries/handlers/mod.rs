//! 查询处理器

mod book_handlers;

pub use book_handlers::{BookView, GetBookHandler, ListBooksHandler};
