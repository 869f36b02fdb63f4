//! 命令处理器

mod book_handlers;

pub use book_handlers::{CreateBookHandler, DeleteBookHandler, UpdateBookHandler};
