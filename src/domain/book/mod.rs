//! Book Context - 图书限界上下文
//!
//! 职责:
//! - Book 实体与 id 分配前的草稿
//! - 部分更新补丁
//! - 字段级校验规则

mod entities;
mod errors;

pub use entities::{Book, BookDraft, BookPatch};
pub use errors::BookValidationError;
