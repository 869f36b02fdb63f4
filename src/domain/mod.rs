//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Book Context: 图书目录管理

pub mod book;
