//! Bookshelf - 图书目录 CRUD 服务
//!
//! 架构设计: 分层 + 端口适配器
//!
//! 领域层 (domain/):
//! - Book Context: 图书实体、草稿、补丁与校验
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Book Repository）
//! - Commands: CQRS 命令处理器（创建、更新、删除）
//! - Queries: CQRS 查询处理器（单本、列表）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Persistence: SQLite 存储（sqlx）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
