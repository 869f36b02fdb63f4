//! Persistence - 持久化基础设施

pub mod sqlite;
