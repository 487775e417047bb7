//! 服务器配置 mod 列表的终端编辑器

pub mod error;
pub mod models;
pub mod storage;
pub mod ui;

pub use error::{ModlistError, Result};
