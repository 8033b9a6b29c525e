pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod list;
pub mod model;
pub mod storage;
