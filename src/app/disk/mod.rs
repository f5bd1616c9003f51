//! 磁盘模块

pub mod handler;
pub mod model;
pub mod service;

pub use service::{DiskService, DISK_POWER_DRAW};
