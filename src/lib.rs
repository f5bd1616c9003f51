//! # computer
//!
//! 通过构造函数注入串联两个服务的最小示例：
//! - `PowerService` 提供供电能力
//! - `DiskService` 在构造时接收供电能力，存储数据时申请 10 单位电量
//! - `ComputerModule` 显式装配服务并暴露 HTTP 路由

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::computer::ComputerModule;
pub use app::disk::DiskService;
pub use app::power::{PowerService, PowerSupply};
pub use config::AppConfig;

/// 启动阶段的错误类型
#[derive(Debug)]
pub enum AppError {
    BindFailed { addr: String, source: std::io::Error },
    ServeFailed(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BindFailed { addr, source } => write!(f, "无法绑定到 {}: {}", addr, source),
            AppError::ServeFailed(err) => write!(f, "服务器运行失败: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::BindFailed { source, .. } => Some(source),
            AppError::ServeFailed(err) => Some(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
