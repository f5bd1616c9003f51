//! 应用层
//!
//! - `power`：供电服务
//! - `disk`：磁盘服务，构造时注入供电能力
//! - `computer`：组装根，负责把服务连接起来并暴露路由

pub mod computer;
pub mod disk;
pub mod power;
