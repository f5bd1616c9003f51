//! 磁盘业务服务

use std::sync::Arc;

use tracing::info;

use crate::app::power::PowerSupply;

/// 每次存储数据向供电服务申请的电量
pub const DISK_POWER_DRAW: u32 = 10;

/// 磁盘服务
///
/// 供电能力在构造时注入，磁盘只持有共享引用，不负责创建它。
#[derive(Clone)]
pub struct DiskService {
    power: Arc<dyn PowerSupply>,
}

impl DiskService {
    pub fn new(power: Arc<dyn PowerSupply>) -> Self {
        Self { power }
    }

    /// 存储数据并原样返回
    ///
    /// 每次调用都会申请一次 [`DISK_POWER_DRAW`] 的电量，不会失败。
    pub fn store_data<'a>(&self, data: &'a str) -> &'a str {
        info!(len = data.len(), "正在将数据存储到磁盘");
        self.power.supply_power(DISK_POWER_DRAW);
        data
    }
}

impl std::fmt::Debug for DiskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskService").finish_non_exhaustive()
    }
}
