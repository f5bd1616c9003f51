//! 供电业务服务

use tracing::info;

/// 供电能力
///
/// 磁盘等组件只依赖这个 trait，不关心具体实现。
pub trait PowerSupply: Send + Sync {
    fn supply_power(&self, amount: u32);
}

#[derive(Debug, Clone, Default)]
pub struct PowerService;

impl PowerService {
    pub fn new() -> Self {
        Self
    }
}

impl PowerSupply for PowerService {
    fn supply_power(&self, amount: u32) {
        info!(amount, "正在供电");
    }
}
