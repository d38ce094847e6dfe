/// 指标提供者抽象层
/// 
/// 定义采样循环所依赖的系统指标接口，任一调用失败都视为致命错误

use async_trait::async_trait;
use common::{DiskUsage, MemoryUsage, Result};
use std::time::Duration;

/// 采集操作名，出现在错误诊断中
pub mod ops {
    pub const CPU_PERCENT: &str = "cpu.percent";
    pub const CPU_COUNTS: &str = "cpu.counts";
    pub const VIRTUAL_MEMORY: &str = "mem.virtual_memory";
    pub const SWAP_MEMORY: &str = "mem.swap_memory";
    pub const DISK_USAGE: &str = "disk.usage";
    pub const UPTIME: &str = "host.uptime";
}

/// 系统指标提供者 Trait
#[async_trait]
pub trait MetricsProvider: Send {
    /// 在给定窗口内测量的 CPU 忙碌百分比（阻塞整个窗口）
    async fn cpu_percent(&mut self, window: Duration) -> Result<f64>;

    /// 逻辑 CPU 核数
    fn cpu_count(&mut self) -> Result<usize>;

    /// 虚拟内存总量与使用率
    fn virtual_memory(&mut self) -> Result<MemoryUsage>;

    /// 交换区总量与使用率，总量为零表示没有交换区
    fn swap_memory(&mut self) -> Result<MemoryUsage>;

    /// 指定挂载点的文件系统用量
    fn disk_usage(&mut self, path: &str) -> Result<DiskUsage>;

    /// 开机时长（秒）
    fn uptime(&mut self) -> Result<u64>;
}
