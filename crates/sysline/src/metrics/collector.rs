/// 指标收集器
/// 
/// 使用 sysinfo 收集系统资源信息

use async_trait::async_trait;
use common::{DiskUsage, Error, MemoryUsage, Result};
use std::time::Duration;
use sysinfo::{System, IS_SUPPORTED_SYSTEM, MINIMUM_CPU_UPDATE_INTERVAL};
use tracing::debug;

use super::provider::{ops, MetricsProvider};

pub struct MetricsCollector {
    system: System,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    fn ensure_supported(op: &'static str) -> Result<()> {
        if IS_SUPPORTED_SYSTEM {
            Ok(())
        } else {
            Err(Error::metrics(op, "unsupported platform"))
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// 由 statvfs 块计数计算文件系统用量
///
/// 与 `df` 相同：`used / (used + avail)`，root 保留块既不算已用也不算可用。
pub fn disk_usage_from_blocks(
    blocks: u64,
    blocks_free: u64,
    blocks_avail: u64,
    fragment_size: u64,
) -> DiskUsage {
    let total = blocks.saturating_mul(fragment_size);
    let used = blocks.saturating_sub(blocks_free).saturating_mul(fragment_size);
    let avail = blocks_avail.saturating_mul(fragment_size);
    DiskUsage {
        total,
        used_percent: percent(used, used.saturating_add(avail)),
    }
}

#[cfg(unix)]
fn statvfs_usage(path: &str) -> Result<DiskUsage> {
    use nix::sys::statvfs::statvfs;

    let stats = statvfs(path)
        .map_err(|e| Error::metrics(ops::DISK_USAGE, format!("{}: {}", path, e)))?;
    Ok(disk_usage_from_blocks(
        stats.blocks() as u64,
        stats.blocks_free() as u64,
        stats.blocks_available() as u64,
        stats.fragment_size() as u64,
    ))
}

#[cfg(not(unix))]
fn statvfs_usage(_path: &str) -> Result<DiskUsage> {
    Err(Error::metrics(ops::DISK_USAGE, "unsupported platform"))
}

fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

#[async_trait]
impl MetricsProvider for MetricsCollector {
    async fn cpu_percent(&mut self, window: Duration) -> Result<f64> {
        Self::ensure_supported(ops::CPU_PERCENT)?;

        // sysinfo 需要两次刷新之间至少间隔 MINIMUM_CPU_UPDATE_INTERVAL
        let window = window.max(MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu_usage();
        tokio::time::sleep(window).await;
        self.system.refresh_cpu_usage();

        if self.system.cpus().is_empty() {
            return Err(Error::metrics(ops::CPU_PERCENT, "no CPU reported"));
        }
        let usage = f64::from(self.system.global_cpu_usage());
        debug!("CPU usage over {:?}: {:.1}%", window, usage);
        Ok(usage)
    }

    fn cpu_count(&mut self) -> Result<usize> {
        Self::ensure_supported(ops::CPU_COUNTS)?;

        if self.system.cpus().is_empty() {
            self.system.refresh_cpu_usage();
        }
        match self.system.cpus().len() {
            0 => Err(Error::metrics(ops::CPU_COUNTS, "no CPU reported")),
            count => Ok(count),
        }
    }

    fn virtual_memory(&mut self) -> Result<MemoryUsage> {
        Self::ensure_supported(ops::VIRTUAL_MEMORY)?;

        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return Err(Error::metrics(ops::VIRTUAL_MEMORY, "total memory reported as zero"));
        }
        Ok(MemoryUsage {
            total,
            used_percent: percent(self.system.used_memory(), total),
        })
    }

    fn swap_memory(&mut self) -> Result<MemoryUsage> {
        Self::ensure_supported(ops::SWAP_MEMORY)?;

        self.system.refresh_memory();
        let total = self.system.total_swap();
        Ok(MemoryUsage {
            total,
            used_percent: percent(self.system.used_swap(), total),
        })
    }

    fn disk_usage(&mut self, path: &str) -> Result<DiskUsage> {
        Self::ensure_supported(ops::DISK_USAGE)?;

        let usage = statvfs_usage(path)?;
        debug!("Disk usage of {}: {:?}", path, usage);
        Ok(usage)
    }

    fn uptime(&mut self) -> Result<u64> {
        Self::ensure_supported(ops::UPTIME)?;
        Ok(System::uptime())
    }
}
