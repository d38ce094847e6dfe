/// 测试用的指标提供者
///
/// 返回固定采样值，记录每个操作的调用次数，并可让指定操作失败

use async_trait::async_trait;
use common::{DiskUsage, Error, MemoryUsage, Result, Sample};
use std::collections::HashMap;
use std::time::Duration;

use super::provider::{ops, MetricsProvider};

#[derive(Debug, Default)]
pub struct FakeProvider {
    pub sample: Sample,
    pub fail_on: Option<&'static str>,
    pub calls: HashMap<&'static str, usize>,
    pub windows: Vec<Duration>,
    pub disk_paths: Vec<String>,
}

impl FakeProvider {
    pub fn new(sample: Sample) -> Self {
        Self {
            sample,
            ..Self::default()
        }
    }

    pub fn failing(op: &'static str) -> Self {
        Self {
            fail_on: Some(op),
            ..Self::default()
        }
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.get(op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.values().sum()
    }

    fn record(&mut self, op: &'static str) -> Result<()> {
        *self.calls.entry(op).or_insert(0) += 1;
        if self.fail_on == Some(op) {
            return Err(Error::metrics(op, "injected failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl MetricsProvider for FakeProvider {
    async fn cpu_percent(&mut self, window: Duration) -> Result<f64> {
        self.windows.push(window);
        self.record(ops::CPU_PERCENT)?;
        Ok(self.sample.cpu_percent)
    }

    fn cpu_count(&mut self) -> Result<usize> {
        self.record(ops::CPU_COUNTS)?;
        Ok(self.sample.cpu_count)
    }

    fn virtual_memory(&mut self) -> Result<MemoryUsage> {
        self.record(ops::VIRTUAL_MEMORY)?;
        Ok(self.sample.memory)
    }

    fn swap_memory(&mut self) -> Result<MemoryUsage> {
        self.record(ops::SWAP_MEMORY)?;
        Ok(self.sample.swap)
    }

    fn disk_usage(&mut self, path: &str) -> Result<DiskUsage> {
        self.disk_paths.push(path.to_string());
        self.record(ops::DISK_USAGE)?;
        Ok(self.sample.disk)
    }

    fn uptime(&mut self) -> Result<u64> {
        self.record(ops::UPTIME)?;
        Ok(self.sample.uptime)
    }
}
