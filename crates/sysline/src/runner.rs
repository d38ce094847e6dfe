/// 采样循环
/// 
/// 单次模式只采样一次；重复模式在每次采样后休眠一个间隔，
/// 设置了时限时在休眠结束后检查已用时间

use chrono::Utc;
use common::models::constants::ROOT_MOUNT;
use common::{Result, RunConfig, Sample};
use std::io::Write;
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::metrics::MetricsProvider;
use crate::report::status_line;

/// 查询一次全部指标，任何一步失败即返回错误
pub async fn sample<P>(provider: &mut P, cfg: &RunConfig) -> Result<Sample>
where
    P: MetricsProvider + ?Sized,
{
    let cpu_percent = provider.cpu_percent(cfg.cpu_window()).await?;
    let cpu_count = provider.cpu_count()?;
    let memory = provider.virtual_memory()?;
    let swap = provider.swap_memory()?;
    let disk = provider.disk_usage(ROOT_MOUNT)?;
    let uptime = provider.uptime()?;

    Ok(Sample {
        cpu_percent,
        cpu_count,
        memory,
        swap,
        disk,
        uptime,
    })
}

/// 采样并写出一行
async fn report_once<P, W>(cfg: &RunConfig, provider: &mut P, out: &mut W) -> Result<()>
where
    P: MetricsProvider + ?Sized,
    W: Write,
{
    let sample = sample(provider, cfg).await?;
    debug!("Sample: {:?}", sample);

    writeln!(out, "{}", status_line(&cfg.hostname, &sample, &Utc::now()))?;
    out.flush()?;
    Ok(())
}

/// 运行采样循环，返回完成的采样次数
pub async fn run<P, W>(cfg: &RunConfig, provider: &mut P, out: &mut W) -> Result<u64>
where
    P: MetricsProvider + ?Sized,
    W: Write,
{
    if !cfg.is_repeating() {
        report_once(cfg, provider, out).await?;
        return Ok(1);
    }

    let started = Instant::now();
    let mut iterations = 0;
    loop {
        report_once(cfg, provider, out).await?;
        iterations += 1;

        sleep(cfg.poll_interval).await;
        if cfg.has_time_limit() && started.elapsed() > cfg.time_limit {
            debug!("Time limit reached after {} samples", iterations);
            break;
        }
    }

    Ok(iterations)
}
