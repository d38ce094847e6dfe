/// sysline
/// 
/// 采集本机 CPU、内存、交换区、根文件系统和开机时长，
/// 每次采样向标准输出打印一行状态，供状态栏使用

use common::Result;
use std::process::ExitCode;
use tracing::error;

mod app;
mod cli;
mod config;
mod logger;
mod metrics;
mod report;
mod runner;

use metrics::MetricsCollector;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logger::init();

    let mut collector = MetricsCollector::new();
    let mut stdout = std::io::stdout().lock();

    let result = app::execute(
        std::env::args_os(),
        config::system_hostname,
        &mut collector,
        &mut stdout,
    )
    .await;

    ExitCode::from(exit_status(result))
}

/// 成功返回 0；失败时记录诊断并返回 1
fn exit_status(result: Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
