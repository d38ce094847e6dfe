/// 运行配置

use common::{utils::shorten_hostname, Error, Result, RunConfig};
use std::time::Duration;

/// 获取本机主机名
pub fn system_hostname() -> Result<String> {
    let name = hostname::get().map_err(|e| Error::Hostname(e.to_string()))?;
    name.into_string()
        .map_err(|raw| Error::Hostname(format!("not valid UTF-8: {:?}", raw)))
}

/// 由主机名和命令行参数构建运行配置
pub fn build(hostname: &str, poll_interval: Duration, time_limit: Duration) -> RunConfig {
    RunConfig {
        hostname: shorten_hostname(hostname),
        poll_interval,
        time_limit,
    }
}
