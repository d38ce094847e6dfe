/// 命令行解析
///
/// 参数均为位置参数：`[间隔秒数 [时限秒数]]`，或单独的 `version`

use clap::{error::ErrorKind, Parser};
use common::{Error, Result};
use std::ffi::OsString;
use std::time::Duration;

/// 版本号，可在编译时通过 `SYSLINE_VERSION` 覆盖
pub const VERSION: &str = match option_env!("SYSLINE_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

const VERSION_TOKEN: &str = "version";

#[derive(Debug, Parser)]
#[command(
    name = "sysline",
    version = VERSION,
    about = "Print a one-line host status (cpu, mem, swap, disk, uptime)"
)]
struct Cli {
    /// Seconds between samples; without it a single sample is printed
    #[arg(allow_negative_numbers = true)]
    interval: Option<String>,

    /// Stop once this many seconds have elapsed
    #[arg(allow_negative_numbers = true)]
    limit: Option<String>,
}

/// 解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 打印版本号
    Version,
    /// clap 生成的帮助或版本文本
    Print(String),
    Run {
        poll_interval: Duration,
        time_limit: Duration,
    },
}

pub fn parse<I, T>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(Command::Print(e.to_string()));
        }
        Err(e) => return Err(Error::Usage(first_line(&e.to_string()))),
    };

    if cli.interval.as_deref() == Some(VERSION_TOKEN) && cli.limit.is_none() {
        return Ok(Command::Version);
    }

    let poll_interval = match cli.interval.as_deref() {
        Some(token) => seconds(token, "repeat interval in seconds")?,
        None => Duration::ZERO,
    };
    let time_limit = match cli.limit.as_deref() {
        Some(token) => seconds(token, "time limit in seconds")?,
        None => Duration::ZERO,
    };

    Ok(Command::Run {
        poll_interval,
        time_limit,
    })
}

fn seconds(token: &str, role: &'static str) -> Result<Duration> {
    token
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| Error::Config {
            token: token.to_string(),
            role,
        })
}

fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_string()
}
