/// 程序入口逻辑
/// 
/// 解析参数、解析主机名、构建运行配置并驱动采样循环

use common::Result;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

use crate::cli::{self, Command, VERSION};
use crate::config;
use crate::metrics::MetricsProvider;
use crate::runner;

pub async fn execute<I, T, H, P, W>(
    args: I,
    resolve_hostname: H,
    provider: &mut P,
    out: &mut W,
) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    H: FnOnce() -> Result<String>,
    P: MetricsProvider + ?Sized,
    W: Write,
{
    let (poll_interval, time_limit) = match cli::parse(args)? {
        Command::Version => {
            writeln!(out, "{}", VERSION)?;
            return Ok(());
        }
        Command::Print(text) => {
            write!(out, "{}", text)?;
            return Ok(());
        }
        Command::Run {
            poll_interval,
            time_limit,
        } => (poll_interval, time_limit),
    };

    let hostname = resolve_hostname()?;
    let cfg = config::build(&hostname, poll_interval, time_limit);
    debug!("Config: {:?}", cfg);

    let samples = runner::run(&cfg, provider, out).await?;
    debug!("Done after {} samples", samples);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{fake::FakeProvider, provider::ops};
    use common::{Error, MemoryUsage, Sample};

    fn hostname() -> Result<String> {
        Ok("build-server-eu-west-07.local".to_string())
    }

    fn no_hostname() -> Result<String> {
        Err(Error::Hostname("lookup failed".to_string()))
    }

    #[tokio::test]
    async fn test_version_skips_everything() {
        let mut fake = FakeProvider::default();
        let mut out = Vec::new();

        execute(["sysline", "version"], no_hostname, &mut fake, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", VERSION));
        assert_eq!(fake.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_single_sample() {
        let mut fake = FakeProvider::new(Sample {
            cpu_count: 2,
            memory: MemoryUsage {
                total: 4 << 30,
                used_percent: 100.0,
            },
            ..Sample::default()
        });
        let mut out = Vec::new();

        execute(["sysline"], hostname, &mut fake, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\tbuild-ser~t-07\t"));
        assert!(text.contains(" mem====================4gb "));
        assert!(text.ends_with("uptime:0s\n"));
        assert_eq!(fake.calls(ops::UPTIME), 1);
    }

    #[tokio::test]
    async fn test_bad_argument_makes_no_provider_calls() {
        let mut fake = FakeProvider::default();
        let mut out = Vec::new();

        let err = execute(["sysline", "soon"], hostname, &mut fake, &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("`soon`"));
        assert_eq!(fake.total_calls(), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_hostname_failure() {
        let mut fake = FakeProvider::default();
        let mut out = Vec::new();

        let err = execute(["sysline"], no_hostname, &mut fake, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Hostname(_)));
        assert_eq!(fake.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_names_operation() {
        let mut fake = FakeProvider::failing(ops::UPTIME);
        let mut out = Vec::new();

        let err = execute(["sysline"], hostname, &mut fake, &mut out)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "host.uptime: injected failure");
        assert!(out.is_empty());
    }
}
