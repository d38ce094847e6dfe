/// 日志初始化
///
/// 诊断信息写入 stderr，每行以紧凑时间戳开头

use chrono::Utc;
use common::utils::log_stamp;
use tracing::Subscriber;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime, MakeWriter};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// 输出 `{年}/{天}@{beat}` 时间戳
#[derive(Debug, Clone, Copy, Default)]
pub struct BeatTimer;

impl FormatTime for BeatTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", log_stamp(&Utc::now()))
    }
}

/// 构建 `{时间戳} {消息}` 格式的订阅者
pub fn subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_timer(BeatTimer)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .with_env_filter(filter)
        .finish()
}

/// 可以通过环境变量 RUST_LOG 设置日志级别，例如 RUST_LOG=debug
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    subscriber(std::io::stderr, filter).init();
}

#[cfg(test)]
pub mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    /// 收集日志输出的内存缓冲区
    #[derive(Clone, Default)]
    pub struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        pub fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
