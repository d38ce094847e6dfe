/// 工具函数集合
/// 
/// 状态行中 gauge、主机名、开机时长和时间戳的格式化

use chrono::{DateTime, Datelike, FixedOffset, Offset, TimeZone, Timelike, Utc};

use crate::models::constants::{
    BIEL_OFFSET_SECS, GAUGE_BLANK, GAUGE_EMPTY, GAUGE_FILLED, GAUGE_WIDTH, HOSTNAME_LOCAL_SUFFIX,
    HOSTNAME_MAX_LEN, HOSTNAME_SEPARATOR, HOSTNAME_SUFFIX_LEN, VISUAL_RATIO,
};

const SECS_PER_DAY: u64 = 24 * 60 * 60;
const MILLIS_PER_BEAT: u64 = SECS_PER_DAY;

/// 字节转换为整数 GB（截断）
pub fn bytes_to_gb(bytes: u64) -> u64 {
    bytes >> 30
}

/// 使用率截断为整数百分比，超出 [0, 100] 的值被钳制
pub fn truncate_percent(percent: f64) -> u32 {
    (percent as u32).min(100)
}

/// 按百分比生成固定宽度的 gauge
pub fn gauge(percent: u32) -> String {
    let filled = (percent.min(100) / VISUAL_RATIO) as usize;
    let mut bar = String::with_capacity(GAUGE_WIDTH);
    bar.extend(std::iter::repeat(GAUGE_FILLED).take(filled));
    bar.extend(std::iter::repeat(GAUGE_EMPTY).take(GAUGE_WIDTH - filled));
    bar
}

/// 空白 gauge（无交换区时使用）
pub fn blank_gauge() -> String {
    std::iter::repeat(GAUGE_BLANK).take(GAUGE_WIDTH).collect()
}

/// 缩短主机名以适应状态栏宽度
///
/// 去掉 `.local` 后缀；超过最大长度时保留前缀和尾部，中间用分隔符连接。
pub fn shorten_hostname(hostname: &str) -> String {
    let name = hostname
        .strip_suffix(HOSTNAME_LOCAL_SUFFIX)
        .unwrap_or(hostname);

    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= HOSTNAME_MAX_LEN {
        return name.to_string();
    }

    let prefix_len = HOSTNAME_MAX_LEN - HOSTNAME_SUFFIX_LEN - 1;
    let mut short = String::with_capacity(HOSTNAME_MAX_LEN);
    short.extend(&chars[..prefix_len]);
    short.push(HOSTNAME_SEPARATOR);
    short.extend(&chars[chars.len() - HOSTNAME_SUFFIX_LEN..]);
    short
}

/// 格式化不足一天的时长，如 `0s`、`4m2s`、`3h0m5s`
pub fn format_hms(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = secs % 3600 / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// 格式化开机时长：`{周}w{天}d.{余下时长}`，为零的周/天省略
pub fn format_uptime(uptime_secs: u64) -> String {
    let days = uptime_secs / SECS_PER_DAY;
    let rest = uptime_secs % SECS_PER_DAY;
    let (weeks, days) = (days / 7, days % 7);

    let mut out = String::new();
    if weeks > 0 {
        out.push_str(&format!("{}w", weeks));
    }
    if days > 0 {
        out.push_str(&format!("{}d", days));
    }
    if !out.is_empty() {
        out.push('.');
    }
    out.push_str(&format_hms(rest));
    out
}

/// 时间戳使用的固定时区（UTC+1）
pub fn biel() -> FixedOffset {
    FixedOffset::east_opt(BIEL_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// 当日的 beat 数（一天 1000 beat）
pub fn beat<Tz: TimeZone>(time: &DateTime<Tz>) -> u32 {
    let local = time.with_timezone(&biel());
    let millis = u64::from(local.num_seconds_from_midnight()) * 1000
        + u64::from(local.nanosecond() % 1_000_000_000) / 1_000_000;
    (millis / MILLIS_PER_BEAT) as u32
}

/// 状态行时间戳，如 `@ 42`
pub fn status_stamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    format!("@{:>3}", beat(time))
}

/// 日志时间戳：`{年 % 1000}/{年内第几天}@{beat}`
pub fn log_stamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    let local = time.with_timezone(&biel());
    format!(
        "{}/{}@{}",
        local.year() % 1000,
        local.ordinal(),
        beat(time)
    )
}
