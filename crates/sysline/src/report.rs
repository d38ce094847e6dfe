/// 状态行格式化
/// 
/// 输出格式对下游按固定列截取的状态栏是稳定契约：
/// `@{beat}\t{host}\tcpu{g}{核数} mem{g}{GB}gb swap{g}{GB}gb disk{g}{GB}gb uptime:{时长}`

use chrono::{DateTime, TimeZone};
use common::utils::{blank_gauge, bytes_to_gb, format_uptime, gauge, status_stamp, truncate_percent};
use common::Sample;

/// 生成一行状态（不含换行符）
pub fn status_line<Tz: TimeZone>(hostname: &str, sample: &Sample, now: &DateTime<Tz>) -> String {
    let cpu_gauge = gauge(truncate_percent(sample.cpu_percent));
    let mem_gauge = gauge(truncate_percent(sample.memory.used_percent));
    let swap_gauge = if sample.swap.total > 0 {
        gauge(truncate_percent(sample.swap.used_percent))
    } else {
        blank_gauge()
    };
    let disk_gauge = gauge(truncate_percent(sample.disk.used_percent));

    format!(
        "{}\t{}\tcpu{}{} mem{}{}gb swap{}{}gb disk{}{}gb uptime:{}",
        status_stamp(now),
        hostname,
        cpu_gauge,
        sample.cpu_count,
        mem_gauge,
        bytes_to_gb(sample.memory.total),
        swap_gauge,
        bytes_to_gb(sample.swap.total),
        disk_gauge,
        bytes_to_gb(sample.disk.total),
        format_uptime(sample.uptime),
    )
}
