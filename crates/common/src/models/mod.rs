/// 采样数据模型
/// 
/// 单次采样的瞬时数据以及进程生命周期内不变的运行配置

use std::time::Duration;

/// 虚拟内存 / 交换区用量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryUsage {
    /// 总量（字节）
    pub total: u64,
    /// 使用率（0-100）
    pub used_percent: f64,
}

/// 文件系统用量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiskUsage {
    pub total: u64,
    pub used_percent: f64,
}

/// 一次采样
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    pub cpu_percent: f64,
    pub cpu_count: usize,
    pub memory: MemoryUsage,
    pub swap: MemoryUsage,
    pub disk: DiskUsage,
    /// 开机时长（秒）
    pub uptime: u64,
}

/// 运行配置，启动时构建一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// 显示用主机名（可能已截断）
    pub hostname: String,
    /// 采样间隔，零表示只采样一次
    pub poll_interval: Duration,
    /// 运行时限，零表示不限
    pub time_limit: Duration,
}

impl RunConfig {
    pub fn is_repeating(&self) -> bool {
        !self.poll_interval.is_zero()
    }

    pub fn has_time_limit(&self) -> bool {
        !self.time_limit.is_zero()
    }

    /// CPU 使用率的测量窗口
    pub fn cpu_window(&self) -> Duration {
        if self.poll_interval > constants::DEFAULT_CPU_WINDOW {
            self.poll_interval
        } else {
            constants::DEFAULT_CPU_WINDOW
        }
    }
}

/// 常量定义
pub mod constants {
    use std::time::Duration;

    /// 每个 gauge 字符代表的百分点
    pub const VISUAL_RATIO: u32 = 5;

    /// gauge 宽度（字符）
    pub const GAUGE_WIDTH: usize = (100 / VISUAL_RATIO) as usize;

    pub const GAUGE_FILLED: char = '=';
    pub const GAUGE_EMPTY: char = '-';
    /// 无交换区时的背景字符
    pub const GAUGE_BLANK: char = ' ';

    /// 主机名最大显示长度
    pub const HOSTNAME_MAX_LEN: usize = 14;

    /// 截断时保留的主机名尾部长度
    pub const HOSTNAME_SUFFIX_LEN: usize = 4;

    pub const HOSTNAME_SEPARATOR: char = '~';

    /// 显示前去掉的主机名后缀
    pub const HOSTNAME_LOCAL_SUFFIX: &str = ".local";

    /// 默认 CPU 测量窗口
    pub const DEFAULT_CPU_WINDOW: Duration = Duration::from_millis(100);

    /// 磁盘用量统计的挂载点
    pub const ROOT_MOUNT: &str = "/";

    /// 时间戳所用时区偏移（秒，UTC+1）
    pub const BIEL_OFFSET_SECS: i32 = 60 * 60;
}
