/// sysline - 公共库
/// 
/// 提供采样数据模型、错误处理以及状态行的格式化工具函数

pub mod errors;
pub mod models;
pub mod utils;

// 重新导出常用类型
pub use errors::{Error, Result};
pub use models::{DiskUsage, MemoryUsage, RunConfig, Sample};
