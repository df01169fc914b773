// ==========================================
// 工房排班导入 - 配置层
// ==========================================
// 职责: 工房数量/跳过最后工房等应用配置
// 存储: JSON 文件 + 环境变量覆写
// ==========================================

pub mod config_manager;
pub mod error;
pub mod planner_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use planner_config::PlannerConfig;
