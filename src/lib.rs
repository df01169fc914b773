// ==========================================
// 工房排班导入 - 核心库
// ==========================================
// 职责: 周排班文本 → 周计划 → 外部工房日历写入指令
// 流程: ItemCatalog 加载 → ScheduleParser 解析 → ScheduleApplier 应用
// 红线: 解析尽力而为, 应用全有或全无
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 物品目录与排班文本
pub mod importer;

// 引擎层 - 休息日求解与应用
pub mod engine;

// 配置层 - 工房配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::WeekTarget;

// 领域实体
pub use domain::{BayPlan, CalendarState, CatalogEntry, DayPlan, SlotAssignment, WeekPlan};

// 导入
pub use importer::{ItemCatalog, ParseError, ParseErrorKind, ParseOutcome, ScheduleParser};

// 引擎
pub use engine::{
    apply_week, commit, AppliedSchedule, InMemoryAgent, ScheduleApplier, ScheduleItem,
    SchedulingError, WorkshopAgent,
};

// 配置
pub use config::{ConfigManager, PlannerConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工房排班导入";
