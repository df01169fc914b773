// ==========================================
// 工房排班导入 - 领域模型层
// ==========================================
// 职责: 定义排班计划、物品目录、日历状态
// 红线: 不含文件读取逻辑,不含约束求解逻辑
// ==========================================

pub mod calendar;
pub mod catalog;
pub mod plan;
pub mod types;

// 重导出核心类型
pub use calendar::CalendarState;
pub use catalog::{CatalogEntry, RawCatalogRecord};
pub use plan::{AddOutcome, BayPlan, DayPlan, PlanError, SlotAssignment, WeekPlan};
pub use types::{WeekTarget, CYCLES_PER_WEEK, HOUR_PHASE_OFFSET, MAX_WORKSHOPS, WEEK_MASK};
