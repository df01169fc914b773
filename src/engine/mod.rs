// ==========================================
// 工房排班导入 - 引擎层
// ==========================================
// 职责: 休息日求解 + 周计划应用 + 外部协作方提交
// 红线: 引擎只产出指令, 写入外部一律经由 WorkshopAgent
// ==========================================

pub mod agent;
pub mod applier;
pub mod error;
pub mod rest_solver;

// 重导出核心引擎
pub use agent::{apply_day, apply_week, commit, InMemoryAgent, ScheduledCall, WorkshopAgent};
pub use applier::{AppliedSchedule, ScheduleApplier, ScheduleItem};
pub use error::{SchedulingError, SchedulingResult};
pub use rest_solver::{solve_rest_days, RestDayDecision};
