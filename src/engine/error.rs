// ==========================================
// 工房排班导入 - 应用错误类型
// ==========================================
// 红线: 任何错误均在产生写入指令之前返回（全有或全无）
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("空闲天数不足, 无法腾出休息日 (占用掩码: {occupancy_mask:#09b})")]
    InsufficientFreeCycles { occupancy_mask: u32 },

    #[error(
        "无法修改已经过去的休息日 (变动位: {changed_bits:#09b}, 已过天数掩码: {forbidden_mask:#09b})"
    )]
    RestDayAlreadyElapsed {
        changed_bits: u32,
        forbidden_mask: u32,
    },

    #[error("日历状态无效: {0}")]
    InvalidCalendarState(String),
}

pub type SchedulingResult<T> = Result<T, SchedulingError>;
