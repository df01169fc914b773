// ==========================================
// 工房排班导入 - 日历状态
// ==========================================
// 职责: 外部日历快照（当前进行中的天数 + 14 位休息掩码）
// 红线: 核心只读, 新掩码交由外部协作方写回
// ==========================================

use crate::domain::types::{is_valid_cycle, WeekTarget, CYCLES_PER_WEEK, WEEK_MASK};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    pub cycle_in_progress: u8, // 当前进行中的天数（1..=7）
    pub rest_mask14: u16,      // bit0-6 本周休息日, bit7-13 下周休息日
}

impl CalendarState {
    pub fn new(cycle_in_progress: u8, rest_mask14: u16) -> Self {
        Self {
            cycle_in_progress,
            rest_mask14,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_cycle(self.cycle_in_progress as u32)
    }

    /// 目标周的 7 位休息掩码
    pub fn rest_mask7(&self, target: WeekTarget) -> u32 {
        (self.rest_mask14 as u32 >> target.shift()) & WEEK_MASK
    }

    /// 不可再改动的天数掩码
    ///
    /// - 本周: 1..=cycle_in_progress 已过
    /// - 下周: 无
    pub fn forbidden_mask(&self, target: WeekTarget) -> u32 {
        match target {
            WeekTarget::NextWeek => 0,
            WeekTarget::ThisWeek => (1u32 << self.cycle_in_progress.min(CYCLES_PER_WEEK)) - 1,
        }
    }

    /// 用新的 7 位掩码替换目标周, 另一周保持不变
    pub fn with_rest_mask7(&self, target: WeekTarget, mask7: u32) -> u16 {
        let shift = target.shift();
        let keep = self.rest_mask14 as u32 & !(WEEK_MASK << shift);
        (keep | ((mask7 & WEEK_MASK) << shift)) as u16
    }
}
