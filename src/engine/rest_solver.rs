// ==========================================
// 工房排班导入 - 休息日求解
// ==========================================
// 职责: 计划占用的天数与现有休息日冲突时, 重新挑选休息日
// 输入: 周占用掩码 + 日历快照 + 目标周
// 输出: 新的 14 位休息掩码
// 红线: 已经过去的天数不得改动; 另一周的 7 位保持不变
// ==========================================

use crate::domain::calendar::CalendarState;
use crate::domain::types::{highest_set_bit, WeekTarget, WEEK_MASK};
use crate::engine::error::{SchedulingError, SchedulingResult};
use serde::Serialize;
use tracing::debug;

/// 求解结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestDayDecision {
    pub rest_mask14: u16,
    /// 与当前掩码相比是否有改动
    pub changed: bool,
    /// 目标周最终的 7 位休息掩码
    pub rest_mask7: u32,
}

/// 计算目标周的休息日
///
/// 规则:
/// 1) 现有休息日与占用不冲突 → 原样保留
/// 2) 冲突 → 候选 = 第 1 天 + 最晚的空闲天, 必须恰为两天
/// 3) 候选相对现有掩码的变动位不得落在已过天数
///
/// # 参数
/// - occupancy_mask: 周计划占用掩码（bit i ⇔ 第 i+1 天）
/// - calendar: 日历快照
/// - target: 目标周
pub fn solve_rest_days(
    occupancy_mask: u32,
    calendar: &CalendarState,
    target: WeekTarget,
) -> SchedulingResult<RestDayDecision> {
    if !calendar.is_valid() {
        return Err(SchedulingError::InvalidCalendarState(format!(
            "cycle_in_progress={} 不在 1~7 之间",
            calendar.cycle_in_progress
        )));
    }

    let occupancy = occupancy_mask & WEEK_MASK;
    let current = calendar.rest_mask7(target);

    if current & occupancy == 0 {
        return Ok(RestDayDecision {
            rest_mask14: calendar.rest_mask14,
            changed: false,
            rest_mask7: current,
        });
    }

    debug!(
        week = %target,
        occupancy = occupancy,
        current_rest = current,
        "休息日与计划冲突, 重新选择"
    );

    let free = !occupancy & WEEK_MASK;
    let candidate = match highest_set_bit(free) {
        Some(bit) => (1u32 << bit) | 1,
        None => 1,
    };
    if candidate.count_ones() != 2 {
        return Err(SchedulingError::InsufficientFreeCycles {
            occupancy_mask: occupancy,
        });
    }

    let forbidden = calendar.forbidden_mask(target);
    let changed_bits = candidate ^ current;
    if changed_bits & forbidden != 0 {
        return Err(SchedulingError::RestDayAlreadyElapsed {
            changed_bits,
            forbidden_mask: forbidden,
        });
    }

    let rest_mask14 = calendar.with_rest_mask7(target, candidate);
    debug!(candidate = candidate, rest_mask14 = rest_mask14, "休息日已重新选择");

    Ok(RestDayDecision {
        rest_mask14,
        changed: rest_mask14 != calendar.rest_mask14,
        rest_mask7: candidate,
    })
}
