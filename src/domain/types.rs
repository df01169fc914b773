// ==========================================
// 工房排班导入 - 领域类型定义
// ==========================================
// 职责: 天数/工房编号常量、目标周枚举、位掩码工具
// 红线: 天数 (cycle) 对外一律 1 起算
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 每周天数
pub const CYCLES_PER_WEEK: u8 = 7;

/// 每天工房数量硬上限
pub const MAX_WORKSHOPS: usize = 4;

/// 单周 7 位掩码
pub const WEEK_MASK: u32 = 0x7F;

/// 内部时段偏移 → 外部绝对小时的相位差
pub const HOUR_PHASE_OFFSET: u32 = 17;

/// 休息日标记
pub const REST_MARKER: &str = "休息";

// ==========================================
// 目标周 (Week Target)
// ==========================================
// 14 位休息掩码: 低 7 位本周, 高 7 位下周
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekTarget {
    ThisWeek, // 本周
    NextWeek, // 下周
}

impl WeekTarget {
    pub fn from_next_week(next_week: bool) -> Self {
        if next_week {
            WeekTarget::NextWeek
        } else {
            WeekTarget::ThisWeek
        }
    }

    /// 目标周在 14 位掩码中的位移
    pub fn shift(self) -> u32 {
        match self {
            WeekTarget::ThisWeek => 0,
            WeekTarget::NextWeek => CYCLES_PER_WEEK as u32,
        }
    }

    /// 周内天数 (1..=7) → 双周天数 (1..=14)
    pub fn absolute_cycle(self, cycle: u8) -> u8 {
        cycle + self.shift() as u8
    }
}

impl fmt::Display for WeekTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekTarget::ThisWeek => write!(f, "THIS_WEEK"),
            WeekTarget::NextWeek => write!(f, "NEXT_WEEK"),
        }
    }
}

/// 天数是否落在 1..=7
pub fn is_valid_cycle(cycle: u32) -> bool {
    (1..=CYCLES_PER_WEEK as u32).contains(&cycle)
}

/// 天数对应的掩码位（调用方保证 cycle 在 1..=7）
pub fn cycle_bit(cycle: u8) -> u32 {
    1u32 << (cycle - 1)
}

/// 最高置位下标，mask 为 0 时返回 None
pub fn highest_set_bit(mask: u32) -> Option<u32> {
    if mask == 0 {
        None
    } else {
        Some(31 - mask.leading_zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_target_absolute_cycle() {
        assert_eq!(WeekTarget::ThisWeek.absolute_cycle(3), 3);
        assert_eq!(WeekTarget::NextWeek.absolute_cycle(3), 10);
        assert_eq!(WeekTarget::NextWeek.absolute_cycle(7), 14);
    }

    #[test]
    fn test_cycle_bit_and_range() {
        assert_eq!(cycle_bit(1), 0b0000001);
        assert_eq!(cycle_bit(7), 0b1000000);
        assert!(is_valid_cycle(1));
        assert!(is_valid_cycle(7));
        assert!(!is_valid_cycle(0));
        assert!(!is_valid_cycle(8));
    }

    #[test]
    fn test_highest_set_bit() {
        assert_eq!(highest_set_bit(0), None);
        assert_eq!(highest_set_bit(0b1), Some(0));
        assert_eq!(highest_set_bit(0b1111101), Some(6));
        assert_eq!(highest_set_bit(0b0011100), Some(4));
    }

    #[test]
    fn test_week_target_display() {
        assert_eq!(WeekTarget::ThisWeek.to_string(), "THIS_WEEK");
        assert_eq!(WeekTarget::from_next_week(true), WeekTarget::NextWeek);
    }
}
