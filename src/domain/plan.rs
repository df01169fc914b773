// ==========================================
// 工房排班导入 - 排班计划领域模型
// ==========================================
// 职责: 时段 / 工房 / 单日 / 整周 四级计划结构
// 红线: 单日最多 4 个工房, 休息日不得混入普通工房
// 红线: 整周按天数递增顺序填充
// ==========================================

use crate::domain::catalog::CatalogEntry;
use crate::domain::types::{cycle_bit, is_valid_cycle, MAX_WORKSHOPS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// 计划结构错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("无法将工房安排添加至休息日")]
    TaskOnRestDay,

    #[error("无效的天数指定: {0}")]
    CycleOutOfRange(u8),

    #[error("无效的天内安排: D{0} 出现在更晚的天数之后")]
    OutOfOrderCycle(u8),
}

// ==========================================
// SlotAssignment - 时段安排
// ==========================================
// start_hour 为工房内相对偏移（0 起算），由前序物品耗时累加得出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub start_hour: u32,
    pub item_id: u32,
}

// ==========================================
// BayPlan - 单个工房的当日安排
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BayPlan {
    slots: Vec<SlotAssignment>,
    is_rest: bool,
    total_hours: u32,
}

impl BayPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// 休息工房（无时段）
    pub fn rest() -> Self {
        Self {
            is_rest: true,
            ..Self::default()
        }
    }

    /// 追加一个物品，起始时段为当前累计耗时（累计值饱和于 u32::MAX）
    ///
    /// # 返回
    /// - Some(SlotAssignment): 新增的时段
    /// - None: 休息工房不接受物品
    pub fn push(&mut self, entry: &CatalogEntry) -> Option<SlotAssignment> {
        if self.is_rest {
            return None;
        }

        let slot = SlotAssignment {
            start_hour: self.total_hours,
            item_id: entry.item_id,
        };
        self.slots.push(slot);
        self.total_hours = self.total_hours.saturating_add(entry.duration_hours);
        Some(slot)
    }

    pub fn slots(&self) -> &[SlotAssignment] {
        &self.slots
    }

    pub fn is_rest(&self) -> bool {
        self.is_rest
    }

    /// 已排物品总耗时（小时）
    pub fn total_hours(&self) -> u32 {
        self.total_hours
    }
}

// ==========================================
// DayPlan - 单日安排
// ==========================================
// 由一行或两行文本增量构建:
// - 第一行: 前 N 个工房共享同一物品列表
// - 第二行: 补齐剩余 (4 - N) 个工房
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    cycle: u8,
    bays: Vec<BayPlan>,
    is_rest: bool,
}

impl DayPlan {
    pub fn new(cycle: u8) -> Self {
        Self {
            cycle,
            bays: Vec::new(),
            is_rest: false,
        }
    }

    /// 标记为休息日：清空已有安排, 填入 4 个休息工房
    pub fn set_rest(&mut self) {
        self.is_rest = true;
        self.bays.clear();
        self.bays.extend(std::iter::repeat(BayPlan::rest()).take(MAX_WORKSHOPS));
    }

    /// 按行追加工房
    ///
    /// # 参数
    /// - repeat: 该行声明的工房重复数（仅对当日第一行生效）
    /// - bay: 该行解析出的工房安排
    ///
    /// # 返回
    /// - Ok(usize): 实际追加的工房数
    /// - Err(PlanError::TaskOnRestDay): 当日已标记休息
    pub fn add_bays(&mut self, repeat: usize, bay: BayPlan) -> Result<usize, PlanError> {
        if self.is_rest {
            return Err(PlanError::TaskOnRestDay);
        }

        let count = if self.bays.is_empty() {
            repeat.min(MAX_WORKSHOPS)
        } else {
            MAX_WORKSHOPS.saturating_sub(self.bays.len())
        };

        self.bays.extend(std::iter::repeat(bay).take(count));
        Ok(count)
    }

    /// 合并同一天的另一份安排，超过 4 个的尾部工房直接丢弃
    pub fn merge_with(&mut self, other: DayPlan) {
        self.bays.extend(other.bays);
        self.bays.truncate(MAX_WORKSHOPS);
    }

    /// 取指定工房的安排；工房数不足时沿用最后一个工房（溢出复用）
    pub fn bay_or_last(&self, index: usize) -> Option<&BayPlan> {
        self.bays.get(index).or_else(|| self.bays.last())
    }

    pub fn cycle(&self) -> u8 {
        self.cycle
    }

    pub fn bays(&self) -> &[BayPlan] {
        &self.bays
    }

    pub fn is_rest(&self) -> bool {
        self.is_rest
    }

    pub fn is_empty(&self) -> bool {
        self.bays.is_empty()
    }
}

/// WeekPlan::add 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted, // 新增一天
    Merged,   // 合并进已有的同一天
    Skipped,  // 空安排, 未写入
}

// ==========================================
// WeekPlan - 整周安排
// ==========================================
// occupancy_mask 第 (cycle-1) 位置位 ⇔ days 含该天
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekPlan {
    days: BTreeMap<u8, DayPlan>,
    occupancy_mask: u32,
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一天的安排
    ///
    /// 规则:
    /// 1) 空安排直接跳过
    /// 2) 该天已存在 → 合并
    /// 3) 否则要求该天及之后的天数均未填充（按天数递增填充）
    pub fn add(&mut self, day: DayPlan) -> Result<AddOutcome, PlanError> {
        if day.is_empty() {
            return Ok(AddOutcome::Skipped);
        }

        let cycle = day.cycle();
        if !is_valid_cycle(cycle as u32) {
            return Err(PlanError::CycleOutOfRange(cycle));
        }

        let bit = cycle_bit(cycle);
        if self.occupancy_mask & bit != 0 {
            if let Some(existing) = self.days.get_mut(&cycle) {
                existing.merge_with(day);
                return Ok(AddOutcome::Merged);
            }
        }

        if self.occupancy_mask & !(bit - 1) != 0 {
            return Err(PlanError::OutOfOrderCycle(cycle));
        }

        self.days.insert(cycle, day);
        self.occupancy_mask |= bit;
        Ok(AddOutcome::Inserted)
    }

    /// 按天数递增遍历
    pub fn days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.values()
    }

    pub fn get(&self, cycle: u8) -> Option<&DayPlan> {
        self.days.get(&cycle)
    }

    pub fn occupancy_mask(&self) -> u32 {
        self.occupancy_mask
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
