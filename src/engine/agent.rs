// ==========================================
// 工房排班导入 - 外部协作方接口
// ==========================================
// 职责: 定义写入外部日历的 trait, 提供提交流程
// 说明: Engine 层定义 trait, 宿主环境实现适配器
// ==========================================

use crate::domain::calendar::CalendarState;
use crate::domain::plan::{DayPlan, WeekPlan};
use crate::engine::applier::{AppliedSchedule, ScheduleApplier, ScheduleItem};
use crate::engine::error::SchedulingResult;
use serde::Serialize;
use tracing::{debug, info};

/// 工房日历协作方 Trait
///
/// # 实现说明
/// - schedule_item 的 hour 已映射为外部绝对小时 (0..=23)
/// - refresh_display 仅用于刷新视图
pub trait WorkshopAgent {
    fn cycle_in_progress(&self) -> u8;

    fn rest_mask14(&self) -> u16;

    /// # 参数
    /// - cycle: 双周天数 1..=14
    /// - workshop: 工房下标 0..=3
    /// - hour: 外部绝对小时
    fn schedule_item(&mut self, cycle: u8, workshop: u8, hour: u32, item_id: u32);

    fn set_rest_mask14(&mut self, mask: u16);

    fn refresh_display(&mut self);

    /// 读取当前日历快照
    fn calendar(&self) -> CalendarState {
        CalendarState::new(self.cycle_in_progress(), self.rest_mask14())
    }
}

/// 提交应用结果
///
/// 顺序: 休息掩码（有改动时）→ 逐条写入 → 刷新视图
pub fn commit<A: WorkshopAgent + ?Sized>(applied: &AppliedSchedule, agent: &mut A) {
    if applied.rest_mask_changed {
        agent.set_rest_mask14(applied.rest_mask14);
    }
    issue_items(&applied.items, agent);
    agent.refresh_display();

    info!(
        week = %applied.target,
        items = applied.items.len(),
        rest_mask_changed = applied.rest_mask_changed,
        "排班已提交"
    );
}

/// 读取日历 → 生成指令 → 提交
///
/// 求解失败时直接返回错误, 协作方不会收到任何调用
pub fn apply_week<A: WorkshopAgent + ?Sized>(
    applier: &ScheduleApplier,
    week: &WeekPlan,
    agent: &mut A,
    next_week: bool,
) -> SchedulingResult<AppliedSchedule> {
    let calendar = agent.calendar();
    let applied = applier.plan(week, &calendar, next_week)?;
    commit(&applied, agent);
    Ok(applied)
}

/// 写入单日安排到指定天数（不改动休息掩码）
pub fn apply_day<A: WorkshopAgent + ?Sized>(
    applier: &ScheduleApplier,
    day: &DayPlan,
    target_cycle: u8,
    agent: &mut A,
) -> Vec<ScheduleItem> {
    let items = applier.plan_day(day, target_cycle);
    issue_items(&items, agent);
    agent.refresh_display();
    items
}

fn issue_items<A: WorkshopAgent + ?Sized>(items: &[ScheduleItem], agent: &mut A) {
    for item in items {
        debug!(
            cycle = item.cycle,
            workshop = item.workshop,
            hour = item.external_hour(),
            item_id = item.item_id,
            "写入工房物品"
        );
        agent.schedule_item(item.cycle, item.workshop, item.external_hour(), item.item_id);
    }
}

// ==========================================
// InMemoryAgent - 内存协作方
// ==========================================
// 用于试运行与测试, 记录收到的全部调用
#[derive(Debug, Clone, Default, Serialize)]
pub struct InMemoryAgent {
    pub cycle_in_progress: u8,
    pub rest_mask14: u16,
    pub scheduled: Vec<ScheduledCall>,
    pub refresh_count: u32,
}

/// 一次 schedule_item 调用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledCall {
    pub cycle: u8,
    pub workshop: u8,
    pub hour: u32,
    pub item_id: u32,
}

impl InMemoryAgent {
    pub fn new(cycle_in_progress: u8, rest_mask14: u16) -> Self {
        Self {
            cycle_in_progress,
            rest_mask14,
            ..Self::default()
        }
    }
}

impl WorkshopAgent for InMemoryAgent {
    fn cycle_in_progress(&self) -> u8 {
        self.cycle_in_progress
    }

    fn rest_mask14(&self) -> u16 {
        self.rest_mask14
    }

    fn schedule_item(&mut self, cycle: u8, workshop: u8, hour: u32, item_id: u32) {
        self.scheduled.push(ScheduledCall {
            cycle,
            workshop,
            hour,
            item_id,
        });
    }

    fn set_rest_mask14(&mut self, mask: u16) {
        self.rest_mask14 = mask;
    }

    fn refresh_display(&mut self) {
        self.refresh_count += 1;
    }
}
