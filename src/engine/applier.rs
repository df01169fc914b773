// ==========================================
// 工房排班导入 - 排班应用引擎
// ==========================================
// 职责: 周计划 → 有序写入指令（工房物品 + 休息掩码）
// 输入: WeekPlan + 日历快照 + 目标周
// 输出: AppliedSchedule（纯数据, 尚未写入外部）
// 红线: 休息掩码求解失败时不产生任何写入指令
// 红线: 指令顺序固定为 天数升序 → 工房升序 → 时段升序
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::calendar::CalendarState;
use crate::domain::plan::{DayPlan, WeekPlan};
use crate::domain::types::{WeekTarget, HOUR_PHASE_OFFSET};
use crate::engine::error::SchedulingResult;
use crate::engine::rest_solver::solve_rest_days;
use serde::Serialize;
use tracing::{info, instrument};

/// 单条工房写入指令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleItem {
    pub cycle: u8,       // 双周天数 1..=14
    pub workshop: u8,    // 工房下标 0..=3
    pub start_hour: u32, // 工房内相对偏移
    pub item_id: u32,
}

impl ScheduleItem {
    /// 外部日历使用的绝对小时
    pub fn external_hour(&self) -> u32 {
        (self.start_hour % 24 + HOUR_PHASE_OFFSET) % 24
    }
}

/// 应用结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedSchedule {
    pub target: WeekTarget,
    pub rest_mask14: u16,
    pub rest_mask_changed: bool,
    pub items: Vec<ScheduleItem>,
}

// ==========================================
// ScheduleApplier - 排班应用引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ScheduleApplier {
    config: PlannerConfig,
}

impl ScheduleApplier {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 生成整周写入指令
    ///
    /// # 参数
    /// - week: 周计划（只读）
    /// - calendar: 日历快照
    /// - next_week: 是否写入下周
    ///
    /// # 返回
    /// - Ok(AppliedSchedule): 休息掩码 + 有序指令
    /// - Err(SchedulingError): 休息日求解失败, 无指令
    #[instrument(skip_all, fields(
        days = week.len(),
        occupancy = week.occupancy_mask(),
        cycle_in_progress = calendar.cycle_in_progress,
        next_week = next_week
    ))]
    pub fn plan(
        &self,
        week: &WeekPlan,
        calendar: &CalendarState,
        next_week: bool,
    ) -> SchedulingResult<AppliedSchedule> {
        let target = WeekTarget::from_next_week(next_week);
        let decision = solve_rest_days(week.occupancy_mask(), calendar, target)?;

        let mut items = Vec::new();
        for day in week.days() {
            self.emit_day(day, target.absolute_cycle(day.cycle()), &mut items);
        }

        info!(
            week = %target,
            rest_mask14 = decision.rest_mask14,
            rest_mask_changed = decision.changed,
            items = items.len(),
            "周计划应用指令生成完成"
        );

        Ok(AppliedSchedule {
            target,
            rest_mask14: decision.rest_mask14,
            rest_mask_changed: decision.changed,
            items,
        })
    }

    /// 将单日安排写入任意显示中的天数, 不处理休息掩码
    ///
    /// # 参数
    /// - day: 单日安排
    /// - target_cycle: 双周天数 1..=14
    pub fn plan_day(&self, day: &DayPlan, target_cycle: u8) -> Vec<ScheduleItem> {
        let mut items = Vec::new();
        self.emit_day(day, target_cycle, &mut items);
        items
    }

    fn emit_day(&self, day: &DayPlan, cycle: u8, items: &mut Vec<ScheduleItem>) {
        for workshop in self.config.active_workshops() {
            let Some(bay) = day.bay_or_last(workshop) else {
                break;
            };
            items.extend(bay.slots().iter().map(|slot| ScheduleItem {
                cycle,
                workshop: workshop as u8,
                start_hour: slot.start_hour,
                item_id: slot.item_id,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogEntry;
    use crate::domain::plan::BayPlan;
    use crate::engine::error::SchedulingError;

    fn bay(items: &[(u32, u32)]) -> BayPlan {
        let mut b = BayPlan::new();
        for &(id, hours) in items {
            b.push(&CatalogEntry::new(format!("item{}", id), id, hours));
        }
        b
    }

    fn week_with(days: Vec<DayPlan>) -> WeekPlan {
        let mut week = WeekPlan::new();
        for day in days {
            week.add(day).unwrap();
        }
        week
    }

    #[test]
    fn test_external_hour_phase() {
        let item = ScheduleItem {
            cycle: 1,
            workshop: 0,
            start_hour: 0,
            item_id: 1,
        };
        assert_eq!(item.external_hour(), 17);
        let item = ScheduleItem {
            start_hour: 10,
            ..item
        };
        assert_eq!(item.external_hour(), 3);
        let item = ScheduleItem {
            start_hour: u32::MAX,
            ..item
        };
        // u32::MAX % 24 == 15
        assert_eq!(item.external_hour(), 8);
    }

    #[test]
    fn test_spillover_reuses_last_bay() {
        let mut day = DayPlan::new(2);
        day.add_bays(1, bay(&[(7, 4), (8, 6)])).unwrap();

        let applier = ScheduleApplier::default();
        let items = applier.plan_day(&day, 9);

        assert_eq!(items.len(), 8);
        for (workshop, pair) in items.chunks(2).enumerate() {
            assert_eq!(pair[0].workshop as usize, workshop);
            assert_eq!(pair[0].cycle, 9);
            assert_eq!((pair[0].item_id, pair[0].start_hour), (7, 0));
            assert_eq!((pair[1].item_id, pair[1].start_hour), (8, 4));
        }
    }

    #[test]
    fn test_ignore_last_applies_after_spillover() {
        let mut day = DayPlan::new(1);
        day.add_bays(1, bay(&[(1, 4)])).unwrap();
        day.add_bays(1, bay(&[(2, 4)])).unwrap();

        let applier = ScheduleApplier::new(PlannerConfig {
            workshop_amount: 4,
            ignore_last_workshop: true,
        });
        let items = applier.plan_day(&day, 1);
        let pairs: Vec<(u8, u32)> = items.iter().map(|i| (i.workshop, i.item_id)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_rest_bays_emit_nothing_beside_working_bays() {
        let mut day = DayPlan::new(3);
        day.add_bays(2, BayPlan::rest()).unwrap();
        day.add_bays(2, bay(&[(5, 4)])).unwrap();

        let items = ScheduleApplier::default().plan_day(&day, 3);
        let pairs: Vec<(u8, u32)> = items.iter().map(|i| (i.workshop, i.item_id)).collect();
        assert_eq!(pairs, vec![(2, 5), (3, 5)]);
    }

    #[test]
    fn test_rest_day_emits_nothing() {
        let mut day = DayPlan::new(3);
        day.set_rest();
        assert!(ScheduleApplier::default().plan_day(&day, 3).is_empty());
    }

    #[test]
    fn test_plan_orders_by_cycle_then_workshop() {
        let mut d1 = DayPlan::new(1);
        d1.add_bays(2, bay(&[(1, 4)])).unwrap();
        d1.add_bays(2, bay(&[(2, 4)])).unwrap();
        let mut d4 = DayPlan::new(4);
        d4.add_bays(4, bay(&[(3, 4)])).unwrap();
        let week = week_with(vec![d1, d4]);

        let applied = ScheduleApplier::default()
            .plan(&week, &CalendarState::new(1, 0), true)
            .unwrap();

        let seq: Vec<(u8, u8, u32)> = applied
            .items
            .iter()
            .map(|i| (i.cycle, i.workshop, i.item_id))
            .collect();
        assert_eq!(
            seq,
            vec![
                (8, 0, 1),
                (8, 1, 1),
                (8, 2, 2),
                (8, 3, 2),
                (11, 0, 3),
                (11, 1, 3),
                (11, 2, 3),
                (11, 3, 3),
            ]
        );
        assert!(!applied.rest_mask_changed);
        assert_eq!(applied.target, WeekTarget::NextWeek);
    }

    #[test]
    fn test_plan_is_deterministic() {
        let mut d2 = DayPlan::new(2);
        d2.add_bays(3, bay(&[(1, 4), (2, 6)])).unwrap();
        let week = week_with(vec![d2]);
        let calendar = CalendarState::new(1, 0b0000011);
        let applier = ScheduleApplier::default();

        let first = applier.plan(&week, &calendar, false).unwrap();
        let second = applier.plan(&week, &calendar, false).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.rest_mask14, 0b1000001);
        assert!(first.rest_mask_changed);
    }

    #[test]
    fn test_plan_failure_emits_no_items() {
        let mut d2 = DayPlan::new(2);
        d2.add_bays(4, bay(&[(1, 4)])).unwrap();
        let week = week_with(vec![d2]);

        let result =
            ScheduleApplier::default().plan(&week, &CalendarState::new(7, 0b0000011), false);
        assert!(matches!(
            result,
            Err(SchedulingError::RestDayAlreadyElapsed { .. })
        ));
    }

    #[test]
    fn test_zero_workshops_emits_nothing() {
        let mut d1 = DayPlan::new(1);
        d1.add_bays(4, bay(&[(1, 4)])).unwrap();
        let applier = ScheduleApplier::new(PlannerConfig {
            workshop_amount: 0,
            ignore_last_workshop: false,
        });
        assert!(applier.plan_day(&d1, 1).is_empty());
    }
}
