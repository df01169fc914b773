// ==========================================
// 工房排班导入 - 排班文本解析器
// ==========================================
// 职责: 排班文本 → WeekPlan
// 格式: `D<天数>: 休息` 或 `D<天数>: <N>×<物品>[,|、<物品>]*`
// 红线: 尽力解析, 单行错误只记录不中断
// ==========================================

use crate::domain::plan::{AddOutcome, BayPlan, DayPlan, WeekPlan};
use crate::domain::types::{is_valid_cycle, REST_MARKER};
use crate::importer::error::{ParseError, ParseErrorKind};
use crate::importer::item_catalog::ItemCatalog;
use tracing::{debug, info, instrument, warn};

const CYCLE_PREFIX: char = 'D';
const COLON_SEPARATORS: [char; 2] = [':', '：'];
const REPEAT_SEPARATOR: char = '×';
const TASK_SEPARATORS: [char; 2] = [',', '、'];

/// 单行解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDirective {
    /// 当日休息
    Rest { cycle: u32 },
    /// 前 repeat 个工房生产 tasks
    Tasks {
        cycle: u32,
        repeat: usize,
        tasks: String,
    },
}

impl LineDirective {
    pub fn cycle(&self) -> u32 {
        match self {
            LineDirective::Rest { cycle } | LineDirective::Tasks { cycle, .. } => *cycle,
        }
    }
}

/// 拆出开头的连续 ASCII 数字
fn split_digits(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(s.split_at(end))
    }
}

/// 从 `D` 之后的位置尝试匹配指令
fn match_directive(after_prefix: &str) -> Option<LineDirective> {
    let (cycle_digits, rest) = split_digits(after_prefix)?;
    let cycle = cycle_digits.parse::<u32>().ok()?;

    let rest = rest.trim_start().strip_prefix(COLON_SEPARATORS)?.trim_start();
    if rest.starts_with(REST_MARKER) {
        return Some(LineDirective::Rest { cycle });
    }

    let (repeat_digits, rest) = split_digits(rest)?;
    let repeat = repeat_digits.parse::<usize>().ok()?;

    let tasks = rest.trim_start().strip_prefix(REPEAT_SEPARATOR)?.trim();
    if tasks.is_empty() {
        return None;
    }

    Some(LineDirective::Tasks {
        cycle,
        repeat,
        tasks: tasks.to_string(),
    })
}

/// 解析单行
///
/// 行内任意位置的 `D<数字>` 均可作为起点，取第一个匹配成功者
pub fn parse_line(line: &str) -> Result<LineDirective, ParseErrorKind> {
    line.match_indices(CYCLE_PREFIX)
        .find_map(|(pos, prefix)| match_directive(&line[pos + prefix.len()..]))
        .ok_or(ParseErrorKind::MalformedLine)
}

/// 拆分物品列表（`,` 或 `、` 分隔, 去除空白与空项）
pub fn split_tasks(tasks: &str) -> impl Iterator<Item = &str> {
    tasks
        .split(TASK_SEPARATORS)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// 解析结果：整周安排 + 逐行错误
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub week: WeekPlan,
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    pub fn into_parts(self) -> (WeekPlan, Vec<ParseError>) {
        (self.week, self.errors)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// 构建中的单日安排（记录首行用于错误定位）
struct PendingDay {
    day: DayPlan,
    line_number: usize,
    line: String,
}

pub struct ScheduleParser<'a> {
    catalog: &'a ItemCatalog,
}

impl<'a> ScheduleParser<'a> {
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        Self { catalog }
    }

    /// 解析排班文本
    ///
    /// 流程:
    /// 1) 按行拆分, 跳过空行
    /// 2) 天数变化时把上一天写入 WeekPlan（同天合并）
    /// 3) 休息行标记休息日; 任务行构建工房并按重复数复制
    /// 4) 末行之后写入最后一天
    #[instrument(skip_all, fields(chars = text.len()))]
    pub fn parse(&self, text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        let mut pending: Option<PendingDay> = None;

        for (idx, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            let line_number = idx + 1;

            let directive = match parse_line(line) {
                Ok(directive) => directive,
                Err(kind) => {
                    warn!(line_number, line, "无效的行格式");
                    outcome.errors.push(ParseError::new(line_number, line, kind));
                    continue;
                }
            };

            let cycle = directive.cycle();
            if !is_valid_cycle(cycle) {
                warn!(line_number, cycle, "天数超出 1-7");
                outcome.errors.push(ParseError::new(
                    line_number,
                    line,
                    ParseErrorKind::InvalidCycleRange(cycle),
                ));
                continue;
            }
            let cycle = cycle as u8;

            if pending.as_ref().map(|p| p.day.cycle()) != Some(cycle) {
                if let Some(done) = pending.take() {
                    Self::flush(&mut outcome, done);
                }
            }
            let current = pending.get_or_insert_with(|| PendingDay {
                day: DayPlan::new(cycle),
                line_number,
                line: line.to_string(),
            });

            match directive {
                LineDirective::Rest { .. } => {
                    debug!(cycle, "休息日");
                    current.day.set_rest();
                }
                LineDirective::Tasks { repeat, tasks, .. } => {
                    let bay = self.build_bay(&tasks, line_number, line, &mut outcome.errors);
                    if let Err(e) = current.day.add_bays(repeat, bay) {
                        warn!(line_number, cycle, error = %e, "工房安排被拒绝");
                        outcome.errors.push(ParseError::new(line_number, line, e.into()));
                    }
                }
            }
        }

        if let Some(done) = pending.take() {
            Self::flush(&mut outcome, done);
        }

        info!(
            days = outcome.week.len(),
            occupancy_mask = outcome.week.occupancy_mask(),
            errors = outcome.errors.len(),
            "排班文本解析完成"
        );
        outcome
    }

    /// 按物品列表构建单个工房，未识别的物品跳过并记录
    ///
    /// 物品列表恰为 `休息` 时返回休息工房
    pub fn build_bay(
        &self,
        tasks: &str,
        line_number: usize,
        line: &str,
        errors: &mut Vec<ParseError>,
    ) -> BayPlan {
        if tasks.trim() == REST_MARKER {
            return BayPlan::rest();
        }

        let mut bay = BayPlan::new();

        for token in split_tasks(tasks) {
            match self.catalog.resolve(token) {
                Some(entry) => {
                    bay.push(entry);
                }
                None => {
                    warn!(line_number, item = token, "无法找到物品数据");
                    errors.push(ParseError::new(
                        line_number,
                        line,
                        ParseErrorKind::UnknownItem(token.to_string()),
                    ));
                }
            }
        }

        bay
    }

    fn flush(outcome: &mut ParseOutcome, pending: PendingDay) {
        let cycle = pending.day.cycle();
        match outcome.week.add(pending.day) {
            Ok(AddOutcome::Merged) => debug!(cycle, "同一天安排已合并"),
            Ok(AddOutcome::Skipped) => debug!(cycle, "空安排已跳过"),
            Ok(AddOutcome::Inserted) => {}
            Err(e) => {
                warn!(cycle, error = %e, "单日安排被丢弃");
                outcome
                    .errors
                    .push(ParseError::new(pending.line_number, pending.line, e.into()));
            }
        }
    }
}
