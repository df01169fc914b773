// ==========================================
// 工房排班导入 - 工房配置
// ==========================================
// 职责: 工房数量上限、跳过最后工房开关、JSON 快照
// 红线: 工房数量不得超过 4
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::MAX_WORKSHOPS;
use serde::{Deserialize, Serialize};

/// 应用排班时的工房配置
///
/// 持久化为 JSON, 缺失字段取默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 实际拥有的工房数量（0~4）
    #[serde(default = "default_workshop_amount")]
    pub workshop_amount: u8,

    /// 应用时跳过最后一个工房
    #[serde(default)]
    pub ignore_last_workshop: bool,
}

fn default_workshop_amount() -> u8 {
    MAX_WORKSHOPS as u8
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            workshop_amount: default_workshop_amount(),
            ignore_last_workshop: false,
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.workshop_amount as usize > MAX_WORKSHOPS {
            return Err(ConfigError::ConfigValueError {
                key: "workshop_amount".to_string(),
                value: self.workshop_amount.to_string(),
                message: format!("工房数量必须在 0~{} 之间", MAX_WORKSHOPS),
            });
        }
        Ok(())
    }

    /// 序列化为 JSON 快照
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 应用时实际写入的工房下标（已扣除被跳过的最后一个工房）
    pub fn active_workshops(&self) -> impl Iterator<Item = usize> {
        let amount = (self.workshop_amount as usize).min(MAX_WORKSHOPS);
        let skip_last = self.ignore_last_workshop;
        (0..amount).filter(move |&idx| !(skip_last && idx + 1 == amount))
    }
}
