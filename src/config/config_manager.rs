// ==========================================
// 工房排班导入 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、快照导出/恢复
// 存储: JSON 文件（可选）
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::planner_config::PlannerConfig;
use std::path::Path;
use tracing::{debug, info};

/// 环境变量键
pub mod config_keys {
    pub const WORKSHOP_AMOUNT: &str = "WORKSHOP_PLANNER_WORKSHOP_AMOUNT";
    pub const IGNORE_LAST_WORKSHOP: &str = "WORKSHOP_PLANNER_IGNORE_LAST_WORKSHOP";
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: PlannerConfig,
}

impl ConfigManager {
    pub fn new(config: PlannerConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 从 JSON 文件加载，并应用进程环境变量覆写
    ///
    /// # 参数
    /// - path: 配置文件路径；None 表示仅使用默认值
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let base = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)?;
                debug!(path = %p.display(), "读取配置文件");
                serde_json::from_str::<PlannerConfig>(&raw)?
            }
            None => PlannerConfig::default(),
        };

        let config = Self::apply_overrides(base, |key| std::env::var(key).ok())?;
        info!(
            workshop_amount = config.workshop_amount,
            ignore_last_workshop = config.ignore_last_workshop,
            "配置加载完成"
        );
        Self::new(config)
    }

    /// 应用覆写
    ///
    /// # 参数
    /// - lookup: 键 → 值 的查询函数（进程环境变量或测试替身）
    pub fn apply_overrides<F>(mut config: PlannerConfig, lookup: F) -> ConfigResult<PlannerConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(config_keys::WORKSHOP_AMOUNT) {
            config.workshop_amount =
                raw.trim()
                    .parse::<u8>()
                    .map_err(|_| ConfigError::ConfigValueError {
                        key: config_keys::WORKSHOP_AMOUNT.to_string(),
                        value: raw.clone(),
                        message: "无法解析为整数".to_string(),
                    })?;
        }

        if let Some(raw) = lookup(config_keys::IGNORE_LAST_WORKSHOP) {
            config.ignore_last_workshop = is_true(&raw);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 获取配置快照（JSON 字符串）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        self.config.to_json()
    }

    /// 从配置快照恢复（覆盖当前配置）
    pub fn restore_config_from_snapshot(&mut self, snapshot_json: &str) -> ConfigResult<()> {
        let config: PlannerConfig = serde_json::from_str(snapshot_json)?;
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"workshop_amount": 2}}"#).unwrap();

        let manager = ConfigManager::load(Some(temp_file.path())).unwrap();
        assert_eq!(manager.config().workshop_amount, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigManager::load(Some(Path::new("no_such_config.json")));
        assert!(matches!(result, Err(ConfigError::FileReadError(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "not json").unwrap();

        let result = ConfigManager::load(Some(temp_file.path()));
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let lookup = lookup_from(&[
            (config_keys::WORKSHOP_AMOUNT, "3"),
            (config_keys::IGNORE_LAST_WORKSHOP, "yes"),
        ]);
        let config = ConfigManager::apply_overrides(PlannerConfig::default(), lookup).unwrap();

        assert_eq!(config.workshop_amount, 3);
        assert!(config.ignore_last_workshop);
    }

    #[test]
    fn test_env_override_invalid_value() {
        let lookup = lookup_from(&[(config_keys::WORKSHOP_AMOUNT, "four")]);
        let result = ConfigManager::apply_overrides(PlannerConfig::default(), lookup);
        assert!(matches!(result, Err(ConfigError::ConfigValueError { .. })));

        let lookup = lookup_from(&[(config_keys::WORKSHOP_AMOUNT, "9")]);
        let result = ConfigManager::apply_overrides(PlannerConfig::default(), lookup);
        assert!(matches!(result, Err(ConfigError::ConfigValueError { .. })));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut manager = ConfigManager::new(PlannerConfig {
            workshop_amount: 3,
            ignore_last_workshop: true,
        })
        .unwrap();

        let snapshot = manager.get_config_snapshot().unwrap();
        manager
            .restore_config_from_snapshot(r#"{"workshop_amount": 1}"#)
            .unwrap();
        assert_eq!(manager.config().workshop_amount, 1);

        manager.restore_config_from_snapshot(&snapshot).unwrap();
        assert_eq!(manager.config().workshop_amount, 3);
        assert!(manager.config().ignore_last_workshop);
    }
}
