// ==========================================
// 工房排班导入 - 字段映射器实现
// ==========================================
// 职责: 源字段 → 目录字段映射 + 类型转换
// 支持: 中英文列名别名
// ==========================================

use crate::domain::catalog::RawCatalogRecord;
use crate::importer::catalog_importer_trait::FieldMapper as FieldMapperTrait;
use crate::importer::error::{CatalogError, CatalogResult};
use std::collections::HashMap;

/// 标准字段名
pub mod fields {
    pub const ITEM_ID: &str = "item_id";
    pub const NAME: &str = "name";
    pub const DURATION_HOURS: &str = "duration_hours";
}

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_raw_record(
        &self,
        row: HashMap<String, String>,
        row_number: usize,
    ) -> CatalogResult<RawCatalogRecord> {
        Ok(RawCatalogRecord {
            item_id: self.parse_u32(&row, fields::ITEM_ID, row_number)?,
            name: self.get_string(&row, fields::NAME),
            duration_hours: self.parse_u32(&row, fields::DURATION_HOURS, row_number)?,
            row_number,
        })
    }
}

impl FieldMapper {
    /// 提取字符串字段（返回 Option），支持多个可能的列名（别名）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        let aliases: &[&str] = match key {
            fields::ITEM_ID => &["item_id", "id", "itemId", "RowId", "物品ID"],
            fields::NAME => &["name", "item_name", "Name", "名称", "物品名称"],
            fields::DURATION_HOURS => &[
                "duration_hours",
                "duration",
                "durationHours",
                "crafting_time",
                "CraftingTime",
                "工时",
            ],
            _ => &[],
        };

        aliases
            .iter()
            .filter_map(|alias| row.get(*alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// 解析无符号整数
    fn parse_u32(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> CatalogResult<Option<u32>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => value
                .parse::<u32>()
                .map(Some)
                .map_err(|_| CatalogError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("无法解析为非负整数: {}", value),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_field_mapper_basic() {
        let record = FieldMapper
            .map_to_raw_record(row(&[("item_id", "12"), ("name", "海岛菠萝汁"), ("duration_hours", "4")]), 1)
            .unwrap();

        assert_eq!(record.item_id, Some(12));
        assert_eq!(record.name, Some("海岛菠萝汁".to_string()));
        assert_eq!(record.duration_hours, Some(4));
        assert_eq!(record.row_number, 1);
    }

    #[test]
    fn test_field_mapper_aliases() {
        let record = FieldMapper
            .map_to_raw_record(row(&[("物品ID", "7"), ("名称", "木制椅"), ("工时", "6")]), 2)
            .unwrap();

        assert_eq!(record.item_id, Some(7));
        assert_eq!(record.name, Some("木制椅".to_string()));
        assert_eq!(record.duration_hours, Some(6));
    }

    #[test]
    fn test_field_mapper_empty_as_none() {
        let record = FieldMapper
            .map_to_raw_record(row(&[("item_id", "3"), ("name", "  ")]), 1)
            .unwrap();

        assert_eq!(record.name, None);
        assert_eq!(record.duration_hours, None);
    }

    #[test]
    fn test_field_mapper_invalid_number() {
        let result = FieldMapper.map_to_raw_record(row(&[("item_id", "abc")]), 5);

        assert!(matches!(
            result,
            Err(CatalogError::TypeConversionError { row: 5, .. })
        ));
    }
}
