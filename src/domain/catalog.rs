// ==========================================
// 工房排班导入 - 物品目录领域模型
// ==========================================
// 职责: 目录条目 + 导入原始记录
// 用途: 导入层写入,解析器/引擎只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CatalogEntry - 目录条目
// ==========================================
// 构造后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub canonical_name: String, // 规范名称（已去除地区前缀）
    pub item_id: u32,           // 物品ID
    pub duration_hours: u32,    // 生产耗时（小时）
}

impl CatalogEntry {
    pub fn new(canonical_name: impl Into<String>, item_id: u32, duration_hours: u32) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            item_id,
            duration_hours,
        }
    }
}

// ==========================================
// RawCatalogRecord - 导入原始记录
// ==========================================
// 字段映射后、校验前的中间形态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCatalogRecord {
    pub item_id: Option<u32>,        // 物品ID
    pub name: Option<String>,        // 物品名称（原始）
    pub duration_hours: Option<u32>, // 生产耗时（小时）

    // 元信息
    pub row_number: usize,
}
