// ==========================================
// 工房排班导入 - 目录导入 Trait
// ==========================================
// 职责: 定义目录导入管道各阶段接口（不包含实现）
// 阶段: 文件解析 → 字段映射 → 清洗入库（ItemCatalog）
// ==========================================

use crate::domain::catalog::RawCatalogRecord;
use crate::importer::error::CatalogResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录（HashMap<列名, 值>）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<HashMap<String, String>>): 行记录列表（已跳过空白行）
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_records(&self, file_path: &Path) -> CatalogResult<Vec<HashMap<String, String>>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: FieldMapper
pub trait FieldMapper: Send + Sync {
    /// 将原始行记录映射为 RawCatalogRecord
    ///
    /// # 参数
    /// - row: 原始行记录（HashMap<列名, 值>）
    /// - row_number: 行号（用于错误定位）
    ///
    /// # 返回
    /// - Ok(RawCatalogRecord): 映射后的中间结构体
    /// - Err: 类型转换错误
    fn map_to_raw_record(
        &self,
        row: HashMap<String, String>,
        row_number: usize,
    ) -> CatalogResult<RawCatalogRecord>;
}
