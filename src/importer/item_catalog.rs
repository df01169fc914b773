// ==========================================
// 工房排班导入 - 物品目录
// ==========================================
// 职责: 规范名称 → (物品ID, 生产耗时) 的不可变查找表
// 匹配: 不区分大小写的子串匹配, 取规范名称最短者, 同长取先加载者
// ==========================================

use crate::domain::catalog::{CatalogEntry, RawCatalogRecord};
use crate::importer::catalog_importer_trait::FieldMapper as _;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{CatalogError, CatalogResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
struct IndexedEntry {
    entry: CatalogEntry,
    match_key: String,
}

#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    entries: Vec<IndexedEntry>,
    by_id: HashMap<u32, usize>,
}

/// 匹配评分：规范名包含查询串时返回名称长度（越小越优），否则 None
///
/// # 参数
/// - match_key: 已归一化的规范名称
/// - needle: 已归一化的查询串
pub fn match_score(match_key: &str, needle: &str) -> Option<usize> {
    if match_key.contains(needle) {
        Some(match_key.chars().count())
    } else {
        None
    }
}

impl ItemCatalog {
    /// 从 (物品ID, 原始名称, 耗时) 三元组批量构建
    ///
    /// 物品ID 为 0 或名称为空的记录直接跳过；名称会剥离地区前缀
    pub fn from_triples<I, S>(triples: I) -> Self
    where
        I: IntoIterator<Item = (u32, S, u32)>,
        S: AsRef<str>,
    {
        let cleaner = DataCleaner;
        let mut catalog = Self::default();

        for (item_id, name, duration_hours) in triples {
            let canonical = cleaner.strip_item_prefix(name.as_ref());
            if item_id == 0 || canonical.is_empty() {
                continue;
            }

            catalog.by_id.entry(item_id).or_insert(catalog.entries.len());
            catalog.entries.push(IndexedEntry {
                match_key: cleaner.match_key(canonical),
                entry: CatalogEntry::new(canonical, item_id, duration_hours),
            });
        }

        catalog
    }

    /// 从字段映射后的原始记录构建
    ///
    /// # 返回
    /// - Err(FieldMappingError): 有名称的记录缺少物品ID或耗时
    /// - Err(EmptyCatalog): 无任何有效记录
    pub fn from_records(records: Vec<RawCatalogRecord>) -> CatalogResult<Self> {
        let cleaner = DataCleaner;
        let mut triples = Vec::with_capacity(records.len());

        for record in records {
            let name = match cleaner.normalize_null(record.name) {
                Some(name) => name,
                None => continue,
            };

            let item_id = record.item_id.ok_or_else(|| CatalogError::FieldMappingError {
                row: record.row_number,
                message: format!("物品 {} 缺少物品ID", name),
            })?;
            let duration_hours = record.duration_hours.ok_or_else(|| {
                CatalogError::FieldMappingError {
                    row: record.row_number,
                    message: format!("物品 {} 缺少生产耗时", name),
                }
            })?;

            triples.push((item_id, name, duration_hours));
        }

        let catalog = Self::from_triples(triples);
        if catalog.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(catalog)
    }

    /// 从参考数据文件加载（.csv / .xlsx / .xls）
    #[instrument(skip_all, fields(path = %file_path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(file_path: P) -> CatalogResult<Self> {
        let rows = UniversalFileParser.parse(file_path.as_ref())?;
        debug!(rows = rows.len(), "目录文件解析完成");

        let mapper = FieldMapper;
        let records = rows
            .into_iter()
            .enumerate()
            // 表头占第 1 行
            .map(|(idx, row)| mapper.map_to_raw_record(row, idx + 2))
            .collect::<CatalogResult<Vec<_>>>()?;

        let catalog = Self::from_records(records)?;
        info!(entries = catalog.len(), "物品目录加载完成");
        Ok(catalog)
    }

    /// 模糊解析物品名
    ///
    /// # 返回
    /// - Some(&CatalogEntry): 包含查询串的最短规范名条目
    /// - None: 查询串为空或无匹配
    pub fn resolve(&self, raw_name: &str) -> Option<&CatalogEntry> {
        let cleaner = DataCleaner;
        let needle = cleaner.match_key(raw_name);
        if needle.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .filter_map(|e| match_score(&e.match_key, &needle).map(|score| (score, e)))
            .min_by_key(|(score, _)| *score)
            .map(|(_, e)| &e.entry)
    }

    /// 按物品ID查找（同ID取先加载者）
    pub fn get(&self, item_id: u32) -> Option<&CatalogEntry> {
        self.by_id.get(&item_id).map(|&idx| &self.entries[idx].entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().map(|e| &e.entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
