// ==========================================
// 工房排班导入 - 导入层
// ==========================================
// 职责: 物品目录加载 + 排班文本解析
// 支持: Excel, CSV 目录文件; 行格式排班文本
// ==========================================

// 模块声明
pub mod catalog_importer_trait;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod item_catalog;
pub mod schedule_parser;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{CatalogError, CatalogResult, ParseError, ParseErrorKind};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use item_catalog::{match_score, ItemCatalog};
pub use schedule_parser::{parse_line, LineDirective, ParseOutcome, ScheduleParser};

// 重导出 Trait 接口
pub use catalog_importer_trait::{FieldMapper, FileParser};
