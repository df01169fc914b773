// ==========================================
// 工房排班导入 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类:
// - CatalogError: 目录加载失败（致命, 无目录无法解析）
// - ParseError:   排班文本逐行错误（非致命, 收集后统一展示）
// ==========================================

use crate::domain::plan::PlanError;
use thiserror::Error;

/// 目录导入错误类型
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("字段映射失败 (行 {row}): {message}")]
    FieldMappingError { row: usize, message: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    // ===== 业务规则错误 =====
    #[error("物品目录为空")]
    EmptyCatalog,
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for CatalogError {
    fn from(err: calamine::Error) -> Self {
        CatalogError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type CatalogResult<T> = Result<T, CatalogError>;

/// 排班文本单行错误的类别
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("无效的行格式")]
    MalformedLine,

    #[error("无效的天数指定: {0}（仅支持 1-7）")]
    InvalidCycleRange(u32),

    #[error("无法找到物品数据: {0}")]
    UnknownItem(String),

    #[error("无法将工房安排添加至休息日")]
    TaskOnRestDay,

    #[error("无效的天内安排: D{0} 出现在更晚的天数之后")]
    OutOfOrderCycle(u8),
}

impl From<PlanError> for ParseErrorKind {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::TaskOnRestDay => ParseErrorKind::TaskOnRestDay,
            PlanError::CycleOutOfRange(cycle) => ParseErrorKind::InvalidCycleRange(cycle as u32),
            PlanError::OutOfOrderCycle(cycle) => ParseErrorKind::OutOfOrderCycle(cycle),
        }
    }
}

/// 排班文本单行错误（携带原始行与行号）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("第 {line_number} 行 `{line}`: {kind}")]
pub struct ParseError {
    pub line_number: usize,
    pub line: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line_number: usize, line: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            line_number,
            line: line.into(),
            kind,
        }
    }
}
