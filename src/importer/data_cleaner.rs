// ==========================================
// 工房排班导入 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 物品名前缀剥离 / 大小写归一
// ==========================================

/// 物品名称中的地区前缀（按顺序匹配，命中一个即停止）
const ITEM_NAME_PREFIXES: &[&str] = &[
    "海岛",
    "开拓工房",
    "Isleworks ",
    "Isleberry ",
    "Islefish ",
    "Island ",
];

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 空白字符串视为 None
    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 剥离物品名的地区前缀，得到规范名称
    pub fn strip_item_prefix<'a>(&self, name: &'a str) -> &'a str {
        let name = name.trim();
        ITEM_NAME_PREFIXES
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix))
            .unwrap_or(name)
    }

    /// 匹配键: TRIM + 小写（用于不区分大小写的子串匹配）
    pub fn match_key(&self, name: &str) -> String {
        self.clean_text(name).to_lowercase()
    }
}
