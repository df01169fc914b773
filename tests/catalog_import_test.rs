// ==========================================
// 物品目录导入集成测试
// ==========================================
// 测试目标: CSV 加载、列名别名、错误报告
// ==========================================


use test_helpers::write_temp_file;
use workshop_planner::importer::{CatalogError, ItemCatalog};

#[test]
fn test_load_csv_with_aliases() {
    let file = write_temp_file(
        ".csv",
        "物品ID,名称,工时\n1,海岛菠萝汁,4\n0,占位,4\n2,开拓工房木制椅,6\n3,,8\n",
    );

    let catalog = ItemCatalog::load(file.path()).expect("catalog should load");
    assert_eq!(catalog.len(), 2);

    let entry = catalog.resolve("木制").expect("should resolve");
    assert_eq!(entry.item_id, 2);
    assert_eq!(entry.canonical_name, "木制椅");
    assert_eq!(entry.duration_hours, 6);
}

#[test]
fn test_load_csv_english_headers() {
    let file = write_temp_file(".csv", "id,name,crafting_time\n7,Isleworks Firesand,4\n");

    let catalog = ItemCatalog::load(file.path()).expect("catalog should load");
    assert_eq!(catalog.get(7).map(|e| e.canonical_name.as_str()), Some("Firesand"));
}

#[test]
fn test_load_rejects_bad_duration() {
    let file = write_temp_file(".csv", "id,name,duration\n1,海岛菠萝汁,abc\n");

    let result = ItemCatalog::load(file.path());
    assert!(matches!(
        result,
        Err(CatalogError::TypeConversionError { row: 2, .. })
    ));
}

#[test]
fn test_load_empty_catalog() {
    let file = write_temp_file(".csv", "id,name,duration\n0,海岛菠萝汁,4\n");
    assert!(matches!(
        ItemCatalog::load(file.path()),
        Err(CatalogError::EmptyCatalog)
    ));
}

#[test]
fn test_load_missing_and_unsupported_files() {
    assert!(matches!(
        ItemCatalog::load("no_such_catalog.csv"),
        Err(CatalogError::FileNotFound(_))
    ));

    let file = write_temp_file(".json", "[]");
    assert!(matches!(
        ItemCatalog::load(file.path()),
        Err(CatalogError::UnsupportedFormat(_))
    ));
}
