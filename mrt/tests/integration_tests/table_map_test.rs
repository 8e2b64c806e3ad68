// tests/integration_tests/table_map_test.rs
use super::common::create_test_file;
use anyhow::Result;
use mrt::load_table_map;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_load_table_map() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(
        temp_dir.path(),
        "tables.yml",
        "# Tables for the manuscript\ntbl:results: tables/results_source.docx\n'tbls:extra': tables/extra.docx\n",
    )?;

    let map = load_table_map(&temp_dir.path().join("tables.yml"))?;
    assert_eq!(map.len(), 2);
    assert_eq!(
        map.get("tbl:results"),
        Some(Path::new("tables/results_source.docx"))
    );
    assert_eq!(map.get("tbls:extra"), Some(Path::new("tables/extra.docx")));
    Ok(())
}

#[test]
fn test_load_invalid_table_map() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "tables.yml", "tbl:a: [not, a, path]\n")?;

    let err = load_table_map(&temp_dir.path().join("tables.yml")).unwrap_err();
    assert!(err.to_string().contains("Invalid table map"));
    Ok(())
}
