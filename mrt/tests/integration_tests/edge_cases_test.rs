// tests/integration_tests/edge_cases_test.rs
use super::common::{create_manuscript, create_test_file, settings, setup_test_project};
use anyhow::Result;
use mrt::{Policy, Skip, Tally, submit};
use tempfile::TempDir;

#[test]
fn test_empty_manuscript() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_manuscript(temp_dir.path(), &[])?;
    create_test_file(temp_dir.path(), "tables/tables.yml", "")?;

    let outcome = submit(&settings(temp_dir.path(), Policy::LabelPrefix))?;

    assert!(outcome.copies.is_empty());
    assert_eq!(outcome.tally, Tally::new());
    Ok(())
}

#[test]
fn test_unmapped_supplementary_table_is_invisible() -> Result<()> {
    let temp_dir = setup_test_project()?;
    create_manuscript(
        temp_dir.path(),
        &["{#tbls:unknown}", "{#tbls:raw}"],
    )?;

    let outcome = submit(&settings(temp_dir.path(), Policy::LabelPrefix))?;

    assert_eq!(outcome.tally.tbl_s, 1);
    assert_eq!(outcome.copies.len(), 1);
    assert!(outcome.copies[0].destination.ends_with("TableS1.docx"));
    assert_eq!(
        outcome.skipped,
        vec![Skip::UnmappedLabel {
            label: "tbls:unknown".to_owned()
        }]
    );
    Ok(())
}

#[test]
fn test_loose_labels_are_not_references() -> Result<()> {
    let temp_dir = setup_test_project()?;
    create_manuscript(
        temp_dir.path(),
        &[
            "![A](figures/map.png){#figure-map}",
            "![B](figures/map.png){#config:x}",
            "{#tblsummary}",
            "Inline fig:map and tbl:summary mentions.",
        ],
    )?;

    let outcome = submit(&settings(temp_dir.path(), Policy::Position))?;

    assert_eq!(outcome.tally.total(), 0);
    assert!(outcome.skipped.is_empty());
    Ok(())
}

#[test]
fn test_missing_manuscript_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "tables/tables.yml", "")?;

    let err = submit(&settings(temp_dir.path(), Policy::LabelPrefix)).unwrap_err();
    assert!(err.to_string().contains("Failed to read manuscript"));
    assert!(!temp_dir.path().join("build/submission").exists());
    Ok(())
}

#[test]
fn test_missing_table_map_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_manuscript(temp_dir.path(), &["![A](a.png){#fig:a}"])?;
    create_test_file(temp_dir.path(), "a.png", "a")?;

    let err = submit(&settings(temp_dir.path(), Policy::LabelPrefix)).unwrap_err();
    assert!(err.to_string().contains("Failed to read table map"));
    assert!(!temp_dir.path().join("build/submission").exists());
    Ok(())
}
