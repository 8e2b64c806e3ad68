// tests/integration_tests/submission_test.rs
use super::common::{create_manuscript, create_test_file, output_files, settings, setup_test_project};
use anyhow::Result;
use mrt::{Policy, Tally, submit};
use std::fs;

#[test]
fn test_submit_label_prefix() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let settings = settings(temp_dir.path(), Policy::LabelPrefix);

    let outcome = submit(&settings)?;

    assert_eq!(
        outcome.tally,
        Tally {
            fig: 2,
            fig_s: 1,
            tbl: 1,
            tbl_s: 1
        }
    );
    assert!(outcome.skipped.is_empty());
    assert_eq!(
        output_files(&settings.output)?,
        vec!["Fig1.png", "Fig2.pdf", "FigS1.jpg", "Table1.docx", "TableS1.docx"]
    );
    assert_eq!(
        fs::read_to_string(settings.output.join("Table1.docx"))?,
        "summary table"
    );
    assert_eq!(fs::read_to_string(settings.output.join("FigS1.jpg"))?, "extra");
    Ok(())
}

#[test]
fn test_submit_position_reclassifies_by_heading() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let root = temp_dir.path();
    // A main-labelled figure placed after the supplement heading.
    create_manuscript(
        root,
        &[
            "![A](figures/map.png){#fig:map}",
            "{#tbl:summary}",
            "# Supplementary Material",
            "![B](figures/results.pdf){#fig:results}",
            "{#tbls:raw}",
        ],
    )?;
    let settings = settings(root, Policy::Position);

    let outcome = submit(&settings)?;

    assert_eq!(outcome.tally.fig, 1);
    assert_eq!(outcome.tally.fig_s, 1);
    assert_eq!(
        output_files(&settings.output)?,
        vec!["Fig1.png", "FigS1.pdf", "Table1.docx", "TableS1.docx"]
    );
    Ok(())
}

#[test]
fn test_submit_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let mut settings = settings(temp_dir.path(), Policy::LabelPrefix);
    settings.dry_run = true;

    let outcome = submit(&settings)?;

    assert_eq!(outcome.copies.len(), 5);
    assert!(!settings.output.exists(), "Dry run must not create the output directory");
    Ok(())
}

#[test]
fn test_submit_leaves_gap_for_missing_figure() -> Result<()> {
    let temp_dir = setup_test_project()?;
    fs::remove_file(temp_dir.path().join("figures/map.png"))?;
    let settings = settings(temp_dir.path(), Policy::LabelPrefix);

    let outcome = submit(&settings)?;

    assert_eq!(outcome.tally.fig, 2);
    assert_eq!(outcome.skipped.len(), 1);
    let files = output_files(&settings.output)?;
    assert!(!files.contains(&"Fig1.png".to_owned()));
    assert!(files.contains(&"Fig2.pdf".to_owned()));
    Ok(())
}

#[test]
fn test_submit_twice_is_stable() -> Result<()> {
    let temp_dir = setup_test_project()?;
    create_test_file(temp_dir.path(), "build/submission/Fig1.png", "stale")?;
    let settings = settings(temp_dir.path(), Policy::LabelPrefix);

    let first = submit(&settings)?;
    let second = submit(&settings)?;

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(settings.output.join("Fig1.png"))?, "map");
    Ok(())
}
