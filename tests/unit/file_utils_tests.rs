/*!
 * Tests for file and folder utilities
 */

use anyhow::Result;
use std::path::PathBuf;

use crate::common;
use episplit::file_utils::{FileManager, FileType};

/// Test output path generation from an input stem
#[test]
fn test_generate_output_path_withScriptInput_shouldAppendExtension() {
    let path = FileManager::generate_output_path(
        PathBuf::from("/scripts/drama.txt"),
        PathBuf::from("/out"),
        "episodes.json",
    );

    assert_eq!(path, PathBuf::from("/out/drama.episodes.json"));
}

/// Test file and directory existence checks
#[test]
fn test_existence_checks_withTempDir_shouldDistinguishFilesAndDirs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();
    let file_path = common::create_test_file(&dir_path, "a.txt", "content")?;

    assert!(FileManager::file_exists(&file_path));
    assert!(!FileManager::file_exists(&dir_path));
    assert!(FileManager::dir_exists(&dir_path));
    assert!(!FileManager::dir_exists(&file_path));

    Ok(())
}

/// Test recursive file discovery by extension
#[test]
fn test_find_files_withNestedScripts_shouldFindAllTxtFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();

    common::create_test_file(&dir_path, "one.txt", "a")?;
    common::create_test_file(&dir_path, "ignored.json", "{}")?;

    let nested = dir_path.join("nested");
    FileManager::ensure_dir(&nested)?;
    common::create_test_file(&nested, "two.TXT", "b")?;

    let found = FileManager::find_files(&dir_path, "txt")?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("one.txt")));
    assert!(found.iter().any(|p| p.ends_with("two.TXT")));

    Ok(())
}

/// Test write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("a/b/c.txt");

    FileManager::write_to_file(&target, "data")?;

    assert!(FileManager::file_exists(&target));
    assert_eq!(FileManager::read_to_string(&target)?, "data");

    Ok(())
}

/// Test file type detection by extension
#[test]
fn test_detect_file_type_withTxtExtension_shouldReturnScript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();
    let script = common::create_test_file(&dir_path, "drama.txt", "anything")?;

    assert_eq!(FileManager::detect_file_type(&script)?, FileType::Script);

    Ok(())
}

/// Test file type detection falls back to content sniffing
#[test]
fn test_detect_file_type_withHeadingContent_shouldReturnScript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();

    let with_headings =
        common::create_test_file(&dir_path, "drama.script", "第1集\n内容A\n第2集\n内容B")?;
    let without_headings =
        common::create_test_file(&dir_path, "notes.log", "just some notes\nno markers here")?;

    assert_eq!(
        FileManager::detect_file_type(&with_headings)?,
        FileType::Script
    );
    assert_eq!(
        FileManager::detect_file_type(&without_headings)?,
        FileType::Unknown
    );

    Ok(())
}

/// Test file type detection of a missing file
#[test]
fn test_detect_file_type_withMissingFile_shouldFail() {
    let result = FileManager::detect_file_type("/nonexistent/path/script.txt");
    assert!(result.is_err());
}
