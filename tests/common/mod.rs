/*!
 * Common test utilities for the episplit test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample three-episode script for testing
pub fn create_test_script(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "第1集 初遇\n\
场1-1 日 内 房间\n\
剧本内容A\n\
\n\
第2集 离别\n\
场2-1 日 外 森林\n\
剧本内容B\n\
\n\
第三集：重逢\n\
场3-1 夜 内 大厅\n\
剧本内容C\n";
    create_test_file(dir, filename, content)
}
