//! Writes the comment mapping under the build directory.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::core::comments::CommentMap;
use crate::core::error::TaskError;

pub const DATA_DIR: &str = "data";
pub const COMMENTS_FILE: &str = "comments.json";

/// `<build_dir>/data/comments.json`
pub fn comments_path(build_dir: &Path) -> PathBuf {
    build_dir.join(DATA_DIR).join(COMMENTS_FILE)
}

/// Create a single directory level. An existing entry counts as success.
async fn ensure_dir(path: &Path) -> Result<(), TaskError> {
    match fs::create_dir(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(TaskError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Ensure `build_dir` then `build_dir/data`, then overwrite the comments file.
/// Returns the path written.
pub async fn write_comments(build_dir: &Path, comments: &CommentMap) -> Result<PathBuf, TaskError> {
    ensure_dir(build_dir).await?;
    ensure_dir(&build_dir.join(DATA_DIR)).await?;

    let json = comments.to_pretty_json().map_err(TaskError::Serialize)?;
    let path = comments_path(build_dir);
    fs::write(&path, json)
        .await
        .map_err(|source| TaskError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
