//! The locate operation: path check, read, index, match.

use std::path::Path;

use tracing::{debug, instrument};

use super::error::LocateError;
use super::index::LineIndex;
use super::result::LineRange;
use crate::core::fs::FileSystem;
use crate::core::security::{current_boundary, validate_path};

/// Locate `snippet` in `file_path`, using the process working directory as
/// the trust boundary.
pub async fn locate<F>(file_path: &str, snippet: &str, fs: &F) -> Result<LineRange, LocateError>
where
    F: FileSystem + ?Sized,
{
    let boundary = current_boundary()?;
    locate_in(&boundary, file_path, snippet, fs).await
}

/// Locate `snippet` in `file_path`, confined to `boundary`.
///
/// Steps, each terminal on failure:
/// 1. reject a snippet that is empty after trimming (no I/O happens)
/// 2. resolve and canonicalize the path, requiring it to sit strictly
///    below `boundary`
/// 3. read the file and index its trimmed lines
/// 4. return the first range whose trimmed lines equal the snippet's
///
/// The snippet is trimmed as a whole before it is split into lines, so blank
/// lines around a pasted block do not count toward the range.
#[instrument(skip(snippet, fs), fields(snippet_len = snippet.len()))]
pub async fn locate_in<F>(
    boundary: &Path,
    file_path: &str,
    snippet: &str,
    fs: &F,
) -> Result<LineRange, LocateError>
where
    F: FileSystem + ?Sized,
{
    let snippet = snippet.trim();
    if snippet.is_empty() {
        return Err(LocateError::EmptySnippet);
    }

    let safe_path = validate_path(file_path, boundary, fs).await?;
    let content = fs.read_to_string(&safe_path).await?;

    let index = LineIndex::build(&content);
    let snippet_lines: Vec<&str> = snippet.split('\n').collect();
    debug!(
        "Matching {} snippet line(s) against {} file line(s)",
        snippet_lines.len(),
        index.len()
    );

    index.find(&snippet_lines).ok_or(LocateError::NotFound)
}
