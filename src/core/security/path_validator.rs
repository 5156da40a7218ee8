use std::io;
use std::path::{Component, MAIN_SEPARATOR_STR, Path, PathBuf};

use tracing::{debug, warn};

use crate::core::fs::FileSystem;

/// Errors that can occur during path validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    /// The canonical path is not strictly below the trust boundary.
    #[error("File path is outside of the current working directory.")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    /// The filesystem could not resolve the path (missing file, permissions,
    /// dangling symlink). Displays the underlying message unchanged.
    #[error("{source}")]
    CannotCanonicalize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns the trust boundary: the process working directory at call time.
pub fn current_boundary() -> io::Result<PathBuf> {
    std::env::current_dir()
}

/// Validates that `input_path` names a file strictly inside `boundary`.
///
/// This function performs the following checks:
/// 1. Resolves the input against `boundary` (absolute inputs replace it)
/// 2. Canonicalizes the result through `fs`, following symlinks
/// 3. Ensures the canonical path starts with `boundary` plus a separator
///
/// The containment check runs on the canonical path, so a symlink living
/// inside the boundary but pointing outside of it is rejected.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The canonicalized, validated path
/// * `Err(PathSecurityError)` - If validation fails
///
/// # Examples
///
/// ```rust,ignore
/// let boundary = current_boundary()?;
/// let safe_path = validate_path("src/main.rs", &boundary, &TokioFileSystem).await?;
/// ```
pub async fn validate_path<F>(
    input_path: &str,
    boundary: &Path,
    fs: &F,
) -> Result<PathBuf, PathSecurityError>
where
    F: FileSystem + ?Sized,
{
    let resolved = resolve_against(boundary, input_path);

    let canonical = fs.canonicalize(&resolved).await.map_err(|source| {
        debug!("Cannot canonicalize {:?}: {}", resolved, source);
        PathSecurityError::CannotCanonicalize {
            path: resolved.clone(),
            source,
        }
    })?;

    if !is_strict_descendant(&canonical, boundary) {
        warn!(
            "Rejected {:?}: resolves to {:?}, outside {:?}",
            input_path, canonical, boundary
        );
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical,
            root: boundary.to_path_buf(),
        });
    }

    Ok(canonical)
}

/// Joins `input` onto `base` and folds `.`/`..` segments lexically.
///
/// `..` never climbs above the filesystem root.
fn resolve_against(base: &Path, input: &str) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in base.join(input).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if resolved.parent().is_some() {
                    resolved.pop();
                }
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// True when `path` begins with `root` immediately followed by a separator.
///
/// Equality with `root` does not count.
fn is_strict_descendant(path: &Path, root: &Path) -> bool {
    let mut prefix = root.as_os_str().to_os_string();
    if !prefix.as_encoded_bytes().ends_with(MAIN_SEPARATOR_STR.as_bytes()) {
        prefix.push(MAIN_SEPARATOR_STR);
    }
    let path = path.as_os_str().as_encoded_bytes();
    let prefix = prefix.as_encoded_bytes();
    path.len() > prefix.len() && path.starts_with(prefix)
}
