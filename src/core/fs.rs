//! Filesystem capability used by path validation and the snippet locator.
//!
//! Everything that touches the disk goes through [`FileSystem`], so tests can
//! swap in an in-memory implementation and observe exactly which calls were
//! made.

use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem operations needed to serve a request.
#[async_trait::async_trait]
pub trait FileSystem: Send + Sync {
    /// Resolve `path` to its absolute, symlink-free form.
    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Read the whole file as UTF-8 text.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSystem`] backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

#[async_trait::async_trait]
impl FileSystem for TokioFileSystem {
    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        tokio::fs::canonicalize(path).await
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_tokio_fs_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "alpha\nbeta\n").unwrap();

        let content = TokioFileSystem.read_to_string(&file).await.unwrap();
        assert_eq!(content, "alpha\nbeta\n");
    }

    #[tokio::test]
    async fn test_tokio_fs_canonicalize_resolves_dot_segments() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("a.txt"), "x").unwrap();

        let fs = TokioFileSystem;
        let direct = fs.canonicalize(&temp_dir.path().join("a.txt")).await.unwrap();
        let dotted = fs
            .canonicalize(&temp_dir.path().join("sub/./../a.txt"))
            .await
            .unwrap();
        assert_eq!(direct, dotted);
    }

    #[tokio::test]
    async fn test_tokio_fs_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("bin.dat");
        fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();

        let err = TokioFileSystem.read_to_string(&file).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}

/// In-memory [`FileSystem`] for unit tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves one fixed file body and a configurable canonicalization.
    pub(crate) struct StubFileSystem {
        content: String,
        resolve_to: Option<PathBuf>,
        canonicalize_error: Option<String>,
        reads: AtomicUsize,
        canonicalizations: AtomicUsize,
    }

    impl StubFileSystem {
        /// Canonicalization is the identity; every read returns `content`.
        pub(crate) fn with_content(content: impl Into<String>) -> Self {
            Self {
                content: content.into(),
                resolve_to: None,
                canonicalize_error: None,
                reads: AtomicUsize::new(0),
                canonicalizations: AtomicUsize::new(0),
            }
        }

        /// Every canonicalization resolves to `target`, like a symlink would.
        pub(crate) fn resolving_to(mut self, target: impl Into<PathBuf>) -> Self {
            self.resolve_to = Some(target.into());
            self
        }

        /// Every canonicalization fails with `message`.
        pub(crate) fn failing_with(mut self, message: impl Into<String>) -> Self {
            self.canonicalize_error = Some(message.into());
            self
        }

        pub(crate) fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }

        pub(crate) fn canonicalizations(&self) -> usize {
            self.canonicalizations.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl FileSystem for StubFileSystem {
        async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
            self.canonicalizations.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = &self.canonicalize_error {
                return Err(io::Error::other(message.clone()));
            }
            Ok(self.resolve_to.clone().unwrap_or_else(|| path.to_path_buf()))
        }

        async fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.content.clone())
        }
    }
}
