use std::path::{Path, PathBuf};

/// Request-scoped temporary file
///
/// The guard only reserves a unique path; whoever writes the file decides
/// when it comes into existence. Pipeline code releases it with
/// [`TempArtifact::remove`]; `Drop` is the fallback for paths that unwind
/// or return early and unlinks synchronously. Removal failures are logged
/// and ignored.
#[derive(Debug)]
pub(crate) struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    /// Reserve a unique path in `dir` with the given extension
    pub fn reserve(dir: &Path, extension: &str) -> Self {
        let path = dir.join(format!("parley-{}.{extension}", uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file without blocking the runtime
    pub async fn remove(mut self) {
        let path = std::mem::take(&mut self.path);
        log_removal(&path, tokio::fs::remove_file(&path).await);
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        // Already released by `remove`
        if self.path.as_os_str().is_empty() {
            return;
        }

        log_removal(&self.path, std::fs::remove_file(&self.path));
    }
}

fn log_removal(path: &Path, result: std::io::Result<()>) {
    match result {
        Ok(()) => tracing::trace!(path = %path.display(), "removed temporary audio file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::debug!(path = %path.display(), "failed to remove temporary audio file: {e}"),
    }
}
