use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Abstraction for filesystem access to enable testing without real files
pub trait FilesystemReader: fmt::Debug + Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem reader using std::fs
#[derive(Debug, Default)]
pub struct RealFilesystemReader;

impl FilesystemReader for RealFilesystemReader {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Demo filesystem reader that knows a fixed set of paths
#[derive(Debug, Default)]
pub struct DemoFilesystemReader {
    paths: BTreeSet<PathBuf>,
}

impl DemoFilesystemReader {
    /// Demo filesystem with the product certificate the demo install provides
    pub fn new() -> Self {
        Self::default().with_file("/etc/pki/product/69.pem")
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }
}

impl FilesystemReader for DemoFilesystemReader {
    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}
