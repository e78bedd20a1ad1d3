use crate::artifacts::objects::blob::Blob;
use crate::config::METADATA_DIR;
use crate::errors::{CvsError, CvsResult};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Read a working-tree file and turn it into a blob
    pub fn create_blob(&self, file_path: &Path) -> CvsResult<Blob> {
        let data = self.read_file(file_path)?;

        Blob::from_content(file_path, &data)
    }

    /// Whether the file on disk still compresses and hashes to the staged blob
    pub fn matches_file(&self, blob: &Blob, file_path: &Path) -> CvsResult<bool> {
        let current = self.create_blob(file_path)?;

        Ok(current.oid() == blob.oid())
    }

    pub fn read_file(&self, file_path: &Path) -> CvsResult<Vec<u8>> {
        std::fs::read(self.path.join(file_path)).map_err(|e| {
            CvsError::from_io_or(e, || CvsError::FileNotFound(file_path.to_path_buf()))
        })
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> CvsResult<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(full_path, data)?;

        Ok(())
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    /// Every regular file under `root` (the whole working tree by default), as
    /// root-relative `/`-separated paths in name order
    pub fn list_files(&self, root: Option<&Path>) -> CvsResult<Vec<PathBuf>> {
        let root = match root {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        if root.is_file() {
            return Ok(self.relative_path(&root).into_iter().collect());
        }

        let metadata_dir = self.path.join(METADATA_DIR);
        let mut files = Vec::new();
        for entry in WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.path() != metadata_dir)
        {
            let entry = entry.map_err(|e| match e.into_io_error() {
                Some(io_error) => CvsError::Io(io_error),
                None => CvsError::InvalidPath(root.clone()),
            })?;

            if entry.file_type().is_file() {
                files.extend(self.relative_path(entry.path()));
            }
        }

        Ok(files)
    }

    /// Root-relative, `/`-joined form of a path inside the working tree
    pub fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        let relative = path.strip_prefix(&self.path).ok()?;
        let segments = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>();

        if segments.is_empty() {
            return None;
        }

        Some(PathBuf::from(segments.join("/")))
    }
}
