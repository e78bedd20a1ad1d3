//! Repository layout and environment settings
//!
//! ```text
//! <root>/index                    "path hash" per line, sorted
//! <root>/HEAD                     branch name, or raw commit hash (detached)
//! <root>/refs/<branch>            latest commit hash for that branch, or "root"
//! <root>/objects/<hash>           blob: raw compressed file bytes
//! <root>/objects/commits/<hash>   commit text
//! <root>/objects/trees/<hash>     tree text, "<type> <hash> <name>" lines
//! .ignore                         newline-separated glob patterns
//! ```

use std::path::{Path, PathBuf};

/// Name of the repository metadata directory
pub const METADATA_DIR: &str = ".cvs";

/// Name of the ignore list, relative to the working root
pub const IGNORE_FILE: &str = ".ignore";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

/// Parent marker of the first commit on a history line
pub const ROOT_PARENT: &str = "root";

/// Overrides the commit timestamp when set
pub const COMMIT_DATE_ENV: &str = "CVS_COMMIT_DATE";

/// Format used to serialize commit timestamps
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Every on-disk location used by a repository, resolved from its working root
#[derive(Debug, Clone)]
pub struct RepositoryLayout {
    workdir: Box<Path>,
    metadata: Box<Path>,
}

impl RepositoryLayout {
    pub fn new(workdir: &Path) -> Self {
        RepositoryLayout {
            workdir: workdir.into(),
            metadata: workdir.join(METADATA_DIR).into_boxed_path(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn metadata_path(&self) -> &Path {
        &self.metadata
    }

    pub fn index_path(&self) -> PathBuf {
        self.metadata.join("index")
    }

    pub fn head_path(&self) -> PathBuf {
        self.metadata.join("HEAD")
    }

    pub fn refs_path(&self) -> PathBuf {
        self.metadata.join("refs")
    }

    pub fn objects_path(&self) -> PathBuf {
        self.metadata.join("objects")
    }

    pub fn commits_path(&self) -> PathBuf {
        self.objects_path().join("commits")
    }

    pub fn trees_path(&self) -> PathBuf {
        self.objects_path().join("trees")
    }

    pub fn ignore_path(&self) -> PathBuf {
        self.workdir.join(IGNORE_FILE)
    }

    pub fn exists(&self) -> bool {
        self.metadata.exists()
    }
}

/// Timestamp stamped on new commits, honouring [`COMMIT_DATE_ENV`]
pub fn commit_timestamp() -> chrono::DateTime<chrono::FixedOffset> {
    std::env::var(COMMIT_DATE_ENV)
        .ok()
        .and_then(|date_str| {
            chrono::DateTime::parse_from_str(&date_str, DATE_FORMAT)
                .or_else(|_| chrono::DateTime::parse_from_rfc2822(&date_str))
                .ok()
        })
        .unwrap_or_else(|| chrono::Local::now().fixed_offset())
}
