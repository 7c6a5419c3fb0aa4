//! File discovery with gitignore support
//!
//! Walks the project root and yields files whose root-relative path
//! matches the include globs and none of the exclude globs. `.git` is
//! always excluded and `.gitignore` is respected.

use crate::types::GlobPattern;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Iterator source over discovered files
pub struct FileWalker {
    root: PathBuf,
    walker: ignore::Walk,
    include_set: GlobSet,
    exclude_set: GlobSet,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `root` - Root directory to walk; patterns match paths relative
    ///   to it
    /// * `include` - Include patterns; a file must match at least one
    /// * `exclude` - Exclude patterns, applied after include
    pub fn new(
        root: &Path,
        include: &[GlobPattern],
        exclude: &[GlobPattern],
    ) -> Result<Self, FileWalkerError> {
        let walker = WalkBuilder::new(root)
            .hidden(false) // Don't skip hidden files (.vscode and friends)
            .git_ignore(true) // Respect .gitignore
            .build();

        let include_set = Self::build_globset(include)?;

        // Always exclude .git, merging with caller-provided excludes
        let mut exclude_patterns = Vec::from(exclude);
        exclude_patterns.push(GlobPattern::new("**/.git/**"));
        let exclude_set = Self::build_globset(&exclude_patterns)?;

        Ok(Self {
            root: root.to_path_buf(),
            walker,
            include_set,
            exclude_set,
        })
    }

    /// Builds a GlobSet from patterns
    fn build_globset(patterns: &[GlobPattern]) -> Result<GlobSet, FileWalkerError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern.as_str()).map_err(|e| FileWalkerError::InvalidGlob {
                pattern: pattern.as_str().to_string(),
                source: e,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| FileWalkerError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source: e,
        })
    }

    /// Walks the directory tree and returns an iterator over matching
    /// file paths
    pub fn walk(self) -> impl Iterator<Item = Result<PathBuf, FileWalkerError>> {
        let root = self.root;
        let include_set = self.include_set;
        let exclude_set = self.exclude_set;

        self.walker.filter_map(move |result| match result {
            Ok(entry) => {
                // Only files; directories and symlink targets are skipped
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    return None;
                }

                let path = entry.path();

                // Globs are authored root-relative; an absolute root must
                // not defeat them
                let relative = path.strip_prefix(&root).unwrap_or(path);

                if !include_set.is_match(relative) {
                    return None;
                }
                if exclude_set.is_match(relative) {
                    return None;
                }

                Some(Ok(path.to_path_buf()))
            }
            Err(e) => Some(Err(FileWalkerError::Walk(e))),
        })
    }

    /// Collects matching files sorted by path, for deterministic
    /// processing order
    pub fn collect_sorted(self) -> Result<Vec<PathBuf>, FileWalkerError> {
        let mut files = self.walk().collect::<Result<Vec<_>, _>>()?;
        files.sort();
        Ok(files)
    }
}
