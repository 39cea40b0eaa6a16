//! Resolution options
//!
//! Everything a resolution pass needs to know about the outside world is
//! carried here and passed explicitly to each component.

use std::path::{Path, PathBuf};

use super::{absolutize, DuplicatePolicy};

/// Default nesting depth: only the root's direct nested stacks
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Default build output root
pub const DEFAULT_OUTPUT_DIR: &str = "./.aws-sam/build";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    working_dir: PathBuf,
    input_dir: PathBuf,
    output_dir: PathBuf,
    max_depth: usize,
    duplicates: DuplicatePolicy,
}

impl ResolveOptions {
    /// Options rooted at `working_dir`, with the input base directory set to
    /// `working_dir` itself.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        Self {
            input_dir: working_dir.clone(),
            working_dir,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_depth: DEFAULT_MAX_DEPTH,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Base directory local file references are rewritten against.
    ///
    /// Relative paths are taken from the working directory.
    pub fn with_input_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.input_dir = absolutize(&self.working_dir, path.as_ref());
        self
    }

    /// Build output root, kept as given so entry-point output paths read
    /// the way the caller configured them.
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// How many levels of nested stacks to resolve (0 disables nesting).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Absolute input base directory
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Output root as configured
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Output root made absolute against the working directory
    pub fn output_root(&self) -> PathBuf {
        absolutize(&self.working_dir, &self.output_dir)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Absolute form of a path given relative to the working directory
    pub fn absolute(&self, path: &Path) -> PathBuf {
        absolutize(&self.working_dir, path)
    }
}
