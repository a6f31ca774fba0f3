use std::path::{Path, PathBuf};

use crate::blending::domain::region_intersector::SizePolicy;
use crate::shared::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, OUTPUT_EXTENSION};

/// Where sources are read from, where the result goes, and how mismatched
/// source sizes are handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlendConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
    output_extension: String,
    size_policy: SizePolicy,
}

impl BlendConfig {
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_output_extension(mut self, ext: impl Into<String>) -> Self {
        self.output_extension = ext.into();
        self
    }

    pub fn with_size_policy(mut self, policy: SizePolicy) -> Self {
        self.size_policy = policy;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_extension(&self) -> &str {
        &self.output_extension
    }

    pub fn size_policy(&self) -> SizePolicy {
        self.size_policy
    }

    /// Path of a source image chosen by name, relative to the input directory.
    pub fn input_path(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }

    /// Path the blended image is written to for a given base name.
    pub fn output_path(&self, base_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{base_name}.{}", self.output_extension))
    }
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_extension: OUTPUT_EXTENSION.to_string(),
            size_policy: SizePolicy::Intersect,
        }
    }
}
