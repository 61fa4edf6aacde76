//! Fixed icon layout.
//!
//! The source image, output directory and size list are not configurable.
//! [`GeneratorConfig::rooted_at`] only re-anchors the same layout under a
//! different base directory.

use std::path::{Path, PathBuf};

use crate::icons::IconSize;

/// Path of the base image, relative to the project root.
pub const SOURCE_PATH: &str = "public/icon-192.png";

/// Directory receiving the generated icons, relative to the project root.
pub const OUTPUT_DIR: &str = "public/icons";

/// Paths and sizes used by a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Base image to resize.
    pub source: PathBuf,
    /// Directory the icons are written to.
    pub output_dir: PathBuf,
    /// Sizes to generate, in order.
    pub sizes: Vec<IconSize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR),
            sizes: IconSize::ALL.to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// The fixed layout resolved against `root`.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            source: root.join(SOURCE_PATH),
            output_dir: root.join(OUTPUT_DIR),
            sizes: IconSize::ALL.to_vec(),
        }
    }

    /// Output path for one icon size.
    pub fn icon_path(&self, size: IconSize) -> PathBuf {
        self.output_dir.join(size.file_name())
    }
}
