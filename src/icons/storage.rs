//! Filesystem and imaging steps for icon generation.
//!
//! Loads the base image, produces square size variants with Lanczos3
//! resampling and writes them as PNG files with content-hash tags.

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use sha2::{Digest, Sha256};

use crate::error::{IconError, Result};

/// Edge length of a square icon, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconSize(u32);

impl IconSize {
    /// Sizes generated on every run, in generation order.
    pub const ALL: [IconSize; 5] = [
        IconSize(16),
        IconSize(32),
        IconSize(48),
        IconSize(64),
        IconSize(128),
    ];

    pub const fn new(pixels: u32) -> Self {
        Self(pixels)
    }

    pub const fn pixels(&self) -> u32 {
        self.0
    }

    /// File name for this size, e.g. `icon-16.png`.
    pub fn file_name(&self) -> String {
        format!("icon-{}.png", self.0)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Create `dir` and any missing parents.
///
/// An existing directory is left as-is, contents included.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Decode the base image at `path`.
pub fn load_base_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| IconError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Produce a `size`×`size` copy of `base`.
///
/// The result is always exactly square: non-square bases are stretched and
/// small bases are scaled up. The colour type of `base` is kept. A base that
/// already has the target dimensions is copied without resampling.
pub fn resize_icon(base: &DynamicImage, size: IconSize) -> DynamicImage {
    let px = size.pixels();
    if base.width() == px && base.height() == px {
        return base.clone();
    }
    base.resize_exact(px, px, FilterType::Lanczos3)
}

/// Encode `icon` as PNG and write it to `path`.
///
/// Returns the content hash of the written bytes.
pub fn save_icon(icon: &DynamicImage, path: &Path) -> Result<String> {
    let save_err = |source| IconError::Save {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = Cursor::new(Vec::new());
    icon.write_to(&mut buf, ImageFormat::Png).map_err(save_err)?;
    let data = buf.into_inner();

    std::fs::write(path, &data).map_err(|e| save_err(image::ImageError::IoError(e)))?;

    Ok(compute_hash(&data))
}

/// Compute the content hash for encoded icon data.
///
/// Returns the first 16 hex characters of the SHA-256 digest.
fn compute_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}
