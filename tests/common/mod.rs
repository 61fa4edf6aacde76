//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;

use iconforge::config::SOURCE_PATH;
use image::{Rgba, RgbaImage};

/// A 192x192 base image with a diagonal gradient and a hard-edged square,
/// so resampling has real detail to work on.
pub fn base_icon() -> RgbaImage {
    RgbaImage::from_fn(192, 192, |x, y| {
        if (64..128).contains(&x) && (64..128).contains(&y) {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([(x * 255 / 191) as u8, (y * 255 / 191) as u8, 120, 255])
        }
    })
}

/// Write the base icon to `public/icon-192.png` under `root`.
pub fn write_base_icon(root: &Path) {
    let path = root.join(SOURCE_PATH);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    base_icon().save(&path).unwrap();
}
