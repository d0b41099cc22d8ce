//! I/O helpers for grayscale images, directory listings and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_grayscale_u8`: write an owned 8-bit buffer; format follows the extension.
//! - `save_rgb`: write a colour rendering (direction plots).
//! - `list_input_images`: sorted files of one extension in a folder.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::buf::GrayImageU8;
use crate::error::{CannyError, Result};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8> {
    let img = image::open(path)
        .map_err(|source| CannyError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    GrayImageU8::from_vec(width, height, img.into_raw())
}

/// Save an 8-bit grayscale buffer, creating parent directories.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(buffer.w as u32, buffer.h as u32, buffer.data.clone())
        .ok_or_else(|| {
            CannyError::ShapeMismatch(format!(
                "{} bytes do not form a {}x{} gray image",
                buffer.data.len(),
                buffer.w,
                buffer.h
            ))
        })?;
    image.save(path).map_err(|source| CannyError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Save an RGB rendering, creating parent directories.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|source| CannyError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Files in `folder` whose extension equals `ext` (case-insensitive, leading
/// dot optional), sorted by path.
pub fn list_input_images(folder: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let wanted = ext.trim_start_matches('.').to_ascii_lowercase();
    let entries = fs::read_dir(folder).map_err(|source| CannyError::Io {
        path: folder.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CannyError::Io {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.to_ascii_lowercase() == wanted);
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Create `path` and all missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| CannyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| CannyError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| CannyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    Ok(())
}
