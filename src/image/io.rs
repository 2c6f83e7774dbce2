//! I/O helpers for raster images and JSON.
//!
//! - `save_rgb_png`: write a `RasterImage` as an 8-bit RGB PNG.
//! - `load_rgb_png`: read any image file back into a `RasterImage`.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `write_json_compact`: single-line JSON, used for annotation documents.
//! - `read_json_file`: deserialize a JSON file.
use super::RasterImage;
use crate::error::{DatasetError, Result};
use image::{ImageBuffer, Rgb as RgbPixel};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Save an RGB raster to a PNG, creating parent directories.
pub fn save_rgb_png(raster: &RasterImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<RgbPixel<u8>, &[u8]> =
        ImageBuffer::from_raw(raster.w as u32, raster.h as u32, raster.as_bytes())
            .ok_or_else(|| DatasetError::storage(path, "raster buffer size mismatch"))?;
    image
        .save(path)
        .map_err(|e| DatasetError::storage(path, e))
}

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_png(path: &Path) -> Result<RasterImage> {
    let img = image::open(path)
        .map_err(|e| DatasetError::input(path, e))?
        .into_rgb8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let data = img.pixels().map(|p| p.0).collect();
    Ok(RasterImage { w, h, data })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| DatasetError::storage(path, e))?;
    fs::write(path, json).map_err(|e| DatasetError::storage(path, e))
}

/// Serialize a value as compact JSON to `path`, creating parent directories.
pub fn write_json_compact<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| DatasetError::storage(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(|e| DatasetError::storage(path, e))?;
    writer.flush().map_err(|e| DatasetError::storage(path, e))
}

/// Deserialize a JSON file. Both read and parse failures count as malformed input.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| DatasetError::input(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| DatasetError::input(path, e))
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| DatasetError::storage(dir, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    Ok(())
}
