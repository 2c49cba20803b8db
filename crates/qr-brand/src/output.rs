//! Output formats and file persistence.
//!
//! Files are written to a sibling temporary file and renamed into place, so
//! a failed request never leaves a truncated output behind.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::{QrBrandError, Result};

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
    Tiff,
    Svg,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Png,
        OutputFormat::Jpeg,
        OutputFormat::Bmp,
        OutputFormat::Tiff,
        OutputFormat::Svg,
    ];

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Svg => "svg",
        }
    }

    /// Extensions accepted for this format, canonical first.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            OutputFormat::Png => &["png"],
            OutputFormat::Jpeg => &["jpg", "jpeg"],
            OutputFormat::Bmp => &["bmp"],
            OutputFormat::Tiff => &["tiff", "tif"],
            OutputFormat::Svg => &["svg"],
        }
    }

    /// Vector formats skip logo compositing.
    pub fn is_vector(self) -> bool {
        matches!(self, OutputFormat::Svg)
    }

    /// Encoder for raster formats, `None` for vector ones.
    pub fn image_format(self) -> Option<ImageFormat> {
        match self {
            OutputFormat::Png => Some(ImageFormat::Png),
            OutputFormat::Jpeg => Some(ImageFormat::Jpeg),
            OutputFormat::Bmp => Some(ImageFormat::Bmp),
            OutputFormat::Tiff => Some(ImageFormat::Tiff),
            OutputFormat::Svg => None,
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| QrBrandError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }
}

impl FromStr for OutputFormat {
    type Err = QrBrandError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.extensions().contains(&name.as_str()))
            .ok_or_else(|| QrBrandError::UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encode `img` as opaque RGB in a raster `format` and write it to `path`.
pub fn write_raster(img: RgbaImage, path: &Path, format: OutputFormat) -> Result<()> {
    let image_format = format
        .image_format()
        .ok_or_else(|| QrBrandError::UnsupportedFormat(format!("{format} is not a raster format")))?;
    let rgb = DynamicImage::ImageRgba8(img).into_rgb8();

    write_atomic(path, |writer| {
        rgb.write_to(writer, image_format)
            .map_err(|source| QrBrandError::ImageEncode {
                path: path.to_path_buf(),
                source,
            })
    })?;
    debug!(path = %path.display(), %format, "Wrote raster output");
    Ok(())
}

/// Write a text document (SVG) to `path`.
pub fn write_text(contents: &str, path: &Path) -> Result<()> {
    write_atomic(path, |writer| {
        writer.write_all(contents.as_bytes()).map_err(io_error(path))
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote text output");
    Ok(())
}

fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let tmp = temp_path(path);
    let result = File::create(&tmp)
        .map_err(io_error(&tmp))
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush().map_err(io_error(&tmp))
        })
        .and_then(|()| fs::rename(&tmp, path).map_err(io_error(path)));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp-{}", std::process::id()))
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> QrBrandError + '_ {
    move |source| QrBrandError::Io {
        path: path.to_path_buf(),
        source,
    }
}
