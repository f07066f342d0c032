//! Encoding panoramas and faces to image files.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};

use crate::cubemap::{CubeFaceSet, PixelBuffer};
use crate::error::{PanoramaError, Result};

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Baseline JPEG; alpha is composited over black.
    Jpeg,
    /// 8-bit RGBA PNG.
    Png,
}

impl OutputFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(PanoramaError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

/// Options for writing image files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Output format. If None, inferred from the file extension.
    pub format: Option<OutputFormat>,
    /// JPEG quality (1-100).
    pub jpeg_quality: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            format: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl EncodeOptions {
    fn resolve_format(&self, path: &Path) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_path(path),
        }
    }
}

/// Drops alpha by compositing each texel over black.
fn flatten_alpha(buf: &PixelBuffer) -> Vec<u8> {
    buf.texels()
        .iter()
        .flat_map(|&[r, g, b, a]| {
            let scale = |c: u8| ((c as u32 * a as u32 + 127) / 255) as u8;
            [scale(r), scale(g), scale(b)]
        })
        .collect()
}

/// Writes `buf` to `path`, creating parent directories as needed.
pub fn export_panorama(buf: &PixelBuffer, path: &Path, options: &EncodeOptions) -> Result<()> {
    let format = options.resolve_format(path)?;
    if !(1..=100).contains(&options.jpeg_quality) {
        return Err(PanoramaError::InvalidQuality(options.jpeg_quality));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    match format {
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(writer, options.jpeg_quality);
            encoder.write_image(&flatten_alpha(buf), buf.width(), buf.height(), ExtendedColorType::Rgb8)?;
        }
        OutputFormat::Png => {
            let encoder = PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
            encoder.write_image(buf.as_raw(), buf.width(), buf.height(), ExtendedColorType::Rgba8)?;
        }
    }

    tracing::info!("Wrote {} ({}x{}, {:?})", path.display(), buf.width(), buf.height(), format);
    Ok(())
}

/// Writes each face of `faces` to `{output_dir}/{slot}.{ext}`.
pub fn export_faces(faces: &CubeFaceSet, output_dir: &Path, format: OutputFormat, jpeg_quality: u8) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let options = EncodeOptions {
        format: Some(format),
        jpeg_quality,
    };
    for (slot, face) in faces.iter() {
        let path = output_dir.join(format!("{}.{}", slot.name(), format.extension()));
        export_panorama(face, &path, &options)?;
    }
    Ok(())
}
