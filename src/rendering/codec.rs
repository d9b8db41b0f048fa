//! Capture decoding and PNG output.

use std::io::Cursor;
use std::path::Path;

use scope_recolor::RgbImage;

use crate::error::AppError;

/// Output encoding options
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Re-compress with oxipng (slower, smaller files)
    pub optimize: bool,
}

fn from_dynamic(img: image::DynamicImage, path: &Path) -> Result<RgbImage, AppError> {
    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    RgbImage::from_raw(width, height, rgb.into_raw()).ok_or_else(|| AppError::Decode {
        path: path.to_path_buf(),
        message: format!("pixel buffer does not match {width}x{height}"),
    })
}

/// Decode an image file in any format the `image` crate understands.
///
/// Alpha is dropped and palette or grayscale images are expanded to RGB, so
/// a 1-bit capture arrives as pure black and white.
pub fn decode_file(path: &Path) -> Result<RgbImage, AppError> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| AppError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    from_dynamic(img, path)
}

/// Decode an in-memory image; `origin` names it in error messages.
pub fn decode_bytes(bytes: &[u8], origin: &Path) -> Result<RgbImage, AppError> {
    let img = image::load_from_memory(bytes).map_err(|e| AppError::Decode {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })?;
    from_dynamic(img, origin)
}

/// Encode an image as 8-bit RGB PNG.
pub fn encode_png(img: &RgbImage, options: EncodeOptions) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, img.width(), img.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        if options.optimize {
            // oxipng will re-compress optimally
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::Encode(e.to_string()))?;
        writer
            .write_image_data(img.as_raw())
            .map_err(|e| AppError::Encode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !options.optimize {
        return Ok(png_bytes);
    }

    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
            Ok(png_bytes)
        }
    }
}
