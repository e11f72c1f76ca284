//! Raster decoding and resizing.
//!
//! Turns fetched bytes into a [`RasterImage`] ready for sprite upload. SVG
//! documents are rasterized with resvg at their intrinsic size; every other
//! format goes through the `image` crate. Decoding is CPU work, so the async
//! entry point runs it on the blocking thread pool.

use thiserror::Error;

use resvg::{tiny_skia, usvg};

/// Decode-specific error type
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("SVG rasterization failed: {0}")]
    Svg(String),

    #[error("Image decode failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Decode task was canceled")]
    Canceled,
}

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// A decoded bitmap ready for sprite upload.
///
/// `data` is tightly-packed RGBA8, `width * height * 4` bytes. Rasters
/// produced from SVG sources carry premultiplied alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Decode bytes into a raster image.
///
/// The actual decode runs on `tokio::task::spawn_blocking`.
///
/// # Errors
///
/// Returns [`DecodeError`] if the bytes are neither a renderable SVG
/// document nor a supported bitmap format.
pub async fn decode(bytes: Vec<u8>) -> DecodeResult<RasterImage> {
    tokio::task::spawn_blocking(move || decode_blocking(&bytes))
        .await
        .map_err(|_| DecodeError::Canceled)?
}

/// Synchronous decode; prefer [`decode`] from async contexts.
pub fn decode_blocking(bytes: &[u8]) -> DecodeResult<RasterImage> {
    if looks_like_svg(bytes) {
        decode_svg(bytes)
    } else {
        decode_bitmap(bytes)
    }
}

/// Uniformly downscale a raster so it fits within the given bounds.
///
/// A zero bound disables the check on both axes. The scale factor is
/// `min(max_width/width, max_height/height)` and is applied only when it is
/// below 1 — images within bounds are returned untouched and nothing is
/// ever upscaled. Aspect ratio is preserved.
pub fn fit_within(raster: RasterImage, max_width: u32, max_height: u32) -> DecodeResult<RasterImage> {
    if max_width == 0 || max_height == 0 {
        return Ok(raster);
    }
    if raster.width <= max_width && raster.height <= max_height {
        return Ok(raster);
    }

    let factor = f64::min(
        max_width as f64 / raster.width as f64,
        max_height as f64 / raster.height as f64,
    );
    if factor >= 1.0 {
        return Ok(raster);
    }

    let new_width = ((raster.width as f64 * factor).round() as u32).max(1);
    let new_height = ((raster.height as f64 * factor).round() as u32).max(1);

    tracing::debug!(
        from_width = raster.width,
        from_height = raster.height,
        to_width = new_width,
        to_height = new_height,
        "Downscaling raster to fit bounds"
    );

    let img = image::RgbaImage::from_raw(raster.width, raster.height, raster.data)
        .ok_or(DecodeError::EmptyImage)?;
    let resized = image::imageops::resize(
        &img,
        new_width,
        new_height,
        image::imageops::FilterType::Lanczos3,
    );

    Ok(RasterImage {
        width: new_width,
        height: new_height,
        data: resized.into_raw(),
    })
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let Ok(text) = std::str::from_utf8(bytes) else {
        return false;
    };
    text.trim_start_matches('\u{feff}').trim_start().starts_with('<')
}

fn decode_svg(bytes: &[u8]) -> DecodeResult<RasterImage> {
    let options = usvg::Options::default();
    let tree =
        usvg::Tree::from_data(bytes, &options).map_err(|e| DecodeError::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(DecodeError::EmptyImage)?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    Ok(RasterImage {
        width: size.width(),
        height: size.height(),
        data: pixmap.take(),
    })
}

fn decode_bitmap(bytes: &[u8]) -> DecodeResult<RasterImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();

    Ok(RasterImage {
        width: rgba.width(),
        height: rgba.height(),
        data: rgba.into_raw(),
    })
}
