use crate::matrix::{check_len, frame_len};
use crate::{FrameError, ImageMatrix, RGB_CHANNELS};

/// Pixel layouts a host may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    /// RGB plus an alpha byte, as FireMonkey bitmaps are read out.
    Rgba8,
}

impl PixelFormat {
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Reshapes a packed RGB buffer into a `[height, width, 3]` matrix.
///
/// The buffer is borrowed, not copied.
///
/// # Errors
///
/// Returns `FrameError::SizeMismatch` unless `buffer.len()` is exactly
/// `width * height * 3`. A 640x480 RGBA frame (1228800 bytes) is rejected
/// here rather than misread as RGB.
/// Returns `FrameError::InvalidDimensions` for zero or overflowing sizes.
pub fn decode(buffer: &[u8], width: usize, height: usize) -> Result<ImageMatrix<'_>, FrameError> {
    ImageMatrix::from_slice(buffer, width, height)
}

/// Decodes a packed RGBA buffer, dropping the alpha channel.
///
/// The result owns its pixels since the layout changes.
pub fn decode_rgba(
    buffer: &[u8],
    width: usize,
    height: usize,
) -> Result<ImageMatrix<'static>, FrameError> {
    check_len(buffer.len(), frame_len(width, height, 4)?)?;
    let rgb: Vec<u8> = buffer.chunks_exact(4).flat_map(|p| &p[..3]).copied().collect();
    ImageMatrix::from_vec(rgb, width, height)
}

pub fn decode_with_format(
    buffer: &[u8],
    width: usize,
    height: usize,
    format: PixelFormat,
) -> Result<ImageMatrix<'_>, FrameError> {
    match format {
        PixelFormat::Rgb8 => decode(buffer, width, height),
        PixelFormat::Rgba8 => decode_rgba(buffer, width, height),
    }
}

/// Decodes RGB rows that are `stride` bytes apart.
///
/// Bitmaps often pad each scanline; the padding after the last row may or
/// may not be present. When `stride` equals the packed row length this is
/// the same as [`decode`], otherwise the rows are copied into a packed
/// matrix.
pub fn decode_strided(
    buffer: &[u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<ImageMatrix<'_>, FrameError> {
    let row = frame_len(width, 1, RGB_CHANNELS)?;
    frame_len(width, height, RGB_CHANNELS)?;
    if stride < row {
        return Err(FrameError::InvalidStride { stride, min: row });
    }
    if stride == row {
        return decode(buffer, width, height);
    }

    let overflow = || FrameError::InvalidDimensions {
        width: width as i64,
        height: height as i64,
    };
    let full = stride.checked_mul(height).ok_or_else(overflow)?;
    let min = full - stride + row;
    if buffer.len() < min {
        return Err(FrameError::SizeMismatch { expected: min, actual: buffer.len() });
    }
    if buffer.len() > full {
        return Err(FrameError::SizeMismatch { expected: full, actual: buffer.len() });
    }

    let packed: Vec<u8> = buffer
        .chunks(stride)
        .take(height)
        .flat_map(|line| &line[..row])
        .copied()
        .collect();
    ImageMatrix::from_vec(packed, width, height)
}
