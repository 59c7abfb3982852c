use crate::FrameError;
use std::borrow::Cow;

/// Channels per pixel of every matrix handed to a detection engine.
pub const RGB_CHANNELS: usize = 3;

/// Row-major HWC view of an RGB frame: `[height, width, 3]`.
///
/// The pixel data is always one contiguous slice. Packed host buffers are
/// borrowed as-is, anything that had to be repacked is owned.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMatrix<'a> {
    width: usize,
    height: usize,
    data: Cow<'a, [u8]>,
}

impl<'a> ImageMatrix<'a> {
    /// Wrap `data` without copying. `data.len()` must equal
    /// `width * height * 3`.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> Result<Self, FrameError> {
        check_len(data.len(), frame_len(width, height, RGB_CHANNELS)?)?;
        Ok(Self {
            width,
            height,
            data: Cow::Borrowed(data),
        })
    }

    /// Take ownership of packed RGB `data`.
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize) -> Result<ImageMatrix<'static>, FrameError> {
        check_len(data.len(), frame_len(width, height, RGB_CHANNELS)?)?;
        Ok(ImageMatrix {
            width,
            height,
            data: Cow::Owned(data),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        RGB_CHANNELS
    }

    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, RGB_CHANNELS]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// True when the matrix still points into the caller's buffer.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.data, Cow::Borrowed(_))
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * RGB_CHANNELS;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    pub fn into_owned(self) -> ImageMatrix<'static> {
        ImageMatrix {
            width: self.width,
            height: self.height,
            data: Cow::Owned(self.data.into_owned()),
        }
    }

    /// Copy into an `image` crate buffer for engines built on it.
    pub fn to_rgb_image(&self) -> Result<crates_image::RgbImage, FrameError> {
        let invalid = || FrameError::InvalidDimensions {
            width: self.width as i64,
            height: self.height as i64,
        };
        let width = u32::try_from(self.width).map_err(|_| invalid())?;
        let height = u32::try_from(self.height).map_err(|_| invalid())?;
        crates_image::RgbImage::from_raw(width, height, self.data.to_vec()).ok_or_else(invalid)
    }

    /// Take over an `image` crate buffer. Empty images are rejected like
    /// any other zero-sized frame.
    pub fn from_rgb_image(image: crates_image::RgbImage) -> Result<ImageMatrix<'static>, FrameError> {
        let (width, height) = image.dimensions();
        ImageMatrix::from_vec(image.into_raw(), width as usize, height as usize)
    }
}

/// Byte length of a packed `width x height` frame with `channels` bytes per
/// pixel. Zero or overflowing dimensions are rejected.
pub fn frame_len(width: usize, height: usize, channels: usize) -> Result<usize, FrameError> {
    let invalid = FrameError::InvalidDimensions {
        width: width as i64,
        height: height as i64,
    };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(invalid)
}

pub(crate) fn check_len(actual: usize, expected: usize) -> Result<(), FrameError> {
    if actual != expected {
        return Err(FrameError::SizeMismatch { expected, actual });
    }
    Ok(())
}
