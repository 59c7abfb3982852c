//! Frame ingestion for hand-landmark detection.
//!
//! Host applications hand over raw pixel buffers with out-of-band
//! dimensions. This crate validates them and reshapes them into an
//! [`ImageMatrix`], a contiguous HWC view: `[height, width, 3]`.
//!
//! No color conversion happens here; the caller supplies RGB order.

pub mod decode;
pub mod error;
pub mod matrix;

pub use decode::{decode, decode_rgba, decode_strided, decode_with_format, PixelFormat};
pub use error::FrameError;
pub use matrix::{frame_len, ImageMatrix, RGB_CHANNELS};
