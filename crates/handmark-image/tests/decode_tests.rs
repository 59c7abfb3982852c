use handmark_image::{
    decode, decode_rgba, decode_strided, decode_with_format, frame_len, FrameError, ImageMatrix,
    PixelFormat,
};

#[test]
fn test_decode_shape_for_valid_sizes() {
    for &(width, height) in &[(1, 1), (3, 2), (300, 300), (640, 480), (1, 17)] {
        let buffer = vec![0u8; width * height * 3];
        let matrix = decode(&buffer, width, height).unwrap();
        assert_eq!(matrix.shape(), [height, width, 3]);
        assert_eq!(matrix.width(), width);
        assert_eq!(matrix.height(), height);
        assert_eq!(matrix.channels(), 3);
    }
}

#[test]
fn test_decode_borrows_packed_buffer() {
    let buffer = vec![7u8; 4 * 2 * 3];
    let matrix = decode(&buffer, 4, 2).unwrap();
    assert!(matrix.is_borrowed());
    assert_eq!(matrix.as_bytes().as_ptr(), buffer.as_ptr());
}

#[test]
fn test_decode_rejects_short_and_long_buffers() {
    let short = vec![0u8; 10 * 10 * 3 - 1];
    let long = vec![0u8; 10 * 10 * 3 + 1];

    assert_eq!(
        decode(&short, 10, 10).unwrap_err(),
        FrameError::SizeMismatch { expected: 300, actual: 299 }
    );
    assert_eq!(
        decode(&long, 10, 10).unwrap_err(),
        FrameError::SizeMismatch { expected: 300, actual: 301 }
    );
}

#[test]
fn test_decode_rgba_frame_as_rgb_reports_counts() {
    let rgba = vec![128u8; 640 * 480 * 4];
    let err = decode(&rgba, 640, 480).unwrap_err();

    assert_eq!(err, FrameError::SizeMismatch { expected: 921600, actual: 1228800 });
    assert_eq!(err.to_string(), "frame size mismatch: expected 921600 bytes, got 1228800");
}

#[test]
fn test_decode_rejects_zero_dimensions() {
    let result = decode(&[], 0, 480);
    assert!(matches!(result, Err(FrameError::InvalidDimensions { width: 0, height: 480 })));

    let result = decode(&[], 640, 0);
    assert!(matches!(result, Err(FrameError::InvalidDimensions { .. })));
}

#[test]
fn test_frame_len_overflow() {
    assert!(matches!(frame_len(usize::MAX, 2, 3), Err(FrameError::InvalidDimensions { .. })));
    assert_eq!(frame_len(640, 480, 3).unwrap(), 921600);
}

#[test]
fn test_decode_row_major_pixel_order() {
    // 2x2: pixel (x, y) holds [10*y + x, 0, 255]
    let buffer = [0, 0, 255, 1, 0, 255, 10, 0, 255, 11, 0, 255];
    let matrix = decode(&buffer, 2, 2).unwrap();

    assert_eq!(matrix.pixel(0, 0), Some([0, 0, 255]));
    assert_eq!(matrix.pixel(1, 0), Some([1, 0, 255]));
    assert_eq!(matrix.pixel(0, 1), Some([10, 0, 255]));
    assert_eq!(matrix.pixel(1, 1), Some([11, 0, 255]));
    assert_eq!(matrix.pixel(2, 0), None);
    assert_eq!(matrix.pixel(0, 2), None);
}

#[test]
fn test_decode_does_not_reorder_channels() {
    let buffer = [1, 2, 3];
    let matrix = decode(&buffer, 1, 1).unwrap();
    assert_eq!(matrix.pixel(0, 0), Some([1, 2, 3]));
}

#[test]
fn test_decode_rgba_drops_alpha() {
    let buffer = [1, 2, 3, 255, 4, 5, 6, 0];
    let matrix = decode_rgba(&buffer, 2, 1).unwrap();

    assert_eq!(matrix.shape(), [1, 2, 3]);
    assert_eq!(matrix.as_bytes(), &[1, 2, 3, 4, 5, 6]);
    assert!(!matrix.is_borrowed());
}

#[test]
fn test_decode_rgba_rejects_rgb_buffer() {
    let rgb = vec![0u8; 4 * 4 * 3];
    assert_eq!(
        decode_rgba(&rgb, 4, 4).unwrap_err(),
        FrameError::SizeMismatch { expected: 64, actual: 48 }
    );
}

#[test]
fn test_decode_with_format_dispatch() {
    let rgba = vec![9u8; 3 * 3 * 4];
    let matrix = decode_with_format(&rgba, 3, 3, PixelFormat::Rgba8).unwrap();
    assert_eq!(matrix.as_bytes().len(), 27);

    assert!(decode_with_format(&rgba, 3, 3, PixelFormat::Rgb8).is_err());
    assert_eq!(PixelFormat::Rgb8.channels(), 3);
    assert_eq!(PixelFormat::Rgba8.channels(), 4);
}

#[test]
fn test_decode_strided_errors() {
    let buffer = vec![0u8; 100];
    assert_eq!(
        decode_strided(&buffer, 4, 2, 11).unwrap_err(),
        FrameError::InvalidStride { stride: 11, min: 12 }
    );

    // two rows of stride 16: need at least 16 + 12 bytes
    assert_eq!(
        decode_strided(&buffer[..27], 4, 2, 16).unwrap_err(),
        FrameError::SizeMismatch { expected: 28, actual: 27 }
    );
    assert_eq!(
        decode_strided(&buffer[..33], 4, 2, 16).unwrap_err(),
        FrameError::SizeMismatch { expected: 32, actual: 33 }
    );
    assert!(decode_strided(&buffer[..28], 4, 2, 16).is_ok());
    assert!(decode_strided(&buffer[..32], 4, 2, 16).is_ok());
}

#[test]
fn test_into_owned_keeps_pixels() {
    let buffer = vec![42u8; 2 * 2 * 3];
    let owned = decode(&buffer, 2, 2).unwrap().into_owned();
    drop(buffer);

    assert!(!owned.is_borrowed());
    assert_eq!(owned.pixel(1, 1), Some([42, 42, 42]));
}

#[test]
fn test_rgb_image_conversion() {
    let buffer: Vec<u8> = (0..18).collect();
    let matrix = decode(&buffer, 3, 2).unwrap();

    let image = matrix.to_rgb_image().unwrap();
    assert_eq!(image.dimensions(), (3, 2));
    assert_eq!(image.get_pixel(2, 1).0, [15, 16, 17]);

    let back = ImageMatrix::from_rgb_image(image).unwrap();
    assert_eq!(back, matrix.clone().into_owned());
    assert_eq!(back.as_bytes(), matrix.as_bytes());
}

#[test]
fn test_empty_rgb_image_is_rejected() {
    let image = crates_image::RgbImage::new(0, 4);

    let err = ImageMatrix::from_rgb_image(image).unwrap_err();
    assert_eq!(err, FrameError::InvalidDimensions { width: 0, height: 4 });
}

#[test]
fn test_from_vec_validates_length() {
    assert!(ImageMatrix::from_vec(vec![0; 11], 2, 2).is_err());
    assert!(ImageMatrix::from_vec(vec![0; 12], 2, 2).is_ok());
}
