use crate::{HandBridge, HostValue};
use handmark_image::PixelFormat;
use handmark_infer::DetectionOutput;
use log::info;

/// Uniform mid-gray frame; RGBA frames get an opaque alpha channel.
pub fn gray_test_frame(width: usize, height: usize, format: PixelFormat) -> Vec<u8> {
    match format {
        PixelFormat::Rgb8 => vec![128; width * height * 3],
        PixelFormat::Rgba8 => [128, 128, 128, 255].repeat(width * height),
    }
}

/// Check that the bridge's engine can be started and run.
///
/// Re-initializes the bridge with its current config, then feeds a
/// 300x300 gray frame. A blank frame contains no hands; anything else
/// means the engine is misbehaving. The bridge stays usable afterwards.
pub fn self_test(bridge: &HandBridge) -> anyhow::Result<DetectionOutput> {
    bridge.init(bridge.config())?;
    info!("self test: engine initialized, degraded: {}", bridge.degraded());

    let frame = HostValue::Bytes(gray_test_frame(300, 300, PixelFormat::Rgb8));
    let output = bridge.process(&frame, 300, 300)?;
    if !output.is_empty() {
        anyhow::bail!(
            "engine reported {} hand(s) in a blank gray frame",
            output.len()
        );
    }
    info!("self test: gray frame processed, no hands");
    Ok(output)
}
