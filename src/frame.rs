//! 撮影フレームのJPEGエンコード
//!
//! ブラウザ版の `canvas.toBlob('image/jpeg', 0.8)` に相当する。
//! 縮小・補正などの前処理は行わない。

use crate::error::{Result, SmartCalError};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use smartcal_common::request::jpeg_quality_percent;
use std::path::Path;

/// RGB8 フレームをJPEGにエンコード
///
/// # Arguments
/// * `width`, `height` - フレームサイズ
/// * `rgb` - `width * height * 3` バイトの画素データ
pub fn encode_frame(width: u32, height: u32, rgb: Vec<u8>) -> Result<Vec<u8>> {
    let frame = RgbImage::from_raw(width, height, rgb).ok_or_else(|| {
        SmartCalError::Config(format!("フレームサイズが画素数と一致しません: {}x{}", width, height))
    })?;
    encode_image(&DynamicImage::ImageRgb8(frame))
}

/// 画像ファイルを読み込んでJPEGに再エンコード
pub fn load_frame(path: &Path) -> Result<Vec<u8>> {
    let img = image::open(path)?;
    encode_image(&img)
}

fn encode_image(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, jpeg_quality_percent());
    encoder.encode_image(&img.to_rgb8())?;
    Ok(buffer)
}
