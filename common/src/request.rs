//! `/analyze` リクエストの取り決め

/// 識別子を送るヘッダー名
pub const USER_ID_HEADER: &str = "user-id";

/// 画像を載せるマルチパートのフィールド名
pub const FILE_FIELD: &str = "file";

pub const IMAGE_MIME: &str = "image/jpeg";

/// JPEGエンコード品質（ブラウザの `toBlob` は 0.0〜1.0）
pub const JPEG_QUALITY: f64 = 0.8;

/// マルチパートに付けるファイル名
pub const UPLOAD_FILE_NAME: &str = "capture.jpg";

/// `image` クレート用の品質 (1〜100)
pub fn jpeg_quality_percent() -> u8 {
    (JPEG_QUALITY * 100.0).round() as u8
}
