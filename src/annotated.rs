//! 注釈付き結果画像
//!
//! サーバーは検出枠を描いた画像を `data:image/jpeg;base64,...` で返す。
//! 通常のURLの場合はそのまま参照として扱う。

use crate::error::{Result, SmartCalError};
use base64::Engine;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum AnnotatedImage {
    Inline { mime_type: String, bytes: Vec<u8> },
    Remote(String),
}

impl AnnotatedImage {
    pub fn from_result_image(value: &str) -> Result<Self> {
        let Some(rest) = value.strip_prefix("data:") else {
            return Ok(AnnotatedImage::Remote(value.to_string()));
        };

        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| SmartCalError::InvalidDataUrl("カンマがありません".into()))?;
        let mime_type = header.split(';').next().unwrap_or("image/jpeg");
        if !header.ends_with(";base64") {
            return Err(SmartCalError::InvalidDataUrl(format!("base64ではありません: {}", header)));
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(data.trim())
            .map_err(|e| SmartCalError::InvalidDataUrl(e.to_string()))?;

        Ok(AnnotatedImage::Inline {
            mime_type: if mime_type.is_empty() { "image/jpeg" } else { mime_type }.to_string(),
            bytes,
        })
    }

    /// インライン画像をファイルに保存。保存した場合は `true`
    pub fn save(&self, path: &Path) -> Result<bool> {
        match self {
            AnnotatedImage::Inline { bytes, .. } => {
                std::fs::write(path, bytes)?;
                Ok(true)
            }
            AnnotatedImage::Remote(_) => Ok(false),
        }
    }
}
