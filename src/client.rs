//! `/analyze` 呼び出し

use crate::config::Config;
use crate::error::{Result, SmartCalError};
use reqwest::multipart::{Form, Part};
use smartcal_common::request::{FILE_FIELD, IMAGE_MIME, UPLOAD_FILE_NAME, USER_ID_HEADER};
use smartcal_common::{classify_response, ClientIdentity, Outcome};
use std::time::Duration;

/// 解析APIクライアント
///
/// リトライは行わない。失敗はそのまま呼び出し側へ返す。
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    http: reqwest::Client,
    analyze_url: String,
}

impl AnalyzeClient {
    pub fn new(config: &Config) -> Result<Self> {
        config.client.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            analyze_url: config.client.analyze_url(),
        })
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }

    /// JPEGを送信してレスポンスを分類
    pub async fn analyze(&self, identity: &ClientIdentity, jpeg: Vec<u8>) -> Result<Outcome> {
        log::info!("uploading {} bytes to {}", jpeg.len(), self.analyze_url);

        let part = Part::bytes(jpeg)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(IMAGE_MIME)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http
            .post(&self.analyze_url)
            .header(USER_ID_HEADER, identity.as_str())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("analyze returned HTTP {}: {}", status.as_u16(), body);
            // 本文が分類できるJSON（体験期間終了など）ならそれを優先
            return match classify_response(&body) {
                Ok(outcome) if !outcome.is_analyzed() => Ok(outcome),
                _ => Err(SmartCalError::Status(status.as_u16())),
            };
        }

        Ok(classify_response(&body)?)
    }
}
