//! クライアント設定
//!
//! 既定値はそのまま本番クライアントの値。ブラウザ版はページ内のJSON、
//! ネイティブ版は設定ファイルで部分的に上書きできる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://smartcal-ai.onrender.com";
pub const DEFAULT_STORAGE_KEY: &str = "sc_id";

/// 決済ウィジェットの設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// ウィジェットのクライアントキー（テスト用キー）
    pub client_key: String,
    /// 決済手段
    pub method: String,
    pub amount: u32,
    pub order_name: String,
    pub success_path: String,
    pub fail_path: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            client_key: "test_ck_D53Q9DRW8vn6ed7pxz38jAYErxRG".into(),
            method: "카드".into(),
            amount: 9900,
            order_name: "SmartCal AI Pro 평생권".into(),
            success_path: "/success.html".into(),
            fail_path: "/fail.html".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    /// 識別子を保存するキー
    pub storage_key: String,
    /// 通信失敗時にページを再読み込みする
    pub reload_on_failure: bool,
    /// CTA文言の切り替え間隔 (ms)
    pub cta_interval_ms: u32,
    pub payment: PaymentConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            reload_on_failure: true,
            cta_interval_ms: 5000,
            payment: PaymentConfig::default(),
        }
    }
}

impl ClientConfig {
    /// JSONから読み込み（省略されたキーは既定値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(Error::Config("api_url が空です".into()));
        }
        if self.storage_key.is_empty() {
            return Err(Error::Config("storage_key が空です".into()));
        }
        Ok(())
    }

    /// 解析エンドポイントのURL
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.api_url.trim().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.analyze_url(), "https://smartcal-ai.onrender.com/analyze");
        assert_eq!(config.storage_key, "sc_id");
        assert!(config.reload_on_failure);
        assert_eq!(config.payment.amount, 9900);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = ClientConfig::from_json(
            r#"{"api_url": "http://localhost:8000/", "payment": {"amount": 3900}}"#,
        )
        .unwrap();

        assert_eq!(config.analyze_url(), "http://localhost:8000/analyze");
        assert_eq!(config.payment.amount, 3900);
        assert_eq!(config.payment.method, "카드");
        assert_eq!(config.cta_interval_ms, 5000);
    }

    #[test]
    fn test_from_json_rejects_empty_url() {
        let err = ClientConfig::from_json(r#"{"api_url": "  "}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = ClientConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
