//! プレミアム決済リクエスト
//!
//! 決済処理そのものは外部ウィジェットに委ねる。ここでは呼び出し引数だけを組み立てる。

use crate::config::PaymentConfig;
use serde::Serialize;

/// 決済ウィジェットに渡す引数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(skip)]
    pub method: String,
    pub amount: u32,
    pub order_id: String,
    pub order_name: String,
    pub success_url: String,
    pub fail_url: String,
}

impl PaymentRequest {
    /// # Arguments
    /// * `config` - 決済設定
    /// * `origin` - ページのオリジン（例: `https://smartcal.example`）
    /// * `now_ms` - 注文IDに使うエポックミリ秒
    pub fn new(config: &PaymentConfig, origin: &str, now_ms: u64) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            method: config.method.clone(),
            amount: config.amount,
            order_id: format!("order_{}", now_ms),
            order_name: config.order_name.clone(),
            success_url: format!("{}{}", origin, config.success_path),
            fail_url: format!("{}{}", origin, config.fail_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_request() {
        let request = PaymentRequest::new(
            &PaymentConfig::default(),
            "https://smartcal.example/",
            1_700_000_000_000,
        );

        assert_eq!(request.method, "카드");
        assert_eq!(request.amount, 9900);
        assert_eq!(request.order_id, "order_1700000000000");
        assert_eq!(request.success_url, "https://smartcal.example/success.html");
        assert_eq!(request.fail_url, "https://smartcal.example/fail.html");
    }

    #[test]
    fn test_payment_request_serialize() {
        let request = PaymentRequest::new(&PaymentConfig::default(), "http://localhost", 1);
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");

        assert!(json.contains("\"orderId\":\"order_1\""));
        assert!(json.contains("\"successUrl\":\"http://localhost/success.html\""));
        assert!(json.contains("\"amount\":9900"));
        assert!(!json.contains("method"));
    }
}
