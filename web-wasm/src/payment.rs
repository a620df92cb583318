//! 決済ウィジェット呼び出し

use smartcal_common::PaymentRequest;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/payment-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = "requestPayment", catch)]
    async fn request_payment_js(client_key: &str, method: &str, request: JsValue) -> Result<JsValue, JsValue>;
}

/// ウィジェットを開く。成功・失敗時の遷移はウィジェット側が行う
pub async fn request_payment(client_key: &str, request: &PaymentRequest) -> Result<(), String> {
    let value = serde_wasm_bindgen::to_value(request).map_err(|e| format!("決済引数の変換失敗: {}", e))?;
    request_payment_js(client_key, &request.method, value)
        .await
        .map(|_| ())
        .map_err(|e| format!("決済失敗: {:?}", e))
}
