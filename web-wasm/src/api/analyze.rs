//! `/analyze` 呼び出し（fetch + FormData）

use smartcal_common::request::{FILE_FIELD, UPLOAD_FILE_NAME, USER_ID_HEADER};
use smartcal_common::{classify_response, ClientIdentity, Error, Outcome, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Request, RequestInit, RequestMode, Response};

fn transport(e: JsValue) -> Error {
    Error::Transport(format!("{:?}", e))
}

/// 画像を送信してレスポンスを分類
///
/// タイムアウト・リトライはない。応答がなければ待ち続ける。
pub async fn analyze(url: &str, identity: &ClientIdentity, image: &Blob) -> Result<Outcome> {
    let form = FormData::new().map_err(transport)?;
    form.append_with_blob_and_filename(FILE_FIELD, image, UPLOAD_FILE_NAME)
        .map_err(transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    request
        .headers()
        .set(USER_ID_HEADER, identity.as_str())
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window がありません".into()))?;
    log::info!("uploading capture to {}", url);
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    let body = text.as_string().unwrap_or_default();

    if !resp.ok() {
        log::warn!("analyze returned HTTP {}", resp.status());
        return match classify_response(&body) {
            Ok(outcome) if !outcome.is_analyzed() => Ok(outcome),
            _ => Err(Error::Transport(format!("HTTP {}", resp.status()))),
        };
    }

    classify_response(&body)
}
