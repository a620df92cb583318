//! ページに埋め込まれた設定の読み込み
//!
//! `<script id="smartcal-config" type="application/json">{...}</script>`
//! があればその内容で既定値を上書きする。

use smartcal_common::ClientConfig;

const CONFIG_ELEMENT_ID: &str = "smartcal-config";

pub fn load_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return ClientConfig::default();
    };

    match ClientConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("invalid #{}, using defaults: {}", CONFIG_ELEMENT_ID, e);
            ClientConfig::default()
        }
    }
}
