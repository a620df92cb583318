//! メインアプリケーションコンポーネント

use crate::components::{
    camera_view::CameraView,
    capture_button::CaptureButton,
    cta_banner::CtaBanner,
    header::Header,
    nutrition_panel::NutritionPanel,
};
use crate::surface::{page_origin, reload_page, DomSurface};
use crate::{api, camera, config, identity_store};
use gloo::timers::callback::Timeout;
use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use smartcal_common::{CaptureFlow, CapturePhase, NutritionView, Trigger};
use wasm_bindgen::JsValue;

/// シャッター演出の長さ (ms)
const SHUTTER_FLASH_MS: u32 = 200;
const VIBRATE_MS: u32 = 50;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = config::load_config();
    let identity = StoredValue::new(identity_store::load_identity(&config.storage_key));
    let cta_interval_ms = config.cta_interval_ms;
    let analyze_url = StoredValue::new(config.analyze_url());
    let client_key = StoredValue::new(config.payment.client_key.clone());
    let flow = StoredValue::new(CaptureFlow::new(config));

    let (phase, set_phase) = signal(CapturePhase::Idle);
    let (result, set_result) = signal(None::<NutritionView>);
    let (flash, set_flash) = signal(false);
    let video_ref = NodeRef::<Video>::new();

    let sync_phase = move || set_phase.set(flow.with_value(|f| f.phase()));

    // video 要素のマウント後にカメラを起動
    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            spawn_local(async move {
                if let Err(e) = camera::start(&video).await {
                    log::error!("camera unavailable: {:?}", e);
                }
            });
        }
    });

    let on_capture = move |_: ()| {
        let mut trigger = Trigger::Ignored;
        flow.update_value(|f| trigger = f.trigger());
        match trigger {
            Trigger::Ignored => return,
            Trigger::Retake => {
                reload_page();
                return;
            }
            Trigger::Capture => {}
        }
        sync_phase();
        shutter_feedback(set_flash);

        let Some(video) = video_ref.get() else {
            log::warn!("video element not mounted");
            flow.update_value(|f| {
                f.frame_captured(false);
            });
            sync_phase();
            return;
        };

        spawn_local(async move {
            let blob = match camera::capture_frame(&video).await {
                Ok(blob) => blob,
                Err(e) => {
                    log::error!("frame capture failed: {:?}", e);
                    None
                }
            };

            let mut proceed = false;
            flow.update_value(|f| proceed = f.frame_captured(blob.is_some()));
            sync_phase();
            let (true, Some(blob)) = (proceed, blob) else {
                return;
            };

            let response = api::analyze::analyze(
                &analyze_url.get_value(),
                &identity.get_value(),
                &blob,
            )
            .await;

            let mut surface = DomSurface::new(set_result, client_key.get_value());
            let origin = page_origin();
            let now_ms = js_sys::Date::now() as u64;
            flow.update_value(|f| f.settle(response, &origin, now_ms, &mut surface));
            sync_phase();
        });
    };

    view! {
        <div class="container">
            <Header />
            <CameraView video_ref=video_ref result=result flash=flash />
            <NutritionPanel result=result />
            <CtaBanner interval_ms=cta_interval_ms />
            <CaptureButton phase=phase on_capture=on_capture />
        </div>
    }
}

/// 振動（対応端末のみ）とシャッターのフラッシュ
fn shutter_feedback(set_flash: WriteSignal<bool>) {
    if let Some(window) = web_sys::window() {
        let navigator = window.navigator();
        if js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false) {
            navigator.vibrate_with_duration(VIBRATE_MS);
        }
    }

    set_flash.set(true);
    Timeout::new(SHUTTER_FLASH_MS, move || set_flash.set(false)).forget();
}
