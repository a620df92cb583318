//! カメラ映像と解析結果画像

use leptos::html::Video;
use leptos::prelude::*;
use smartcal_common::NutritionView;

#[component]
pub fn CameraView(
    video_ref: NodeRef<Video>,
    result: ReadSignal<Option<NutritionView>>,
    flash: ReadSignal<bool>,
) -> impl IntoView {
    let has_result = move || result.with(|r| r.is_some());

    view! {
        <div class="camera relative">
            <video
                id="v"
                node_ref=video_ref
                class=move || if has_result() { "w-full h-full object-cover hidden" } else { "w-full h-full object-cover" }
            />
            <Show when=has_result>
                <div id="resultBox" class="w-full h-full">
                    <img
                        src=move || result.with(|r| r.as_ref().map(|v| v.image_src.clone()).unwrap_or_default())
                        class="w-full h-full object-cover"
                    />
                </div>
            </Show>
            <div
                id="shutter"
                class=move || if flash.get() { "shutter animate-shutter" } else { "shutter" }
            />
        </div>
    }
}
