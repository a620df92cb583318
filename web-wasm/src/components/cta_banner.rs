//! 課金誘導バナー
//!
//! 一定間隔でフェードアウトし、ランダムな文言に差し替えてフェードインする。

use gloo::timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use smartcal_common::cta::{pick_message, CTA_FADE_MS};

#[component]
pub fn CtaBanner(interval_ms: u32) -> impl IntoView {
    let (text, set_text) = signal(pick_message(js_sys::Math::random()));
    let (visible, set_visible) = signal(true);

    // ページが生きている間ずっと回す
    Interval::new(interval_ms, move || {
        set_visible.set(false);
        Timeout::new(CTA_FADE_MS, move || {
            set_text.set(pick_message(js_sys::Math::random()));
            set_visible.set(true);
        })
        .forget();
    })
    .forget();

    view! {
        <p
            id="cta-text"
            class="cta"
            style=move || format!("opacity: {}; transition: opacity 0.5s", if visible.get() { "1" } else { "0" })
        >
            {move || text.get()}
        </p>
    }
}
