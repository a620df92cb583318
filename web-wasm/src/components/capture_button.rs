//! 撮影ボタン

use leptos::prelude::*;
use smartcal_common::CapturePhase;

#[component]
pub fn CaptureButton<F>(phase: ReadSignal<CapturePhase>, on_capture: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class="btn btn-primary"
            data-phase=move || phase.get().as_str()
            disabled=move || phase.get().is_busy()
            on:click=move |_| on_capture(())
        >
            {move || phase.get().button_label()}
        </button>
    }
}
