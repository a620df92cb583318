//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"SmartCal AI"</h1>
            <p class="text-muted">"찍기만 하면 칼로리 분석 끝"</p>
        </header>
    }
}
