//! 栄養情報パネル

use leptos::prelude::*;
use smartcal_common::NutritionView;

#[component]
pub fn NutritionPanel(result: ReadSignal<Option<NutritionView>>) -> impl IntoView {
    let field = move |pick: fn(&NutritionView) -> String| {
        move || result.with(|r| r.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <Show when=move || result.with(|r| r.is_some())>
            <div id="info" class="info">
                <h2 id="name">{field(|v| v.name.clone())}</h2>
                <p id="kcal" class="kcal">{field(|v| v.kcal.clone())}</p>
                <div class="macros">
                    <div>"탄수화물 " <span id="carb">{field(|v| v.carbs.clone())}</span></div>
                    <div>"단백질 " <span id="prot">{field(|v| v.protein.clone())}</span></div>
                    <div>"지방 " <span id="fat">{field(|v| v.fat.clone())}</span></div>
                </div>
            </div>
        </Show>
    }
}
