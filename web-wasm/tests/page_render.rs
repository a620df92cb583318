//! 解析結果の画面反映のブラウザテスト (`wasm-pack test --headless --chrome`)

#![cfg(target_arch = "wasm32")]

use leptos::html::Video;
use leptos::prelude::*;
use smartcal_common::{AnalysisResult, NutritionView};
use smartcal_web::components::camera_view::CameraView;
use smartcal_web::components::nutrition_panel::NutritionPanel;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document unavailable");
    let div = document
        .create_element("div")
        .expect("create_element failed")
        .dyn_into::<HtmlElement>()
        .expect("not an HtmlElement");
    document
        .body()
        .expect("body unavailable")
        .append_child(&div)
        .expect("append failed");
    div
}

fn salad() -> NutritionView {
    NutritionView::from(&AnalysisResult {
        food_name: "Salad".to_string(),
        calories: 250.0,
        carbs: 20.0,
        protein: 5.0,
        fat: 12.0,
        result_image: "http://x/y.jpg".to_string(),
    })
}

fn text(root: &HtmlElement, selector: &str) -> String {
    root.query_selector(selector)
        .expect("invalid selector")
        .unwrap_or_else(|| panic!("{} not rendered", selector))
        .text_content()
        .unwrap_or_default()
}

fn video_hidden(root: &HtmlElement) -> bool {
    root.query_selector("#v")
        .expect("invalid selector")
        .expect("#v not rendered")
        .get_attribute("class")
        .unwrap_or_default()
        .split_whitespace()
        .any(|c| c == "hidden")
}

#[wasm_bindgen_test]
fn result_fills_every_field() {
    let root = container();
    let (result, _) = signal(Some(salad()));
    let (flash, _) = signal(false);

    let _handle = leptos::mount::mount_to(root.clone(), move || {
        view! {
            <CameraView video_ref=NodeRef::<Video>::new() result=result flash=flash />
            <NutritionPanel result=result />
        }
    });

    assert_eq!(text(&root, "#name"), "Salad");
    assert_eq!(text(&root, "#kcal"), "250 kcal");
    assert_eq!(text(&root, "#carb"), "20g");
    assert_eq!(text(&root, "#prot"), "5g");
    assert_eq!(text(&root, "#fat"), "12g");

    let img = root
        .query_selector("#resultBox img")
        .expect("invalid selector")
        .expect("result image not rendered");
    assert_eq!(img.get_attribute("src").as_deref(), Some("http://x/y.jpg"));
    assert!(video_hidden(&root));
}

/// 結果がない間（期限切れ・通信失敗を含む）は何も書き込まれない
#[wasm_bindgen_test]
fn no_result_leaves_page_untouched() {
    let root = container();
    let (result, _) = signal(None::<NutritionView>);
    let (flash, _) = signal(false);

    let _handle = leptos::mount::mount_to(root.clone(), move || {
        view! {
            <CameraView video_ref=NodeRef::<Video>::new() result=result flash=flash />
            <NutritionPanel result=result />
        }
    });

    assert!(root.query_selector("#info").unwrap().is_none());
    assert!(root.query_selector("#resultBox").unwrap().is_none());
    assert!(!video_hidden(&root));
}
