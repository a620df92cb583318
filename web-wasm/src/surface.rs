//! DOMとダイアログへの結果反映

use crate::payment;
use leptos::prelude::*;
use leptos::task::spawn_local;
use smartcal_common::{NutritionView, PaymentRequest, ResultSurface};

pub struct DomSurface {
    set_result: WriteSignal<Option<NutritionView>>,
    client_key: String,
}

impl DomSurface {
    pub fn new(set_result: WriteSignal<Option<NutritionView>>, client_key: String) -> Self {
        Self { set_result, client_key }
    }
}

impl ResultSurface for DomSurface {
    fn show_result(&mut self, view: &NutritionView) {
        self.set_result.set(Some(view.clone()));
    }

    fn alert(&mut self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }

    fn launch_payment(&mut self, request: &PaymentRequest) {
        let client_key = self.client_key.clone();
        let request = request.clone();
        spawn_local(async move {
            if let Err(e) = payment::request_payment(&client_key, &request).await {
                log::error!("{}", e);
            }
        });
    }

    fn reload(&mut self) {
        reload_page();
    }
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}

pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
