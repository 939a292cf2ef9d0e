use crate::layout::top_header::APP_NAME;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

/// Title of the browser tab
pub const DOCUMENT_TITLE: &str = "Gestão de Estoque";

#[component]
pub fn App() -> impl IntoView {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} - {}", APP_NAME, DOCUMENT_TITLE));
    }

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
