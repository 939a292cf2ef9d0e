//! TopHeader component - application top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

/// Brand name shown in the top bar and the document title
pub const APP_NAME: &str = "SmartStock";

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{APP_NAME}</span>
            </div>

            <nav class="top-header__actions">
                <span class="top-header__link"><A href="/">"Início"</A></span>
                <span class="top-header__link"><A href="/produtos">"Produtos"</A></span>
            </nav>
        </div>
    }
}
