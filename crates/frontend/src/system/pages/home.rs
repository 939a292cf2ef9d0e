use crate::layout::top_header::APP_NAME;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page with the entry point to the stock manager
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--custom" category=PAGE_CAT_CUSTOM>
            <div class="home">
                <h1 class="home__title">{APP_NAME}</h1>
                <p class="home__subtitle">
                    "Sistema para gerenciamento de produtos e estoque."
                </p>
                <span class="button button--primary"><A href="/produtos">"Gerenciar produtos"</A></span>
            </div>
        </PageFrame>
    }
}
