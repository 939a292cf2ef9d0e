use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--custom" category=PAGE_CAT_CUSTOM>
            <div class="home">
                <h1 class="home__title">"Página não encontrada"</h1>
                <A href="/">"Voltar ao início"</A>
            </div>
        </PageFrame>
    }
}
