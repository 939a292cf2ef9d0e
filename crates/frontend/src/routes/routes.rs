use crate::domain::a001_product::ui::ProductList;
use crate::layout::Shell;
use crate::system::pages::{HomePage, NotFound};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/produtos") view=ProductList />
                </Routes>
            </Shell>
        </Router>
    }
}
