pub mod state;
pub mod view_model;

use self::state::{create_state, ProductListState};
use self::view_model::ProductManager;
use crate::domain::a001_product::api::HttpProductApi;
use crate::shared::api_utils::ENDPOINTS;
use crate::shared::components::ui::{Button, Input, StockBadge};
use crate::shared::notify::{scroll_to_top, BrowserNotifier};
use crate::shared::number_format::format_price;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

type PageManager = ProductManager<HttpProductApi, BrowserNotifier, RwSignal<ProductListState>>;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let manager: PageManager =
        ProductManager::new(HttpProductApi::new(&ENDPOINTS), BrowserNotifier, state);

    let loading = Signal::derive(move || state.with(|s| s.loading));
    let is_edit_mode = Signal::derive(move || state.with(|s| s.is_edit_mode()));

    {
        let manager = manager.clone();
        spawn_local(async move {
            let _ = manager.load().await;
        });
    }

    let on_submit = {
        let manager = manager.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let manager = manager.clone();
            spawn_local(async move {
                let _ = manager.submit().await;
            });
        }
    };

    let on_cancel = {
        let manager = manager.clone();
        Callback::new(move |_| manager.cancel_edit())
    };

    let submit_label = move || {
        if loading.get() {
            "Processando..."
        } else if is_edit_mode.get() {
            "Salvar Alterações"
        } else {
            "Cadastrar"
        }
    };

    let table_manager = StoredValue::new(manager.clone());

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Controle de Estoque"</h1>
                    <p class="page__subtitle">"Gerencie seus produtos de forma simples."</p>
                </div>
            </div>

            <div class="page__content">
                <section class="card product-form">
                    <h2 class="card__title">
                        {move || if is_edit_mode.get() { "Editar Produto" } else { "Novo Produto" }}
                    </h2>

                    <form class="product-form__grid" on:submit=on_submit>
                        <Input
                            id="name".to_string()
                            class="product-form__name".to_string()
                            placeholder="Nome do produto".to_string()
                            value=Signal::derive(move || state.with(|s| s.name.clone()))
                            on_input=Callback::new(move |v| state.update(|s| s.name = v))
                            disabled=loading
                        />
                        <Input
                            id="price".to_string()
                            placeholder="Preço (R$)".to_string()
                            value=Signal::derive(move || state.with(|s| s.price.clone()))
                            on_input=Callback::new(move |v| state.update(|s| s.price = v))
                            disabled=loading
                        />
                        <Input
                            id="quantity".to_string()
                            input_type="number".to_string()
                            min="0".to_string()
                            placeholder="Qtd".to_string()
                            value=Signal::derive(move || state.with(|s| s.quantity.clone()))
                            on_input=Callback::new(move |v| state.update(|s| s.quantity = v))
                            disabled=loading
                        />
                        <Button
                            button_type="submit".to_string()
                            variant=Signal::derive(move || {
                                (if is_edit_mode.get() { "warning" } else { "primary" }).to_string()
                            })
                            disabled=loading
                        >
                            {submit_label}
                        </Button>

                        <Show when=move || is_edit_mode.get()>
                            <Button
                                variant="ghost".to_string()
                                class="product-form__cancel".to_string()
                                on_click=on_cancel
                                disabled=loading
                            >
                                "Cancelar Edição"
                            </Button>
                        </Show>
                    </form>
                </section>

                <section class="card product-table">
                    <Show
                        when=move || !(loading.get() && state.with(|s| s.products.is_empty()))
                        fallback=|| view! { <div class="product-table__notice">"Carregando estoque..."</div> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=240.0>"Produto"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>"Preço"</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>"Estoque"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>"Ações"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {
                                    let manager = table_manager.get_value();
                                    move || {
                                        let products = state.with(|s| s.products.clone());
                                        if products.is_empty() {
                                            return view! {
                                                <TableRow>
                                                    <TableCell class="product-table__notice">
                                                        "Nenhum produto cadastrado."
                                                    </TableCell>
                                                </TableRow>
                                            }
                                            .into_any();
                                        }
                                        products
                                            .into_iter()
                                            .map(|product| product_row(product, manager.clone(), loading))
                                            .collect_view()
                                            .into_any()
                                    }
                                }
                            </TableBody>
                        </Table>
                    </Show>
                </section>
            </div>
        </PageFrame>
    }
}

fn product_row(product: Product, manager: PageManager, loading: Signal<bool>) -> impl IntoView {
    let on_edit = {
        let manager = manager.clone();
        let product = product.clone();
        Callback::new(move |_| {
            manager.begin_edit(&product);
            scroll_to_top();
        })
    };

    let on_delete = {
        let id = product.id.clone();
        Callback::new(move |_| {
            let manager = manager.clone();
            let id = id.clone();
            spawn_local(async move {
                let _ = manager.delete(&id).await;
            });
        })
    };

    let name = product.name.clone();

    view! {
        <TableRow>
            <TableCell class="product-table__name">
                <TableCellLayout>{name}</TableCellLayout>
            </TableCell>
            <TableCell class="product-table__price">
                <TableCellLayout>{format_price(product.price)}</TableCellLayout>
            </TableCell>
            <TableCell class="text-center">
                <StockBadge product=product.clone() />
            </TableCell>
            <TableCell class="product-table__actions">
                <Button variant="secondary".to_string() title="Editar".to_string() on_click=on_edit disabled=loading>
                    "✏️"
                </Button>
                <Button variant="danger".to_string() title="Excluir".to_string() on_click=on_delete disabled=loading>
                    "🗑️"
                </Button>
            </TableCell>
        </TableRow>
    }
}
