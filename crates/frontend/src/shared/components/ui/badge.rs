use crate::shared::number_format::format_quantity;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// Stock level badge: "N un", green when in stock, red otherwise
#[component]
pub fn StockBadge(product: Product) -> impl IntoView {
    view! {
        <span class={format!("badge {}", stock_class(&product))}>
            {format_quantity(product.quantity)}
        </span>
    }
}

fn stock_class(product: &Product) -> &'static str {
    if product.is_in_stock() {
        "badge--success"
    } else {
        "badge--error"
    }
}
