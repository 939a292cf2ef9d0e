//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  : `"{entity}--{category}"`, e.g. `"a001_product--list"`
//!   - `data-page-category`  : one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// CSS class for a page category: `list` → `page`, `custom` → `page page--custom`
pub fn page_class(category: &str, extra: &str) -> String {
    let base_class = match category {
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };

    if extra.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {extra}")
    }
}

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}
