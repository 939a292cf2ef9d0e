use leptos::prelude::*;

/// Button component with variants (primary, secondary, warning, danger, ghost)
#[component]
pub fn Button(
    /// Button variant: "primary", "secondary", "warning", "danger" or "ghost"
    #[prop(into)]
    variant: Signal<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_str() {
        "secondary" => "button--secondary",
        "warning" => "button--warning",
        "danger" => "button--danger",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {}", variant_class(), additional_class())
            title=move || title.get()
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
