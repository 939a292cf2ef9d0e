use leptos::prelude::*;

/// Controlled input: the DOM value always follows `value`
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Lower bound for numeric inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// ID and name of the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            id=input_id
            name=input_id
            class=move || format!("form__input {}", additional_class())
            type=input_t
            prop:value=move || value.get()
            placeholder=input_placeholder
            min=move || min.get()
            disabled=move || disabled.get()
            autocomplete="off"
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
