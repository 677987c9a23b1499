use leptos::prelude::*;

/// Bootstrap textarea posted under `name`
#[component]
pub fn Textarea(
    name: &'static str,
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="mb-3">
            <label class="form-label fw-semibold" for=name>{label}</label>
            <textarea
                id=name
                name=name
                class="form-control"
                placeholder=textarea_placeholder
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
