use leptos::prelude::*;

/// Bootstrap form input posted under `name`, with label and validation feedback
#[component]
pub fn Input(
    /// Form field name, also used as the element id
    name: &'static str,
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "number", "datetime-local", ...
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)]
    required: bool,
    /// Lower bound for numeric inputs
    #[prop(optional)]
    min: Option<&'static str>,
    #[prop(optional)]
    max: Option<&'static str>,
    /// Shown once the form is marked validated and this field is invalid
    #[prop(optional)]
    invalid_text: Option<&'static str>,
    /// Unit shown after the input ("%", "đ")
    #[prop(optional)]
    suffix: Option<&'static str>,
    /// Column classes of the wrapper
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input = view! {
        <input
            id=name
            name=name
            class="form-control"
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            placeholder=input_placeholder
            required=required
            min=min
            max=max
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    };
    let feedback = invalid_text.map(|text| view! { <div class="invalid-feedback">{text}</div> });

    view! {
        <div class=class.unwrap_or("mb-3")>
            <label class="form-label fw-semibold" for=name>
                {label}
                {required.then(|| view! { <span class="text-danger">" *"</span> })}
            </label>
            {match suffix {
                Some(unit) => view! {
                    <div class="input-group has-validation">
                        {input}
                        <span class="input-group-text">{unit}</span>
                        {feedback}
                    </div>
                }
                .into_any(),
                None => view! { {input} {feedback} }.into_any(),
            }}
        </div>
    }
}
