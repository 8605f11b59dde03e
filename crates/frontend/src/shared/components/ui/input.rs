use leptos::prelude::*;

/// Labelled text input. A required field gets a `*` after its label and
/// the `form__input--invalid` class while `invalid` is set.
#[component]
pub fn Input(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                id=input_id
                class="form__input"
                class:form__input--invalid=move || invalid.get().unwrap_or(false)
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
