use leptos::prelude::*;

/// Labelled select over a fixed list of choices.
///
/// The first option is empty (`placeholder`), so an unset value stays
/// distinguishable from the first real choice.
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: &'static [&'static str],
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=select_id>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <select
                id=select_id
                class="form__select"
                class:form__input--invalid=move || invalid.get().unwrap_or(false)
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                {options.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
