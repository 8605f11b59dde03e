//! Create/edit dialog generated from a resource's field list.

use contracts::domain::common::Resource;
use contracts::shared::mutation::MutationKind;
use contracts::shared::record::FieldSpec;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::modal::Modal;

pub fn form_title<R: Resource>(kind: MutationKind) -> String {
    match kind {
        MutationKind::Register => format!("New {}", R::LABEL.to_lowercase()),
        _ => format!("Edit {}", R::LABEL.to_lowercase()),
    }
}

/// Modal form editing a draft copy of `initial`.
///
/// Save first checks required fields locally so the missing one is
/// highlighted, then hands the draft to `on_save` either way; the caller
/// owns submission and reporting.
#[component]
pub fn RecordForm<R: Resource>(
    initial: R,
    kind: MutationKind,
    on_save: Callback<R>,
    on_cancel: Callback<()>,
    #[prop(into)] saving: Signal<bool>,
) -> impl IntoView {
    let title = form_title::<R>(kind);
    let draft = RwSignal::new(initial);
    let invalid_field = RwSignal::new(None::<&'static str>);

    let save = move || {
        let record = draft.get_untracked();
        invalid_field.set(record.validate().err().map(|e| e.field));
        on_save.run(record);
    };

    let field_view = move |spec: &'static FieldSpec| {
        let key = spec.key;
        let value = Signal::derive(move || draft.with(|r| r.field(key)));
        let invalid = Signal::derive(move || Some(invalid_field.get() == Some(key)));
        let update = Callback::new(move |text: String| {
            draft.update(|r| r.set_field(key, text));
            if invalid_field.get_untracked() == Some(key) {
                invalid_field.set(None);
            }
        });
        let id = format!("{}-{}", R::PATH, key);

        if spec.options.is_empty() {
            view! {
                <Input
                    label=spec.label
                    value=value
                    on_input=update
                    required=spec.required
                    invalid=invalid
                    id=id
                />
            }
            .into_any()
        } else {
            view! {
                <Select
                    label=spec.label
                    value=value
                    on_change=update
                    options=spec.options
                    placeholder="Select…"
                    required=spec.required
                    invalid=invalid
                    id=id
                />
            }
            .into_any()
        }
    };

    view! {
        <Modal
            title=title
            on_close=on_cancel
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=saving
                >
                    {move || if saving.get() { "Saving…" } else { kind.action_label() }}
                </Button>
            }
        >
            <form class="form" on:submit=move |ev| {
                ev.prevent_default();
                save();
            }>
                {R::FIELDS.iter().map(field_view).collect_view()}
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::supplier::Supplier;

    #[test]
    fn title_names_the_resource() {
        assert_eq!(form_title::<Supplier>(MutationKind::Register), "New supplier");
        assert_eq!(form_title::<Supplier>(MutationKind::Update), "Edit supplier");
    }
}
