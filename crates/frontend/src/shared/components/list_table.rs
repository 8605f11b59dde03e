use contracts::domain::common::{Column, Resource};
use contracts::shared::list::{ListQuery, ListResult};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Cell text for one record; dates are formatted, everything else is shown raw.
pub fn cell_text<R: Resource>(record: &R, column: &Column<R::SortField>) -> String {
    column.display(&record.field(column.key))
}

/// Text of the full-width row shown instead of records, if any.
pub fn status_row_text(loading: bool, no_results: bool) -> Option<&'static str> {
    if loading {
        Some("Loading…")
    } else if no_results {
        Some("No results")
    } else {
        None
    }
}

/// Sortable table of the current page with edit/delete actions per row.
#[component]
pub fn ListTable<R: Resource>(
    #[prop(into)] result: Signal<ListResult<R, R::SortField>>,
    #[prop(into)] query: Signal<ListQuery<R::SortField>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] no_results: Signal<bool>,
    on_sort: Callback<R::SortField>,
    on_edit: Callback<R>,
    on_delete: Callback<R>,
) -> impl IntoView {
    let colspan = R::COLUMNS.len() + 1;

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {R::COLUMNS.iter().map(|column| {
                            let title = column.title;
                            match column.sort {
                                Some(field) => view! {
                                    <TableHeaderCell resizable=false min_width=110.0 class="resizable">
                                        <div
                                            class="table__sortable-header"
                                            style="cursor: pointer;"
                                            on:click=move |_| on_sort.run(field)
                                        >
                                            {title}
                                            <span class=move || query.with(|q| get_sort_class(q.sort_field, field))>
                                                {move || query.with(|q| get_sort_indicator(q.sort_field, field, q.sort_order))}
                                            </span>
                                        </div>
                                    </TableHeaderCell>
                                }.into_any(),
                                None => view! {
                                    <TableHeaderCell resizable=false min_width=90.0>
                                        {title}
                                    </TableHeaderCell>
                                }.into_any(),
                            }
                        }).collect_view()}
                        <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {move || status_row_text(loading.get(), no_results.get()).map(move |text| view! {
                        <TableRow>
                            <TableCell attr:colspan=colspan.to_string()>
                                <TableCellLayout>
                                    <span class="text-muted">{text}</span>
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    })}
                    {move || result.with(|r| r.items.clone()).into_iter().map(|record| {
                        let for_edit = record.clone();
                        let for_delete = record.clone();
                        view! {
                            <TableRow>
                                {R::COLUMNS.iter().map(|column| {
                                    let text = cell_text(&record, column);
                                    view! {
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {text}
                                            </TableCellLayout>
                                        </TableCell>
                                    }
                                }).collect_view()}
                                <TableCell>
                                    <TableCellLayout>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| on_edit.run(for_edit.clone())
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| on_delete.run(for_delete.clone())
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::customer::Customer;

    #[test]
    fn date_columns_are_formatted() {
        let customer = Customer {
            name: "Acme Shipping".into(),
            created_at: "2024-03-15T09:30:00Z".into(),
            ..Default::default()
        };
        let created = Customer::COLUMNS.iter().find(|c| c.key == "created_at").unwrap();
        let name = Customer::COLUMNS.iter().find(|c| c.key == "name").unwrap();
        assert_eq!(cell_text(&customer, created), "15 Mar 2024");
        assert_eq!(cell_text(&customer, name), "Acme Shipping");
    }

    #[test]
    fn loading_row_wins_over_no_results() {
        assert_eq!(status_row_text(true, false), Some("Loading…"));
        assert_eq!(status_row_text(true, true), Some("Loading…"));
        assert_eq!(status_row_text(false, true), Some("No results"));
        assert_eq!(status_row_text(false, false), None);
    }
}
