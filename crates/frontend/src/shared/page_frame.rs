//! PageFrame: standard root wrapper for every page in the content area.
//!
//! Sets `id` (`"{resource}--{category}"`) and `data-page-category` on the
//! root element.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{resource}--{category}`, e.g. `"vessels--master-data"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id '{}' does not follow the resource--category format", page_id);
    }

    let class = match category {
        PAGE_CAT_MASTER_DATA => "page page--master-data",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
