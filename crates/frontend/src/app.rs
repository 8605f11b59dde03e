use crate::layout::global_context::AppGlobalContext;
use crate::layout::notification_service::{NotificationDialog, NotificationService};
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    // Success/failure dialogs raised by any page
    provide_context(NotificationService::new());

    view! {
        <Shell />
        <NotificationDialog />
    }
}
