use contracts::shared::error::AppError;
use contracts::shared::mutation::MutationOutcome;
use contracts::shared::notification::Notification;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// App-wide success/failure dialog
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// Show a notification, replacing any that is open
    pub fn show(&self, notification: Notification) {
        if notification.is_success() {
            log::info!("{}: {}", notification.title, notification.message);
        } else {
            log::warn!("{}: {}", notification.title, notification.message);
        }
        self.current.set(Some(notification));
    }

    pub fn error(&self, err: &AppError) {
        self.show(Notification::from_error(err));
    }

    pub fn outcome(&self, outcome: &MutationOutcome) {
        self.show(Notification::from_outcome(outcome));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the current notification, if any
#[component]
pub fn NotificationDialog() -> impl IntoView {
    let service = use_notifications();
    let close = Callback::new(move |_: ()| service.dismiss());

    move || {
        service.current.get().map(|note| {
            let class = if note.is_success() {
                "notification notification--success"
            } else {
                "notification notification--failure"
            };
            let badge = if note.is_success() { icon("check") } else { icon("alert") };
            view! {
                <Modal
                    title=note.title.clone()
                    on_close=close
                    footer=move || view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| service.dismiss()>
                            "OK"
                        </Button>
                    }
                >
                    <div class=class>
                        {badge}
                        <span class="notification__message">{note.message.clone()}</span>
                    </div>
                </Modal>
            }
        })
    }
}
