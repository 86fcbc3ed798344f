use api::DeviceClient;
use dioxus::prelude::*;

use crate::core::config::DeviceConfig;
use crate::core::polling::use_polling;
use crate::notifications::NotificationList;
use crate::t;

#[component]
pub fn Notifications() -> Element {
    crate::i18n::init();

    let client = use_context::<DeviceClient>();
    let config = use_context::<DeviceConfig>();

    let feed = use_polling("notifications", config.notification_poll_ms, move || {
        let client = client.clone();
        async move { client.notifications().await }
    });

    let polled = feed();
    let items = polled.value.clone().unwrap_or_default();
    let count = items.len();

    rsx! {
        section { class: "page page-notifications",
            header { class: "page__header",
                h1 { {t!("notifications-title")} }
                span { class: "badge", {t!("notifications-badge", count = count)} }
            }

            if polled.is_loading() {
                p { class: "notifications__loading", {t!("notifications-loading")} }
            } else {
                NotificationList { items: items }
            }
        }
    }
}
