use api::DeviceClient;
use dioxus::prelude::*;

use crate::control::{CameraFeed, ControlGrid, SortingCounters, SystemHealth};
use crate::core::config::DeviceConfig;
use crate::core::polling::use_polling;
use crate::t;

#[component]
pub fn ControlPanel() -> Element {
    crate::i18n::init();

    let client = use_context::<DeviceClient>();
    let config = use_context::<DeviceConfig>();

    let status = use_polling("system_status", config.status_poll_ms, move || {
        let client = client.clone();
        async move { client.system_status().await }
    });

    // Zeros until the first good poll.
    let latest = status.read().value.clone().unwrap_or_default();

    rsx! {
        section { class: "page page-control",
            h1 { class: "page__title", {t!("control-title")} }

            div { class: "dashboard-card",
                CameraFeed {}
                SortingCounters { counts: latest.counts.clone() }
                ControlGrid { status: status }
                SystemHealth { status: latest }
            }
        }
    }
}
