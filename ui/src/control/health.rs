use api::SystemStatus;
use dioxus::prelude::*;

use crate::core::format;
use crate::t;

#[component]
pub fn SystemHealth(status: SystemStatus) -> Element {
    let cpu = format::format_percent(status.cpu_percent);
    let memory = format::format_percent(status.memory_percent);
    let storage = format::format_percent(status.storage_percent);
    let temp = format::format_celsius(status.cpu_temp);
    let temp_modifier = if status.is_hot() { "hot" } else { "ok" };

    rsx! {
        div { class: "health",
            div { class: "health__title", {t!("status-title")} }
            {gauge(t!("status-cpu", value = cpu), "cpu", status.cpu_percent)}
            {gauge(t!("status-memory", value = memory), "mem", status.memory_percent)}
            {gauge(t!("status-storage", value = storage), "stg", status.storage_percent)}
            // degrees share the 0..100 track
            {gauge(t!("status-temp", value = temp), temp_modifier, status.cpu_temp)}
        }
    }
}

fn gauge(label: String, modifier: &str, value: f64) -> Element {
    let style = format::bar_width(value);

    rsx! {
        div { class: "health__row",
            span { class: "health__label", "{label}" }
            div { class: "health__track",
                div { class: "health__fill health__fill--{modifier}", style: "{style}" }
            }
        }
    }
}
