use api::SortingCounts;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn SortingCounters(counts: SortingCounts) -> Element {
    rsx! {
        div { class: "counters",
            div { class: "counters__total",
                span { class: "counters__label", {t!("control-total-beans")} }
                span { class: "counters__total-value", "{counts.total}" }
            }
            div { class: "counters__row",
                div { class: "counter counter--small",
                    span { class: "counter__label", {t!("size-small")} }
                    span { class: "counter__value", "{counts.small}" }
                }
                div { class: "counter counter--medium",
                    span { class: "counter__label", {t!("size-medium")} }
                    span { class: "counter__value", "{counts.medium}" }
                }
                div { class: "counter counter--large",
                    span { class: "counter__label", {t!("size-large")} }
                    span { class: "counter__value", "{counts.large}" }
                }
            }
        }
    }
}
