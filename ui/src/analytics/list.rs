use api::BatchRecord;
use dioxus::prelude::*;

use crate::core::history::{self, ViewState};
use crate::t;

#[component]
pub fn BatchList(batches: Vec<BatchRecord>, active_id: i64, view: Signal<ViewState>) -> Element {
    rsx! {
        section { class: "analytics-card batch-list",
            div { class: "batch-list__header",
                span { {t!("analytics-col-batch")} }
                span { {t!("analytics-col-datetime")} }
                span { class: "batch-list__total", {t!("analytics-col-total")} }
            }

            ul { class: "batch-list__items",
                for batch in batches.into_iter() {
                    {render_row(batch, active_id, view)}
                }
            }
        }
    }
}

fn render_row(batch: BatchRecord, active_id: i64, mut view: Signal<ViewState>) -> Element {
    let id = batch.id;
    let is_active = id == active_id;
    let label = batch.label();
    let stamp = history::format_timestamp(&batch.timestamp);
    let total = batch.total;

    rsx! {
        li { key: "{id}",
            button {
                r#type: "button",
                class: format!(
                    "batch-list__row {}",
                    if is_active { "batch-list__row--active" } else { "" }
                ),
                onclick: move |_| view.with_mut(|state| state.select_batch(id)),

                span { class: "batch-list__label", "{label}" }
                span { class: "batch-list__timestamp", "{stamp}" }
                span { class: "batch-list__total", "{total}" }
            }
        }
    }
}
