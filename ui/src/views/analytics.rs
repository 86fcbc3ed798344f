use api::DeviceClient;
use dioxus::prelude::*;

use crate::analytics::{fetch_batches, ArchiveMenu, BatchList, QualityBar, SizeDonut};
use crate::core::history::{self, ViewState};
use crate::core::timing;
use crate::t;

#[component]
pub fn Analytics() -> Element {
    crate::i18n::init();

    let client = use_context::<DeviceClient>();
    let fetched = use_resource(move || fetch_batches(client.clone()));

    // Fresh on every visit: leaving the tab unmounts the screen.
    let mut view = use_signal(ViewState::default);
    let today = use_hook(timing::today_local);

    let records = use_memo(move || fetched.cloned().unwrap_or_default());
    let filtered = use_memo(move || history::filtered_batches(&records.read(), today, &view.read().mode));
    let active = use_memo(move || {
        history::active_batch(&filtered.read(), view.read().selected_batch_id).clone()
    });

    let state = view();
    let all = records();
    let window = filtered();
    let active = active();

    let title = if state.mode.is_current() {
        t!("analytics-title")
    } else {
        t!("analytics-archive-title")
    };
    let period =
        history::period_label(&state.mode, today).unwrap_or_else(|| t!("analytics-select-date"));
    let db_empty = all.is_empty();

    rsx! {
        section { class: "page page-analytics",
            header { class: "page__header",
                div { class: "page__heading",
                    h1 { "{title}" }
                    span { class: "page__meta", {t!("analytics-records-found", count = all.len())} }
                }
                span { class: "page__chip", "{period}" }
            }

            if state.mode.is_menu() {
                ArchiveMenu { records: all, view: view }
            } else {
                if window.is_empty() {
                    {empty_window(db_empty)}
                } else {
                    SizeDonut { batch: active.clone() }
                    QualityBar { batch: active.clone() }
                }

                BatchList { batches: window, active_id: active.id, view: view }

                div { class: "analytics__footer",
                    if state.mode.is_current() {
                        button {
                            r#type: "button",
                            class: "btn btn--ghost",
                            onclick: move |_| view.with_mut(ViewState::open_archive),
                            {t!("analytics-view-past")}
                        }
                    } else {
                        button {
                            r#type: "button",
                            class: "btn btn--dark",
                            onclick: move |_| view.with_mut(ViewState::return_to_live),
                            {t!("analytics-back-live")}
                        }
                    }
                }
            }
        }
    }
}

fn empty_window(db_empty: bool) -> Element {
    rsx! {
        div { class: "analytics-card analytics__empty",
            p { {t!("analytics-no-logs")} }
            if db_empty {
                p { class: "analytics__hint", {t!("analytics-db-empty")} }
            }
        }
    }
}
