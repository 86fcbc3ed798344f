use api::BatchRecord;
use dioxus::prelude::*;

use crate::core::history::{self, ViewMode, ViewState};
use crate::t;

/// Year then month picker shown while browsing past logs.
#[component]
pub fn ArchiveMenu(records: Vec<BatchRecord>, view: Signal<ViewState>) -> Element {
    let ViewMode::ArchiveMenu { year } = view().mode else {
        return rsx! {};
    };
    let mut view = view;
    let options = match year {
        None => year_list(&records, view),
        Some(year) => month_list(&records, year, view),
    };

    rsx! {
        section { class: "analytics-card archive-menu",
            div { class: "archive-menu__header",
                button {
                    r#type: "button",
                    class: "archive-menu__back",
                    aria_label: t!("analytics-back-live"),
                    onclick: move |_| view.with_mut(ViewState::return_to_live),
                    "←"
                }
                h2 { {t!("analytics-select-archive")} }
            }

            {options}
        }
    }
}

fn year_list(records: &[BatchRecord], mut view: Signal<ViewState>) -> Element {
    let years = history::available_years(records);

    if years.is_empty() {
        return rsx! {
            p { class: "archive-menu__empty", {t!("analytics-no-history")} }
        };
    }

    rsx! {
        ul { class: "archive-menu__options",
            for year in years.into_iter() {
                li { key: "{year}",
                    button {
                        r#type: "button",
                        class: "archive-menu__option",
                        onclick: move |_| view.with_mut(|state| state.choose_year(year)),
                        "{year}"
                    }
                }
            }
        }
    }
}

fn month_list(records: &[BatchRecord], year: i32, mut view: Signal<ViewState>) -> Element {
    let months = history::months_for_year(records, year);
    let year_text = year.to_string();

    rsx! {
        div { class: "archive-menu__chip",
            span { {t!("analytics-filtering", year = year_text)} }
            button {
                r#type: "button",
                class: "archive-menu__change",
                onclick: move |_| view.with_mut(ViewState::clear_year),
                {t!("analytics-change")}
            }
        }

        ul { class: "archive-menu__options",
            for month in months.into_iter() {
                li { key: "{month}",
                    button {
                        r#type: "button",
                        class: "archive-menu__option",
                        onclick: move |_| view.with_mut(|state| state.choose_month(month)),
                        "{month}"
                    }
                }
            }
        }
    }
}
