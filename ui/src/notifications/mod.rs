mod card;
pub use card::NotificationCard;

use api::Notification;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn NotificationList(items: Vec<Notification>) -> Element {
    if items.is_empty() {
        return rsx! {
            div { class: "notifications__empty",
                svg {
                    width: "40",
                    height: "40",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "1.5",
                    "aria-hidden": "true",
                    path { d: "M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9M13.73 21a2 2 0 0 1-3.46 0" }
                }
                p { {t!("notifications-empty")} }
            }
        };
    }

    rsx! {
        div { class: "notifications__list",
            for (index, note) in items.into_iter().enumerate() {
                // controller ids are not guaranteed unique
                NotificationCard { key: "{index}-{note.id}", note: note }
            }
        }
    }
}
