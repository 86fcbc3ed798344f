use api::{Notification, NotificationKind};
use dioxus::prelude::*;

#[component]
pub fn NotificationCard(note: Notification) -> Element {
    let kind = note.kind.as_str();

    rsx! {
        article { class: "notification-card notification-card--{kind}",
            div { class: "notification-card__icon notification-card__icon--{kind}",
                {kind_icon(note.kind)}
            }
            div { class: "notification-card__content",
                h3 { "{note.title}" }
                p { "{note.message}" }
                span { class: "notification-card__timestamp", "{note.timestamp}" }
            }
        }
    }
}

fn kind_icon(kind: NotificationKind) -> Element {
    let path = match kind {
        NotificationKind::Info => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 16v-4M12 8h.01",
        NotificationKind::Warning => {
            "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0zM12 9v4M12 17h.01"
        }
        NotificationKind::Success => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4L12 14.01l-3-3",
    };

    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "{path}" }
        }
    }
}
