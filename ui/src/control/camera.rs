use api::DeviceClient;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::timing;
use crate::t;

/// MJPEG stream from the controller, with a retry affordance once the stream
/// breaks.
#[component]
pub fn CameraFeed() -> Element {
    let client = use_context::<DeviceClient>();
    // Bumped on retry so the browser refetches instead of reusing a dead stream.
    let mut nonce = use_signal(timing::epoch_millis);
    let mut lost = use_signal(|| false);

    let src = client.video_feed_url(nonce());

    rsx! {
        div { class: "camera",
            if lost() {
                div { class: "camera__lost",
                    svg {
                        class: "camera__lost-icon",
                        width: "28",
                        height: "28",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        "aria-hidden": "true",
                        path { d: "M1 1l22 22M16.72 11.06A10.94 10.94 0 0 1 19 12.55M5 12.55a10.94 10.94 0 0 1 5.17-2.39M10.71 5.05A16 16 0 0 1 22.58 9M1.42 9a15.91 15.91 0 0 1 4.7-2.88M8.53 16.11a6 6 0 0 1 6.95 0M12 20h.01" }
                    }
                    span { class: "camera__lost-text", {t!("control-signal-lost")} }
                    button {
                        r#type: "button",
                        class: "btn btn--ghost camera__retry",
                        onclick: move |_| {
                            let next = timing::epoch_millis().max(nonce() + 1);
                            debug!(nonce = next, "retrying camera stream");
                            nonce.set(next);
                            lost.set(false);
                        },
                        {t!("control-retry")}
                    }
                }
            } else {
                img {
                    class: "camera__stream",
                    src: "{src}",
                    alt: "Live Feed",
                    onerror: move |_| {
                        warn!("camera stream failed to load");
                        lost.set(true);
                    },
                }
            }
            div { class: "camera__overlay", {t!("control-live-overlay")} }
        }
    }
}
