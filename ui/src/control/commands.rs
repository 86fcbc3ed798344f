use api::{Command, DeviceClient, SystemStatus};
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::platform;
use crate::core::polling::Polled;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlIcon {
    Play,
    Pause,
    Power,
    NewBatch,
    Continue,
}

/// START/STOP, POWER, NEW BATCH and CONTINUE.
///
/// The sorting flag follows the controller once it reports one; until then it is
/// toggled locally. POWER never talks to the controller.
#[component]
pub fn ControlGrid(status: Signal<Polled<SystemStatus>>) -> Element {
    let client = use_context::<DeviceClient>();
    let mut sorting = use_signal(|| false);
    let mut powered = use_signal(|| false);

    use_effect(move || {
        let reported = status
            .read()
            .value
            .as_ref()
            .map(|latest| latest.counts.running);
        if let Some(running) = reported {
            sorting.set(running);
        }
    });

    let toggle_client = client.clone();
    let batch_client = client.clone();
    let continue_client = client;

    let is_sorting = sorting();
    let is_powered = powered();
    let toggle_class = if is_sorting {
        "control-btn control-btn--stop"
    } else {
        "control-btn control-btn--start"
    };
    let power_class = if is_powered {
        "control-btn control-btn--active"
    } else {
        "control-btn control-btn--neutral"
    };

    rsx! {
        div { class: "controls",
            button {
                r#type: "button",
                class: toggle_class,
                onclick: move |_| {
                    sorting.toggle();
                    dispatch(toggle_client.clone(), Command::Toggle, status);
                },
                {control_icon(if is_sorting { ControlIcon::Pause } else { ControlIcon::Play })}
                span {
                    if is_sorting { {t!("control-stop")} } else { {t!("control-start")} }
                }
            }

            button {
                r#type: "button",
                class: power_class,
                onclick: move |_| {
                    powered.toggle();
                    info!(powered = !is_powered, "power toggled locally");
                },
                {control_icon(ControlIcon::Power)}
                span { {t!("control-power")} }
            }

            button {
                r#type: "button",
                class: "control-btn control-btn--neutral",
                onclick: move |_| dispatch(batch_client.clone(), Command::NewBatch, status),
                {control_icon(ControlIcon::NewBatch)}
                span { {t!("control-new-batch")} }
            }

            button {
                r#type: "button",
                class: "control-btn control-btn--neutral",
                onclick: move |_| dispatch(continue_client.clone(), Command::Continue, status),
                {control_icon(ControlIcon::Continue)}
                span { {t!("control-continue")} }
            }
        }
    }
}

/// Fire-and-forget: send `command`, then pull one fresh status so the panel
/// reflects it before the next poll.
fn dispatch(client: DeviceClient, command: Command, mut status: Signal<Polled<SystemStatus>>) {
    info!(command = command.as_str(), "sending command");

    platform::spawn_future(async move {
        if let Err(err) = client.send_command(command).await {
            warn!(command = command.as_str(), %err, "command failed");
            return;
        }

        let refreshed = client.system_status().await;
        // The panel may be gone by now.
        if let Ok(mut polled) = status.try_write() {
            polled.apply("system_status", refreshed);
        }
    });
}

fn control_icon(icon: ControlIcon) -> Element {
    let (path, filled) = match icon {
        ControlIcon::Play => ("M6 4l14 8-14 8z", true),
        ControlIcon::Pause => ("M6 4h4v16H6zM14 4h4v16h-4z", true),
        ControlIcon::Power => ("M18.36 6.64a9 9 0 1 1-12.73 0M12 2v10", false),
        ControlIcon::NewBatch => ("M3 3h18v18H3zM12 8v8M8 12h8", false),
        ControlIcon::Continue => ("M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM12 16l4-4-4-4M8 12h8", false),
    };
    let fill = if filled { "currentColor" } else { "none" };

    rsx! {
        svg {
            class: "control-btn__icon",
            width: "28",
            height: "28",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "{path}" }
        }
    }
}
