#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::prelude::*;

use ui::components::{register_nav, MobileLayout, NavBuilder};
use ui::core::{config, timing};
use ui::views::{Analytics, ControlPanel, Notifications};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
        #[redirect("/", || Route::ControlPanel {})]
        #[route("/control-panel")]
        ControlPanel {},
        #[route("/analytics")]
        Analytics {},
        #[route("/notification")]
        Notifications {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css)

fn main() {
    // Before any thread is spawned.
    timing::capture_local_offset();
    if let Err(err) = dioxus::logger::init(config::log_level()) {
        eprintln!("logger already initialised: {err}");
    }

    // Phone-shaped window; the dashboard is laid out for a handset.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Cacaosort – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(430.0, 900.0)),
                )
                .with_resource_directory(resolve_resource_dir()),
        )
        .launch(App);
}

fn nav_control_panel(content: Element) -> Element {
    rsx!(Link { class: "bottom-nav__item", active_class: "bottom-nav__item--active", to: Route::ControlPanel {}, {content} })
}
fn nav_analytics(content: Element) -> Element {
    rsx!(Link { class: "bottom-nav__item", active_class: "bottom-nav__item--active", to: Route::Analytics {}, {content} })
}
fn nav_notification(content: Element) -> Element {
    rsx!(Link { class: "bottom-nav__item", active_class: "bottom-nav__item--active", to: Route::Notifications {}, {content} })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    config::provide_device_context();

    register_nav(NavBuilder {
        control_panel: nav_control_panel,
        analytics: nav_analytics,
        notification: nav_notification,
    });

    rsx! {
        // Always inline the theme; packaged builds carry no separate stylesheet.
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop shell around the shared mobile layout, so the layout can render this
/// crate's `Route` outlet.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        MobileLayout {
            Outlet::<Route> {}
        }
    }
}
