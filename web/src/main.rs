use dioxus::prelude::*;

use ui::components::{register_nav, MobileLayout, NavBuilder};
use ui::core::{config, timing};
use ui::views::{Analytics, ControlPanel, Notifications};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
        #[redirect("/", || Route::ControlPanel {})]
        #[route("/control-panel")]
        ControlPanel {},
        #[route("/analytics")]
        Analytics {},
        #[route("/notification")]
        Notifications {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css); web/assets/main.css only adds page chrome.

fn nav_control_panel(content: Element) -> Element {
    rsx!(Link {
        class: "bottom-nav__item",
        active_class: "bottom-nav__item--active",
        to: Route::ControlPanel {},
        {content}
    })
}
fn nav_analytics(content: Element) -> Element {
    rsx!(Link {
        class: "bottom-nav__item",
        active_class: "bottom-nav__item--active",
        to: Route::Analytics {},
        {content}
    })
}
fn nav_notification(content: Element) -> Element {
    rsx!(Link {
        class: "bottom-nav__item",
        active_class: "bottom-nav__item--active",
        to: Route::Notifications {},
        {content}
    })
}

fn main() {
    timing::capture_local_offset();
    if let Err(err) = dioxus::logger::init(config::log_level()) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            control_panel: nav_control_panel,
            analytics: nav_analytics,
            notification: nav_notification,
        });
    }
    config::provide_device_context();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{THEME_CSS_INLINE}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web shell around the shared mobile layout, so the layout can render this
/// crate's `Route` outlet.
#[component]
fn WebShell() -> Element {
    rsx! {
        MobileLayout {
            Outlet::<Route> {}
        }
    }
}
