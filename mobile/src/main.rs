use dioxus::prelude::*;

use ui::components::{register_nav, MobileLayout, NavBuilder};
use ui::core::{config, timing};
use ui::views::{Analytics, ControlPanel, Notifications};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileShell)]
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
));

fn main() {
    // Must run while the process is still single-threaded.
    timing::capture_local_offset();
    if let Err(err) = dioxus::logger::init(config::log_level()) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
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
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[component]
fn MobileShell() -> Element {
    rsx! {
        MobileLayout {
            Outlet::<Route> {}
        }
    }
}
