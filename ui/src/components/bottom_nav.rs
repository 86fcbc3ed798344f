use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n;
use crate::t;

// Bottom navigation stylesheet (inlined as well in release native builds)
const BOTTOM_NAV_CSS: Asset = asset!("/assets/styling/bottom_nav.css");
const BOTTOM_NAV_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/bottom_nav.css"
));

/// Route-aware link factories supplied by each platform crate.
///
/// `ui` renders the icon and localized label of every tab; the platform wraps that
/// content in a `Link` to its own `Route` variant, so this crate never needs the
/// platform's `Route` enum. Register once before the router renders:
///
/// ```ignore
/// register_nav(NavBuilder {
///     control_panel: |content| rsx!( Link { class: "bottom-nav__item", active_class: "bottom-nav__item--active", to: Route::ControlPanel {}, {content} } ),
///     analytics: |content| rsx!( Link { class: "bottom-nav__item", active_class: "bottom-nav__item--active", to: Route::Analytics {}, {content} } ),
///     notification: |content| rsx!( Link { class: "bottom-nav__item", active_class: "bottom-nav__item--active", to: Route::Notifications {}, {content} } ),
/// });
/// ```
pub struct NavBuilder {
    pub control_panel: fn(content: Element) -> Element,
    pub analytics: fn(content: Element) -> Element,
    pub notification: fn(content: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavTab {
    ControlPanel,
    Analytics,
    Notification,
}

#[component]
pub fn BottomNav() -> Element {
    i18n::init();

    let Some(builder) = NAV_BUILDER.get() else {
        tracing::warn!("BottomNav rendered before register_nav; navigation hidden");
        return rsx! {};
    };

    let control_panel = (builder.control_panel)(tab_content(
        NavTab::ControlPanel,
        t!("nav-control-panel"),
    ));
    let analytics = (builder.analytics)(tab_content(NavTab::Analytics, t!("nav-analytics")));
    let notification = (builder.notification)(tab_content(
        NavTab::Notification,
        t!("nav-notification"),
    ));

    rsx! {
        document::Link { rel: "stylesheet", href: BOTTOM_NAV_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{BOTTOM_NAV_CSS_INLINE}" }
        }

        nav { class: "bottom-nav",
            {control_panel}
            {analytics}
            {notification}
        }
    }
}

fn tab_content(tab: NavTab, label: String) -> Element {
    rsx! {
        {nav_icon(tab)}
        span { class: "bottom-nav__label", "{label}" }
    }
}

fn nav_icon(tab: NavTab) -> Element {
    let path = match tab {
        // sliders
        NavTab::ControlPanel => "M4 21v-7M4 10V3M12 21v-9M12 8V3M20 21v-5M20 12V3M1 14h6M9 8h6M17 16h6",
        // bar chart
        NavTab::Analytics => "M18 20V10M12 20V4M6 20v-6",
        // bell
        NavTab::Notification => "M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9M13.73 21a2 2 0 0 1-3.46 0",
    };

    rsx! {
        svg {
            class: "bottom-nav__icon",
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

/// Full-height shell: scrolling content area above the fixed bottom navigation.
#[component]
pub fn MobileLayout(children: Element) -> Element {
    rsx! {
        div { class: "mobile-layout",
            main { class: "mobile-layout__content", {children} }
            BottomNav {}
        }
    }
}
