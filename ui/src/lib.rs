//! Shared UI crate for the cacao sorter dashboard. Views, components and the
//! batch history logic used by every platform launcher live here.

pub mod analytics;
pub mod control;
pub mod core;
pub mod i18n;
pub mod notifications;
pub mod views;

pub mod components {
    // Bottom tab bar and mobile shell (components/bottom_nav.rs)
    pub mod bottom_nav;
    pub use bottom_nav::register_nav;
    pub use bottom_nav::BottomNav;
    pub use bottom_nav::MobileLayout;
    pub use bottom_nav::NavBuilder;
}
