//! Platform-agnostic building blocks shared by the dashboard screens.

pub mod config;
pub mod format;
pub mod history;
pub mod platform;
pub mod polling;
pub mod timing;
