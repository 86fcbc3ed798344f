mod analytics;
pub use analytics::Analytics;

mod control_panel;
pub use control_panel::ControlPanel;

mod notifications;
pub use notifications::Notifications;
