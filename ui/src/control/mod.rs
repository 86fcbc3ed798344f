mod camera;
pub use camera::CameraFeed;

mod commands;
pub use commands::ControlGrid;

mod health;
pub use health::SystemHealth;

mod counters;
pub use counters::SortingCounters;
