//! Client for the sorter's device controller.
//!
//! The controller is a small HTTP service on the Raspberry Pi that owns the batch
//! database, the hardware counters and the camera. This crate only knows how to talk
//! to it: wire types live in [`model`], the transport in [`client`].

pub mod client;
pub mod error;
pub mod model;

pub use client::DeviceClient;
pub use error::ApiError;
pub use model::{BatchRecord, Command, Notification, NotificationKind, SortingCounts, SystemStatus};
