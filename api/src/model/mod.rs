//! Wire types exchanged with the device controller.
//!
//! The controller is lenient about what it sends (fields go missing, numbers turn
//! into `null`, the status payload has changed shape between firmware versions), so
//! every type here resolves those cases once, while decoding, to explicit defaults.

mod batch;
mod command;
mod notification;
mod status;

pub use batch::BatchRecord;
pub use command::Command;
pub(crate) use command::ControlRequest;
pub use notification::{Notification, NotificationKind};
pub use status::{SortingCounts, SystemStatus};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
