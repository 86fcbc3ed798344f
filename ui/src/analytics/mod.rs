mod list;
pub use list::BatchList;

mod charts;
pub use charts::{QualityBar, SizeDonut};

mod archive;
pub use archive::ArchiveMenu;

use api::{BatchRecord, DeviceClient};
use tracing::{debug, warn};

/// Full batch collection for the analytics screen, fetched once per visit. A
/// failed fetch reads as an empty database.
pub async fn fetch_batches(client: DeviceClient) -> Vec<BatchRecord> {
    match client.batches().await {
        Ok(records) => {
            debug!(count = records.len(), "batches fetched");
            records
        }
        Err(err) => {
            warn!(%err, "couldn't load batches; showing an empty history");
            Vec::new()
        }
    }
}
