//! Clock and sleep helpers for polling loops and date windows.

use once_cell::sync::OnceCell;
use time::{Date, OffsetDateTime, UtcOffset};

static LOCAL_OFFSET: OnceCell<UtcOffset> = OnceCell::new();

/// Record the local UTC offset. Launchers call this first thing in `main`: on some
/// unix targets the offset can only be read while the process is single-threaded.
pub fn capture_local_offset() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let _ = LOCAL_OFFSET.set(offset);
}

fn local_offset() -> UtcOffset {
    LOCAL_OFFSET
        .get()
        .copied()
        .or_else(|| UtcOffset::current_local_offset().ok())
        .unwrap_or(UtcOffset::UTC)
}

pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(local_offset())
}

/// Today's date on the local calendar.
pub fn today_local() -> Date {
    now_local().date()
}

/// Milliseconds since the unix epoch, used as a cache-busting nonce.
pub fn epoch_millis() -> u64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    u64::try_from(millis).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX)).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock_is_sane() {
        capture_local_offset();
        let today = today_local();
        let utc_today = OffsetDateTime::now_utc().date();
        let drift = (today - utc_today).whole_days().abs();
        assert!(drift <= 1, "local date {today} too far from UTC {utc_today}");
        assert!(epoch_millis() > 1_600_000_000_000);
    }
}
