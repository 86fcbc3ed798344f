//! Batch history selection for the analytics screen.
//!
//! Everything in here is a pure function of the fetched batch list, today's local
//! date and the screen's [`ViewState`]. The screen recomputes these on every
//! change; data volumes (dozens to a few thousand batches) do not warrant caching.
//!
//! Timestamps arrive as naive `YYYY-MM-DD HH:MM:SS` strings. They are read as local
//! wall-clock time, never converted through UTC, so a batch recorded at 23:30 on the
//! last day of a month stays in that month.

use std::collections::BTreeSet;

use api::BatchRecord;
use time::{macros::format_description, Date, Month, PrimitiveDateTime};

/// Shown instead of a time when a batch timestamp cannot be read.
pub const TIMESTAMP_PLACEHOLDER: &str = "--:--";

static EMPTY_BATCH: BatchRecord = BatchRecord::EMPTY;

/// Which slice of history the analytics screen is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Batches from the current calendar month.
    #[default]
    Current,
    /// Picking an archived year, then a month. No batches are listed.
    ArchiveMenu { year: Option<i32> },
    /// Batches from one archived month.
    ArchiveView { year: i32, month: Month },
}

impl ViewMode {
    /// Calendar month whose batches are listed, `None` while in the archive menu.
    pub fn target(&self, today: Date) -> Option<(i32, Month)> {
        match *self {
            ViewMode::Current => Some((today.year(), today.month())),
            ViewMode::ArchiveMenu { .. } => None,
            ViewMode::ArchiveView { year, month } => Some((year, month)),
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, ViewMode::Current)
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, ViewMode::ArchiveMenu { .. })
    }
}

/// Transient state of the analytics screen. A fresh value is created every time
/// the screen is entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub selected_batch_id: Option<i64>,
}

impl ViewState {
    /// "View Past Logs": only reachable from the live view.
    pub fn open_archive(&mut self) {
        if self.mode.is_current() {
            self.mode = ViewMode::ArchiveMenu { year: None };
        }
    }

    pub fn choose_year(&mut self, year: i32) {
        if self.mode.is_menu() {
            self.mode = ViewMode::ArchiveMenu { year: Some(year) };
        }
    }

    /// "Change" on the year chip: back to the year list.
    pub fn clear_year(&mut self) {
        if self.mode.is_menu() {
            self.mode = ViewMode::ArchiveMenu { year: None };
        }
    }

    pub fn choose_month(&mut self, month: Month) {
        if let ViewMode::ArchiveMenu { year: Some(year) } = self.mode {
            self.mode = ViewMode::ArchiveView { year, month };
            self.selected_batch_id = None;
        }
    }

    /// "Back to Live Data": full reset. There is deliberately no way back from an
    /// archived month to the month picker other than through this reset.
    pub fn return_to_live(&mut self) {
        *self = ViewState::default();
    }

    pub fn select_batch(&mut self, id: i64) {
        self.selected_batch_id = Some(id);
    }
}

/// Parse a controller timestamp as a naive local date-time.
///
/// The space separator is swapped for `T` first. Besides the canonical
/// `YYYY-MM-DD HH:MM:SS`, fractional seconds, minute precision and bare dates
/// (midnight) are accepted. Anything else, including zone suffixes, is `None`.
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let normalized = raw.trim().replacen(' ', "T", 1);
    if normalized.is_empty() {
        return None;
    }

    let seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let fractional =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    let minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let date_only = format_description!("[year]-[month]-[day]");

    PrimitiveDateTime::parse(&normalized, seconds)
        .or_else(|_| PrimitiveDateTime::parse(&normalized, fractional))
        .or_else(|_| PrimitiveDateTime::parse(&normalized, minutes))
        .ok()
        .or_else(|| {
            Date::parse(&normalized, date_only)
                .ok()
                .map(Date::midnight)
        })
}

/// `"Mar 6 - 11:30"`, or [`TIMESTAMP_PLACEHOLDER`] when unreadable.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|ts| {
            ts.format(format_description!(
                "[month repr:short] [day padding:none] - [hour padding:none]:[minute]"
            ))
            .ok()
        })
        .unwrap_or_else(|| TIMESTAMP_PLACEHOLDER.to_string())
}

/// Batches inside the window selected by `mode`, newest insertion first.
///
/// Ordering is by descending `id`, not by timestamp: a batch inserted later with
/// an earlier clock reading still sorts first.
pub fn filtered_batches(records: &[BatchRecord], today: Date, mode: &ViewMode) -> Vec<BatchRecord> {
    let Some((year, month)) = mode.target(today) else {
        return Vec::new();
    };

    let mut window: Vec<BatchRecord> = records
        .iter()
        .filter(|record| {
            parse_timestamp(&record.timestamp)
                .is_some_and(|ts| ts.year() == year && ts.month() == month)
        })
        .cloned()
        .collect();
    window.sort_by(|a, b| b.id.cmp(&a.id));
    window
}

/// The batch driving the charts: the explicit pick when it is in `filtered`,
/// otherwise the first (newest) batch, otherwise a zero-filled record.
pub fn active_batch(filtered: &[BatchRecord], selected_batch_id: Option<i64>) -> &BatchRecord {
    selected_batch_id
        .and_then(|id| filtered.iter().find(|batch| batch.id == id))
        .or_else(|| filtered.first())
        .unwrap_or(&EMPTY_BATCH)
}

/// Years with at least one readable timestamp, newest first.
pub fn available_years(records: &[BatchRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = records
        .iter()
        .filter_map(|record| parse_timestamp(&record.timestamp))
        .map(|ts| ts.year())
        .collect();
    years.into_iter().rev().collect()
}

/// Months of `year` with at least one readable timestamp, latest first.
pub fn months_for_year(records: &[BatchRecord], year: i32) -> Vec<Month> {
    let months: BTreeSet<u8> = records
        .iter()
        .filter_map(|record| parse_timestamp(&record.timestamp))
        .filter(|ts| ts.year() == year)
        .map(|ts| u8::from(ts.month()))
        .collect();
    months
        .into_iter()
        .rev()
        .filter_map(|m| Month::try_from(m).ok())
        .collect()
}

/// `round(100 * part / max(total, 1))`, halves rounding up.
pub fn percent_of(batch: &BatchRecord, part: u64) -> u64 {
    let denominator = u128::from(batch.total.max(1));
    let scaled = 200 * u128::from(part) + denominator;
    u64::try_from(scaled / (2 * denominator)).unwrap_or(u64::MAX)
}

/// Size category of sorted beans, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Large, SizeClass::Medium, SizeClass::Small];

    pub fn css_modifier(self) -> &'static str {
        match self {
            SizeClass::Large => "large",
            SizeClass::Medium => "medium",
            SizeClass::Small => "small",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSlice {
    pub class: SizeClass,
    pub value: u64,
    pub percent: u64,
}

/// Large/medium/small counts of `batch` with their share of `total`.
pub fn size_slices(batch: &BatchRecord) -> [SizeSlice; 3] {
    SizeClass::ALL.map(|class| {
        let value = match class {
            SizeClass::Large => batch.large,
            SizeClass::Medium => batch.medium,
            SizeClass::Small => batch.small,
        };
        SizeSlice {
            class,
            value,
            percent: percent_of(batch, value),
        }
    })
}

/// Good/bad quality counts. Independent of the size axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualitySplit {
    pub good: u64,
    pub bad: u64,
}

impl QualitySplit {
    pub fn of(batch: &BatchRecord) -> Self {
        Self {
            good: batch.quality_good,
            bad: batch.quality_bad,
        }
    }

    /// Share of the bar taken by bad beans, 0.0 when nothing was graded.
    pub fn bad_fraction(&self) -> f64 {
        let graded = self.good.saturating_add(self.bad);
        if graded == 0 {
            0.0
        } else {
            self.bad as f64 / graded as f64
        }
    }
}

/// `"March 2024"` for the month being shown, `None` in the archive menu.
pub fn period_label(mode: &ViewMode, today: Date) -> Option<String> {
    mode.target(today).map(|(year, month)| format!("{month} {year}"))
}
