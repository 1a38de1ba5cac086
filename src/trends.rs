//! Period aggregation: date windows, filtered views, integer averages and
//! sparse bucketed series over the entry collection.
//!
//! Everything here is read-only over a borrowed collection and takes an
//! explicit reference `now`, so results are reproducible in tests.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{SeverityField, SymptomEntry, HEADLINE_FIELDS};

// ── Windows ────────────────────────────────────────────────────────────────

/// Inclusive `[start, end]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }
}

/// `[now - 7 days, now]`.
pub fn weekly_window(now: DateTime<Utc>) -> DateWindow {
    DateWindow::new(days_back(now, 7), now)
}

/// `[now - 1 calendar month, now]`.
pub fn monthly_window(now: DateTime<Utc>) -> DateWindow {
    DateWindow::new(months_back(now, 1), now)
}

/// `[now - 1 calendar year, now]`.
pub fn yearly_window(now: DateTime<Utc>) -> DateWindow {
    DateWindow::new(months_back(now, 12), now)
}

/// Fixed-length subtraction, clamped at the earliest representable instant.
fn days_back(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Calendar-aware subtraction; day-of-month clamps (Mar 31 → Feb 28/29).
fn months_back(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Week,
    Month,
    Year,
}

impl Period {
    pub fn window(self, now: DateTime<Utc>) -> DateWindow {
        match self {
            Self::Week => weekly_window(now),
            Self::Month => monthly_window(now),
            Self::Year => yearly_window(now),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Weekly",
            Self::Month => "Monthly",
            Self::Year => "Yearly",
        }
    }
}

// ── Filtering ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// List views.
    NewestFirst,
    /// Chart and series construction.
    OldestFirst,
}

/// Entries dated inside `window`, sorted by date in `order`.
/// Entries sharing a timestamp keep their store order.
pub fn filter_by_window(
    entries: &[SymptomEntry],
    window: DateWindow,
    order: SortOrder,
) -> Vec<SymptomEntry> {
    let mut selected: Vec<SymptomEntry> = entries
        .iter()
        .filter(|e| window.contains(e.date))
        .cloned()
        .collect();
    sort_by_date(&mut selected, order);
    selected
}

pub fn sort_by_date(entries: &mut [SymptomEntry], order: SortOrder) {
    match order {
        SortOrder::OldestFirst => entries.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::NewestFirst => entries.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

// ── Averages ───────────────────────────────────────────────────────────────

/// Per-field integer-truncated means over a set of entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Averages {
    pub count: usize,
    pub values: BTreeMap<SeverityField, i32>,
}

impl Averages {
    /// Average for `field`, 0 when it was not requested.
    pub fn get(&self, field: SeverityField) -> i32 {
        self.values.get(&field).copied().unwrap_or(0)
    }
}

/// Sum divided by count with integer division: seven entries summing to 22
/// average 3. An empty input yields zero for every requested field.
pub fn averages<'a, I>(entries: I, fields: &[SeverityField]) -> Averages
where
    I: IntoIterator<Item = &'a SymptomEntry>,
{
    let mut sums: BTreeMap<SeverityField, i64> = fields.iter().map(|f| (*f, 0)).collect();
    let mut count = 0usize;
    for entry in entries {
        count += 1;
        for (field, sum) in sums.iter_mut() {
            *sum += i64::from(entry.severity(*field));
        }
    }

    let values = sums
        .into_iter()
        .map(|(field, sum)| {
            let avg = if count == 0 { 0 } else { sum / count as i64 };
            (field, avg as i32)
        })
        .collect();

    Averages { count, values }
}

// ── Bucketed series ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    Week,
    Month,
}

impl BucketKind {
    /// Boundary `steps` buckets before `now`.
    fn step_back(self, now: DateTime<Utc>, steps: u32) -> DateTime<Utc> {
        match self {
            Self::Week => days_back(now, 7 * i64::from(steps)),
            Self::Month => months_back(now, steps),
        }
    }
}

/// One non-empty bucket: entries dated in `(start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesBucket {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub averages: Averages,
}

impl SeriesBucket {
    pub fn entry_count(&self) -> usize {
        self.averages.count
    }
}

/// `bucket_count` consecutive windows walking back from `now`, oldest first.
///
/// Buckets are half-open at the older edge so an entry lands in exactly one
/// bucket. Buckets without entries are dropped, so consumers must treat the
/// result as sparse rather than one point per unit of time. Generation stops
/// once a bucket ends before the oldest entry or boundaries hit the
/// earliest representable date.
pub fn bucketed_series(
    entries: &[SymptomEntry],
    kind: BucketKind,
    bucket_count: u32,
    now: DateTime<Utc>,
    fields: &[SeverityField],
) -> Vec<SeriesBucket> {
    let mut series = Vec::new();
    let Some(oldest) = entries.iter().map(|e| e.date).min() else {
        return series;
    };
    for i in 0..bucket_count {
        let end = kind.step_back(now, i);
        if end < oldest {
            break;
        }
        let start = kind.step_back(now, i + 1);
        if start == end {
            break;
        }
        let members = entries.iter().filter(|e| start < e.date && e.date <= end);
        let averages = averages(members, fields);
        if averages.count > 0 {
            series.push(SeriesBucket { start, end, averages });
        }
    }
    series.reverse();
    series
}

// ── Period summary ─────────────────────────────────────────────────────────

/// Everything the summary screen and summary report need for one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub window: DateWindow,
    /// Newest first.
    pub entries: Vec<SymptomEntry>,
    /// Averages over `HEADLINE_FIELDS`.
    pub averages: Averages,
}

pub fn summarize(entries: &[SymptomEntry], period: Period, now: DateTime<Utc>) -> PeriodSummary {
    let window = period.window(now);
    let entries = filter_by_window(entries, window, SortOrder::NewestFirst);
    let averages = averages(&entries, &HEADLINE_FIELDS);
    PeriodSummary {
        period,
        window,
        entries,
        averages,
    }
}
