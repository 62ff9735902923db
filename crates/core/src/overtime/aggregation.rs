//! Aggregation engine for overtime entries
//!
//! Pure functions over an entry collection. Results are never cached: call
//! again after every mutation and the numbers are current by construction.
//! Money is summed in cents, so totals are exact regardless of order.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use plantao_domain::utils::calendar::month_label;
use plantao_domain::{
    LedgerOverview, LedgerStatistics, Money, MonthBucket, MonthKey, MonthlySummary, OvertimeEntry,
    ShiftHours, ShiftType, YearlySummary,
};

/// Totals for entries whose `month_year` equals `month`.
pub fn monthly_summary(entries: &[OvertimeEntry], month: MonthKey) -> MonthlySummary {
    entries.iter().filter(|e| e.month_year == month).fold(
        MonthlySummary::default(),
        |mut summary, entry| {
            summary.total_hours += entry.hours_worked;
            summary.total_value += entry.total_value;
            summary.count += 1;
            match entry.shift_type {
                ShiftType::Day => summary.day_shift_count += 1,
                ShiftType::Night => summary.night_shift_count += 1,
            }
            summary
        },
    )
}

/// Totals for entries dated within calendar year `year`.
pub fn yearly_summary(entries: &[OvertimeEntry], year: i32) -> YearlySummary {
    entries.iter().filter(|e| e.date.year() == year).fold(
        YearlySummary::default(),
        |mut summary, entry| {
            summary.total_hours += entry.hours_worked;
            summary.total_value += entry.total_value;
            summary.count += 1;
            summary
        },
    )
}

/// Exactly `window_months` consecutive month buckets ending at the month of
/// `reference_date`, oldest first. Months without entries are zero-valued.
pub fn rolling_evolution(
    entries: &[OvertimeEntry],
    reference_date: NaiveDate,
    window_months: u32,
) -> Vec<MonthBucket> {
    if window_months == 0 {
        return Vec::new();
    }

    let last = MonthKey::from_date(reference_date);
    let span = i32::try_from(window_months).unwrap_or(i32::MAX);
    let first = last.offset(1 - span);

    let mut buckets: Vec<MonthBucket> = (0..span)
        .map(|i| {
            let month = first.offset(i);
            MonthBucket { month, label: month_label(month), hours: 0.0, value: Money::ZERO, count: 0 }
        })
        .collect();

    let first_index = month_index(first);
    for entry in entries {
        let slot = month_index(entry.month_year) - first_index;
        if let Some(bucket) = usize::try_from(slot).ok().and_then(|i| buckets.get_mut(i)) {
            bucket.hours += entry.hours_worked;
            bucket.value += entry.total_value;
            bucket.count += 1;
        }
    }

    buckets
}

/// Hours per shift type, day before night. Zero totals are left out.
pub fn shift_distribution(entries: &[OvertimeEntry]) -> Vec<ShiftHours> {
    ShiftType::ALL
        .iter()
        .map(|shift_type| ShiftHours {
            shift_type: *shift_type,
            total_hours: entries
                .iter()
                .filter(|e| e.shift_type == *shift_type)
                .map(|e| e.hours_worked)
                .sum(),
        })
        .filter(|group| group.total_hours > 0.0)
        .collect()
}

/// Averages and the largest entry. Ties on hours keep the first occurrence.
pub fn statistics(entries: &[OvertimeEntry]) -> LedgerStatistics {
    if entries.is_empty() {
        return LedgerStatistics::default();
    }

    let count = entries.len() as f64;
    let total_hours: f64 = entries.iter().map(|e| e.hours_worked).sum();
    let total_rate: f64 = entries.iter().map(|e| e.hour_value).sum();

    let mut max_entry: Option<&OvertimeEntry> = None;
    for entry in entries {
        if max_entry.map_or(true, |best| entry.hours_worked > best.hours_worked) {
            max_entry = Some(entry);
        }
    }

    LedgerStatistics {
        average_hours_per_entry: total_hours / count,
        max_hours_entry: max_entry.cloned(),
        average_hourly_rate: total_rate / count,
    }
}

/// Distinct months present in `entries`, newest first.
pub fn available_months(entries: &[OvertimeEntry]) -> Vec<MonthKey> {
    let months: BTreeSet<MonthKey> = entries.iter().map(|e| e.month_year).collect();
    months.into_iter().rev().collect()
}

/// Distinct years present in `entries`, newest first.
pub fn available_years(entries: &[OvertimeEntry]) -> Vec<i32> {
    let years: BTreeSet<i32> = entries.iter().map(|e| e.date.year()).collect();
    years.into_iter().rev().collect()
}

/// Entries of one month, in input order.
pub fn entries_for_month(entries: &[OvertimeEntry], month: MonthKey) -> Vec<OvertimeEntry> {
    entries.iter().filter(|e| e.month_year == month).cloned().collect()
}

/// Every dashboard figure for `reference_date`, computed from scratch.
pub fn overview(
    entries: &[OvertimeEntry],
    reference_date: NaiveDate,
    window_months: u32,
) -> LedgerOverview {
    let reference_month = MonthKey::from_date(reference_date);

    LedgerOverview {
        reference_month,
        month: monthly_summary(entries, reference_month),
        year: yearly_summary(entries, reference_date.year()),
        evolution: rolling_evolution(entries, reference_date, window_months),
        distribution: shift_distribution(entries),
        statistics: statistics(entries),
        available_months: available_months(entries),
    }
}

fn month_index(month: MonthKey) -> i64 {
    i64::from(month.year()) * 12 + i64::from(month.month()) - 1
}
