//! Cashflow aggregation.
//!
//! Turns dated income and expense entries into totals, a profit figure and a
//! month-by-month trend for a date range. Everything here is a pure function over
//! borrowed slices; callers read the ledger once and hand the rows in.
//!
//! Anomalies never produce errors:
//! - a range whose start is after its end is clamped to `end..=end` and carries a
//!   [`RangeWarning`]
//! - a ledger with no entries at all yields [`Cashflow::NoData`] instead of a
//!   zero-filled trend, since there is no date to anchor a range on

use crate::entities::expense;
use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use tracing::warn;

/// Anything with a calendar date and a money value.
pub trait CashflowEntry {
    /// Calendar day the entry belongs to
    fn date(&self) -> NaiveDate;
    /// Income total or expense amount
    fn amount(&self) -> f64;
}

/// A bare dated amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// Calendar day
    pub date: NaiveDate,
    /// Money value
    pub amount: f64,
}

impl CashflowEntry for Entry {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

impl CashflowEntry for expense::Model {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

/// Why a requested range was adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeWarning {
    /// The start came after the end, so the start was moved onto the end
    StartAfterEnd {
        /// Start date as requested
        requested_start: NaiveDate,
        /// End date, also the new start
        end: NaiveDate,
    },
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartAfterEnd {
                requested_start,
                end,
            } => write!(
                f,
                "Start date {requested_start} is after end date {end}; showing {end} only"
            ),
        }
    }
}

impl DateRange {
    /// Builds a range, clamping `start` to `end` when it comes later.
    #[must_use]
    pub fn normalized(start: NaiveDate, end: NaiveDate) -> (Self, Option<RangeWarning>) {
        if start > end {
            warn!(%start, %end, "Start date after end date, clamping start to end");
            (
                Self { start: end, end },
                Some(RangeWarning::StartAfterEnd {
                    requested_start: start,
                    end,
                }),
            )
        } else {
            (Self { start, end }, None)
        }
    }

    /// Whether `date` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// First day of every month touched by the range, in order.
    #[must_use]
    pub fn months(&self) -> Vec<NaiveDate> {
        let last = month_start(self.end);
        let mut months = Vec::new();
        let mut cursor = Some(month_start(self.start));
        while let Some(month) = cursor.filter(|m| *m <= last) {
            months.push(month);
            cursor = month.checked_add_months(Months::new(1));
        }
        months
    }
}

/// First day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Whole calendar months from `start`'s month to `end`'s month.
/// Negative when `end` is in an earlier month.
#[must_use]
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months
}

/// One calendar month of the trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendBucket {
    /// First day of the month
    pub month: NaiveDate,
    /// Income dated in this month
    pub income: f64,
    /// Expenses dated in this month
    pub expenses: f64,
    /// `income - expenses`
    pub profit: f64,
}

/// Totals and trend for a range.
#[derive(Debug, Clone, PartialEq)]
pub struct CashflowSummary {
    /// Range actually reported on, after normalization
    pub range: DateRange,
    /// Set when the requested range had to be corrected
    pub warning: Option<RangeWarning>,
    /// Sum of income totals in range
    pub total_income: f64,
    /// Sum of expense amounts in range
    pub total_expenses: f64,
    /// `total_income - total_expenses`
    pub profit: f64,
    /// One bucket per month of the range, chronological, no gaps
    pub trend: Vec<TrendBucket>,
}

/// Result of aggregating the ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum Cashflow {
    /// Neither income nor expenses exist at all
    NoData,
    /// Figures for the requested range
    Summary(CashflowSummary),
}

/// Earliest and latest date across both collections, or `None` if both are empty.
#[must_use]
pub fn data_bounds<I, E>(income: &[I], expenses: &[E]) -> Option<DateRange>
where
    I: CashflowEntry,
    E: CashflowEntry,
{
    let dates = income
        .iter()
        .map(CashflowEntry::date)
        .chain(expenses.iter().map(CashflowEntry::date));

    dates.fold(None, |bounds: Option<DateRange>, date| {
        Some(match bounds {
            None => DateRange {
                start: date,
                end: date,
            },
            Some(range) => DateRange {
                start: range.start.min(date),
                end: range.end.max(date),
            },
        })
    })
}

/// Aggregates income and expenses over `start..=end`.
///
/// Returns [`Cashflow::NoData`] when both collections are empty before filtering.
/// Otherwise the range is normalized, entries outside it are ignored, and every
/// month of the range gets a bucket even when nothing happened in it.
#[must_use]
pub fn aggregate<I, E>(income: &[I], expenses: &[E], start: NaiveDate, end: NaiveDate) -> Cashflow
where
    I: CashflowEntry,
    E: CashflowEntry,
{
    if income.is_empty() && expenses.is_empty() {
        return Cashflow::NoData;
    }

    let (range, warning) = DateRange::normalized(start, end);

    let mut trend: Vec<TrendBucket> = range
        .months()
        .into_iter()
        .map(|month| TrendBucket {
            month,
            income: 0.0,
            expenses: 0.0,
            profit: 0.0,
        })
        .collect();

    let mut total_income = 0.0;
    for entry in income.iter().filter(|e| range.contains(e.date())) {
        total_income += entry.amount();
        if let Some(bucket) = bucket_for(&mut trend, range.start, entry.date()) {
            bucket.income += entry.amount();
        }
    }

    let mut total_expenses = 0.0;
    for entry in expenses.iter().filter(|e| range.contains(e.date())) {
        total_expenses += entry.amount();
        if let Some(bucket) = bucket_for(&mut trend, range.start, entry.date()) {
            bucket.expenses += entry.amount();
        }
    }

    for bucket in &mut trend {
        bucket.profit = bucket.income - bucket.expenses;
    }

    Cashflow::Summary(CashflowSummary {
        range,
        warning,
        total_income,
        total_expenses,
        profit: total_income - total_expenses,
        trend,
    })
}

fn bucket_for(
    trend: &mut [TrendBucket],
    start: NaiveDate,
    date: NaiveDate,
) -> Option<&mut TrendBucket> {
    usize::try_from(months_between(start, date))
        .ok()
        .and_then(|index| trend.get_mut(index))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    #![allow(clippy::panic)]
    use super::*;
    use crate::test_utils::date;

    fn entry(date: NaiveDate, amount: f64) -> Entry {
        Entry { date, amount }
    }

    fn summary(cashflow: Cashflow) -> CashflowSummary {
        match cashflow {
            Cashflow::Summary(summary) => summary,
            Cashflow::NoData => panic!("expected a summary, got NoData"),
        }
    }

    #[test]
    fn test_quarter_example() {
        let income = [
            entry(date(2024, 1, 15), 100.0),
            entry(date(2024, 3, 10), 50.0),
        ];
        let expenses = [entry(date(2024, 2, 1), 30.0)];

        let result = summary(aggregate(
            &income,
            &expenses,
            date(2024, 1, 1),
            date(2024, 3, 31),
        ));

        assert_eq!(result.total_income, 150.0);
        assert_eq!(result.total_expenses, 30.0);
        assert_eq!(result.profit, 120.0);
        assert_eq!(result.warning, None);
        assert_eq!(
            result.trend,
            vec![
                TrendBucket {
                    month: date(2024, 1, 1),
                    income: 100.0,
                    expenses: 0.0,
                    profit: 100.0,
                },
                TrendBucket {
                    month: date(2024, 2, 1),
                    income: 0.0,
                    expenses: 30.0,
                    profit: -30.0,
                },
                TrendBucket {
                    month: date(2024, 3, 1),
                    income: 50.0,
                    expenses: 0.0,
                    profit: 50.0,
                },
            ]
        );
    }

    #[test]
    fn test_no_data() {
        let none: [Entry; 0] = [];
        assert_eq!(
            aggregate(&none, &none, date(2024, 1, 1), date(2024, 12, 31)),
            Cashflow::NoData
        );
        assert_eq!(data_bounds(&none, &none), None);
    }

    #[test]
    fn test_data_outside_range_is_not_no_data() {
        let income = [entry(date(2020, 6, 1), 10.0)];
        let none: [Entry; 0] = [];

        let result = summary(aggregate(&income, &none, date(2024, 1, 1), date(2024, 2, 29)));
        assert_eq!(result.total_income, 0.0);
        assert_eq!(result.total_expenses, 0.0);
        assert_eq!(result.profit, 0.0);
        assert_eq!(result.trend.len(), 2);
        assert!(result.trend.iter().all(|b| b.income == 0.0 && b.expenses == 0.0));
    }

    #[test]
    fn test_inverted_range_is_clamped() {
        let income = [
            entry(date(2024, 1, 1), 10.0),
            entry(date(2024, 3, 1), 20.0),
        ];
        let expenses = [entry(date(2024, 1, 1), 4.0)];

        let inverted = summary(aggregate(
            &income,
            &expenses,
            date(2024, 5, 1),
            date(2024, 1, 1),
        ));
        assert_eq!(
            inverted.range,
            DateRange {
                start: date(2024, 1, 1),
                end: date(2024, 1, 1),
            }
        );
        assert_eq!(
            inverted.warning,
            Some(RangeWarning::StartAfterEnd {
                requested_start: date(2024, 5, 1),
                end: date(2024, 1, 1),
            })
        );

        let clamped = summary(aggregate(
            &income,
            &expenses,
            date(2024, 1, 1),
            date(2024, 1, 1),
        ));
        assert_eq!(inverted.total_income, clamped.total_income);
        assert_eq!(inverted.total_expenses, clamped.total_expenses);
        assert_eq!(inverted.profit, clamped.profit);
        assert_eq!(inverted.trend, clamped.trend);
        assert_eq!(inverted.total_income, 10.0);
        assert_eq!(inverted.trend.len(), 1);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let income = [
            entry(date(2023, 12, 31), 1.0),
            entry(date(2024, 1, 1), 2.0),
            entry(date(2024, 1, 31), 4.0),
            entry(date(2024, 2, 1), 8.0),
        ];
        let none: [Entry; 0] = [];

        let result = summary(aggregate(&income, &none, date(2024, 1, 1), date(2024, 1, 31)));
        assert_eq!(result.total_income, 6.0);
        assert_eq!(result.trend.len(), 1);
        assert_eq!(result.trend[0].income, 6.0);
    }

    #[test]
    fn test_partial_months_only_count_days_in_range() {
        let expenses = [
            entry(date(2024, 1, 5), 1.0),
            entry(date(2024, 1, 20), 2.0),
            entry(date(2024, 2, 20), 4.0),
        ];
        let none: [Entry; 0] = [];

        let result = summary(aggregate(&none, &expenses, date(2024, 1, 10), date(2024, 2, 10)));
        assert_eq!(result.total_expenses, 2.0);
        assert_eq!(result.trend[0].expenses, 2.0);
        assert_eq!(result.trend[1].expenses, 0.0);
    }

    #[test]
    fn test_trend_spans_year_boundary_without_gaps() {
        let income = [entry(date(2023, 11, 3), 5.0), entry(date(2024, 2, 9), 7.0)];
        let none: [Entry; 0] = [];

        let result = summary(aggregate(&income, &none, date(2023, 11, 1), date(2024, 2, 29)));
        let months: Vec<NaiveDate> = result.trend.iter().map(|b| b.month).collect();
        assert_eq!(
            months,
            vec![
                date(2023, 11, 1),
                date(2023, 12, 1),
                date(2024, 1, 1),
                date(2024, 2, 1),
            ]
        );
    }

    #[test]
    fn test_bucket_count_and_column_sums() {
        let income = [
            entry(date(2022, 3, 31), 12.0),
            entry(date(2022, 7, 4), 3.0),
            entry(date(2023, 1, 1), 40.0),
            entry(date(2024, 1, 1), 999.0),
        ];
        let expenses = [
            entry(date(2022, 3, 1), 2.0),
            entry(date(2022, 11, 30), 16.0),
            entry(date(2021, 1, 1), 500.0),
        ];
        let (start, end) = (date(2022, 2, 14), date(2023, 5, 2));

        let result = summary(aggregate(&income, &expenses, start, end));

        let expected_len = usize::try_from(months_between(start, end) + 1).unwrap_or_default();
        assert_eq!(result.trend.len(), expected_len);
        assert_eq!(result.trend.len(), 16);

        let income_sum: f64 = result.trend.iter().map(|b| b.income).sum();
        let expense_sum: f64 = result.trend.iter().map(|b| b.expenses).sum();
        assert_eq!(income_sum, result.total_income);
        assert_eq!(expense_sum, result.total_expenses);
        assert_eq!(result.total_income, 55.0);
        assert_eq!(result.total_expenses, 18.0);
        assert_eq!(result.profit, result.total_income - result.total_expenses);
        assert!(result.trend.iter().all(|b| b.profit == b.income - b.expenses));
    }

    #[test]
    fn test_data_bounds_across_collections() {
        let income = [entry(date(2024, 3, 1), 1.0), entry(date(2024, 1, 9), 1.0)];
        let expenses = [entry(date(2024, 6, 30), 1.0)];

        assert_eq!(
            data_bounds(&income, &expenses),
            Some(DateRange {
                start: date(2024, 1, 9),
                end: date(2024, 6, 30),
            })
        );
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(month_start(date(2024, 2, 29)), date(2024, 2, 1));
        assert_eq!(month_start(date(2024, 2, 1)), date(2024, 2, 1));
        assert_eq!(months_between(date(2024, 1, 31), date(2024, 2, 1)), 1);
        assert_eq!(months_between(date(2023, 12, 1), date(2025, 1, 1)), 13);
        assert_eq!(months_between(date(2024, 5, 1), date(2024, 1, 1)), -4);
    }

    #[test]
    fn test_range_warning_message() {
        let warning = RangeWarning::StartAfterEnd {
            requested_start: date(2024, 5, 1),
            end: date(2024, 1, 1),
        };
        assert_eq!(
            warning.to_string(),
            "Start date 2024-05-01 is after end date 2024-01-01; showing 2024-01-01 only"
        );
    }
}
