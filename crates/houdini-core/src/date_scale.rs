// File: crates/houdini-core/src/date_scale.rs
// Summary: Date-indexed x axis: granularity classification and month-label generation.
// Notes:
// - Only the month-based buckets have a label generator. Every other bucket
//   resolves to `ChartError::UnresolvedDateScale` so callers can pick a fallback.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// `yyyy LLL dd`, e.g. `2023 Jan 05`.
pub const DATE_FORMAT: &str = "%Y %b %d";
/// `LLL yyyy`, e.g. `Jan 2023`.
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

/// Tick granularity, ordered from coarsest to finest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickInterval {
    Years,
    HalfYear,
    Months,
    MonthsFortnight,
    MonthsDays,
    WeekDays,
    Days,
    Hours,
    MinutesFives,
    Minutes,
    SecondsTens,
    SecondsFives,
    Seconds,
}

impl TickInterval {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TickInterval::Years => "years",
            TickInterval::HalfYear => "half_year",
            TickInterval::Months => "months",
            TickInterval::MonthsFortnight => "months_fortnight",
            TickInterval::MonthsDays => "months_days",
            TickInterval::WeekDays => "week_days",
            TickInterval::Days => "days",
            TickInterval::Hours => "hours",
            TickInterval::MinutesFives => "minutes_fives",
            TickInterval::Minutes => "minutes",
            TickInterval::SecondsTens => "seconds_tens",
            TickInterval::SecondsFives => "seconds_fives",
            TickInterval::Seconds => "seconds",
        }
    }

    /// First matching threshold wins.
    pub fn classify(span: &DateSpan) -> Self {
        let days = span.days as f64;
        if span.years() > 5.0 {
            TickInterval::Years
        } else if days > 800.0 {
            TickInterval::HalfYear
        } else if days > 180.0 {
            TickInterval::Months
        } else if days > 90.0 {
            TickInterval::MonthsFortnight
        } else if days > 60.0 {
            TickInterval::MonthsDays
        } else if days > 30.0 {
            TickInterval::WeekDays
        } else if days > 2.0 {
            TickInterval::Days
        } else if span.hours() > 2.4 {
            TickInterval::Hours
        } else if span.minutes() > 15.0 {
            TickInterval::MinutesFives
        } else if span.minutes() > 5.0 {
            TickInterval::Minutes
        } else if span.minutes() > 1.0 {
            TickInterval::SecondsTens
        } else if span.seconds() > 20.0 {
            TickInterval::SecondsFives
        } else {
            TickInterval::Seconds
        }
    }

    /// Whether the bucket has a label generator.
    pub const fn is_month_based(&self) -> bool {
        matches!(
            self,
            TickInterval::HalfYear
                | TickInterval::Months
                | TickInterval::MonthsFortnight
                | TickInterval::MonthsDays
                | TickInterval::WeekDays
                | TickInterval::Days
        )
    }
}

impl fmt::Display for TickInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive day count between the first and last label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateSpan {
    pub days: i64,
}

impl DateSpan {
    pub fn between(first: NaiveDate, last: NaiveDate) -> Self {
        Self { days: days_between(last, first) + 1 }
    }

    pub fn years(&self) -> f64 { self.days as f64 / 365.0 }
    pub fn hours(&self) -> f64 { self.days as f64 * 24.0 }
    pub fn minutes(&self) -> f64 { self.hours() * 60.0 }
    pub fn seconds(&self) -> f64 { self.minutes() * 60.0 }
}

/// Month labels spanning the data and the day count used as the x-mapping denominator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateScale {
    pub labels: Vec<String>,
    pub max_value: f64,
    /// Day 0 of the x axis: the first day of the first labeled month.
    pub first_month_start: NaiveDate,
}

/// Parse a strict `yyyy LLL dd` date: no surrounding whitespace, a three-letter
/// month and a two-digit day.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let invalid = || ChartError::InvalidDate { value: value.to_string() };
    let mut parts = value.split(' ');
    let shape_ok = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            year.len() == 4
                && year.bytes().all(|b| b.is_ascii_digit())
                && month.len() == 3
                && month.bytes().all(|b| b.is_ascii_alphabetic())
                && day.len() == 2
                && day.bytes().all(|b| b.is_ascii_digit())
        }
        _ => false,
    };
    if !shape_ok {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(to: NaiveDate, from: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(i64::from(date.day0()))
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    match start.checked_add_months(Months::new(1)) {
        Some(next) => next.pred_opt().unwrap_or(next),
        None => NaiveDate::MAX,
    }
}

/// Span and bucket for an ordered label sequence.
pub fn classify(values: &[&str]) -> Result<(DateSpan, TickInterval)> {
    let (first, last) = bounds(values)?;
    let span = DateSpan::between(first, last);
    Ok((span, TickInterval::classify(&span)))
}

/// Resolve the x-axis scale for ordered date labels.
///
/// Buckets without a generator yield [`ChartError::UnresolvedDateScale`].
pub fn resolve_date_scale(values: &[&str]) -> Result<DateScale> {
    let (span, interval) = classify(values)?;
    if !interval.is_month_based() {
        log::warn!("date scale not defined for `{interval}` granularity ({} days)", span.days);
        return Err(ChartError::UnresolvedDateScale(interval));
    }
    let (first, last) = bounds(values)?;
    Ok(month_scale(first, last))
}

/// One `LLL yyyy` label per calendar month from `first`'s month to `last`'s month.
pub fn month_scale(first: NaiveDate, last: NaiveDate) -> DateScale {
    let first_month_start = month_start(first);
    let last_month_end = month_end(last);

    let mut labels = Vec::new();
    let mut cursor = Some(first_month_start);
    while let Some(month) = cursor.filter(|m| *m <= last_month_end) {
        labels.push(month.format(MONTH_LABEL_FORMAT).to_string());
        cursor = month.checked_add_months(Months::new(1));
    }

    DateScale {
        labels,
        max_value: days_between(last_month_end, first_month_start) as f64,
        first_month_start,
    }
}

fn bounds(values: &[&str]) -> Result<(NaiveDate, NaiveDate)> {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) => Ok((parse_date(first)?, parse_date(last)?)),
        _ => Err(ChartError::EmptyDataset),
    }
}
