// File: crates/houdini-core/tests/date_scale.rs
// Purpose: Date granularity classification and month label generation.

use houdini_core::date_scale::{classify, parse_date, DateSpan};
use houdini_core::{resolve_date_scale, ChartError, TickInterval};

#[test]
fn identical_dates_span_one_day() {
    let (span, interval) = classify(&["2023 Jan 05", "2023 Jan 05"]).unwrap();
    assert_eq!(span, DateSpan { days: 1 });
    assert_eq!(interval, TickInterval::Hours);
}

#[test]
fn quarter_gets_monthly_labels() {
    let scale = resolve_date_scale(&["2023 Jan 01", "2023 Feb 15", "2023 Mar 31"]).unwrap();
    assert_eq!(scale.labels, vec!["Jan 2023", "Feb 2023", "Mar 2023"]);
    assert_eq!(scale.max_value, 89.0);
}

#[test]
fn first_and_last_label_decide_the_months() {
    let scale = resolve_date_scale(&["2023 Jan 05", "2023 Mar 20"]).unwrap();
    assert_eq!(scale.labels, vec!["Jan 2023", "Feb 2023", "Mar 2023"]);
    assert_eq!(scale.max_value, 89.0);
}

#[test]
fn labels_cover_partial_months() {
    let scale = resolve_date_scale(&["2022 Nov 20", "2023 Jan 10"]).unwrap();
    assert_eq!(scale.labels, vec!["Nov 2022", "Dec 2022", "Jan 2023"]);
    // Nov 1 to Jan 31
    assert_eq!(scale.max_value, 91.0);
}

#[test]
fn thresholds_pick_the_first_matching_bucket() {
    let bucket = |first: &str, last: &str| classify(&[first, last]).unwrap().1;
    assert_eq!(bucket("2010 Jan 01", "2023 Jan 01"), TickInterval::Years);
    assert_eq!(bucket("2020 Jan 01", "2022 Jun 01"), TickInterval::HalfYear);
    assert_eq!(bucket("2023 Jan 01", "2023 Sep 01"), TickInterval::Months);
    assert_eq!(bucket("2023 Jan 01", "2023 Apr 15"), TickInterval::MonthsFortnight);
    assert_eq!(bucket("2023 Jan 01", "2023 Mar 05"), TickInterval::MonthsDays);
    assert_eq!(bucket("2023 Jan 01", "2023 Feb 10"), TickInterval::WeekDays);
    assert_eq!(bucket("2023 Jan 01", "2023 Jan 20"), TickInterval::Days);
}

#[test]
fn buckets_without_generator_are_unresolved() {
    let err = resolve_date_scale(&["2023 Jan 05", "2023 Jan 06"]).unwrap_err();
    assert!(matches!(err, ChartError::UnresolvedDateScale(TickInterval::Hours)));

    let err = resolve_date_scale(&["2000 Jan 01", "2023 Jan 01"]).unwrap_err();
    assert!(matches!(err, ChartError::UnresolvedDateScale(TickInterval::Years)));
}

#[test]
fn malformed_and_empty_input() {
    let err = resolve_date_scale(&["2023-01-05", "2023 Feb 01"]).unwrap_err();
    assert!(matches!(err, ChartError::InvalidDate { ref value } if value == "2023-01-05"));

    assert!(matches!(resolve_date_scale(&[]), Err(ChartError::EmptyDataset)));
}

#[test]
fn only_the_exact_date_shape_parses() {
    assert!(parse_date("2023 Jan 05").is_ok());
    for bad in ["2023 January 05", " 2023 Jan 05", "2023 Jan 05 ", "2023 Jan 5", "2023  Jan 05", "23 Jan 05", "2023 Feb 30"] {
        assert!(
            matches!(parse_date(bad), Err(ChartError::InvalidDate { ref value }) if value == bad),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn scale_reports_its_origin() {
    let scale = resolve_date_scale(&["2023 Jan 05", "2023 Mar 20"]).unwrap();
    assert_eq!(scale.first_month_start, parse_date("2023 Jan 01").unwrap());
}
