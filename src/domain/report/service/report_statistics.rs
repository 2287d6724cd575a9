//! Statistics derived from a report series snapshot.
//!
//! Every function here is pure: it reads a [`ReportSeries`] and returns plain
//! DTOs. Range-based series return an empty `Vec` when nothing matches; the
//! service layer decides whether that is a "not found".

use crate::core::state::report::report_series::ReportSeries;
use crate::domain::report::dto::report_statistics_dto::{
    CumulativeTotalsDto, LethalityRateDto, MovingAveragePointDto, NewDeceasedPointDto,
    NewPositivesPointDto, NewRecoveredPointDto, PositivityRatePointDto,
};
use crate::domain::report::model::date_range::DateRange;

use super::date_range_filter::filter_by_range;
use super::series_aligner::cumulative_delta;

/// Number of reports averaged by [`moving_average_7`].
pub const MOVING_AVERAGE_WINDOW: usize = 7;

/// Round to two decimals, ties away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn new_positives_series(series: &ReportSeries, range: &DateRange) -> Vec<NewPositivesPointDto> {
    filter_by_range(series, range)
        .iter()
        .map(|r| NewPositivesPointDto {
            date: r.day(),
            new_positives: r.new_positives,
        })
        .collect()
}

pub fn new_recovered_series(series: &ReportSeries, range: &DateRange) -> Vec<NewRecoveredPointDto> {
    filter_by_range(series, range)
        .iter()
        .map(|r| NewRecoveredPointDto {
            date: r.day(),
            new_recovered: cumulative_delta(series, r, |x| x.recovered),
        })
        .collect()
}

pub fn new_deceased_series(series: &ReportSeries, range: &DateRange) -> Vec<NewDeceasedPointDto> {
    filter_by_range(series, range)
        .iter()
        .map(|r| NewDeceasedPointDto {
            date: r.day(),
            new_deceased: cumulative_delta(series, r, |x| x.deceased),
        })
        .collect()
}

/// Average of `new_positives` over the last 7 reports ending at each report
/// in range. The window reaches back before `range.start` and shrinks at the
/// head of the series.
pub fn moving_average_7(series: &ReportSeries, range: &DateRange) -> Vec<MovingAveragePointDto> {
    let reports = series.reports();

    reports
        .iter()
        .enumerate()
        .filter(|(_, r)| range.contains(r.day()))
        .map(|(i, r)| {
            let from = i.saturating_sub(MOVING_AVERAGE_WINDOW - 1);
            let window = &reports[from..=i];
            let sum: u64 = window.iter().map(|w| w.new_positives).sum();

            MovingAveragePointDto {
                date: r.day(),
                new_positives_average: round2(sum as f64 / window.len() as f64),
            }
        })
        .collect()
}

/// Daily new positives over daily new swabs, in percent.
///
/// Swabs are cumulative, so the filter window starts one day early to pick
/// up the swab count preceding `range.start`. The first report of that window
/// is compared against zero. Non-positive swab deltas give a rate of 0.
pub fn positivity_rate(series: &ReportSeries, range: &DateRange) -> Vec<PositivityRatePointDto> {
    let window = filter_by_range(series, &range.extended_back(1));

    window
        .iter()
        .enumerate()
        .filter(|(_, r)| r.day() >= range.start)
        .map(|(i, r)| {
            let previous_swabs = if i > 0 { window[i - 1].swabs } else { 0 };
            let new_swabs = r.swabs as i64 - previous_swabs as i64;
            let rate = if new_swabs > 0 {
                r.new_positives as f64 / new_swabs as f64 * 100.0
            } else {
                0.0
            };

            PositivityRatePointDto {
                date: r.day(),
                positivity_rate: round2(rate),
            }
        })
        .collect()
}

/// Cumulative deaths over cumulative cases of the latest report, in percent.
pub fn lethality_rate(series: &ReportSeries) -> Option<LethalityRateDto> {
    let latest = series.latest()?;
    let rate = if latest.total_cases > 0 {
        latest.deceased as f64 / latest.total_cases as f64 * 100.0
    } else {
        0.0
    };

    Some(LethalityRateDto {
        date: latest.day(),
        lethality_rate: round2(rate),
    })
}

pub fn latest_cumulative_totals(series: &ReportSeries) -> Option<CumulativeTotalsDto> {
    series.latest().map(|latest| CumulativeTotalsDto {
        date: latest.day(),
        total_cases: latest.total_cases,
        recovered: latest.recovered,
        deceased: latest.deceased,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::report::daily_report_entity::fixtures::report;
    use crate::domain::report::model::date_range::parse_strict_date;
    use chrono::NaiveDate;

    fn d(raw: &str) -> NaiveDate {
        parse_strict_date(raw).unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(d(start), d(end))
    }

    /// Ten consecutive days, new positives 1..=10, swabs growing by 100/day.
    fn ten_days() -> ReportSeries {
        let reports = (0..10u64)
            .map(|i| {
                let day = format!("2020-03-{:02}", 10 + i);
                report(&day, 100 + i * 10, i * 2, i, i + 1, 1000 + i * 100)
            })
            .collect();
        ReportSeries::from_reports(reports)
    }

    #[test]
    fn round2_ties_go_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.5), 1.5);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(30.0), 30.0);
    }

    #[test]
    fn reversed_range_yields_empty_everywhere() {
        let series = ten_days();
        let reversed = range("2020-03-15", "2020-03-12");

        assert!(new_positives_series(&series, &reversed).is_empty());
        assert!(new_recovered_series(&series, &reversed).is_empty());
        assert!(new_deceased_series(&series, &reversed).is_empty());
        assert!(moving_average_7(&series, &reversed).is_empty());
        assert!(positivity_rate(&series, &reversed).is_empty());
    }

    #[test]
    fn adjacent_reversed_range_yields_empty_positivity() {
        // The one-day extension reaches `end` but nothing is >= `start`.
        let series = ten_days();
        assert!(positivity_rate(&series, &range("2020-03-13", "2020-03-12")).is_empty());
    }

    #[test]
    fn new_positives_are_taken_verbatim() {
        let series = ten_days();
        let points = new_positives_series(&series, &range("2020-03-11", "2020-03-12"));
        assert_eq!(
            points,
            vec![
                NewPositivesPointDto { date: d("2020-03-11"), new_positives: 2 },
                NewPositivesPointDto { date: d("2020-03-12"), new_positives: 3 },
            ]
        );
    }

    #[test]
    fn delta_at_range_start_uses_day_outside_range() {
        let series = ten_days();
        let recovered = new_recovered_series(&series, &range("2020-03-12", "2020-03-12"));
        assert_eq!(recovered[0].new_recovered, 2);

        let deceased = new_deceased_series(&series, &range("2020-03-12", "2020-03-13"));
        assert_eq!(deceased.iter().map(|p| p.new_deceased).collect::<Vec<_>>(), vec![1, 1]);
    }

    #[test]
    fn delta_without_prior_day_is_cumulative_value() {
        let series = ReportSeries::from_reports(vec![
            report("2020-03-10", 100, 40, 7, 5, 1000),
            report("2020-03-12", 130, 50, 9, 5, 1200),
        ]);

        let recovered = new_recovered_series(&series, &range("2020-03-10", "2020-03-12"));
        assert_eq!(recovered.iter().map(|p| p.new_recovered).collect::<Vec<_>>(), vec![40, 50]);

        let deceased = new_deceased_series(&series, &range("2020-03-10", "2020-03-12"));
        assert_eq!(deceased.iter().map(|p| p.new_deceased).collect::<Vec<_>>(), vec![7, 9]);
    }

    #[test]
    fn moving_average_single_record_equals_its_value() {
        let series = ReportSeries::from_reports(vec![report("2020-03-10", 10, 0, 0, 17, 100)]);
        let points = moving_average_7(&series, &range("2020-03-10", "2020-03-10"));
        assert_eq!(
            points,
            vec![MovingAveragePointDto { date: d("2020-03-10"), new_positives_average: 17.0 }]
        );
    }

    #[test]
    fn moving_average_shrinks_at_series_head_and_reaches_before_range() {
        let series = ten_days();

        // Head of series: windows of 1, 2, 3 reports.
        let head = moving_average_7(&series, &range("2020-03-10", "2020-03-12"));
        let values: Vec<f64> = head.iter().map(|p| p.new_positives_average).collect();
        assert_eq!(values, vec![1.0, 1.5, 2.0]);

        // 2020-03-19 averages reports 4..=10 even though the range starts there.
        let tail = moving_average_7(&series, &range("2020-03-19", "2020-03-19"));
        assert_eq!(tail[0].new_positives_average, 7.0);
    }

    #[test]
    fn moving_average_rounds_to_two_decimals() {
        let series = ReportSeries::from_reports(vec![
            report("2020-03-10", 0, 0, 0, 1, 0),
            report("2020-03-11", 0, 0, 0, 1, 0),
            report("2020-03-12", 0, 0, 0, 2, 0),
        ]);
        let points = moving_average_7(&series, &range("2020-03-12", "2020-03-12"));
        assert_eq!(points[0].new_positives_average, 1.33);
    }

    #[test]
    fn positivity_rate_uses_day_before_range() {
        let series = ReportSeries::from_reports(vec![
            report("2020-03-10", 0, 0, 0, 10, 100),
            report("2020-03-11", 0, 0, 0, 15, 150),
        ]);
        let points = positivity_rate(&series, &range("2020-03-11", "2020-03-11"));
        assert_eq!(
            points,
            vec![PositivityRatePointDto { date: d("2020-03-11"), positivity_rate: 30.0 }]
        );
    }

    #[test]
    fn positivity_rate_is_zero_when_swabs_do_not_grow() {
        let series = ReportSeries::from_reports(vec![
            report("2020-03-10", 0, 0, 0, 10, 100),
            report("2020-03-11", 0, 0, 0, 15, 100),
            report("2020-03-12", 0, 0, 0, 15, 90),
        ]);
        let points = positivity_rate(&series, &range("2020-03-11", "2020-03-12"));
        for p in &points {
            assert_eq!(p.positivity_rate, 0.0);
            assert!(p.positivity_rate.is_finite());
        }
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn positivity_rate_at_series_head_compares_against_zero() {
        let series = ReportSeries::from_reports(vec![report("2020-03-10", 0, 0, 0, 10, 200)]);
        let points = positivity_rate(&series, &range("2020-03-10", "2020-03-10"));
        assert_eq!(points[0].positivity_rate, 5.0);
    }

    #[test]
    fn positivity_rate_consecutive_days() {
        let series = ten_days();
        let points = positivity_rate(&series, &range("2020-03-11", "2020-03-13"));
        let rates: Vec<f64> = points.iter().map(|p| p.positivity_rate).collect();
        // new positives 2, 3, 4 over 100 new swabs each.
        assert_eq!(rates, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn lethality_uses_latest_report() {
        let series = ReportSeries::from_reports(vec![
            report("2020-03-11", 400, 0, 20, 0, 0),
            report("2020-03-10", 300, 0, 3, 0, 0),
        ]);
        let rate = lethality_rate(&series).unwrap();
        assert_eq!(rate.date, d("2020-03-11"));
        assert_eq!(rate.lethality_rate, 5.0);
    }

    #[test]
    fn lethality_with_zero_cases_is_zero() {
        let series = ReportSeries::from_reports(vec![report("2020-02-24", 0, 0, 0, 0, 0)]);
        assert_eq!(lethality_rate(&series).unwrap().lethality_rate, 0.0);
    }

    #[test]
    fn scalar_statistics_on_empty_series_are_none() {
        let series = ReportSeries::default();
        assert!(lethality_rate(&series).is_none());
        assert!(latest_cumulative_totals(&series).is_none());
    }

    #[test]
    fn cumulative_totals_come_from_latest_report() {
        let series = ten_days();
        let totals = latest_cumulative_totals(&series).unwrap();
        assert_eq!(totals.date, d("2020-03-19"));
        assert_eq!(totals.total_cases, 190);
        assert_eq!(totals.recovered, 18);
        assert_eq!(totals.deceased, 9);
    }
}
