//! Descriptive statistics over a filtered trip table.
//!
//! Every summary returns `None` for an empty input so callers can print a
//! "no data" line instead of computing over nothing.
//!
//! Tie-break policy for every mode in this module: values are counted in a
//! `BTreeMap` and the scan keeps the first maximum, so ties resolve to the
//! smallest value in the key's order (calendar order for months and days,
//! numeric for hours and years, lexicographic for station names).

use crate::models::{City, Trip};
use chrono::{Month, Timelike, Weekday};
use std::collections::BTreeMap;

/// Most frequent value with its count, per the module tie-break policy.
fn mode<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<(T, usize)> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        if best.as_ref().is_none_or(|(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best
}

/// Full frequency distribution: descending count, ties by ascending value.
fn distribution<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(v, c)| (v.to_owned(), c))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Most frequent travel times over one filtered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSummary {
    pub month: Month,
    pub day: Weekday,
    /// Hour of day, 0-23.
    pub hour: u32,
}

pub fn time_summary(trips: &[Trip]) -> Option<TimeSummary> {
    let (month_num, _) = mode(trips.iter().map(|t| t.month.number_from_month()))?;
    let (day_num, _) = mode(trips.iter().map(|t| t.day_of_week.num_days_from_monday()))?;
    let (hour, _) = mode(trips.iter().map(|t| t.start_time.hour()))?;
    Some(TimeSummary {
        month: Month::try_from(month_num as u8).expect("mode of months in 1..=12"),
        day: Weekday::try_from(day_num as u8).expect("mode of weekdays in 0..=6"),
        hour,
    })
}

/// Most popular stations and station pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSummary {
    pub start: String,
    pub end: String,
    /// Most frequent ordered (start, end) pair.
    pub trip: (String, String),
    pub trip_count: usize,
}

pub fn station_summary(trips: &[Trip]) -> Option<StationSummary> {
    let (start, _) = mode(trips.iter().map(|t| t.start_station.as_str()))?;
    let (end, _) = mode(trips.iter().map(|t| t.end_station.as_str()))?;
    let ((from, to), trip_count) = mode(
        trips
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    )?;
    Some(StationSummary {
        start: start.to_owned(),
        end: end.to_owned(),
        trip: (from.to_owned(), to.to_owned()),
        trip_count,
    })
}

/// Total and mean trip duration, both in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSummary {
    pub count: usize,
    pub total_secs: u64,
    /// Arithmetic mean, integer truncated.
    pub mean_secs: u64,
}

pub fn duration_summary(trips: &[Trip]) -> Option<DurationSummary> {
    if trips.is_empty() {
        return None;
    }
    let total_secs: u64 = trips.iter().map(|t| t.duration_secs).sum();
    Some(DurationSummary {
        count: trips.len(),
        total_secs,
        mean_secs: total_secs / trips.len() as u64,
    })
}

/// Earliest, latest and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearSummary {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// Rider demographics over one filtered table.
///
/// `genders` and `birth_years` are `None` when the city's table does not
/// ship the column ([`City::has_gender`] / [`City::has_birth_year`]);
/// `birth_years` is also `None` when every row in a capable table left the
/// year blank. Rows with a blank optional value are excluded from that
/// statistic's population, never counted as a category of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearSummary>,
}

pub fn user_summary(trips: &[Trip], city: City) -> Option<UserSummary> {
    if trips.is_empty() {
        return None;
    }
    let user_types = distribution(trips.iter().map(|t| t.user_type.as_str()));
    let genders = city
        .has_gender()
        .then(|| distribution(trips.iter().filter_map(|t| t.gender.as_deref())));
    let birth_years = if city.has_birth_year() {
        let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
        let earliest = years.iter().copied().min();
        let latest = years.iter().copied().max();
        match (earliest, latest, mode(years)) {
            (Some(earliest), Some(latest), Some((most_common, _))) => Some(BirthYearSummary {
                earliest,
                latest,
                most_common,
            }),
            _ => None,
        }
    } else {
        None
    };
    Some(UserSummary {
        user_types,
        genders,
        birth_years,
    })
}
