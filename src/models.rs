use chrono::{Datelike, Month, NaiveDateTime, Weekday};
use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

/// Timestamp layout used by all three trip tables.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The three cities with published trip tables.
///
/// A city is also the unit of schema variation: Washington's table ships
/// without the `Gender` and `Birth Year` columns, so the demographic
/// capabilities live here as per-dataset flags rather than being discovered
/// row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Backing CSV file name under the data directory.
    pub fn csv_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Whether this city's table carries the `Gender` column.
    pub fn has_gender(&self) -> bool {
        !matches!(self, City::Washington)
    }

    /// Whether this city's table carries the `Birth Year` column.
    pub fn has_birth_year(&self) -> bool {
        !matches!(self, City::Washington)
    }

    /// Case-insensitive lookup from a prompt answer.
    pub fn parse(s: &str) -> Option<City> {
        let s = s.trim();
        City::ALL
            .into_iter()
            .find(|city| s.eq_ignore_ascii_case(city.name()))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One CSV row exactly as shipped.
///
/// Timestamps arrive as strings and birth years as floats (`"1987.0"`), so
/// this type keeps the raw encodings; [`Trip`] is the cleaned-up form.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default, deserialize_with = "de_year_from_float_or_int")]
    pub birth_year: Option<i32>,
}

/// Serde helper: parse a birth year encoded as either a float (`"1987.0"`)
/// or an integer (`"1987"`); an empty field means the year is missing.
fn de_year_from_float_or_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .map(|y| Some(y.trunc() as i32))
            .map_err(|_| serde::de::Error::custom(format!("invalid birth year {s:?}"))),
    }
}

/// One trip in the cleaned-up, analysis-friendly form.
///
/// `month` and `day_of_week` are derived from `start_time` once at load time;
/// filtering only narrows the row set and never touches them.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Trip length in whole seconds.
    pub duration_secs: u64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    /// Present only for cities whose table ships the column, see [`City::has_gender`].
    pub gender: Option<String>,
    /// Present only for cities whose table ships the column, see [`City::has_birth_year`].
    pub birth_year: Option<i32>,
    pub month: Month,
    pub day_of_week: Weekday,
}

/// Why a raw CSV row could not be turned into a [`Trip`].
#[derive(Debug, Error)]
pub enum TripConvertError {
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
    #[error("negative trip duration {0}")]
    NegativeDuration(f64),
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TripConvertError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|source| {
        TripConvertError::Timestamp {
            value: value.to_string(),
            source,
        }
    })
}

impl TryFrom<RawTrip> for Trip {
    type Error = TripConvertError;

    fn try_from(raw: RawTrip) -> Result<Self, Self::Error> {
        let start_time = parse_timestamp(&raw.start_time)?;
        let end_time = parse_timestamp(&raw.end_time)?;
        if raw.trip_duration < 0.0 {
            return Err(TripConvertError::NegativeDuration(raw.trip_duration));
        }
        let month = Month::try_from(start_time.month() as u8).expect("calendar month in 1..=12");
        Ok(Trip {
            month,
            day_of_week: start_time.weekday(),
            start_time,
            end_time,
            duration_secs: raw.trip_duration.trunc() as u64,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender.filter(|g| !g.trim().is_empty()),
            birth_year: raw.birth_year,
        })
    }
}

/// Month filter choice.
///
/// Only January through June are ever offered at the prompt: the shipped
/// tables cover the first half of the year, and the vocabulary deliberately
/// stays that narrow even though `Trip::month` can hold any month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(Month),
}

impl MonthFilter {
    pub fn matches(&self, month: Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }
}

/// Day-of-week filter choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == day,
        }
    }
}

/// One validated set of choices from the filter prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

/// Full English name for a weekday; `Weekday`'s `Display` prints the short form.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
