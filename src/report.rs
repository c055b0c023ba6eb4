//! Rendering of summaries into the human-readable report text.
//!
//! Every renderer returns the report body as a `String`; the session decides
//! where it goes. An absent summary (empty filtered set) renders as the
//! fixed [`NO_DATA`] line.

use crate::models::{City, Trip, weekday_name};
use crate::stats::{DurationSummary, StationSummary, TimeSummary, UserSummary};
use num_format::{Locale, ToFormattedString};

/// Printed by every reporter when the filtered set is empty.
pub const NO_DATA: &str = "No data available for this selection.";

/// 12-hour clock label for an hour of day (0-23), e.g. `17` -> `"05 PM"`.
fn hour_label(hour: u32) -> String {
    let (h, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{h:02} {suffix}")
}

/// Break a second count into a days/hours/minutes/seconds display,
/// e.g. `93784` -> `"1 day 02:03:04"`.
pub fn elapsed(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    match days {
        0 => format!("{hours:02}:{minutes:02}:{seconds:02}"),
        1 => format!("1 day {hours:02}:{minutes:02}:{seconds:02}"),
        _ => format!("{days} days {hours:02}:{minutes:02}:{seconds:02}"),
    }
}

pub fn time_report(summary: Option<&TimeSummary>) -> String {
    let Some(s) = summary else {
        return NO_DATA.to_string();
    };
    format!(
        "Most common month of travel: {}\n\
         Most common day of travel: {}\n\
         Most common start hour: {}",
        s.month.name(),
        weekday_name(s.day),
        hour_label(s.hour)
    )
}

pub fn station_report(summary: Option<&StationSummary>) -> String {
    let Some(s) = summary else {
        return NO_DATA.to_string();
    };
    format!(
        "Most commonly used start station: {}\n\
         Most commonly used end station: {}\n\
         Most frequent trip: {} -> {} ({} rides)",
        s.start,
        s.end,
        s.trip.0,
        s.trip.1,
        s.trip_count.to_formatted_string(&Locale::en)
    )
}

pub fn duration_report(summary: Option<&DurationSummary>) -> String {
    let Some(s) = summary else {
        return NO_DATA.to_string();
    };
    format!(
        "Total travel time: {} ({} seconds over {} trips)\n\
         Mean travel time: {}",
        elapsed(s.total_secs),
        s.total_secs.to_formatted_string(&Locale::en),
        s.count.to_formatted_string(&Locale::en),
        elapsed(s.mean_secs)
    )
}

fn push_distribution(out: &mut String, counts: &[(String, usize)]) {
    for (value, count) in counts {
        out.push_str(&format!(
            "\n  {value}: {}",
            count.to_formatted_string(&Locale::en)
        ));
    }
}

pub fn user_report(summary: Option<&UserSummary>, city: City) -> String {
    let Some(s) = summary else {
        return NO_DATA.to_string();
    };
    let mut out = String::from("Counts of user types:");
    push_distribution(&mut out, &s.user_types);

    out.push('\n');
    match &s.genders {
        Some(counts) if counts.is_empty() => {
            out.push_str("No gender values in this selection.");
        }
        Some(counts) => {
            out.push_str("Counts of gender:");
            push_distribution(&mut out, counts);
        }
        None => {
            out.push_str(&format!("{city} does not include gender information."));
        }
    }

    out.push('\n');
    match (&s.birth_years, city.has_birth_year()) {
        (Some(b), _) => {
            out.push_str(&format!(
                "Earliest birth year: {}\nLatest birth year: {}\nMost common birth year: {}",
                b.earliest, b.latest, b.most_common
            ));
        }
        (None, true) => out.push_str("No birth year values in this selection."),
        (None, false) => {
            out.push_str(&format!("{city} does not include birth year information."));
        }
    }
    out
}

/// One raw trip as a single pager line.
pub fn trip_line(trip: &Trip) -> String {
    let mut line = format!(
        "{}  {:>6}s  {} -> {}  {}",
        trip.start_time.format(crate::models::TIMESTAMP_FORMAT),
        trip.duration_secs,
        trip.start_station,
        trip.end_station,
        trip.user_type
    );
    if let Some(gender) = &trip.gender {
        line.push_str(&format!(", {gender}"));
    }
    if let Some(year) = trip.birth_year {
        line.push_str(&format!(", born {year}"));
    }
    line
}
