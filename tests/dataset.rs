use bikeshare_explorer::dataset::{DatasetError, load_trips};
use bikeshare_explorer::models::{City, DayFilter, Filters, MonthFilter};
use chrono::{Month, Weekday};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const FULL_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
const WASHINGTON_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

fn write_table(dir: &Path, file: &str, header: &str, rows: &[&str]) {
    let mut f = File::create(dir.join(file)).unwrap();
    writeln!(f, "{header}").unwrap();
    for row in rows {
        writeln!(f, "{row}").unwrap();
    }
}

/// A data directory with all three city tables. Weekdays, for reference:
/// 2017-01-02 and 2017-06-05 are Mondays, 2017-01-03 and 2017-06-06 Tuesdays.
fn fixture_dir() -> TempDir {
    let dir = tempdir().unwrap();
    write_table(
        dir.path(),
        "chicago.csv",
        FULL_HEADER,
        &[
            "0,2017-01-02 08:05:00,2017-01-02 08:15:00,600,Canal St,State St,Subscriber,Male,1987.0",
            "1,2017-01-03 17:10:00,2017-01-03 17:15:00,300,State St,Canal St,Customer,Female,1992.0",
            "2,2017-06-05 09:00:00,2017-06-05 09:07:30,450,Canal St,State St,Subscriber,Male,1987.0",
            "3,2017-06-06 17:30:00,2017-06-06 17:45:00,900,Clark St,Clark St,Subscriber,,",
        ],
    );
    write_table(
        dir.path(),
        "new_york_city.csv",
        FULL_HEADER,
        &[
            "0,2017-01-02 07:00:00,2017-01-02 07:20:00,1200,Broadway,Wall St,Subscriber,Female,1990.0",
            "1,2017-01-02 18:30:00,2017-01-02 18:40:00,600,Wall St,Broadway,Customer,Male,1985.0",
            "2,2017-01-03 12:00:00,2017-01-03 12:10:00,600,Broadway,Wall St,Subscriber,Female,1990.0",
            "3,2017-06-05 08:45:00,2017-06-05 08:55:00,600,Broadway,Wall St,Subscriber,Male,1979.0",
        ],
    );
    write_table(
        dir.path(),
        "washington.csv",
        WASHINGTON_HEADER,
        &[
            "0,2017-01-02 06:30:00,2017-01-02 06:40:00,600,K St,M St,Subscriber",
            "1,2017-06-05 16:00:00,2017-06-05 16:12:00,720,M St,K St,Customer",
        ],
    );
    dir
}

fn all(city: City) -> Filters {
    Filters {
        city,
        month: MonthFilter::All,
        day: DayFilter::All,
    }
}

#[test]
fn unfiltered_load_returns_the_full_table_for_every_city() {
    let dir = fixture_dir();
    for (city, expected) in [
        (City::Chicago, 4),
        (City::NewYorkCity, 4),
        (City::Washington, 2),
    ] {
        let trips = load_trips(dir.path(), &all(city)).unwrap();
        assert_eq!(trips.len(), expected, "{city}");
    }
}

#[test]
fn derived_fields_come_from_the_start_time() {
    let dir = fixture_dir();
    let trips = load_trips(dir.path(), &all(City::Chicago)).unwrap();
    assert_eq!(trips[0].month, Month::January);
    assert_eq!(trips[0].day_of_week, Weekday::Mon);
    assert_eq!(trips[3].month, Month::June);
    assert_eq!(trips[3].day_of_week, Weekday::Tue);
    assert_eq!(trips[0].duration_secs, 600);
    assert_eq!(trips[0].birth_year, Some(1987));
    // blank optional cells load as missing, not as empty strings
    assert_eq!(trips[3].gender, None);
    assert_eq!(trips[3].birth_year, None);
}

#[test]
fn month_and_day_filters_are_conjunctive_and_commutative() {
    let dir = fixture_dir();
    let both = load_trips(
        dir.path(),
        &Filters {
            city: City::NewYorkCity,
            month: MonthFilter::Month(Month::January),
            day: DayFilter::Day(Weekday::Mon),
        },
    )
    .unwrap();
    assert_eq!(both.len(), 2);
    for t in &both {
        assert_eq!(t.month, Month::January);
        assert_eq!(t.day_of_week, Weekday::Mon);
    }

    // Narrowing by one filter and then the other by hand gives the same rows
    // regardless of order.
    let mut month_first = load_trips(
        dir.path(),
        &Filters {
            city: City::NewYorkCity,
            month: MonthFilter::Month(Month::January),
            day: DayFilter::All,
        },
    )
    .unwrap();
    month_first.retain(|t| t.day_of_week == Weekday::Mon);
    let mut day_first = load_trips(
        dir.path(),
        &Filters {
            city: City::NewYorkCity,
            month: MonthFilter::All,
            day: DayFilter::Day(Weekday::Mon),
        },
    )
    .unwrap();
    day_first.retain(|t| t.month == Month::January);
    assert_eq!(both, month_first);
    assert_eq!(both, day_first);
}

#[test]
fn washington_rows_never_carry_demographics() {
    let dir = fixture_dir();
    let trips = load_trips(dir.path(), &all(City::Washington)).unwrap();
    assert!(!trips.is_empty());
    assert!(trips.iter().all(|t| t.gender.is_none() && t.birth_year.is_none()));
}

#[test]
fn a_selection_can_be_empty() {
    let dir = fixture_dir();
    // No Washington trips in February.
    let trips = load_trips(
        dir.path(),
        &Filters {
            city: City::Washington,
            month: MonthFilter::Month(Month::February),
            day: DayFilter::All,
        },
    )
    .unwrap();
    assert!(trips.is_empty());
}

#[test]
fn missing_backing_file_is_reported_with_city_and_path() {
    let dir = tempdir().unwrap();
    let err = load_trips(dir.path(), &all(City::NewYorkCity)).unwrap_err();
    match &err {
        DatasetError::Missing { city, path } => {
            assert_eq!(*city, City::NewYorkCity);
            assert!(path.ends_with("new_york_city.csv"));
        }
        other => panic!("expected Missing, got {other:?}"),
    }
    assert!(err.to_string().contains("New York City"));
}
